//! Example usage of the Savitzky-Golay filter crate

use savgol::{calibrate_derivative, compute_weights, savgol, smooth, SavitzkyGolayFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Savitzky-Golay Filter Examples ===\n");

    let step = 0.1;
    let clean_signal: Vec<f64> = (0..20)
        .map(|i| {
            let x = i as f64 * step;
            (2.0 * std::f64::consts::PI * x).sin() + 0.5 * (4.0 * std::f64::consts::PI * x).cos()
        })
        .collect();

    let mut noisy_signal = clean_signal.clone();
    for i in 0..noisy_signal.len() {
        if i % 3 == 0 {
            noisy_signal[i] += 0.3 * (i as f64 % 2.0 - 0.5);
        }
    }

    println!("Original noisy signal:");
    print_signal(&noisy_signal);

    // 1. Convenience function: window 5, order 2
    println!("\n1. Basic smoothing (window=5, order=2):");
    print_signal(&smooth(&noisy_signal)?);

    // 2. Reusable filter with cached weights
    println!("\n2. Cubic smoothing (window=7, order=3):");
    let mut cubic = SavitzkyGolayFilter::new(7, 3)?;
    print_signal(&cubic.apply(&noisy_signal)?);
    println!("   kernel: {:?}", cubic.weights()?);

    // 3. Raw first coefficient, then scaled to physical units
    println!("\n3. First derivative (window=7, order=3):");
    let raw = savgol(&clean_signal, 7, 3, 1, true)?;
    print_signal(&calibrate_derivative(&raw, 1, step)?);

    // 4. Second derivative
    println!("\n4. Second derivative (window=9, order=4):");
    let raw = savgol(&clean_signal, 9, 4, 2, true)?;
    print_signal(&calibrate_derivative(&raw, 2, step)?);

    // 5. Kernel inspection
    println!("\n5. Weights for half-window 2, order 2:");
    for deriv in 0..=2 {
        println!("   row {}: {:?}", deriv, compute_weights(2, 2, deriv)?);
    }

    // 6. Throughput on a larger signal
    println!("\n6. Performance test with large dataset:");
    let large_data: Vec<f64> = (0..100_000)
        .map(|i| (i as f64 * 0.001).sin() + 0.1 * (i as f64 * 0.01).cos())
        .collect();
    let start = std::time::Instant::now();
    let mut filter = SavitzkyGolayFilter::new(11, 3)?;
    let _smoothed = filter.apply(&large_data)?;
    println!("Processed {} points in {:?}", large_data.len(), start.elapsed());

    Ok(())
}

fn print_signal(signal: &[f64]) {
    for (i, &value) in signal.iter().enumerate() {
        print!("{:7.3}", value);
        if (i + 1) % 8 == 0 {
            println!();
        }
    }
    if signal.len() % 8 != 0 {
        println!();
    }
}
