use savgol::{
    calibrate_derivative, compute_weights, convolve_valid, derivative, pad_ends, pseudo_inverse,
    savgol, smooth, SavitzkyGolayError, SavitzkyGolayFilter,
};
use approx::assert_abs_diff_eq;
use nalgebra::DMatrix;

const SIGNAL: [f64; 21] = [
    1.0, 2.0, 3.0, 4.0, 3.5, 5.0, 3.0, 2.2, 3.0, 0.0, -1.0, 2.0, 0.0, -2.0, -5.0, -8.0, -7.0, -2.0,
    0.0, 1.0, 1.0,
];

#[test]
fn test_reference_smoothing() {
    // Reference output for window 5, cubic fit
    let expected = [
        1.0, 2.0, 3.12857143, 3.57142857, 4.27142857, 4.12571429, 3.36857143, 2.69714286, 2.04,
        0.32571429, -0.05714286, 0.8, 0.51428571, -2.17142857, -5.25714286, -7.65714286, -6.4,
        -2.77142857, 0.17142857, 0.91428571, 1.0,
    ];

    let smoothed = savgol(&SIGNAL, 5, 3, 0, true).unwrap();
    assert_eq!(smoothed.len(), expected.len());
    for (actual, expected) in smoothed.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(actual, expected, epsilon = 1e-5);
    }
}

#[test]
fn test_reference_padding() {
    let signal = [1.0, 2.0, 3.0, 4.0, -7.0, -2.0, 0.0, 1.0, 1.0];
    assert_eq!(
        pad_ends(&signal, 2).unwrap(),
        vec![-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, -7.0, -2.0, 0.0, 1.0, 1.0, 1.0, 2.0]
    );
    assert_eq!(
        pad_ends(&signal, 3).unwrap(),
        vec![-2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, -7.0, -2.0, 0.0, 1.0, 1.0, 1.0, 2.0, 4.0]
    );
}

#[test]
fn test_pseudo_inverse_round_trip() {
    let a = DMatrix::from_row_slice(
        2,
        7,
        &[
            -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, -7.0, //
            -2.0, 0.0, 1.0, 1.0, 1.0, 2.0, -1.0,
        ],
    );
    let back = pseudo_inverse(&pseudo_inverse(&a).unwrap()).unwrap();
    assert_abs_diff_eq!(back, a, epsilon = 1e-5);
}

#[test]
fn test_invalid_arguments() {
    let err = savgol(&SIGNAL, 4, 2, 0, true).unwrap_err();
    assert_eq!(err, SavitzkyGolayError::InvalidWindowSize(4));
    assert!(err.is_invalid_argument());

    let err = savgol(&SIGNAL, 3, 3, 0, true).unwrap_err();
    assert_eq!(err, SavitzkyGolayError::InvalidPolynomialOrder { order: 3, window_size: 3 });
    assert!(err.is_invalid_argument());

    let err = savgol(&SIGNAL, 7, 2, 3, true).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_validation_precedes_data_checks() {
    // Bad parameters are reported even when the data is also too short
    let err = savgol(&[1.0], 4, 2, 0, true).unwrap_err();
    assert_eq!(err, SavitzkyGolayError::InvalidWindowSize(4));
}

#[test]
fn test_insufficient_data() {
    let err = savgol(&[1.0, 2.0, 3.0], 7, 2, 0, true).unwrap_err();
    assert_eq!(err, SavitzkyGolayError::InsufficientData { len: 3, half_window: 3 });

    let err = savgol(&[], 1, 0, 0, false).unwrap_err();
    assert!(matches!(err, SavitzkyGolayError::InsufficientData { len: 0, .. }));
}

#[test]
fn test_output_length_matches_input() {
    for (window_size, order) in [(3, 0), (3, 1), (5, 2), (5, 3), (7, 4), (9, 3), (11, 5)] {
        let half_window = (window_size - 1) / 2;
        for n in (half_window + 1)..(half_window + 15) {
            let data: Vec<f64> = (0..n).map(|i| (i as f64 * 0.7).sin()).collect();
            let out = savgol(&data, window_size, order, 0, true).unwrap();
            assert_eq!(out.len(), n, "window {} order {} n {}", window_size, order, n);
        }
    }
}

#[test]
fn test_convolution_length() {
    let data: Vec<f64> = (0..13).map(|i| i as f64).collect();
    for k in 1..=data.len() {
        let weights = vec![0.5; k];
        assert_eq!(convolve_valid(&data, &weights).len(), data.len() - k + 1);
    }
}

#[test]
fn test_polynomial_preservation() {
    let mut filter = SavitzkyGolayFilter::new(7, 3).unwrap();

    let data: Vec<f64> = (0..15)
        .map(|i| {
            let x = i as f64;
            x.powi(3) - 2.0 * x.powi(2) + x + 1.0
        })
        .collect();

    let filtered = filter.apply(&data).unwrap();

    for i in 3..data.len() - 3 {
        assert_abs_diff_eq!(data[i], filtered[i], epsilon = 1e-6);
    }
}

const WIDE_GRID_WINDOWS: [usize; 9] = [5, 11, 21, 41, 61, 101, 121, 151, 201];

#[test]
fn test_smoothing_kernels_sum_to_one_across_grid() {
    for window_size in WIDE_GRID_WINDOWS {
        for order in 0..=10usize {
            if window_size < order + 2 {
                continue;
            }
            let half_window = (window_size - 1) / 2;
            let weights = compute_weights(half_window, order, 0).unwrap();
            let sum: f64 = weights.iter().sum();
            assert!(
                (sum - 1.0).abs() < 1e-8,
                "window {} order {}: kernel sum {}",
                window_size,
                order,
                sum
            );
        }
    }
}

#[test]
fn test_polynomials_preserved_across_grid() {
    for window_size in WIDE_GRID_WINDOWS {
        let half_window = (window_size - 1) / 2;
        let n = window_size + 40;
        for order in 0..=10usize {
            if window_size < order + 2 {
                continue;
            }

            // Degree-`order` polynomial on x in roughly [-1, 1]
            let data: Vec<f64> = (0..n)
                .map(|i| {
                    let x = (i as f64 - n as f64 / 2.0) / (n as f64 / 2.0);
                    (0..=order).map(|p| x.powi(p as i32) / (p + 1) as f64).sum::<f64>()
                })
                .collect();

            let out = savgol(&data, window_size, order, 0, true).unwrap();
            for i in half_window..n - half_window {
                assert!(
                    (out[i] - data[i]).abs() < 1e-7,
                    "window {} order {} index {}: {} vs {}",
                    window_size,
                    order,
                    i,
                    out[i],
                    data[i]
                );
            }
        }
    }
}

#[test]
fn test_wide_window_preserves_constant() {
    let data = vec![5.0; 300];
    for (window_size, order) in [(61, 10), (151, 10), (201, 10), (201, 8)] {
        let out = savgol(&data, window_size, order, 0, true).unwrap();
        for &value in &out {
            assert_abs_diff_eq!(value, 5.0, epsilon = 1e-8);
        }
    }
}

#[test]
fn test_wide_window_slope() {
    let data: Vec<f64> = (0..300).map(|i| 0.5 * i as f64 - 7.0).collect();
    let slope = savgol(&data, 151, 6, 1, true).unwrap();
    for value in &slope[75..225] {
        assert_abs_diff_eq!(*value, 0.5, epsilon = 1e-9);
    }
}

#[test]
fn test_linear_trend_preservation() {
    // An increasing line reflects onto itself, so even the edges are exact
    let linear_data: Vec<f64> = (0..10).map(|i| 2.0 * i as f64 + 3.0).collect();
    let filtered = smooth(&linear_data).unwrap();

    for (original, filtered) in linear_data.iter().zip(filtered.iter()) {
        assert_abs_diff_eq!(original, filtered, epsilon = 1e-10);
    }
}

#[test]
fn test_constant_preservation() {
    let mut filter = SavitzkyGolayFilter::new(7, 3).unwrap();

    let constant_data = vec![5.0; 20];
    let filtered = filter.apply(&constant_data).unwrap();

    for &value in &filtered {
        assert_abs_diff_eq!(value, 5.0, epsilon = 1e-10);
    }
}

#[test]
fn test_derivative_is_unscaled() {
    let step = 0.1;
    let data: Vec<f64> = (0..20).map(|i| (i as f64 * step).powi(2)).collect();

    // Per-sample slope of (step * i)^2 is 2 * step^2 * i
    let slope = derivative(&data, 5, 2).unwrap();
    for i in 2..18 {
        assert_abs_diff_eq!(slope[i], 2.0 * step * step * i as f64, epsilon = 1e-9);
    }

    let physical = calibrate_derivative(&slope, 1, step).unwrap();
    for i in 2..18 {
        assert_abs_diff_eq!(physical[i], 2.0 * i as f64 * step, epsilon = 1e-8);
    }
}

#[test]
fn test_second_derivative_calibration() {
    let step = 0.25;
    let data: Vec<f64> = (0..20).map(|i| (i as f64 * step).powi(3)).collect();

    let raw = savgol(&data, 7, 3, 2, true).unwrap();
    let second = calibrate_derivative(&raw, 2, step).unwrap();

    for i in 3..17 {
        assert_abs_diff_eq!(second[i], 6.0 * i as f64 * step, epsilon = 1e-8);
    }
}

#[test]
fn test_calibrate_rejects_bad_delta() {
    assert_eq!(
        calibrate_derivative(&[1.0], 1, 0.0).unwrap_err(),
        SavitzkyGolayError::InvalidDelta(0.0)
    );
    assert!(calibrate_derivative(&[1.0], 1, f64::NAN).is_err());
    assert_eq!(calibrate_derivative(&[1.5], 0, 0.1).unwrap(), vec![1.5]);
}

#[test]
fn test_noise_reduction() {
    let true_signal: Vec<f64> = (0..50).map(|i| (i as f64 * 0.1).sin()).collect();

    let mut noisy_signal = true_signal.clone();
    for i in 0..noisy_signal.len() {
        noisy_signal[i] += 0.1 * ((i as f64 * 1.7).sin());
    }

    let mut filter = SavitzkyGolayFilter::new(9, 3).unwrap();
    let smoothed = filter.apply(&noisy_signal).unwrap();

    let mse = |other: &[f64]| -> f64 {
        true_signal
            .iter()
            .zip(other.iter())
            .map(|(t, v)| (t - v).powi(2))
            .sum::<f64>()
            / true_signal.len() as f64
    };

    assert!(mse(&smoothed) < mse(&noisy_signal));
}

#[test]
fn test_filter_is_reusable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                let data: Vec<f64> = (0..30).map(|i| (i as f64 * 0.2 + t as f64).cos()).collect();
                savgol(&data, 5, 3, 0, true).unwrap()
            })
        })
        .collect();

    let reference: Vec<f64> = (0..30).map(|i| (i as f64 * 0.2).cos()).collect();
    let expected = savgol(&reference, 5, 3, 0, true).unwrap();

    let results: Vec<Vec<f64>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], expected);
    assert!(results.iter().all(|r| r.len() == 30));
}

#[test]
fn test_non_finite_data_propagates() {
    let mut data = vec![1.0; 10];
    data[5] = f64::NAN;
    let out = smooth(&data).unwrap();
    assert!(out[5].is_nan());
    assert!(out[0].is_finite());
}
