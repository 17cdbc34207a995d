//! Appends a smoothed copy of one CSV column to the same file.
//!
//! Needs the default `csv-io` feature.
//!
//! Usage: `cargo run --example append_smoothed -- data.csv A 11 3`

use std::error::Error;
use savgol::{append_column, read_csv_column, SavitzkyGolayFilter};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = args.first().map(String::as_str).unwrap_or("data.csv");
    let column = args.get(1).map(String::as_str).unwrap_or("A");
    let window_size: usize = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(11);
    let order: usize = args.get(3).map(|s| s.parse()).transpose()?.unwrap_or(3);

    let data = read_csv_column(path, column)?;

    let mut filter = SavitzkyGolayFilter::new(window_size, order)?;
    let smoothed = filter.apply(&data)?;

    let smoothed_column = format!("{}_smoothed", column);
    append_column(path, path, &smoothed_column, &smoothed)?;
    println!("Appended column '{}' ({} values) to {}", smoothed_column, smoothed.len(), path);
    Ok(())
}
