//! Optional CSV helpers (`csv-io` feature) for moving signal columns in and out of files.

use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Reads a column of f64 values from a headed CSV file by column name, skipping invalid/missing values.
///
/// Fails if no header matches `column`.
pub fn read_csv_column<P: AsRef<Path>>(
    path: P,
    column: &str,
) -> Result<Vec<f64>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);

    let headers = rdr.headers()?.clone();
    let col_index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| format!("column '{}' not found in CSV header", column))?;

    parse_column(&mut rdr, col_index)
}

/// Reads a column of f64 values from a headed CSV file by column index, skipping invalid/missing values.
pub fn read_csv_column_by_index<P: AsRef<Path>>(
    path: P,
    col_index: usize,
) -> Result<Vec<f64>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);
    parse_column(&mut rdr, col_index)
}

fn parse_column<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    col_index: usize,
) -> Result<Vec<f64>, Box<dyn Error>> {
    let mut values = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if let Some(field) = record.get(col_index) {
            if let Ok(val) = field.trim().parse::<f64>() {
                values.push(val);
            }
        }
    }
    log::debug!("read {} values from CSV column {}", values.len(), col_index);
    Ok(values)
}

/// Copies a headed CSV from `input` to `output` with one extra column named `column`.
///
/// Row `i` receives `values[i]`; rows past the end of `values` get an empty cell.
/// `input` and `output` may be the same file.
pub fn append_column<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    column: &str,
    values: &[f64],
) -> Result<(), Box<dyn Error>> {
    let mut rdr = csv::Reader::from_path(input)?;
    let mut headers = rdr.headers()?.clone();
    let records = rdr.records().collect::<Result<Vec<csv::StringRecord>, _>>()?;

    drop(rdr);

    headers.push_field(column);

    let mut wtr = csv::Writer::from_path(output)?;
    wtr.write_record(&headers)?;
    for (i, mut record) in records.into_iter().enumerate() {
        let value = values.get(i).map(|v| v.to_string()).unwrap_or_default();
        record.push_field(&value);
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}
