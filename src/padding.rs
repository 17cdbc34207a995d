use crate::error::{Result, SavitzkyGolayError};

/// Extends a signal at both ends by odd reflection through its end points.
///
/// The left pad takes `data[1..=half_window]` in reverse and maps each value `v`
/// to `data[0] - |v - data[0]|`; the right pad takes the `half_window` values
/// before the last sample in reverse and maps them to `last + |v - last|`.
/// The result has `data.len() + 2 * half_window` samples.
///
/// # Errors
///
/// Returns [`SavitzkyGolayError::InsufficientData`] unless `data.len() > half_window`.
///
/// # Example
///
/// ```rust
/// use savgol::pad_ends;
///
/// let padded = pad_ends(&[1.0, 2.0, 3.0, 4.0, -7.0, -2.0, 0.0, 1.0, 1.0], 2).unwrap();
/// assert_eq!(padded, vec![-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, -7.0, -2.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
/// ```
pub fn pad_ends(data: &[f64], half_window: usize) -> Result<Vec<f64>> {
    let n = data.len();
    if n <= half_window {
        return Err(SavitzkyGolayError::InsufficientData { len: n, half_window });
    }

    let first = data[0];
    let last = data[n - 1];

    let mut padded = Vec::with_capacity(n + 2 * half_window);
    padded.extend(
        data[1..=half_window]
            .iter()
            .rev()
            .map(|&v| first - (v - first).abs()),
    );
    padded.extend_from_slice(data);
    padded.extend(
        data[n - 1 - half_window..n - 1]
            .iter()
            .rev()
            .map(|&v| last + (v - last).abs()),
    );

    Ok(padded)
}
