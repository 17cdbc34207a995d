//! # Savitzky-Golay Filter
//!
//! Savitzky-Golay smoothing and differentiation built on the Moore-Penrose
//! pseudo-inverse of the polynomial design matrix.
//!
//! For every window of `2 * half_window + 1` samples the filter fits a polynomial
//! of degree `order` by least squares and reports either the fitted value at the
//! window center or one of the fitted polynomial's coefficients. The least-squares
//! solution is the pseudo-inverse of the Vandermonde matrix of window offsets,
//! computed through a singular value decomposition; its rows are the convolution
//! kernels.
//!
//! ## Pipeline
//!
//! - [`vandermonde`] builds the design matrix
//! - [`pseudo_inverse`] inverts it via SVD
//! - [`pad_ends`] extends the signal by odd reflection at both ends
//! - [`convolve_valid`] slides the kernel over the padded signal
//!
//! ## Features
//!
//! - `csv-io` (default): helpers to read a signal column from a CSV file and
//!   append a filtered column. The filter itself does no I/O; disable default
//!   features to drop the `csv` dependency.
//!
//! ## Example
//!
//! ```rust
//! use savgol::savgol;
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 3.5, 5.0, 3.0, 2.2, 3.0, 0.0, -1.0];
//! let smoothed = savgol(&data, 5, 3, 0, true).expect("Valid parameters");
//! assert_eq!(smoothed.len(), data.len());
//! ```

mod coefficients;
mod convolve;
#[cfg(feature = "csv-io")]
mod csv_utils;
mod error;
mod filter;
mod padding;
mod pinv;
mod vandermonde;

pub use coefficients::{compute_weights, CoefficientCache};
pub use convolve::convolve_valid;
#[cfg(feature = "csv-io")]
pub use csv_utils::{append_column, read_csv_column, read_csv_column_by_index};
pub use error::{Result, SavitzkyGolayError};
pub use filter::{FilterConfig, SavitzkyGolayFilter};
pub use padding::pad_ends;
pub use pinv::{pseudo_inverse, pseudo_inverse_with_rank, SVD_MAX_ITERATIONS};
pub use vandermonde::{scaled_vandermonde, vandermonde};

/// Applies a Savitzky-Golay filter to `sequence`.
///
/// # Arguments
///
/// * `sequence` - The input signal
/// * `window_size` - Size of the filter window (positive and odd)
/// * `order` - Degree of the fitted polynomial (`window_size >= order + 2`)
/// * `deriv` - Fitted polynomial coefficient to output; 0 smooths
/// * `validate` - Check the parameters before computing anything
///
/// # Returns
///
/// A vector with exactly one output sample per input sample
///
/// # Errors
///
/// * Invalid window, order or derivative when `validate` is set
/// * [`SavitzkyGolayError::InsufficientData`] if the sequence is too short to pad
/// * [`SavitzkyGolayError::NumericalFailure`] if the SVD fails
///
/// Output for `deriv > 0` is the raw polynomial coefficient; use
/// [`calibrate_derivative`] for derivatives in physical units.
pub fn savgol(
    sequence: &[f64],
    window_size: usize,
    order: usize,
    deriv: usize,
    validate: bool,
) -> Result<Vec<f64>> {
    let config = FilterConfig {
        window_size,
        order,
        deriv,
        validate,
    };
    SavitzkyGolayFilter::with_config(config).apply(sequence)
}

/// Smooths `data` with window size 5 and polynomial order 2.
///
/// # Example
///
/// ```rust
/// use savgol::smooth;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0];
/// let smoothed = smooth(&data).unwrap();
/// assert_eq!(smoothed.len(), data.len());
/// ```
pub fn smooth(data: &[f64]) -> Result<Vec<f64>> {
    savgol(data, 5, 2, 0, true)
}

/// Estimates the first derivative of `data` per unit sample spacing.
///
/// # Arguments
///
/// * `data` - The input signal data
/// * `window_size` - The size of the filter window (must be odd)
/// * `order` - The order of the polynomial (at least 1, at most `window_size - 2`)
pub fn derivative(data: &[f64], window_size: usize, order: usize) -> Result<Vec<f64>> {
    savgol(data, window_size, order, 1, true)
}

/// Scales raw filter output for `deriv > 0` into a derivative in physical units.
///
/// The filter returns the `deriv`-th coefficient of the fitted polynomial in
/// sample-index units. Multiplying by `deriv!` and dividing by `delta^deriv`
/// turns it into the `deriv`-th derivative for samples spaced `delta` apart.
///
/// # Example
///
/// ```rust
/// use savgol::{calibrate_derivative, savgol};
///
/// let delta = 0.5;
/// let data: Vec<f64> = (0..12).map(|i| (i as f64 * delta).powi(2)).collect();
/// let raw = savgol(&data, 5, 2, 2, true).unwrap();
/// let second = calibrate_derivative(&raw, 2, delta).unwrap();
/// assert!((second[6] - 2.0).abs() < 1e-9);
/// ```
pub fn calibrate_derivative(values: &[f64], deriv: usize, delta: f64) -> Result<Vec<f64>> {
    if !delta.is_finite() || delta <= 0.0 {
        return Err(SavitzkyGolayError::InvalidDelta(delta));
    }

    let factorial = (1..=deriv).fold(1.0, |acc, k| acc * k as f64);
    let scale = factorial / delta.powi(deriv as i32);
    Ok(values.iter().map(|v| v * scale).collect())
}
