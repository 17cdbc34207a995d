use ahash::AHashMap;
use crate::error::{Result, SavitzkyGolayError};
use crate::pinv::pseudo_inverse_with_rank;
use crate::vandermonde::scaled_vandermonde;
use nalgebra::DMatrix;

/// Computes Savitzky-Golay convolution weights from the pseudo-inverse of the design matrix.
///
/// The design matrix for offsets `-half_window..=half_window` and powers
/// `0..=order` is pseudo-inverted; row `deriv` of the result maps a window of
/// samples onto the `deriv`-th coefficient of the locally fitted polynomial.
/// Row 0 is the smoothing kernel. Rows above 0 are NOT scaled by `deriv!` or by
/// the sample spacing; see [`crate::calibrate_derivative`].
///
/// The pseudo-inverse is taken on offsets normalized to `[-1, 1]` (see
/// [`crate::scaled_vandermonde`]) and row `deriv` is rescaled by
/// `half_window^-deriv`, which yields the same weights as the raw offsets
/// without losing precision on wide windows.
///
/// # Arguments
///
/// * `half_window` - Number of samples on each side of the window center
/// * `order` - Degree of the polynomial to fit
/// * `deriv` - Which polynomial coefficient to extract (0 for smoothing)
///
/// # Returns
///
/// A vector of `2 * half_window + 1` weights to convolve with the padded signal
///
/// # Errors
///
/// * [`SavitzkyGolayError::InvalidDerivative`] if `deriv > order`
/// * [`SavitzkyGolayError::NumericalFailure`] if the SVD fails or the design
///   matrix is numerically rank-deficient even though the window holds enough
///   points for the fit
pub fn compute_weights(half_window: usize, order: usize, deriv: usize) -> Result<Vec<f64>> {
    if deriv > order {
        return Err(SavitzkyGolayError::InvalidDerivative { deriv, order });
    }

    let design = scaled_vandermonde(half_window, order);
    let scale = (half_window.max(1) as f64).powi(deriv as i32);
    let weights = kernel_row(&design, deriv)?
        .into_iter()
        .map(|w| w / scale)
        .collect();

    log::debug!(
        "computed weights: half_window={}, order={}, deriv={}",
        half_window,
        order,
        deriv
    );

    Ok(weights)
}

/// Pseudo-inverts `design` and returns row `deriv`, refusing truncated fits.
///
/// The expected rank is the column count, capped by the row count so an
/// under-determined window (validation disabled) still solves in the
/// least-norm sense.
fn kernel_row(design: &DMatrix<f64>, deriv: usize) -> Result<Vec<f64>> {
    let (rows, cols) = design.shape();
    let (pinv, rank) = pseudo_inverse_with_rank(design)?;

    let expected = cols.min(rows);
    if rank < expected {
        return Err(SavitzkyGolayError::NumericalFailure(format!(
            "{}x{} design matrix has numerical rank {}, expected {}",
            rows, cols, rank, expected
        )));
    }

    Ok(pinv.row(deriv).iter().copied().collect())
}

/// Memoized weight vectors keyed by `(window_size, order, deriv)`.
///
/// Weights depend only on the filter parameters, never on the signal, so one
/// cache can serve any number of inputs.
#[derive(Debug, Clone)]
pub struct CoefficientCache {
    weights: AHashMap<(usize, usize, usize), Vec<f64>>,
}

impl CoefficientCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self {
            weights: AHashMap::new(),
        }
    }

    /// Gets weights from the cache, computing and storing them on a miss
    pub fn get_weights(&mut self, window_size: usize, order: usize, deriv: usize) -> Result<&[f64]> {
        let key = (window_size, order, deriv);

        if !self.weights.contains_key(&key) {
            let half_window = window_size.saturating_sub(1) / 2;
            let weights = compute_weights(half_window, order, deriv)?;
            self.weights.insert(key, weights);
        } else {
            log::trace!(
                "weight cache hit: window_size={}, order={}, deriv={}",
                window_size,
                order,
                deriv
            );
        }

        Ok(&self.weights[&key])
    }

    /// Precomputes weights for common configurations
    pub fn precompute_common(&mut self) -> Result<()> {
        let common_configs = [
            (5, 2, 0), // 5-point quadratic smoothing
            (7, 2, 0), // 7-point quadratic smoothing
            (5, 3, 0), // 5-point cubic smoothing
            (7, 3, 0), // 7-point cubic smoothing
            (5, 2, 1), // 5-point quadratic slope
            (7, 2, 1), // 7-point quadratic slope
            (5, 2, 2), // 5-point quadratic curvature coefficient
        ];

        for (window_size, order, deriv) in common_configs {
            self.get_weights(window_size, order, deriv)?;
        }

        Ok(())
    }

    /// Number of cached weight vectors
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True when nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Drops every cached weight vector
    pub fn clear(&mut self) {
        self.weights.clear();
    }
}

impl Default for CoefficientCache {
    fn default() -> Self {
        Self::new()
    }
}
