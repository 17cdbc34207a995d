use nalgebra::DMatrix;

/// Builds the polynomial design (Vandermonde) matrix for a centered window.
///
/// Row `r` corresponds to the offset `k = r - half_window`, so offsets run from
/// `-half_window` to `+half_window` in ascending order. Column `i` holds `k^i`
/// for `i` in `0..=order`, with `0^0 = 1`.
///
/// # Arguments
///
/// * `half_window` - Number of samples on each side of the window center
/// * `order` - Degree of the fitted polynomial
///
/// # Returns
///
/// A `(2 * half_window + 1) x (order + 1)` matrix
pub fn vandermonde(half_window: usize, order: usize) -> DMatrix<f64> {
    let rows = 2 * half_window + 1;
    DMatrix::from_fn(rows, order + 1, |r, i| {
        let k = r as f64 - half_window as f64;
        k.powi(i as i32)
    })
}

/// Builds the design matrix on offsets normalized to `[-1, 1]`.
///
/// Entry `(r, i)` is `(k / half_window)^i`. Monomials of raw offsets span
/// `half_window^order` in magnitude, which makes wide windows numerically
/// rank-deficient; the normalized matrix has the same column space and stays
/// well conditioned. Row `i` of its pseudo-inverse times `half_window^-i`
/// equals row `i` of the pseudo-inverse of [`vandermonde`]. A zero half-window
/// is left unscaled.
pub fn scaled_vandermonde(half_window: usize, order: usize) -> DMatrix<f64> {
    let rows = 2 * half_window + 1;
    let scale = half_window.max(1) as f64;
    DMatrix::from_fn(rows, order + 1, |r, i| {
        let u = (r as f64 - half_window as f64) / scale;
        u.powi(i as i32)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let m = vandermonde(2, 3);
        assert_eq!(m.shape(), (5, 4));

        let m = vandermonde(0, 0);
        assert_eq!(m.shape(), (1, 1));
        assert_eq!(m[(0, 0)], 1.0);
    }

    #[test]
    fn test_entries() {
        let m = vandermonde(2, 2);
        let expected = DMatrix::from_row_slice(
            5,
            3,
            &[
                1.0, -2.0, 4.0, //
                1.0, -1.0, 1.0, //
                1.0, 0.0, 0.0, //
                1.0, 1.0, 1.0, //
                1.0, 2.0, 4.0,
            ],
        );
        assert_eq!(m, expected);
    }

    #[test]
    fn test_scaled_offsets_span_unit_interval() {
        let m = scaled_vandermonde(4, 3);
        assert_eq!(m.shape(), (9, 4));
        assert_eq!(m[(0, 1)], -1.0);
        assert_eq!(m[(8, 1)], 1.0);
        assert_eq!(m[(6, 2)], 0.25);
        assert_eq!(m[(0, 3)], -1.0);

        assert_eq!(scaled_vandermonde(0, 2), vandermonde(0, 2));
    }

    #[test]
    fn test_center_row_is_unit_vector() {
        // 0^0 = 1 and 0^i = 0 otherwise
        let m = vandermonde(3, 4);
        let center = m.row(3);
        assert_eq!(center[0], 1.0);
        for i in 1..=4 {
            assert_eq!(center[i], 0.0);
        }
    }
}
