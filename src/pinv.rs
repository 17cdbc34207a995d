use approx::AbsDiffEq;
use nalgebra::{ComplexField, DMatrix};
use crate::error::{Result, SavitzkyGolayError};

/// Upper bound on the total number of SVD iterations before giving up.
pub const SVD_MAX_ITERATIONS: usize = 1000;

/// Computes the Moore-Penrose pseudo-inverse of a matrix via singular value decomposition.
///
/// With `A = U Σ Vᴴ`, the pseudo-inverse is `A⁺ = V Σ⁺ Uᴴ`, where `Σ⁺` holds the
/// reciprocal of every nonzero singular value. Singular values at or below
/// `σ_max * max(rows, cols) * ε` (ε being the machine epsilon of the scalar's
/// real type) count as zero and stay zero in `Σ⁺`, so
/// rank-deficient inputs never divide by zero.
///
/// Works for real and complex scalars; for real matrices the conjugate
/// transpose is the ordinary transpose.
///
/// # Errors
///
/// Returns [`SavitzkyGolayError::NumericalFailure`] if the matrix holds NaN or
/// infinite entries, or if the SVD does not converge within
/// [`SVD_MAX_ITERATIONS`] iterations.
///
/// # Example
///
/// ```rust
/// use nalgebra::DMatrix;
/// use savgol::pseudo_inverse;
///
/// let a = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
/// let a_pinv = pseudo_inverse(&a).unwrap();
/// assert_eq!(a_pinv.shape(), (2, 3));
/// ```
pub fn pseudo_inverse<T: ComplexField>(matrix: &DMatrix<T>) -> Result<DMatrix<T>> {
    pseudo_inverse_with_rank(matrix).map(|(pinv, _)| pinv)
}

/// Like [`pseudo_inverse`], also returning the numerical rank: the number of
/// singular values above the zero cutoff.
///
/// Callers that need a full-rank fit compare the rank against the expected
/// column count instead of trusting a silently truncated inverse.
pub fn pseudo_inverse_with_rank<T: ComplexField>(matrix: &DMatrix<T>) -> Result<(DMatrix<T>, usize)> {
    let (rows, cols) = matrix.shape();
    if rows == 0 || cols == 0 {
        return Ok((DMatrix::zeros(cols, rows), 0));
    }

    if matrix.iter().any(|v| !v.is_finite()) {
        return Err(SavitzkyGolayError::NumericalFailure(format!(
            "{}x{} matrix contains non-finite entries",
            rows, cols
        )));
    }

    let eps = <T::RealField as AbsDiffEq>::default_epsilon();
    let svd = matrix
        .clone()
        .try_svd(true, true, eps.clone(), SVD_MAX_ITERATIONS)
        .ok_or_else(|| {
            SavitzkyGolayError::NumericalFailure(format!(
                "SVD of {}x{} matrix did not converge",
                rows, cols
            ))
        })?;

    let u = svd.u.ok_or_else(|| {
        SavitzkyGolayError::NumericalFailure("SVD did not produce left singular vectors".to_string())
    })?;
    let v_t = svd.v_t.ok_or_else(|| {
        SavitzkyGolayError::NumericalFailure("SVD did not produce right singular vectors".to_string())
    })?;

    let sigma_max = svd
        .singular_values
        .iter()
        .fold(nalgebra::zero::<T::RealField>(), |acc, s| {
            if *s > acc { s.clone() } else { acc }
        });
    let scale: T::RealField = nalgebra::convert(rows.max(cols) as f64);
    let cutoff = sigma_max * scale * eps;

    // V Σ⁺: scale each column of V by the reciprocal singular value
    let mut v_sigma = v_t.adjoint();
    let mut rank = 0usize;
    for (j, sigma) in svd.singular_values.iter().enumerate() {
        let factor = if *sigma > cutoff {
            rank += 1;
            T::from_real(sigma.clone().recip())
        } else {
            nalgebra::zero::<T>()
        };
        for x in v_sigma.column_mut(j).iter_mut() {
            *x = x.clone() * factor.clone();
        }
    }

    let truncated = svd.singular_values.len() - rank;
    if truncated > 0 {
        log::trace!(
            "pseudo-inverse of {}x{} matrix: treated {} singular value(s) as zero",
            rows,
            cols,
            truncated
        );
    }

    Ok((v_sigma * u.adjoint(), rank))
}
