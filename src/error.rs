use std::fmt;

/// Error types for Savitzky-Golay filter operations
#[derive(Debug, Clone, PartialEq)]
pub enum SavitzkyGolayError {
    /// Window size must be a positive odd integer
    InvalidWindowSize(usize),
    /// Window must hold at least `order + 2` points
    InvalidPolynomialOrder { order: usize, window_size: usize },
    /// Derivative order selects a row of the pseudo-inverse, so it cannot exceed the polynomial order
    InvalidDerivative { deriv: usize, order: usize },
    /// Sample spacing used for derivative calibration must be finite and positive
    InvalidDelta(f64),
    /// Input data is too short to pad for the requested half-window
    InsufficientData { len: usize, half_window: usize },
    /// SVD did not converge or the matrix holds non-finite values
    NumericalFailure(String),
}

impl SavitzkyGolayError {
    /// True for every variant raised by argument validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SavitzkyGolayError::InvalidWindowSize(_)
                | SavitzkyGolayError::InvalidPolynomialOrder { .. }
                | SavitzkyGolayError::InvalidDerivative { .. }
                | SavitzkyGolayError::InvalidDelta(_)
        )
    }
}

impl fmt::Display for SavitzkyGolayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SavitzkyGolayError::InvalidWindowSize(size) => {
                write!(f, "Invalid window size: {}. Window size must be a positive odd integer", size)
            }
            SavitzkyGolayError::InvalidPolynomialOrder { order, window_size } => {
                write!(
                    f,
                    "Window size {} is too small for polynomial order {}. Need at least {} points",
                    window_size,
                    order,
                    order + 2
                )
            }
            SavitzkyGolayError::InvalidDerivative { deriv, order } => {
                write!(
                    f,
                    "Invalid derivative order: {}. Must not exceed polynomial order ({})",
                    deriv, order
                )
            }
            SavitzkyGolayError::InvalidDelta(delta) => {
                write!(f, "Invalid sample spacing: {}. Must be finite and positive", delta)
            }
            SavitzkyGolayError::InsufficientData { len, half_window } => {
                write!(
                    f,
                    "Insufficient data: {} points. Need at least {} points for half-window {}",
                    len,
                    half_window + 1,
                    half_window
                )
            }
            SavitzkyGolayError::NumericalFailure(msg) => {
                write!(f, "Numerical failure: {}", msg)
            }
        }
    }
}

impl std::error::Error for SavitzkyGolayError {}

/// Result type for Savitzky-Golay operations
pub type Result<T> = std::result::Result<T, SavitzkyGolayError>;
