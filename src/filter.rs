use crate::coefficients::CoefficientCache;
use crate::convolve::convolve_valid;
use crate::error::{Result, SavitzkyGolayError};
use crate::padding::pad_ends;

/// Configuration for the Savitzky-Golay filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Size of the filter window (must be odd)
    pub window_size: usize,
    /// Order of the polynomial to fit
    pub order: usize,
    /// Row of the pseudo-inverse used as kernel (0 smooths)
    pub deriv: usize,
    /// Check the parameters before every run
    pub validate: bool,
}

impl FilterConfig {
    /// Creates a new filter configuration with validation
    pub fn new(window_size: usize, order: usize) -> Result<Self> {
        let config = Self {
            window_size,
            order,
            deriv: 0,
            validate: true,
        };
        config.validate()?;
        Ok(config)
    }

    /// Selects which fitted polynomial coefficient the filter outputs
    pub fn with_derivative(mut self, deriv: usize) -> Self {
        self.deriv = deriv;
        self
    }

    /// Skips parameter checks when the filter runs.
    ///
    /// Malformed parameters then give implementation-defined output: an even
    /// window acts like the next smaller odd one and a zero window like a
    /// single point. Short input and missing pseudo-inverse rows still fail.
    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    /// Number of samples on each side of the window center
    pub fn half_window(&self) -> usize {
        self.window_size.saturating_sub(1) / 2
    }

    /// Checks the window, order and derivative constraints, failing on the first violation
    pub fn validate(&self) -> Result<()> {
        if self.window_size % 2 == 0 {
            return Err(SavitzkyGolayError::InvalidWindowSize(self.window_size));
        }

        if self.window_size < self.order + 2 {
            return Err(SavitzkyGolayError::InvalidPolynomialOrder {
                order: self.order,
                window_size: self.window_size,
            });
        }

        if self.deriv > self.order {
            return Err(SavitzkyGolayError::InvalidDerivative {
                deriv: self.deriv,
                order: self.order,
            });
        }

        Ok(())
    }
}

/// A Savitzky-Golay filter for signal smoothing and differentiation.
///
/// Keeps its weights cached, so applying one filter to many signals pays for
/// the pseudo-inverse only once.
#[derive(Debug, Clone)]
pub struct SavitzkyGolayFilter {
    config: FilterConfig,
    cache: CoefficientCache,
}

impl SavitzkyGolayFilter {
    /// Creates a new Savitzky-Golay smoothing filter with the specified parameters.
    ///
    /// # Arguments
    ///
    /// * `window_size` - Size of the filter window (positive and odd)
    /// * `order` - Order of the polynomial to fit (at most `window_size - 2`)
    ///
    /// # Example
    ///
    /// ```rust
    /// use savgol::SavitzkyGolayFilter;
    ///
    /// let filter = SavitzkyGolayFilter::new(5, 3).expect("Valid parameters");
    /// assert_eq!(filter.config().window_size, 5);
    /// ```
    pub fn new(window_size: usize, order: usize) -> Result<Self> {
        let config = FilterConfig::new(window_size, order)?;
        Ok(Self::with_config(config))
    }

    /// Creates a filter with custom configuration
    pub fn with_config(config: FilterConfig) -> Self {
        Self {
            config,
            cache: CoefficientCache::new(),
        }
    }

    /// Sets the derivative row used as kernel
    pub fn with_derivative(mut self, deriv: usize) -> Self {
        self.config.deriv = deriv;
        self
    }

    /// Applies the filter, returning one output sample per input sample.
    ///
    /// The signal is padded by odd reflection at both ends and convolved with the
    /// weights of the configured derivative row.
    ///
    /// # Errors
    ///
    /// * Invalid parameters, when validation is enabled
    /// * [`SavitzkyGolayError::InsufficientData`] if `data.len() <= half_window`
    /// * [`SavitzkyGolayError::NumericalFailure`] if the pseudo-inverse fails
    ///
    /// # Example
    ///
    /// ```rust
    /// use savgol::SavitzkyGolayFilter;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0];
    /// let mut filter = SavitzkyGolayFilter::new(5, 2).expect("Valid parameters");
    /// let smoothed = filter.apply(&data).expect("Data long enough");
    /// assert_eq!(smoothed.len(), data.len());
    /// ```
    pub fn apply(&mut self, data: &[f64]) -> Result<Vec<f64>> {
        if self.config.validate {
            self.config.validate()?;
        }

        let FilterConfig {
            window_size,
            order,
            deriv,
            ..
        } = self.config;

        let padded = pad_ends(data, self.config.half_window())?;
        let weights = self.cache.get_weights(window_size, order, deriv)?;

        log::trace!(
            "filtering {} samples: window_size={}, order={}, deriv={}",
            data.len(),
            window_size,
            order,
            deriv
        );

        Ok(convolve_valid(&padded, weights))
    }

    /// Returns the convolution kernel for the current configuration
    pub fn weights(&mut self) -> Result<&[f64]> {
        if self.config.validate {
            self.config.validate()?;
        }
        self.cache
            .get_weights(self.config.window_size, self.config.order, self.config.deriv)
    }

    /// Returns the filter configuration
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }
}
