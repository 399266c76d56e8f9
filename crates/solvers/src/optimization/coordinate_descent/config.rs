use crate::optimization::Error;

/// Configuration for the coordinate descent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    epsilon: f64,
    range: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            epsilon: 1e-3,
            range: 1.0,
        }
    }
}

impl Config {
    /// Creates a new config with the default line search half-width of `1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `epsilon` is not finite and positive.
    pub fn new(max_iters: usize, epsilon: f64) -> Result<Self, Error> {
        Ok(Self {
            max_iters,
            epsilon: Error::require_positive("epsilon", epsilon)?,
            ..Self::default()
        })
    }

    /// Sets the half-width of each axis scan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `range` is not finite and positive.
    pub fn with_range(self, range: f64) -> Result<Self, Error> {
        Ok(Self {
            range: Error::require_positive("range", range)?,
            ..self
        })
    }

    /// Returns the maximum number of sweeps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the half-width of each axis scan.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Returns the scan step, one tenth of the tolerance.
    #[must_use]
    pub fn line_step(&self) -> f64 {
        self.epsilon / 10.0
    }
}
