use crate::optimization::Error;

/// Configuration for the gradient descent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    epsilon: f64,
    learning_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            epsilon: 1e-3,
            learning_rate: 0.1,
        }
    }
}

impl Config {
    /// Creates a new config with an initial learning rate of `0.1`.
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

    /// Sets the initial learning rate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `rate` is not finite and positive.
    pub fn with_learning_rate(self, rate: f64) -> Result<Self, Error> {
        Ok(Self {
            learning_rate: Error::require_positive("learning_rate", rate)?,
            ..self
        })
    }

    /// Returns the maximum number of accepted steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the initial learning rate.
    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}
