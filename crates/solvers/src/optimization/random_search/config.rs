use crate::optimization::Error;

/// Configuration for the random search solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    epsilon: f64,
    initial_step: f64,
    patience: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            epsilon: 1e-3,
            initial_step: 1.0,
            patience: 5,
        }
    }
}

impl Config {
    /// Creates a new config with an initial step of `1.0` and a patience of 5.
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

    /// Sets the step size used for the first probes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `step` is not finite and positive.
    pub fn with_initial_step(self, step: f64) -> Result<Self, Error> {
        Ok(Self {
            initial_step: Error::require_positive("initial_step", step)?,
            ..self
        })
    }

    /// Sets how many consecutive stalls are tolerated before the step halves.
    ///
    /// The step halves on the stall that pushes the streak past `patience`.
    #[must_use]
    pub fn with_patience(self, patience: usize) -> Self {
        Self { patience, ..self }
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the step size used for the first probes.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Returns the number of consecutive stalls tolerated before halving.
    #[must_use]
    pub fn patience(&self) -> usize {
        self.patience
    }
}
