use thiserror::Error;

/// Stopping configuration shared by all root-finding solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and iteration limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and strictly positive,
    /// or if `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Returns the convergence tolerance.
    ///
    /// Convergence tests compare strictly: a quantity converges when it is
    /// `< tolerance`.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of iterations (and records) per run.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns true if `value` is strictly below the tolerance in magnitude.
    pub(crate) fn within(&self, value: f64) -> bool {
        value.abs() < self.tolerance
    }
}
