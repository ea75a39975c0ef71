use thiserror::Error;

/// How the number of steps changes when the step size is halved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Horizon {
    /// Every attempt takes the same number of steps, so each halving also
    /// halves the integrated time span.
    #[default]
    FixedSteps,

    /// The step count doubles with each halving, so every attempt covers the
    /// same time span and the total work grows geometrically.
    FixedSpan,
}

/// Configuration for the step search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    min_step: f64,
    max_iters: usize,
    horizon: Horizon,
}

/// Errors that can occur when validating a step search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,

    #[error("min_step must be finite and positive")]
    MinStep,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-3, 1e-6, 1000).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and step floor.
    ///
    /// `max_iters` caps the number of halvings; the search makes at most
    /// `max_iters + 1` integration attempts.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite, or if the
    /// step floor is not finite and positive.
    pub fn new(tolerance: f64, min_step: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if !min_step.is_finite() || min_step <= 0.0 {
            return Err(ConfigError::MinStep);
        }

        Ok(Self {
            tolerance,
            min_step,
            max_iters,
            horizon: Horizon::default(),
        })
    }

    /// Returns a copy of this config using the given horizon policy.
    #[must_use]
    pub fn with_horizon(mut self, horizon: Horizon) -> Self {
        self.horizon = horizon;
        self
    }

    /// Returns the maximum allowed deviation per state component.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the step floor.
    #[must_use]
    pub fn min_step(&self) -> f64 {
        self.min_step
    }

    /// Returns the maximum number of halvings.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the horizon policy.
    #[must_use]
    pub fn horizon(&self) -> Horizon {
        self.horizon
    }
}
