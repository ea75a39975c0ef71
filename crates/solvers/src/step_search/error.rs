use crate::{deviation, transient::rk4};

use super::ConfigError;

/// Errors that can occur during a step search.
///
/// Configuration errors are reported before any integration runs. Failures
/// during an attempt carry the step size and iteration at which they occurred.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("step size must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("step count must be at least one")]
    ZeroSteps,

    #[error("step size {step} must be above the step floor {min_step}")]
    StepBelowFloor { step: f64, min_step: f64 },

    #[error("step count overflowed after {iteration} halvings")]
    StepCountOverflow { iteration: usize },

    #[error("integration failed at step size {step} (iteration {iteration})")]
    Integration {
        step: f64,
        iteration: usize,
        #[source]
        source: rk4::Error,
    },

    #[error("deviation failed at step size {step} (iteration {iteration})")]
    Deviation {
        step: f64,
        iteration: usize,
        #[source]
        source: deviation::Error,
    },
}
