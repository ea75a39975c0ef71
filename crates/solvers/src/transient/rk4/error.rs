use std::error::Error as StdError;

/// Errors that can occur during RK4 integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("step size must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    /// A derivative evaluation or stepped state was NaN or infinite.
    #[error("non-finite value at step {step} (t = {t})")]
    NonFinite { step: usize, t: f64 },

    /// The step is too small to move the sample time past `t`.
    #[error("time does not advance past t = {t} at step {step}")]
    TimeStalled { step: usize, t: f64 },
}

impl Error {
    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}
