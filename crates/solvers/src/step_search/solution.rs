use kutta_core::Trajectory;

use crate::deviation::ErrorProfile;

/// Indicates how the step search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every component of the deviation is within the tolerance.
    Converged,

    /// The step size reached the configured floor without converging.
    StepFloor,

    /// The halving budget ran out without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a step search.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// Final search status.
    pub status: Status,

    /// Step size of the final attempt.
    ///
    /// When converged, this is the coarsest step of the form
    /// `nominal / 2^k` that met the tolerance.
    pub step: f64,

    /// Number of steps integrated in the final attempt.
    pub steps: usize,

    /// Deviation of the final attempt.
    pub profile: ErrorProfile<S>,

    /// Trajectory of the final attempt.
    pub trajectory: Trajectory<S>,

    /// Number of halvings performed.
    pub iters: usize,
}

impl<S> Solution<S> {
    /// Returns `true` if the final attempt met the tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
