use kutta_core::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an RK4 integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// One sample per completed step, excluding the initial condition.
    pub trajectory: Trajectory<S>,

    /// Number of integration steps completed.
    pub steps: usize,
}
