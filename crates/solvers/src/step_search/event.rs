use kutta_core::Trajectory;

use crate::deviation::ErrorProfile;

use super::Phase;

/// Event emitted by the step search after each integration attempt.
///
/// `phase` is the state the search moves to because of this attempt: still
/// [`Phase::Running`] if it will halve again, or a terminal phase.
#[derive(Debug)]
pub struct Event<'a, S> {
    /// Number of halvings before this attempt (0 for the nominal step).
    pub iteration: usize,

    /// Step size used for this attempt.
    pub step: f64,

    /// Number of steps integrated in this attempt.
    pub steps: usize,

    /// The outcome of this attempt.
    pub phase: Phase,

    /// Deviation of this attempt from the analytical solution.
    pub profile: &'a ErrorProfile<S>,

    /// The trajectory produced by this attempt.
    pub trajectory: &'a Trajectory<S>,
}
