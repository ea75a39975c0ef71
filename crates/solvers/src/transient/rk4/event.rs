use kutta_core::Sample;

/// Event emitted by the RK4 solver after each completed step.
///
/// Steps are numbered from 1; the initial condition is not reported.
#[derive(Debug, Clone)]
pub struct Event<S> {
    /// The step number (1..N).
    pub step: usize,

    /// The sample produced by this step.
    pub sample: Sample<S>,
}
