use crate::StepIntegrable;

/// Defines an ODE (ordinary differential equation) problem to be integrated.
///
/// A problem supplies the derivative of its state with respect to time. The
/// derivative must be a pure function of `t` and the state: integrators may
/// evaluate it at any intermediate time and state, in any order, and expect
/// the same answer for the same arguments.
pub trait OdeProblem {
    type State: StepIntegrable;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the derivative of the state at time `t`.
    ///
    /// The returned value has the same shape as `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(&self, t: f64, state: &Self::State) -> Result<Self::State, Self::Error>;
}

/// An ODE problem with a known closed-form solution.
///
/// The solution must agree with the problem's initial condition: evaluating
/// it at the initial time returns the initial state. Solvers do not verify
/// this; it is a contract of the implementing problem.
pub trait AnalyticalSolution: OdeProblem {
    /// Evaluates the exact solution at time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`OdeProblem::Error`] if the solution cannot be evaluated.
    fn solution(&self, t: f64) -> Result<Self::State, Self::Error>;
}
