//! Classical fourth-order Runge-Kutta solver for ODE problems.
//!
//! This module provides a fixed-step RK4 integrator. Each step evaluates the
//! derivative four times:
//!
//! ```text
//! k1 = f(t, y)
//! k2 = f(t + h/2, y + k1 * h/2)
//! k3 = f(t + h/2, y + k2 * h/2)
//! k4 = f(t + h, y + k3 * h)
//! y_{n+1} = y_n + (k1 + 2 k2 + 2 k3 + k4) * h/6
//! ```
//!
//! No error estimation happens inside the loop. The step size is fixed for
//! the whole run; accuracy is judged externally, for example by comparing
//! against an [`AnalyticalSolution`] with the [`deviation`] module.
//!
//! # Example
//!
//! ```ignore
//! use kutta_solvers::transient::rk4;
//!
//! let solution = rk4::solve_unobserved(&problem, initial, 0.0, 0.1, 100)?;
//!
//! for sample in &solution.trajectory {
//!     println!("t={}: {:?}", sample.t, sample.state);
//! }
//! ```
//!
//! [`AnalyticalSolution`]: kutta_core::AnalyticalSolution
//! [`deviation`]: crate::deviation

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use kutta_core::{Observer, OdeProblem, Sample, StepIntegrable, Trajectory};

/// Integrates an ODE problem using classical RK4.
///
/// # Algorithm
///
/// 1. Validate the step size and the initial state.
/// 2. For each step `n` in `1..=steps`:
///    - Evaluate the four stage derivatives at the current `(t, y)`.
///    - Combine them into the next state.
///    - Record the sample at `t0 + n * step`.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full trajectory.
///
/// Sample times are computed from the step index rather than by repeated
/// addition, so a run with half the step lands exactly on every grid point
/// of the coarser run.
///
/// # Errors
///
/// Returns [`Error::InvalidStep`] if `step` is not finite and positive,
/// [`Error::Problem`] if the problem fails to compute a derivative, and
/// [`Error::NonFinite`] as soon as any derivative or stepped state contains
/// a NaN or infinite component. Returns [`Error::TimeStalled`] if `step` is
/// too small relative to `t0` for the sample time to advance.
pub fn solve<P, Obs>(
    problem: &P,
    initial: P::State,
    t0: f64,
    step: f64,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<P::State>, Error>
where
    P: OdeProblem,
    Obs: Observer<Event<P::State>, Action>,
{
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::InvalidStep(step));
    }
    if !t0.is_finite() || !initial.is_finite() {
        return Err(Error::NonFinite { step: 0, t: t0 });
    }

    let mut trajectory = Trajectory::with_capacity(steps);
    let mut t = t0;
    let mut state = initial;

    for n in 1..=steps {
        let next_state = advance(problem, n, t, &state, step)?;

        #[allow(clippy::cast_precision_loss)]
        let next_t = t0 + n as f64 * step;
        if next_t <= t {
            return Err(Error::TimeStalled { step: n, t });
        }
        if !next_state.is_finite() {
            return Err(Error::NonFinite { step: n, t: next_t });
        }

        let sample = Sample::new(next_t, next_state.clone());
        trajectory.push(sample.clone());

        let event = Event { step: n, sample };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory,
                steps: n,
            });
        }

        t = next_t;
        state = next_state;
    }

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        steps,
    })
}

/// Integrates an ODE problem using RK4 without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<P>(
    problem: &P,
    initial: P::State,
    t0: f64,
    step: f64,
    steps: usize,
) -> Result<Solution<P::State>, Error>
where
    P: OdeProblem,
{
    solve(problem, initial, t0, step, steps, ())
}

/// Performs one RK4 step from `(t, y)` with step size `h`.
///
/// `index` is the step number used when reporting a non-finite stage.
fn advance<P: OdeProblem>(
    problem: &P,
    index: usize,
    t: f64,
    y: &P::State,
    h: f64,
) -> Result<P::State, Error> {
    let derivative = |t: f64, y: &P::State| -> Result<P::State, Error> {
        let dy = problem.derivative(t, y).map_err(Error::problem)?;
        if dy.is_finite() {
            Ok(dy)
        } else {
            Err(Error::NonFinite { step: index, t })
        }
    };

    let half = 0.5 * h;
    let k1 = derivative(t, y)?;
    let k2 = derivative(t + half, &y.step(&k1, half))?;
    let k3 = derivative(t + half, &y.step(&k2, half))?;
    let k4 = derivative(t + h, &y.step(&k3, h))?;

    let slope = k1
        .zip_map(&k2, |acc, k| acc + 2.0 * k)
        .zip_map(&k3, |acc, k| acc + 2.0 * k)
        .zip_map(&k4, |acc, k| acc + k);

    Ok(y.step(&slope, h / 6.0))
}
