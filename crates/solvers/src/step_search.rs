//! Search for the coarsest fixed step that meets an error tolerance.
//!
//! # Algorithm
//!
//! The search integrates the problem with [`rk4`] at a nominal step size,
//! measures the worst-case deviation from the problem's
//! [`AnalyticalSolution`] with [`max_deviation`], and halves the step until
//! the deviation is within tolerance. Every attempt restarts from the
//! original initial condition and start time; a fixed-step run is not
//! refined incrementally from an earlier attempt.
//!
//! The search is a three-state machine (see [`Phase`]):
//!
//! - [`Phase::Running`] — deviation above tolerance, budget remains: halve
//!   the step and integrate again.
//! - [`Phase::Converged`] — every deviation component is within tolerance.
//! - [`Phase::Exhausted`] — deviation above tolerance and either the step
//!   has reached the floor or the halving cap has been hit.
//!
//! # Cost
//!
//! With [`Horizon::FixedSpan`] each halving doubles the work of the previous
//! attempt, so the halving cap and step floor in [`Config`] bound the total
//! cost. With the default [`Horizon::FixedSteps`] every attempt costs the
//! same but covers half the time span of the one before it.
//!
//! # Observer Events
//!
//! The search emits one [`Event`] per attempt, carrying the trajectory, its
//! [`ErrorProfile`], and the phase it leads to. Observers may return
//! [`Action::StopEarly`] to end the search before the next halving.
//!
//! [`rk4`]: crate::transient::rk4
//! [`max_deviation`]: crate::deviation::max_deviation
//! [`ErrorProfile`]: crate::deviation::ErrorProfile

mod action;
mod config;
mod error;
mod event;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError, Horizon};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use state::{Exhaustion, Phase};

use kutta_core::{AnalyticalSolution, Observer};

use crate::{deviation::max_deviation, transient::rk4};

use state::Schedule;

/// Searches for the coarsest step `step / 2^k` that keeps the deviation from
/// the analytical solution within the configured tolerance.
///
/// Each attempt integrates `steps` steps (or more, see [`Horizon`]) from
/// `(t0, initial)`.
///
/// # Errors
///
/// Returns an error without integrating if `step` is not finite and
/// positive, if `steps` is zero, or if `step` is not above the step floor.
/// Returns [`Error::Integration`] or [`Error::Deviation`] if an attempt
/// fails, including when the integration produces a non-finite value; the
/// search is not retried past such a failure.
pub fn search<P, Obs>(
    problem: &P,
    initial: P::State,
    t0: f64,
    step: f64,
    steps: usize,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<P::State>, Error>
where
    P: AnalyticalSolution,
    Obs: for<'a> Observer<Event<'a, P::State>, Action>,
{
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::InvalidStep(step));
    }
    if steps == 0 {
        return Err(Error::ZeroSteps);
    }
    if step <= config.min_step() {
        return Err(Error::StepBelowFloor {
            step,
            min_step: config.min_step(),
        });
    }

    let mut schedule = Schedule::new(step, steps);

    loop {
        let Schedule {
            step,
            steps,
            iteration,
        } = schedule;

        let trajectory = rk4::solve_unobserved(problem, initial.clone(), t0, step, steps)
            .map_err(|source| Error::Integration {
                step,
                iteration,
                source,
            })?
            .trajectory;

        let profile = max_deviation(problem, &trajectory).map_err(|source| Error::Deviation {
            step,
            iteration,
            source,
        })?;

        let phase = Phase::of(&profile, step, iteration, config);

        let event = Event {
            iteration,
            step,
            steps,
            phase,
            profile: &profile,
            trajectory: &trajectory,
        };
        let action = observer.observe(&event);

        let status = match phase {
            Phase::Running if action == Some(Action::StopEarly) => Status::StoppedByObserver,
            Phase::Running => {
                schedule = schedule.halved(config.horizon())?;
                continue;
            }
            Phase::Converged => Status::Converged,
            Phase::Exhausted(Exhaustion::StepFloor) => Status::StepFloor,
            Phase::Exhausted(Exhaustion::MaxIters) => Status::MaxIters,
        };

        return Ok(Solution {
            status,
            step,
            steps,
            profile,
            trajectory,
            iters: iteration,
        });
    }
}

/// Searches for the coarsest acceptable step without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`search`].
pub fn search_unobserved<P>(
    problem: &P,
    initial: P::State,
    t0: f64,
    step: f64,
    steps: usize,
    config: &Config,
) -> Result<Solution<P::State>, Error>
where
    P: AnalyticalSolution,
{
    search(problem, initial, t0, step, steps, config, ())
}
