use kutta_core::StepIntegrable;

use crate::deviation::ErrorProfile;

use super::{Config, Error, Horizon};

/// The state of the step search state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The deviation exceeds the tolerance and the budget allows another
    /// halving.
    Running,

    /// Every deviation component is within the tolerance.
    Converged,

    /// The deviation exceeds the tolerance and no halving is left.
    Exhausted(Exhaustion),
}

/// Why a search ran out of budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exhaustion {
    /// The step size is at or below the configured floor.
    StepFloor,

    /// The configured number of halvings has been performed.
    MaxIters,
}

impl Phase {
    /// Classifies an attempt made with `step` after `iteration` halvings.
    ///
    /// Convergence is checked first, then the step floor, then the
    /// iteration cap.
    #[must_use]
    pub fn of<S: StepIntegrable>(
        profile: &ErrorProfile<S>,
        step: f64,
        iteration: usize,
        config: &Config,
    ) -> Self {
        if profile.within(config.tolerance()) {
            Self::Converged
        } else if step <= config.min_step() {
            Self::Exhausted(Exhaustion::StepFloor)
        } else if iteration >= config.max_iters() {
            Self::Exhausted(Exhaustion::MaxIters)
        } else {
            Self::Running
        }
    }

    /// Returns `true` for [`Phase::Converged`] and [`Phase::Exhausted`].
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Step size and step count for the next attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Schedule {
    pub(super) step: f64,
    pub(super) steps: usize,
    pub(super) iteration: usize,
}

impl Schedule {
    pub(super) fn new(step: f64, steps: usize) -> Self {
        Self {
            step,
            steps,
            iteration: 0,
        }
    }

    /// Returns the schedule for the next attempt, with half the step size.
    pub(super) fn halved(self, horizon: Horizon) -> Result<Self, Error> {
        let steps = match horizon {
            Horizon::FixedSteps => self.steps,
            Horizon::FixedSpan => self
                .steps
                .checked_mul(2)
                .ok_or(Error::StepCountOverflow {
                    iteration: self.iteration,
                })?,
        };

        Ok(Self {
            step: 0.5 * self.step,
            steps,
            iteration: self.iteration + 1,
        })
    }
}
