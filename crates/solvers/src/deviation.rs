//! Deviation of a numerical trajectory from an analytical reference.
//!
//! [`max_deviation`] scans a whole [`Trajectory`], evaluates the problem's
//! [`AnalyticalSolution`] at every sample time, and keeps the running maximum
//! of `|numerical - analytical|` for each state component independently. The
//! components are never combined into a norm: a two-variable state yields two
//! separate maxima.

use std::error::Error as StdError;

use kutta_core::{AnalyticalSolution, Sample, StepIntegrable, Trajectory};

/// The worst-case absolute deviation over a whole trajectory.
///
/// `max_abs` has the shape of the problem's state and holds the maximum
/// absolute deviation of each component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorProfile<S> {
    pub max_abs: S,
}

impl<S: StepIntegrable> ErrorProfile<S> {
    /// Returns `true` if every component is at or below `tolerance`.
    #[must_use]
    pub fn within(&self, tolerance: f64) -> bool {
        self.max_abs.components().all(|dev| dev <= tolerance)
    }

    /// Returns the largest deviation across all components.
    #[must_use]
    pub fn worst(&self) -> f64 {
        self.max_abs.components().fold(0.0, f64::max)
    }

    /// Returns the per-component maxima in state order.
    pub fn components(&self) -> impl Iterator<Item = f64> + '_ {
        self.max_abs.components()
    }
}

/// Errors that can occur while computing an [`ErrorProfile`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot measure deviation of an empty trajectory")]
    EmptyTrajectory,

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    /// The analytical solution was NaN or infinite at a sample time.
    #[error("non-finite analytical solution at t = {t}")]
    NonFinite { t: f64 },
}

/// Computes the maximum deviation of `trajectory` from the exact solution.
///
/// The full trajectory is scanned on every call.
///
/// # Errors
///
/// Returns [`Error::EmptyTrajectory`] if there are no samples,
/// [`Error::Problem`] if the analytical solution cannot be evaluated, and
/// [`Error::NonFinite`] if it evaluates to a NaN or infinite value.
pub fn max_deviation<P>(
    problem: &P,
    trajectory: &Trajectory<P::State>,
) -> Result<ErrorProfile<P::State>, Error>
where
    P: AnalyticalSolution,
{
    let mut samples = trajectory.iter();
    let first = samples.next().ok_or(Error::EmptyTrajectory)?;

    let mut max_abs = deviation_at(problem, first)?;
    for sample in samples {
        let deviation = deviation_at(problem, sample)?;
        max_abs = max_abs.zip_map(&deviation, f64::max);
    }

    Ok(ErrorProfile { max_abs })
}

/// Returns `|numerical - analytical|` for one sample, component-wise.
///
/// # Errors
///
/// Returns an error if the analytical solution fails or is not finite.
pub fn deviation_at<P>(problem: &P, sample: &Sample<P::State>) -> Result<P::State, Error>
where
    P: AnalyticalSolution,
{
    let exact = problem
        .solution(sample.t)
        .map_err(|e| Error::Problem(Box::new(e)))?;
    if !exact.is_finite() {
        return Err(Error::NonFinite { t: sample.t });
    }

    Ok(sample.state.zip_map(&exact, |num, ana| (num - ana).abs()))
}
