use kutta_core::{Observer, StepIntegrable};
use kutta_solvers::{
    step_search::{self, Exhaustion, Phase},
    transient::rk4,
};

/// Logs solver progress through the [`log`] facade.
///
/// Step search attempts are logged at `debug`, convergence at `info`, and
/// exhaustion at `warn`. Individual RK4 steps are logged at `trace`.
/// The observer never requests an action.
///
/// No logger is installed here; the application chooses one.
#[derive(Debug, Clone, Default)]
pub struct LogObserver {
    label: String,
}

impl LogObserver {
    /// Creates an observer whose messages are prefixed with `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the message prefix.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    fn prefix(&self) -> String {
        if self.label.is_empty() {
            String::new()
        } else {
            format!("[{}] ", self.label)
        }
    }
}

impl<S: StepIntegrable, A> Observer<step_search::Event<'_, S>, A> for LogObserver {
    fn observe(&mut self, event: &step_search::Event<'_, S>) -> Option<A> {
        let worst = event.profile.worst();
        log::debug!(
            "{}attempt {}: h = {}, steps = {}, max deviation = {:e}",
            self.prefix(),
            event.iteration,
            event.step,
            event.steps,
            worst,
        );

        match event.phase {
            Phase::Running => {}
            Phase::Converged => log::info!(
                "{}converged at h = {} after {} halvings (max deviation {:e})",
                self.prefix(),
                event.step,
                event.iteration,
                worst,
            ),
            Phase::Exhausted(Exhaustion::StepFloor) => log::warn!(
                "{}step floor reached at h = {} without converging (max deviation {:e})",
                self.prefix(),
                event.step,
                worst,
            ),
            Phase::Exhausted(Exhaustion::MaxIters) => log::warn!(
                "{}gave up after {} halvings at h = {} (max deviation {:e})",
                self.prefix(),
                event.iteration,
                event.step,
                worst,
            ),
        }

        None
    }
}

impl<S: StepIntegrable, A> Observer<rk4::Event<S>, A> for LogObserver {
    fn observe(&mut self, event: &rk4::Event<S>) -> Option<A> {
        if log::log_enabled!(log::Level::Trace) {
            let state: Vec<f64> = event.sample.state.components().collect();
            log::trace!(
                "{}step {}: t = {}, y = {:?}",
                self.prefix(),
                event.step,
                event.sample.t,
                state,
            );
        }
        None
    }
}
