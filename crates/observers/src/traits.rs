//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across the RK4 integrator and the step search.
//!
//! # Event traits
//!
//! - [`HasTime`] — events that carry a simulation time
//! - [`HasStepSize`] — events that carry the step size of an attempt
//! - [`HasMaxDeviation`] — events that carry a worst-case deviation
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use kutta_core::Observer;
//! use kutta_observers::traits::{CanStopEarly, HasStepSize};
//!
//! /// Gives up once the step gets finer than `finest`.
//! struct Coarse {
//!     finest: f64,
//! }
//!
//! impl<E: HasStepSize, A: CanStopEarly> Observer<E, A> for Coarse {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.step_size() < self.finest).then(A::stop_early)
//!     }
//! }
//! ```

use kutta_core::StepIntegrable;

use kutta_solvers::{step_search, transient::rk4};

/// An event that carries a simulation time.
pub trait HasTime {
    /// Returns the time this event refers to.
    fn time(&self) -> f64;
}

/// An event that carries the step size of an integration attempt.
pub trait HasStepSize {
    /// Returns the step size.
    fn step_size(&self) -> f64;
}

/// An event that carries a worst-case deviation from a reference solution.
pub trait HasMaxDeviation {
    /// Returns the largest deviation across all state components.
    fn max_deviation(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<S> HasTime for rk4::Event<S> {
    fn time(&self) -> f64 {
        self.sample.t
    }
}

impl<S> HasStepSize for step_search::Event<'_, S> {
    fn step_size(&self) -> f64 {
        self.step
    }
}

impl<S: StepIntegrable> HasMaxDeviation for step_search::Event<'_, S> {
    fn max_deviation(&self) -> f64 {
        self.profile.worst()
    }
}

impl CanStopEarly for rk4::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for step_search::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use kutta_core::Observer;
    use kutta_problems::ScalarLinear;
    use kutta_solvers::step_search::{Config, Status, search};

    struct Coarse {
        finest: f64,
        seen: Vec<f64>,
    }

    impl<E, A> Observer<E, A> for Coarse
    where
        E: HasStepSize + HasMaxDeviation,
        A: CanStopEarly,
    {
        fn observe(&mut self, event: &E) -> Option<A> {
            self.seen.push(event.max_deviation());
            (event.step_size() < self.finest).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_stops_the_search() {
        let problem = ScalarLinear::new(Default::default(), 0.0).unwrap();
        let config = Config::new(0.0, 1e-9, 100).unwrap();
        let mut observer = Coarse {
            finest: 0.03,
            seen: Vec::new(),
        };

        let solution = search(
            &problem,
            0.5,
            0.0,
            0.1,
            20,
            &config,
            |event: &step_search::Event<'_, f64>| -> Option<step_search::Action> {
                observer.observe(event)
            },
        )
        .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_relative_eq!(solution.step, 0.025);
        assert_eq!(observer.seen.len(), 3);
        assert!(observer.seen.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn rk4_events_report_sample_time() {
        let problem = ScalarLinear::new(Default::default(), 1.0).unwrap();

        let mut times = Vec::new();
        let observer = |event: &rk4::Event<f64>| -> Option<rk4::Action> {
            times.push(event.time());
            (times.len() == 3).then(rk4::Action::stop_early)
        };

        let solution = rk4::solve(&problem, 0.5, 1.0, 0.5, 10, observer).unwrap();

        assert_eq!(solution.status, rk4::Status::StoppedByObserver);
        assert_eq!(times, vec![1.5, 2.0, 2.5]);
    }
}
