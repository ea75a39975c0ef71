//! Core traits and types for the Kutta workspace.
//!
//! This crate defines the shared abstractions that solvers, problems, and
//! observers build on:
//!
//! - [`StepIntegrable`] — a state that can be stepped by its derivative,
//!   implemented for scalar (`f64`) and fixed-size vector (`[f64; N]`) states
//! - [`OdeProblem`] — a derivative function of time and state
//! - [`AnalyticalSolution`] — a closed-form reference for an [`OdeProblem`]
//! - [`Trajectory`] — the ordered samples produced by an integration run
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod problem;
mod step;
mod trajectory;

pub use observer::Observer;
pub use problem::{AnalyticalSolution, OdeProblem};
pub use step::StepIntegrable;
pub use trajectory::{Sample, Trajectory};
