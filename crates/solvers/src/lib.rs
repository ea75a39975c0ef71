//! Numerical solvers for the Kutta workspace.
//!
//! # Modules
//!
//! - [`transient`] — fixed-step time integrators ([`transient::rk4`])
//! - [`deviation`] — worst-case deviation of a trajectory from an analytical
//!   solution
//! - [`step_search`] — halving search for the coarsest step that meets a
//!   tolerance
//!
//! Solvers report progress through [`Observer`] events and never log on
//! their own.
//!
//! [`Observer`]: kutta_core::Observer

pub mod deviation;
pub mod step_search;
pub mod transient;
