//! Reusable observers and reports for the Kutta workspace.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasTime`], [`HasStepSize`], [`HasMaxDeviation`], [`CanStopEarly`])
//! - [`LogObserver`] — Logs step search attempts through the `log` facade
//! - [`Report`] — Tab-separated comparison of a trajectory with its
//!   analytical solution
//!
//! [`HasTime`]: traits::HasTime
//! [`HasStepSize`]: traits::HasStepSize
//! [`HasMaxDeviation`]: traits::HasMaxDeviation
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logging;
mod report;

pub use logging::LogObserver;
pub use report::Report;
