//! Linear ODE problems with closed-form solutions.
//!
//! Each problem implements [`OdeProblem`] and [`AnalyticalSolution`], so it
//! can be integrated by the solvers and its trajectory compared against the
//! exact answer.
//!
//! - [`ScalarLinear`] — `dy/dt = a t - b y`
//! - [`LinearSystem`] — a forced two-variable linear system
//!
//! Parameters are plain configuration values and, with the default `serde`
//! feature, can be deserialized from any serde format.
//!
//! [`OdeProblem`]: kutta_core::OdeProblem
//! [`AnalyticalSolution`]: kutta_core::AnalyticalSolution

mod error;
mod scalar;
mod system;

pub use error::ParameterError;
pub use scalar::{ScalarLinear, ScalarParams};
pub use system::{LinearSystem, SystemParams};
