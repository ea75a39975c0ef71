//! Fixed-step time integration of ODE problems.
//!
//! # Solvers
//!
//! - [`rk4`] — classical fourth-order explicit Runge-Kutta

pub mod rk4;
