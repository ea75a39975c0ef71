use std::convert::Infallible;

use kutta_core::{AnalyticalSolution, OdeProblem};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ensure_finite};

/// Coefficients of `dy/dt = a t - b y` with `y(t0) = d`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScalarParams {
    /// Slope of the linear forcing term.
    pub a: f64,

    /// Decay rate.
    pub b: f64,

    /// Initial value.
    pub d: f64,
}

impl Default for ScalarParams {
    fn default() -> Self {
        Self {
            a: -0.7,
            b: 1.3,
            d: 0.5,
        }
    }
}

/// The scalar linear problem `dy/dt = a t - b y`.
///
/// The exact solution is
///
/// ```text
/// y(t) = (a/b) t - a/b² + (d - p(t0)) e^{-b (t - t0)}
/// ```
///
/// where `p(t) = (a/b) t - a/b²` is the particular solution. The integration
/// constant is fixed once at construction from the initial value `d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarLinear {
    params: ScalarParams,
    t0: f64,
    constant: f64,
}

impl ScalarLinear {
    /// Creates the problem with initial value `params.d` at time `t0`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NonFinite`] if any coefficient or `t0` is not
    /// finite, and [`ParameterError::ZeroDecay`] if `b` is zero.
    pub fn new(params: ScalarParams, t0: f64) -> Result<Self, ParameterError> {
        let ScalarParams { a, b, d } = params;
        ensure_finite(&[("a", a), ("b", b), ("d", d), ("t0", t0)])?;
        if b == 0.0 {
            return Err(ParameterError::ZeroDecay);
        }

        let mut problem = Self {
            params,
            t0,
            constant: 0.0,
        };
        problem.constant = d - problem.particular(t0);
        Ok(problem)
    }

    /// Returns the coefficients.
    #[must_use]
    pub fn params(&self) -> ScalarParams {
        self.params
    }

    /// Returns the initial time.
    #[must_use]
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Returns the initial value.
    #[must_use]
    pub fn initial(&self) -> f64 {
        self.params.d
    }

    /// Returns the weight of the decaying mode at `t0`.
    #[must_use]
    pub fn constant(&self) -> f64 {
        self.constant
    }

    fn particular(&self, t: f64) -> f64 {
        let ScalarParams { a, b, .. } = self.params;
        a / b * t - a / (b * b)
    }
}

impl OdeProblem for ScalarLinear {
    type State = f64;
    type Error = Infallible;

    fn derivative(&self, t: f64, y: &f64) -> Result<f64, Self::Error> {
        let ScalarParams { a, b, .. } = self.params;
        Ok(a * t - b * y)
    }
}

impl AnalyticalSolution for ScalarLinear {
    fn solution(&self, t: f64) -> Result<f64, Self::Error> {
        let decay = (-self.params.b * (t - self.t0)).exp();
        Ok(self.particular(t) + self.constant * decay)
    }
}
