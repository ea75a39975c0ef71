use std::convert::Infallible;

use kutta_core::{AnalyticalSolution, OdeProblem};
use nalgebra::{Matrix2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ensure_finite};

/// Coefficients of the forced linear system
///
/// ```text
/// u1' = a1 u1 + b1 u2 + c1 cos t + d1 sin t
/// u2' = a2 u1 + b2 u2 + c2 cos t + d2 sin t
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SystemParams {
    pub a1: f64,
    pub b1: f64,
    pub c1: f64,
    pub d1: f64,
    pub a2: f64,
    pub b2: f64,
    pub c2: f64,
    pub d2: f64,
}

impl Default for SystemParams {
    /// The reference system with eigenvalues -3 and -39.
    fn default() -> Self {
        Self {
            a1: 9.0,
            b1: 24.0,
            c1: 5.0,
            d1: -1.0 / 3.0,
            a2: -24.0,
            b2: -51.0,
            c2: -9.0,
            d2: 1.0 / 3.0,
        }
    }
}

impl SystemParams {
    fn matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.a1, self.b1, self.a2, self.b2)
    }

    fn cos_forcing(&self) -> Vector2<f64> {
        Vector2::new(self.c1, self.c2)
    }

    fn sin_forcing(&self) -> Vector2<f64> {
        Vector2::new(self.d1, self.d2)
    }
}

/// An eigenmode `weight * vector * e^{rate (t - t0)}`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Mode {
    rate: f64,
    vector: Vector2<f64>,
    weight: f64,
}

/// The forced two-variable linear system described by [`SystemParams`].
///
/// The exact solution is derived from the parameters at construction. A
/// periodic particular solution `P cos t + Q sin t` satisfies
///
/// ```text
/// (A² + I) P = -(A c + d),    Q = A P + c
/// ```
///
/// and the remainder is a sum of two eigenmodes of the coefficient matrix
/// `A`, weighted so the solution passes through the initial state at `t0`.
/// Only matrices with two distinct real eigenvalues are supported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSystem {
    params: SystemParams,
    matrix: Matrix2<f64>,
    t0: f64,
    initial: [f64; 2],
    cos_coeff: Vector2<f64>,
    sin_coeff: Vector2<f64>,
    modes: [Mode; 2],
}

impl LinearSystem {
    /// Creates the system with `initial` state at time `t0`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NonFinite`] for non-finite inputs,
    /// [`ParameterError::ComplexEigenvalues`] or
    /// [`ParameterError::RepeatedEigenvalues`] if the coefficient matrix has
    /// no pair of distinct real eigenvalues, and
    /// [`ParameterError::Degenerate`] if a required linear solve is singular.
    pub fn new(params: SystemParams, t0: f64, initial: [f64; 2]) -> Result<Self, ParameterError> {
        let SystemParams {
            a1,
            b1,
            c1,
            d1,
            a2,
            b2,
            c2,
            d2,
        } = params;
        ensure_finite(&[
            ("a1", a1),
            ("b1", b1),
            ("c1", c1),
            ("d1", d1),
            ("a2", a2),
            ("b2", b2),
            ("c2", c2),
            ("d2", d2),
            ("t0", t0),
            ("u1", initial[0]),
            ("u2", initial[1]),
        ])?;

        let a = params.matrix();
        let rates = real_eigenvalues(&a)?;

        // Periodic particular solution. A² + I is singular only for
        // eigenvalues ±i, which are already rejected.
        let rhs = -(a * params.cos_forcing() + params.sin_forcing());
        let cos_coeff = (a * a + Matrix2::identity())
            .lu()
            .solve(&rhs)
            .ok_or(ParameterError::Degenerate)?;
        let sin_coeff = a * cos_coeff + params.cos_forcing();

        // Mode weights from the initial state.
        let vectors = [eigenvector(&a, rates[0])?, eigenvector(&a, rates[1])?];
        let residual = Vector2::from(initial) - cos_coeff * t0.cos() - sin_coeff * t0.sin();
        let weights = Matrix2::from_columns(&vectors)
            .lu()
            .solve(&residual)
            .ok_or(ParameterError::Degenerate)?;

        let modes = [0, 1].map(|i| Mode {
            rate: rates[i],
            vector: vectors[i],
            weight: weights[i],
        });

        Ok(Self {
            params,
            matrix: a,
            t0,
            initial,
            cos_coeff,
            sin_coeff,
            modes,
        })
    }

    /// Returns the reference system started from `(4/3, 2/3)` at `t = 0`.
    ///
    /// Its exact solution is
    ///
    /// ```text
    /// u1 = 2 e^{-3t} - e^{-39t} + cos(t) / 3
    /// u2 = -e^{-3t} + 2 e^{-39t} - cos(t) / 3
    /// ```
    #[must_use]
    pub fn reference() -> Self {
        // Known-good values, unwrap is safe
        Self::new(SystemParams::default(), 0.0, [4.0 / 3.0, 2.0 / 3.0]).unwrap()
    }

    /// Returns the coefficients.
    #[must_use]
    pub fn params(&self) -> SystemParams {
        self.params
    }

    /// Returns the initial time.
    #[must_use]
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Returns the initial state.
    #[must_use]
    pub fn initial(&self) -> [f64; 2] {
        self.initial
    }

    /// Returns the eigenvalues of the coefficient matrix, largest first.
    #[must_use]
    pub fn eigenvalues(&self) -> [f64; 2] {
        self.modes.map(|mode| mode.rate)
    }
}

/// Returns the two distinct real eigenvalues of `a`, largest first.
fn real_eigenvalues(a: &Matrix2<f64>) -> Result<[f64; 2], ParameterError> {
    let eigenvalues = a.complex_eigenvalues();
    let scale = eigenvalues.iter().fold(1.0_f64, |acc, ev| acc.max(ev.norm()));

    if eigenvalues.iter().any(|ev| ev.im.abs() > 1e-12 * scale) {
        return Err(ParameterError::ComplexEigenvalues);
    }

    let (first, second) = (eigenvalues[0].re, eigenvalues[1].re);
    if (first - second).abs() <= 1e-9 * scale {
        return Err(ParameterError::RepeatedEigenvalues);
    }

    Ok([first.max(second), first.min(second)])
}

/// Returns a unit eigenvector of `a` for the real eigenvalue `rate`.
///
/// The vector spans the null space of `a - rate I`, taken from the right
/// singular vector of its smallest singular value.
fn eigenvector(a: &Matrix2<f64>, rate: f64) -> Result<Vector2<f64>, ParameterError> {
    let shifted = a - Matrix2::identity() * rate;
    let svd = shifted.svd(false, true);
    let v_t = svd.v_t.ok_or(ParameterError::Degenerate)?;
    let row = svd.singular_values.imin();
    Ok(v_t.row(row).transpose())
}

impl OdeProblem for LinearSystem {
    type State = [f64; 2];
    type Error = Infallible;

    fn derivative(&self, t: f64, u: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
        let du = self.matrix * Vector2::from(*u)
            + self.params.cos_forcing() * t.cos()
            + self.params.sin_forcing() * t.sin();
        Ok(du.into())
    }
}

impl AnalyticalSolution for LinearSystem {
    fn solution(&self, t: f64) -> Result<[f64; 2], Self::Error> {
        let periodic = self.cos_coeff * t.cos() + self.sin_coeff * t.sin();
        let u = self.modes.iter().fold(periodic, |acc, mode| {
            acc + mode.vector * (mode.weight * (mode.rate * (t - self.t0)).exp())
        });
        Ok(u.into())
    }
}
