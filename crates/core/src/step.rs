/// A trait for state types that can be stepped using their derivative.
///
/// Implementing this trait enables the generic integrators to work with the
/// type by stepping it via `state + derivative * delta`. The derivative of a
/// state has the same shape as the state itself, so a single type plays both
/// roles.
///
/// Implementations are provided for `f64` (a single state variable) and for
/// `[f64; N]` (a fixed-size state vector of any dimension). All arithmetic is
/// component-wise.
pub trait StepIntegrable: Clone {
    /// Combines two values of the same shape component by component.
    #[must_use]
    fn zip_map<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> Self;

    /// Returns the scalar components in order.
    fn components(&self) -> impl Iterator<Item = f64> + '_;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: &Self, delta: f64) -> Self {
        self.zip_map(derivative, |value, rate| value + rate * delta)
    }

    /// Returns `true` if every component is finite.
    fn is_finite(&self) -> bool {
        self.components().all(f64::is_finite)
    }
}

impl StepIntegrable for f64 {
    fn zip_map<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> Self {
        f(*self, *other)
    }

    fn components(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::once(*self)
    }
}

impl<const N: usize> StepIntegrable for [f64; N] {
    fn zip_map<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> Self {
        std::array::from_fn(|i| f(self[i], other[i]))
    }

    fn components(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().copied()
    }
}
