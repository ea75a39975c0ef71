/// A state captured at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<S> {
    pub t: f64,
    pub state: S,
}

impl<S> Sample<S> {
    /// Creates a new sample.
    pub fn new(t: f64, state: S) -> Self {
        Self { t, state }
    }
}

/// The ordered samples produced by one integration run.
///
/// A trajectory holds one sample per completed step, in increasing time
/// order. The initial condition is not included: the sample at index `i` is
/// the state at `t0 + (i + 1) * h`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<S> {
    samples: Vec<Sample<S>>,
}

impl<S> Trajectory<S> {
    /// Creates an empty trajectory with room for `steps` samples.
    #[must_use]
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            samples: Vec::with_capacity(steps),
        }
    }

    /// Appends a sample.
    ///
    /// Callers push samples in increasing time order.
    pub fn push(&mut self, sample: Sample<S>) {
        debug_assert!(
            self.samples.last().is_none_or(|last| last.t < sample.t),
            "samples must be pushed in increasing time order"
        );
        self.samples.push(sample);
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the trajectory has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the samples as a slice.
    #[must_use]
    pub fn samples(&self) -> &[Sample<S>] {
        &self.samples
    }

    /// Returns the final sample, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Sample<S>> {
        self.samples.last()
    }

    /// Iterates over the samples in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample<S>> {
        self.samples.iter()
    }
}

impl<'a, S> IntoIterator for &'a Trajectory<S> {
    type Item = &'a Sample<S>;
    type IntoIter = std::slice::Iter<'a, Sample<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
