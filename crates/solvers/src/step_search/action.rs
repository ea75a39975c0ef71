/// Actions an observer can take during a step search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the most recent attempt.
    ///
    /// Only honored while the search would otherwise keep halving; an attempt
    /// that already converged or exhausted the budget reports that outcome.
    StopEarly,
}
