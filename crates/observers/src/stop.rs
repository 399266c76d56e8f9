//! Observers that end a solver run early.

use descent_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a run as soon as an objective value at or below `target` is seen.
///
/// Works with any event carrying an objective, so one value can cap the
/// effort of every solver on the same problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetValue {
    target: f64,
}

impl TargetValue {
    /// Creates an observer that stops once the objective reaches `target`.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    /// Returns the target objective value.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for TargetValue {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.objective() <= self.target).then(A::stop_early)
    }
}

/// Stops a run once a fixed number of events has been observed.
///
/// Gradient descent does not count rejected steps toward its iteration
/// limit, so this is the way to bound its total work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordBudget {
    budget: usize,
    seen: usize,
}

impl RecordBudget {
    /// Creates an observer that stops on the `budget`-th event.
    #[must_use]
    pub fn new(budget: usize) -> Self {
        Self { budget, seen: 0 }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for RecordBudget {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.seen += 1;
        (self.seen >= self.budget).then(A::stop_early)
    }
}
