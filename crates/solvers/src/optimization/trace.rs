use descent_core::{Observer, Point};

use super::Evaluation;

/// Indicates how a solver run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The method's convergence test passed.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Random search shrank its step below the floor.
    StepTooSmall,

    /// Gradient descent halved its learning rate below the floor.
    LearningRateTooSmall,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// Actions an observer can take while a solver runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the current point as the solution.
    StopEarly,
}

/// One entry in a solver's trace.
///
/// `D` carries the solver-specific diagnostics for the entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<D> {
    /// Iteration index; 0 is the starting evaluation.
    pub iter: usize,

    /// The solver's current point and its objective value.
    pub eval: Evaluation,

    /// Solver-specific diagnostics.
    pub detail: D,
}

impl<D> Record<D> {
    /// Returns the recorded point.
    #[must_use]
    pub fn point(&self) -> Point {
        self.eval.point
    }

    /// Returns the objective value at the recorded point.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.eval.value
    }
}

/// The complete result of one solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<D> {
    /// Final solver status.
    pub status: Status,

    /// Records in the order they were produced.
    pub records: Vec<Record<D>>,

    /// The final evaluation.
    pub solution: Evaluation,

    /// Iterations counted toward the iteration limit.
    pub iters: usize,
}

impl<D> Trace<D> {
    /// Returns the final point.
    #[must_use]
    pub fn point(&self) -> Point {
        self.solution.point
    }

    /// Returns the objective value at the final point.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.solution.value
    }

    /// Returns true if the run ended by passing its convergence test.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn last_record(&self) -> Option<&Record<D>> {
        self.records.last()
    }
}

/// Collects records for a trace and shows each one to the observer.
pub(crate) struct Recorder<D, Obs> {
    records: Vec<Record<D>>,
    observer: Obs,
}

impl<D, Obs> Recorder<D, Obs>
where
    Obs: Observer<Record<D>, Action>,
{
    pub(crate) fn new(observer: Obs) -> Self {
        Self {
            records: Vec::new(),
            observer,
        }
    }

    /// Appends a record and returns the observer's action for it.
    pub(crate) fn record(&mut self, iter: usize, eval: Evaluation, detail: D) -> Option<Action> {
        let record = Record { iter, eval, detail };
        let action = self.observer.observe(&record);
        self.records.push(record);
        action
    }

    pub(crate) fn finish(self, status: Status, solution: Evaluation, iters: usize) -> Trace<D> {
        Trace {
            status,
            records: self.records,
            solution,
            iters,
        }
    }
}
