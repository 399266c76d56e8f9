//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific record and action types, so an
//! observer written once works with every solver.
//!
//! # Event traits
//!
//! - [`HasObjective`]: events that carry an objective value
//! - [`HasPoint`]: events that carry a point in the plane
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use descent_core::Observer;
//! use descent_observers::traits::{CanStopEarly, HasPoint};
//!
//! /// Stops once the solver leaves the unit disc.
//! struct StayInside;
//!
//! impl<E: HasPoint, A: CanStopEarly> Observer<E, A> for StayInside {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let point = event.point();
//!         (point.x * point.x + point.y * point.y > 1.0).then(A::stop_early)
//!     }
//! }
//! ```

use descent_core::Point;
use descent_solvers::optimization::{Action, Record};

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event that carries a point in the plane.
pub trait HasPoint {
    /// Returns the point for this event.
    fn point(&self) -> Point;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<D> HasObjective for Record<D> {
    fn objective(&self) -> f64 {
        self.value()
    }
}

impl<D> HasPoint for Record<D> {
    fn point(&self) -> Point {
        Record::point(self)
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
