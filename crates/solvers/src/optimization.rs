//! Solvers for minimizing an objective of two real variables.
//!
//! Every solver starts from a [`Point`], evaluates the [`Objective`] (or a
//! [`Differentiable`] objective for gradient descent), and iterates until a
//! method-specific stopping rule fires. Each run returns a [`Trace`]: the
//! ordered [`Record`]s it produced, the final evaluation, and the terminal
//! [`Status`].
//!
//! # Solvers
//!
//! - [`coordinate_descent`]: alternating line searches along each axis
//! - [`random_search`]: random probe directions with adaptive step shrinkage
//! - [`gradient_descent`]: steps against the gradient, halving the learning
//!   rate and reverting whenever a step makes things worse
//!
//! [`line_search`] is the fixed-step scan coordinate descent runs on each axis.
//!
//! All three solvers also implement [`OptimizationMethod`], so callers can
//! swap methods behind a generic bound.
//!
//! # Observers
//!
//! Each solver shows every record to an [`Observer`] as it is appended. The
//! observer may return [`Action::StopEarly`] to end the run with
//! [`Status::StoppedByObserver`]. Use `()` when no observation is needed, or
//! call the `minimize_unobserved` wrappers.
//!
//! [`Point`]: descent_core::Point
//! [`Objective`]: descent_core::Objective
//! [`Differentiable`]: descent_core::Differentiable
//! [`Observer`]: descent_core::Observer

mod error;
mod evaluate;
mod method;
mod trace;

pub mod coordinate_descent;
pub mod gradient_descent;
pub mod line_search;
pub mod random_search;

pub use coordinate_descent::CoordinateDescent;
pub use error::{Error, Quantity};
pub use evaluate::{Evaluation, evaluate, evaluate_gradient};
pub use gradient_descent::GradientDescent;
pub use method::OptimizationMethod;
pub use random_search::RandomSearch;
pub use trace::{Action, Record, Status, Trace};
