//! Heuristic solvers for minimizing objectives of two real variables.
//!
//! See the [`optimization`] module for the available methods and the
//! [`Trace`](optimization::Trace) every method returns.

pub mod optimization;
