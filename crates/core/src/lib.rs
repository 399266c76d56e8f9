//! Core traits and types for the Descent framework.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Point`]: a location in the plane
//! - [`Objective`]: a scalar function of two real variables
//! - [`Differentiable`]: an objective that can also report its gradient
//! - [`Partials`]: an objective bundled with its two partial derivatives
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;
mod point;

pub use function::{Differentiable, Objective, Partials};
pub use observer::Observer;
pub use point::Point;
