//! Reusable observers for the descent solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver in `descent-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasPoint`], [`CanStopEarly`])
//! - [`stop`]: observers that end a run early ([`TargetValue`], [`RecordBudget`])
//!
//! [`Observer`]: descent_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasPoint`]: traits::HasPoint
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod stop;
pub mod traits;

pub use stop::{RecordBudget, TargetValue};
