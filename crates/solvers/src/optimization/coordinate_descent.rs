//! Coordinate descent using a fixed-step line search on each axis.
//!
//! # Algorithm
//!
//! Each iteration (a "sweep") runs two [`line_search`] scans of half-width
//! `range` and step `epsilon / 10`:
//!
//! 1. Along `x`, holding `y` at its value from the start of the sweep.
//! 2. Along `y`, holding `x` at its value from the start of the sweep.
//!
//! The y scan does not see the x update made earlier in the same sweep. This
//! ordering is part of the method's observable behavior: it changes the path
//! taken on objectives where the axes interact.
//!
//! The run converges when a sweep changes the objective by less than
//! `epsilon` and moves the point less than `epsilon`.
//!
//! # When to Use
//!
//! - No derivatives are available
//! - The objective is cheap, since every sweep costs about
//!   `40 * range / epsilon` evaluations
//! - The axes are roughly decoupled
//!
//! # Observer Events
//!
//! The observer receives one [`Record`] for the starting point (iteration 0,
//! [`Detail::Start`]) and one per sweep ([`Detail::Sweep`]).

mod config;
mod detail;


pub use config::Config;
pub use detail::Detail;

use descent_core::{Objective, Observer, Point};
use tracing::debug;

use super::{
    Action, Error, OptimizationMethod, Quantity, Record, Status, Trace, evaluate,
    evaluate::evaluate_start, line_search, trace::Recorder,
};

/// Minimizes the objective using coordinate descent.
///
/// The observer receives a [`Record`] for the start and for every sweep.
///
/// # Errors
///
/// Returns an error if the start is not finite, or if the objective returns
/// a non-finite value at any sampled point.
pub fn minimize<F, Obs>(
    objective: &F,
    start: Point,
    config: &Config,
    observer: Obs,
) -> Result<Trace<Detail>, Error>
where
    F: Objective + ?Sized,
    Obs: Observer<Record<Detail>, Action>,
{
    let mut current = evaluate_start(objective, start)?;

    let mut recorder = Recorder::new(observer);
    if let Some(Action::StopEarly) = recorder.record(0, current, Detail::Start) {
        return Ok(recorder.finish(Status::StoppedByObserver, current, 0));
    }

    let range = config.range();
    let step = config.line_step();

    for iter in 1..=config.max_iters() {
        let previous = current;
        let Point { x: x0, y: y0 } = previous.point;

        let x = line_search::minimize(|x| objective.value(x, y0), x0, range, step)
            .map_err(|err| in_plane(err, |x| Point::new(x, y0)))?;

        // Holds x at x0, not the x just found.
        let y = line_search::minimize(|y| objective.value(x0, y), y0, range, step)
            .map_err(|err| in_plane(err, |y| Point::new(x0, y)))?;

        current = evaluate(objective, Point::new(x, y))?;

        let change = (current.value - previous.value).abs();
        let shift = current.point.distance(previous.point);
        debug!(
            iter,
            x,
            y,
            value = current.value,
            change,
            shift,
            "coordinate descent sweep"
        );

        let detail = Detail::Sweep { change, shift };
        if let Some(Action::StopEarly) = recorder.record(iter, current, detail) {
            return Ok(recorder.finish(Status::StoppedByObserver, current, iter));
        }

        if change < config.epsilon() && shift < config.epsilon() {
            debug!(iter, value = current.value, "coordinate descent converged");
            return Ok(recorder.finish(Status::Converged, current, iter));
        }
    }

    debug!(
        max_iters = config.max_iters(),
        "coordinate descent reached the iteration limit"
    );
    Ok(recorder.finish(Status::MaxIters, current, config.max_iters()))
}

/// Minimizes the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the start is not finite, or if the objective returns
/// a non-finite value at any sampled point.
pub fn minimize_unobserved<F>(
    objective: &F,
    start: Point,
    config: &Config,
) -> Result<Trace<Detail>, Error>
where
    F: Objective + ?Sized,
{
    minimize(objective, start, config, ())
}

/// Coordinate descent as an [`OptimizationMethod`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoordinateDescent {
    pub config: Config,
}

impl CoordinateDescent {
    /// Creates the method with the given config.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl<F> OptimizationMethod<F> for CoordinateDescent
where
    F: Objective + ?Sized,
{
    type Detail = Detail;

    fn minimize(&mut self, objective: &F, start: Point) -> Result<Trace<Detail>, Error> {
        minimize_unobserved(objective, start, &self.config)
    }
}

/// Places a failed line search sample back in the plane.
fn in_plane(err: Error, to_point: impl Fn(f64) -> Point) -> Error {
    match err {
        Error::NonFiniteSample { x, value } => Error::NonFiniteResult {
            quantity: Quantity::Objective,
            at: to_point(x),
            value,
        },
        other => other,
    }
}
