//! Random search with adaptive step shrinkage.
//!
//! # Algorithm
//!
//! Each iteration draws an angle `θ` uniformly from `[0, 2π)` and probes one
//! step of the current size along `(cos θ, sin θ)`. If that is not strictly
//! better it probes the opposite direction. A strict improvement is accepted
//! and resets the stall streak; otherwise the streak grows.
//!
//! When an iteration stalls and the streak exceeds `patience`, the step size
//! is halved and the streak resets, so the step size never grows.
//!
//! The run stops with:
//! - [`Status::Converged`] when the objective changed by less than `epsilon`
//!   and the step size is below `epsilon / 10`
//! - [`Status::StepTooSmall`] when the step size is below `epsilon / 100`
//! - [`Status::MaxIters`] at the iteration limit
//!
//! # Randomness
//!
//! The caller supplies the random number generator. Seed a
//! [`StdRng`](rand::rngs::StdRng) for reproducible runs, or pass
//! [`rand::rng()`] in production.
//!
//! # Observer Events
//!
//! The observer receives one [`Record`] for the start and one per iteration,
//! carrying the step size used in that iteration.

mod config;
mod detail;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use detail::{Detail, Direction};

use std::f64::consts::TAU;

use descent_core::{Objective, Observer, Point};
use rand::Rng;
use tracing::debug;

use super::{
    Action, Error, Evaluation, OptimizationMethod, Record, Status, Trace, evaluate,
    evaluate::evaluate_start, trace::Recorder,
};

/// Minimizes the objective using random search.
///
/// The observer receives a [`Record`] for the start and for every iteration.
///
/// # Errors
///
/// Returns an error if the start is not finite, or if the objective returns
/// a non-finite value at any probed point.
pub fn minimize<F, R, Obs>(
    objective: &F,
    start: Point,
    config: &Config,
    rng: &mut R,
    observer: Obs,
) -> Result<Trace<Detail>, Error>
where
    F: Objective + ?Sized,
    R: Rng,
    Obs: Observer<Record<Detail>, Action>,
{
    let mut current = evaluate_start(objective, start)?;
    let mut step_size = config.initial_step();
    let mut streak = 0_usize;

    let mut recorder = Recorder::new(observer);
    if let Some(Action::StopEarly) = recorder.record(0, current, Detail::Start { step_size }) {
        return Ok(recorder.finish(Status::StoppedByObserver, current, 0));
    }

    let epsilon = config.epsilon();

    for iter in 1..=config.max_iters() {
        let previous = current;

        let angle = rng.random::<f64>() * TAU;
        let unit = [angle.cos(), angle.sin()];

        let detail = match probe(objective, &current, unit, step_size)? {
            Some((next, direction)) => {
                current = next;
                streak = 0;
                Detail::Moved {
                    direction,
                    improvement: previous.value - current.value,
                    step_size,
                }
            }
            None => {
                streak += 1;
                Detail::Stalled { streak, step_size }
            }
        };
        debug!(
            iter,
            x = current.point.x,
            y = current.point.y,
            value = current.value,
            ?detail,
            "random search iteration"
        );

        if let Some(Action::StopEarly) = recorder.record(iter, current, detail) {
            return Ok(recorder.finish(Status::StoppedByObserver, current, iter));
        }

        if matches!(detail, Detail::Stalled { .. }) && streak > config.patience() {
            step_size /= 2.0;
            streak = 0;
            debug!(iter, step_size, "random search step shrunk");
        }

        let change = (current.value - previous.value).abs();
        if change < epsilon && step_size < epsilon / 10.0 {
            debug!(iter, value = current.value, "random search converged");
            return Ok(recorder.finish(Status::Converged, current, iter));
        }

        if step_size < epsilon / 100.0 {
            debug!(iter, step_size, "random search step became too small");
            return Ok(recorder.finish(Status::StepTooSmall, current, iter));
        }
    }

    debug!(
        max_iters = config.max_iters(),
        "random search reached the iteration limit"
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
/// a non-finite value at any probed point.
pub fn minimize_unobserved<F, R>(
    objective: &F,
    start: Point,
    config: &Config,
    rng: &mut R,
) -> Result<Trace<Detail>, Error>
where
    F: Objective + ?Sized,
    R: Rng,
{
    minimize(objective, start, config, rng, ())
}

/// Random search as an [`OptimizationMethod`], owning its generator.
#[derive(Debug, Clone)]
pub struct RandomSearch<R> {
    pub config: Config,
    pub rng: R,
}

impl<R: Rng> RandomSearch<R> {
    /// Creates the method with the given config and generator.
    #[must_use]
    pub fn new(config: Config, rng: R) -> Self {
        Self { config, rng }
    }
}

impl<F, R> OptimizationMethod<F> for RandomSearch<R>
where
    F: Objective + ?Sized,
    R: Rng,
{
    type Detail = Detail;

    fn minimize(&mut self, objective: &F, start: Point) -> Result<Trace<Detail>, Error> {
        minimize_unobserved(objective, start, &self.config, &mut self.rng)
    }
}

/// Probes along `unit`, then against it, returning the first strict improvement.
fn probe<F>(
    objective: &F,
    current: &Evaluation,
    unit: [f64; 2],
    step_size: f64,
) -> Result<Option<(Evaluation, Direction)>, Error>
where
    F: Objective + ?Sized,
{
    let forward = evaluate(objective, current.point.step(unit, step_size))?;
    if forward.improves_on(current) {
        return Ok(Some((forward, Direction::Forward)));
    }

    let opposite = evaluate(objective, current.point.step(unit, -step_size))?;
    if opposite.improves_on(current) {
        return Ok(Some((opposite, Direction::Opposite)));
    }

    Ok(None)
}
