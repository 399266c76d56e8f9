//! Gradient descent with a self-correcting learning rate.
//!
//! # Algorithm
//!
//! Each iteration computes the gradient at the current point and proposes
//! `current − rate · gradient`. A proposal that is strictly worse than the
//! current point is rejected: the rate halves and the step is retried from
//! the same point. The first proposal that is no worse is accepted.
//!
//! The learning rate only ever decreases, so accepted values never increase.
//!
//! The run stops with:
//! - [`Status::Converged`] when the gradient norm or the change in the
//!   objective over an accepted step is below `epsilon`
//! - [`Status::LearningRateTooSmall`] when a rejection halves the rate below
//!   `epsilon / 1000`
//! - [`Status::MaxIters`] after `max_iters` accepted steps
//!
//! Rejected steps do not count toward `max_iters`. Use an observer (see
//! `descent-observers`) to bound the total number of records if needed.
//!
//! # Observer Events
//!
//! The observer receives one [`Record`] for the start, one
//! [`Detail::Reverted`] for each rejected step (sharing the index of the
//! iteration being retried), and one [`Detail::Accepted`] per iteration.

mod config;
mod detail;


pub use config::Config;
pub use detail::Detail;

use descent_core::{Differentiable, Observer, Point};
use tracing::debug;

use super::{
    Action, Error, OptimizationMethod, Record, Status, Trace, evaluate, evaluate::evaluate_start,
    evaluate_gradient, trace::Recorder,
};

/// Minimizes the objective using gradient descent.
///
/// # Errors
///
/// Returns an error if the start is not finite, or if the objective or a
/// partial derivative returns a non-finite value.
pub fn minimize<F, Obs>(
    objective: &F,
    start: Point,
    config: &Config,
    observer: Obs,
) -> Result<Trace<Detail>, Error>
where
    F: Differentiable + ?Sized,
    Obs: Observer<Record<Detail>, Action>,
{
    let mut current = evaluate_start(objective, start)?;
    let mut learning_rate = config.learning_rate();

    let mut recorder = Recorder::new(observer);
    if let Some(Action::StopEarly) = recorder.record(0, current, Detail::Start { learning_rate })
    {
        return Ok(recorder.finish(Status::StoppedByObserver, current, 0));
    }

    let epsilon = config.epsilon();

    for iter in 1..=config.max_iters() {
        let gradient = evaluate_gradient(objective, current.point)?;
        let gradient_norm = (gradient[0] * gradient[0] + gradient[1] * gradient[1]).sqrt();

        let candidate = loop {
            let candidate = evaluate(objective, current.point.step(gradient, -learning_rate))?;
            if !current.improves_on(&candidate) {
                break candidate;
            }

            learning_rate /= 2.0;
            debug!(
                iter,
                learning_rate,
                rejected = candidate.value,
                "gradient descent step rejected"
            );

            let detail = Detail::Reverted {
                learning_rate,
                rejected: candidate,
            };
            if let Some(Action::StopEarly) = recorder.record(iter, current, detail) {
                return Ok(recorder.finish(Status::StoppedByObserver, current, iter - 1));
            }

            if learning_rate < epsilon / 1000.0 {
                debug!(iter, learning_rate, "gradient descent learning rate too small");
                return Ok(recorder.finish(Status::LearningRateTooSmall, current, iter - 1));
            }
        };

        let change = (candidate.value - current.value).abs();
        current = candidate;
        debug!(
            iter,
            x = current.point.x,
            y = current.point.y,
            value = current.value,
            gradient_norm,
            learning_rate,
            change,
            "gradient descent step"
        );

        let detail = Detail::Accepted {
            gradient_norm,
            learning_rate,
            change,
        };
        if let Some(Action::StopEarly) = recorder.record(iter, current, detail) {
            return Ok(recorder.finish(Status::StoppedByObserver, current, iter));
        }

        if gradient_norm < epsilon || change < epsilon {
            debug!(iter, value = current.value, "gradient descent converged");
            return Ok(recorder.finish(Status::Converged, current, iter));
        }
    }

    debug!(
        max_iters = config.max_iters(),
        "gradient descent reached the iteration limit"
    );
    Ok(recorder.finish(Status::MaxIters, current, config.max_iters()))
}

/// Minimizes the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the start is not finite, or if the objective or a
/// partial derivative returns a non-finite value.
pub fn minimize_unobserved<F>(
    objective: &F,
    start: Point,
    config: &Config,
) -> Result<Trace<Detail>, Error>
where
    F: Differentiable + ?Sized,
{
    minimize(objective, start, config, ())
}

/// Gradient descent as an [`OptimizationMethod`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GradientDescent {
    pub config: Config,
}

impl GradientDescent {
    /// Creates the method with the given config.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl<F> OptimizationMethod<F> for GradientDescent
where
    F: Differentiable + ?Sized,
{
    type Detail = Detail;

    fn minimize(&mut self, objective: &F, start: Point) -> Result<Trace<Detail>, Error> {
        minimize_unobserved(objective, start, &self.config)
    }
}
