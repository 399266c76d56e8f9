//! Fixed-step scan for the minimum of a single-variable function.
//!
//! # Algorithm
//!
//! The scan samples `g` at `center`, then walks from `center - range` up to
//! `center + range` by repeatedly adding `step`, keeping the lowest value
//! seen. A sample only replaces the incumbent if it is strictly lower, so ties
//! keep the leftmost `x` and a flat function returns `center` unchanged.
//!
//! The walk accumulates `step` rather than computing each sample from an
//! index, so the last sample can fall slightly short of the upper bound.
//!
//! # When to Use
//!
//! The scan is brute force: it needs about `2 * range / step` evaluations. It
//! makes no unimodality assumption and never leaves the interval, which is
//! what coordinate descent relies on for its per-axis searches.

use tracing::trace;

use super::Error;

/// Scans `[center - range, center + range]` for the minimum of `g`.
///
/// Returns the `x` with the lowest sampled value, or `center` if no sample is
/// strictly lower than `g(center)`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `center` is non-finite or if `range`
/// or `step` is not finite and positive, and [`Error::NonFiniteSample`] if
/// `g` returns NaN or an infinite value.
pub fn minimize<G>(g: G, center: f64, range: f64, step: f64) -> Result<f64, Error>
where
    G: Fn(f64) -> f64,
{
    Error::require_finite("center", center)?;
    Error::require_positive("range", range)?;
    Error::require_positive("step", step)?;

    let mut best_x = center;
    let mut best_value = sample(&g, center)?;
    let mut samples = 1_usize;

    let upper = center + range;
    let mut x = center - range;
    while x <= upper {
        let value = sample(&g, x)?;
        samples += 1;

        if value < best_value {
            best_x = x;
            best_value = value;
        }

        // Stop once `step` is below the float spacing at `x`.
        let next = x + step;
        if next <= x {
            break;
        }
        x = next;
    }

    trace!(center, best_x, best_value, samples, "line search");
    Ok(best_x)
}

fn sample<G>(g: &G, x: f64) -> Result<f64, Error>
where
    G: Fn(f64) -> f64,
{
    let value = g(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteSample { x, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;

    #[test]
    fn finds_interior_minimum() {
        let x = minimize(|x| (x - 0.3).powi(2), 0.0, 1.0, 1e-3).expect("valid scan");

        assert_relative_eq!(x, 0.3, epsilon = 1e-3);
    }

    #[test]
    fn returns_boundary_when_minimum_lies_outside() {
        let x = minimize(|x| x, 2.0, 1.0, 0.1).expect("valid scan");

        // The first sample is the lower bound itself.
        assert_relative_eq!(x, 1.0);
    }

    #[test]
    fn flat_function_keeps_center() {
        let x = minimize(|_| 4.0, 1.5, 1.0, 0.25).expect("valid scan");

        assert_eq!(x, 1.5);
    }

    #[test]
    fn ties_keep_leftmost_sample() {
        // Minima at ±0.5, both hit exactly by a binary-friendly step.
        let x = minimize(|x| (x.abs() - 0.5).powi(2), 0.0, 1.0, 0.25).expect("valid scan");

        assert_eq!(x, -0.5);
    }

    #[test]
    fn never_leaves_interval_and_never_worse_than_center() {
        let functions: [fn(f64) -> f64; 4] = [
            |x| x,
            |x| -x,
            |x| (x - 10.0).powi(2),
            |x| (3.0 * x).sin() + 0.1 * x,
        ];

        for g in functions {
            for center in [-2.0, 0.0, 0.7, 5.0] {
                for (range, step) in [(1.0, 0.1), (0.5, 0.03), (2.0, 0.7)] {
                    let lowest = Cell::new(f64::INFINITY);
                    let highest = Cell::new(f64::NEG_INFINITY);
                    let tracked = |x: f64| {
                        lowest.set(lowest.get().min(x));
                        highest.set(highest.get().max(x));
                        g(x)
                    };

                    let x = minimize(tracked, center, range, step).expect("valid scan");

                    assert!(x >= center - range && x <= center + range);
                    assert!(lowest.get() >= center - range);
                    assert!(highest.get() <= center + range);
                    assert!(g(x) <= g(center));
                }
            }
        }
    }

    #[test]
    fn rejects_invalid_arguments() {
        let g = |x: f64| x * x;

        assert!(matches!(
            minimize(g, 0.0, 0.0, 0.1),
            Err(Error::InvalidArgument { name: "range", .. })
        ));
        assert!(matches!(
            minimize(g, 0.0, 1.0, -0.1),
            Err(Error::InvalidArgument { name: "step", .. })
        ));
        assert!(matches!(
            minimize(g, f64::NAN, 1.0, 0.1),
            Err(Error::InvalidArgument { name: "center", .. })
        ));
    }

    #[test]
    fn invalid_arguments_skip_evaluation() {
        let calls = Cell::new(0);
        let g = |x: f64| {
            calls.set(calls.get() + 1);
            x
        };

        assert!(minimize(g, 0.0, 1.0, 0.0).is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn non_finite_sample_is_an_error() {
        let result = minimize(f64::ln, 0.5, 1.0, 0.1);

        assert!(matches!(
            result,
            Err(Error::NonFiniteSample { x, .. }) if x < 0.0
        ));
    }

    #[test]
    fn step_below_float_spacing_terminates() {
        // Adjacent floats near 1e16 are 2 apart, so adding 0.5 never advances.
        let x = minimize(|x| x, 1e16, 4.0, 0.5).expect("valid scan");

        assert!(x >= 1e16 - 4.0 && x <= 1e16 + 4.0);
    }
}
