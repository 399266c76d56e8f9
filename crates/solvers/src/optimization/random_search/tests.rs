use approx::assert_relative_eq;
use rand::{SeedableRng, rngs::StdRng};

use descent_core::Point;

use crate::optimization::{Action, Error, Record, Status};

use super::{Config, Detail, minimize, minimize_unobserved};

/// f(x, y) = x² + 2y² − 10x − 16y + 60, minimum f(5, 4) = 3.
fn quadratic(x: f64, y: f64) -> f64 {
    x * x + 2.0 * y * y - 10.0 * x - 16.0 * y + 60.0
}

fn flat(_x: f64, _y: f64) -> f64 {
    1.0
}

#[test]
fn converges_near_quadratic_minimum() {
    for seed in [0, 1, 7, 42, 2024] {
        let mut rng = StdRng::seed_from_u64(seed);
        let trace = minimize_unobserved(
            &quadratic,
            Point::new(1.0, 1.0),
            &Config::default(),
            &mut rng,
        )
        .expect("should run");

        assert_eq!(trace.status, Status::Converged, "seed {seed}");
        assert_relative_eq!(trace.point().x, 5.0, epsilon = 1e-2);
        assert_relative_eq!(trace.point().y, 4.0, epsilon = 1e-2);
        assert_relative_eq!(trace.value(), 3.0, epsilon = 1e-3);
    }
}

#[test]
fn same_seed_gives_identical_traces() {
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        minimize_unobserved(
            &quadratic,
            Point::new(-2.0, 6.0),
            &Config::default(),
            &mut rng,
        )
        .expect("should run")
    };

    assert_eq!(run(99), run(99));
}

#[test]
fn step_size_never_increases() {
    let mut rng = StdRng::seed_from_u64(3);
    let trace = minimize_unobserved(
        &quadratic,
        Point::new(1.0, 1.0),
        &Config::default(),
        &mut rng,
    )
    .expect("should run");

    for pair in trace.records.windows(2) {
        assert!(pair[1].detail.step_size() <= pair[0].detail.step_size());
        assert!(pair[1].value() <= pair[0].value());
    }
}

#[test]
fn step_halves_only_after_streak_exceeds_patience() {
    let mut rng = StdRng::seed_from_u64(11);
    let trace = minimize_unobserved(
        &quadratic,
        Point::new(1.0, 1.0),
        &Config::default(),
        &mut rng,
    )
    .expect("should run");

    for pair in trace.records.windows(2) {
        let (before, after) = (pair[0].detail, pair[1].detail);
        if after.step_size() < before.step_size() {
            assert_eq!(
                before,
                Detail::Stalled {
                    streak: 6,
                    step_size: before.step_size()
                }
            );
            assert_eq!(after.step_size(), before.step_size() / 2.0);
        } else {
            assert_eq!(after.step_size(), before.step_size());
        }
    }
}

#[test]
fn accepted_move_resets_stall_streak() {
    let mut rng = StdRng::seed_from_u64(11);
    let trace = minimize_unobserved(
        &quadratic,
        Point::new(1.0, 1.0),
        &Config::default(),
        &mut rng,
    )
    .expect("should run");

    let mut stalls_after_moves = 0;
    for pair in trace.records.windows(2) {
        if let (Detail::Moved { .. }, Detail::Stalled { streak, .. }) =
            (pair[0].detail, pair[1].detail)
        {
            assert_eq!(streak, 1, "record {}", pair[1].iter);
            stalls_after_moves += 1;
        }
    }
    assert!(stalls_after_moves > 0);
}

#[test]
fn flat_objective_shrinks_until_converged() {
    // Every iteration stalls, so the step halves every sixth iteration and
    // first drops below epsilon / 10 after fourteen halvings.
    let mut rng = StdRng::seed_from_u64(5);
    let trace = minimize_unobserved(&flat, Point::new(0.0, 0.0), &Config::default(), &mut rng)
        .expect("should run");

    assert_eq!(trace.status, Status::Converged);
    assert_eq!(trace.iters, 84);
    assert_eq!(trace.point(), Point::new(0.0, 0.0));
    assert!(trace.records[1..].iter().all(|r| !r.detail.is_move()));
    assert_eq!(
        trace.records[6].detail,
        Detail::Stalled {
            streak: 6,
            step_size: 1.0
        }
    );
    assert_eq!(
        trace.records[7].detail,
        Detail::Stalled {
            streak: 1,
            step_size: 0.5
        }
    );
}

#[test]
fn lower_patience_shrinks_sooner() {
    let config = Config::default().with_patience(2);
    let mut rng = StdRng::seed_from_u64(5);

    let trace =
        minimize_unobserved(&flat, Point::new(0.0, 0.0), &config, &mut rng).expect("should run");

    assert_eq!(trace.status, Status::Converged);
    assert_eq!(trace.iters, 42);
}

#[test]
fn tiny_initial_step_on_steep_objective_is_too_small() {
    // The step is below epsilon / 100 from the outset, and each move changes
    // the value far more than epsilon, so the run cannot converge.
    let steep = |x: f64, y: f64| 1e9 * (x + y);
    let config = Config::default()
        .with_initial_step(1e-6)
        .expect("valid config");
    let mut rng = StdRng::seed_from_u64(8);

    let trace =
        minimize_unobserved(&steep, Point::new(0.0, 0.0), &config, &mut rng).expect("should run");

    assert_eq!(trace.status, Status::StepTooSmall);
    assert_eq!(trace.iters, 1);
    assert_eq!(trace.records.len(), 2);
}

#[test]
fn huge_epsilon_converges_immediately() {
    let config = Config::new(1000, 1e6).expect("valid config");
    let mut rng = StdRng::seed_from_u64(1);

    let trace = minimize_unobserved(&quadratic, Point::new(1.0, 1.0), &config, &mut rng)
        .expect("should run");

    assert_eq!(trace.status, Status::Converged);
    assert_eq!(trace.iters, 1);
    assert!(trace.value() <= 37.0);
}

#[test]
fn stops_at_iteration_limit() {
    let config = Config::new(10, 1e-3).expect("valid config");
    let mut rng = StdRng::seed_from_u64(2);

    let trace = minimize_unobserved(&quadratic, Point::new(1.0, 1.0), &config, &mut rng)
        .expect("should run");

    assert_eq!(trace.status, Status::MaxIters);
    assert_eq!(trace.iters, 10);
    assert_eq!(trace.records.len(), 11);
}

#[test]
fn start_record_carries_initial_step() {
    let config = Config::new(3, 1e-3)
        .and_then(|c| c.with_initial_step(0.25))
        .expect("valid config");
    let mut rng = StdRng::seed_from_u64(4);

    let trace = minimize_unobserved(&quadratic, Point::new(1.0, 1.0), &config, &mut rng)
        .expect("should run");

    assert_eq!(trace.records[0].detail, Detail::Start { step_size: 0.25 });
    assert_relative_eq!(trace.records[0].value(), 37.0);
}

#[test]
fn observer_can_stop_early() {
    let mut rng = StdRng::seed_from_u64(6);
    let observer = |record: &Record<Detail>| (record.iter == 3).then_some(Action::StopEarly);

    let trace = minimize(
        &quadratic,
        Point::new(1.0, 1.0),
        &Config::default(),
        &mut rng,
        observer,
    )
    .expect("should stop cleanly");

    assert_eq!(trace.status, Status::StoppedByObserver);
    assert_eq!(trace.iters, 3);
    assert_eq!(trace.solution, trace.records[3].eval);
}

#[test]
fn non_finite_probe_is_an_error() {
    // Any unit step from the origin leaves the disc where the log is defined.
    let bowl = |x: f64, y: f64| (0.5 - x * x - y * y).ln();
    let mut rng = StdRng::seed_from_u64(0);

    let result = minimize_unobserved(&bowl, Point::new(0.0, 0.0), &Config::default(), &mut rng);

    assert!(matches!(result, Err(Error::NonFiniteResult { .. })));
}
