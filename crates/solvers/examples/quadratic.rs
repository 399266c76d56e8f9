//! Minimizes f(x, y) = x² + 2y² − 10x − 16y + 60 with every solver.
//!
//! Each solver starts from (1, 1) and prints its trace as it runs. The
//! minimum is f(5, 4) = 3.
//!
//! # Usage
//!
//! ```text
//! cargo run --example quadratic
//! cargo run --example quadratic -- 42
//! ```
//!
//! The optional argument seeds random search; without it each run differs.

use std::error::Error;

use descent_core::{Partials, Point};
use descent_solvers::optimization::{
    Action, Record, Status, Trace, coordinate_descent, gradient_descent, random_search,
};
use rand::{SeedableRng, rngs::StdRng};

fn main() -> Result<(), Box<dyn Error>> {
    let seed = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<u64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid seed, expected an unsigned integer, e.g. 42");
            std::process::exit(1);
        });

    let objective = Partials::new(
        |x: f64, y: f64| x * x + 2.0 * y * y - 10.0 * x - 16.0 * y + 60.0,
        |x: f64, _: f64| 2.0 * x - 10.0,
        |_: f64, y: f64| 4.0 * y - 16.0,
    );
    let start = Point::new(1.0, 1.0);

    println!("Coordinate Descent Method");
    let trace = coordinate_descent::minimize(
        &objective,
        start,
        &coordinate_descent::Config::default(),
        |record: &Record<coordinate_descent::Detail>| -> Option<Action> {
            print_record(record, &describe_sweep(record.detail));
            None
        },
    )?;
    report("Coordinate Descent", &trace);

    println!("Random Search Method");
    let config = random_search::Config::default();
    let print = |record: &Record<random_search::Detail>| -> Option<Action> {
        print_record(record, &describe_probe(record.detail));
        None
    };
    let trace = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            random_search::minimize(&objective, start, &config, &mut rng, print)?
        }
        None => random_search::minimize(&objective, start, &config, &mut rand::rng(), print)?,
    };
    report("Random Search", &trace);

    println!("Gradient Descent Method");
    let trace = gradient_descent::minimize(
        &objective,
        start,
        &gradient_descent::Config::default(),
        |record: &Record<gradient_descent::Detail>| -> Option<Action> {
            print_record(record, &describe_step(record.detail));
            None
        },
    )?;
    report("Gradient Descent", &trace);

    Ok(())
}

fn print_record<D>(record: &Record<D>, detail: &str) {
    println!(
        "Iteration {}: x={:.4}, y={:.4}, f(x,y)={:.4}{detail}",
        record.iter,
        record.point().x,
        record.point().y,
        record.value(),
    );
}

fn describe_sweep(detail: coordinate_descent::Detail) -> String {
    match detail {
        coordinate_descent::Detail::Start => String::new(),
        coordinate_descent::Detail::Sweep { change, .. } => format!(", change f={change:.6}"),
    }
}

fn describe_probe(detail: random_search::Detail) -> String {
    match detail {
        random_search::Detail::Start { step_size } => format!(", step={step_size:.4}"),
        random_search::Detail::Moved {
            direction,
            improvement,
            step_size,
        } => {
            let side = match direction {
                random_search::Direction::Forward => "",
                random_search::Direction::Opposite => ", opposite",
            };
            format!(" (improvement {improvement:.4}{side}), step={step_size:.4}")
        }
        random_search::Detail::Stalled { step_size, .. } => {
            format!(" (no improvement), step={step_size:.4}")
        }
    }
}

fn describe_step(detail: gradient_descent::Detail) -> String {
    match detail {
        gradient_descent::Detail::Start { .. } => String::new(),
        gradient_descent::Detail::Accepted {
            gradient_norm,
            learning_rate,
            change,
        } => format!(", gradMag={gradient_norm:.4}, lr={learning_rate:.4}, change f={change:.6}"),
        gradient_descent::Detail::Reverted { learning_rate, .. } => {
            format!(", increased, reduced lr to {learning_rate:.5}, reverted")
        }
    }
}

fn report<D>(name: &str, trace: &Trace<D>) {
    let reason = match trace.status {
        Status::Converged => "Convergence reached",
        Status::MaxIters => "Max iterations reached",
        Status::StepTooSmall => "Step size became too small",
        Status::LearningRateTooSmall => "Learning rate became too small",
        Status::StoppedByObserver => "Stopped by observer",
    };
    println!("{name}: {reason}");
    println!("Result: {:.4}, f={:.4}", trace.point(), trace.value());
    println!("\n----------------------------------------------------\n");
}
