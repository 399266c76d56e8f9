use descent_core::Point;

use super::{Error, Trace};

/// A minimization method that can be swapped behind a generic bound.
///
/// Each solver module also exposes free `minimize` functions with observer
/// support; this trait covers the common unobserved call so callers can
/// treat the methods interchangeably.
pub trait OptimizationMethod<F: ?Sized> {
    /// Solver-specific diagnostics carried by each record.
    type Detail;

    /// Minimizes `objective` starting from `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if the start is not finite or the objective produces
    /// a non-finite value.
    fn minimize(&mut self, objective: &F, start: Point) -> Result<Trace<Self::Detail>, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use descent_core::Partials;
    use rand::{SeedableRng, rngs::StdRng};

    use crate::optimization::{
        CoordinateDescent, GradientDescent, RandomSearch, Status, random_search,
    };

    fn solve<M, F>(method: &mut M, objective: &F) -> Point
    where
        M: OptimizationMethod<F>,
        F: ?Sized,
    {
        let trace = method
            .minimize(objective, Point::new(1.0, 1.0))
            .expect("should run");
        assert_eq!(trace.status, Status::Converged);
        trace.point()
    }

    #[test]
    fn methods_are_interchangeable() {
        let objective = Partials::new(
            |x: f64, y: f64| x * x + 2.0 * y * y - 10.0 * x - 16.0 * y + 60.0,
            |x: f64, _: f64| 2.0 * x - 10.0,
            |_: f64, y: f64| 4.0 * y - 16.0,
        );

        let points = [
            solve(&mut CoordinateDescent::default(), &objective),
            solve(&mut GradientDescent::default(), &objective),
            solve(
                &mut RandomSearch::new(
                    random_search::Config::default(),
                    StdRng::seed_from_u64(17),
                ),
                &objective,
            ),
        ];

        for point in points {
            assert_relative_eq!(point.x, 5.0, epsilon = 5e-2);
            assert_relative_eq!(point.y, 4.0, epsilon = 5e-2);
        }
    }
}
