/// A scalar objective of two real variables.
///
/// Objectives must be deterministic and free of side effects: solvers call
/// them many times and assume the same input always yields the same value.
/// Any `Fn(f64, f64) -> f64` closure is an objective.
pub trait Objective {
    /// Returns the objective value at `(x, y)`.
    fn value(&self, x: f64, y: f64) -> f64;
}

impl<F> Objective for F
where
    F: Fn(f64, f64) -> f64,
{
    fn value(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// An objective whose partial derivatives are available.
///
/// Gradient-based solvers require this trait; derivative-free solvers only
/// need [`Objective`].
pub trait Differentiable: Objective {
    /// Returns the gradient `[∂f/∂x, ∂f/∂y]` at `(x, y)`.
    fn gradient(&self, x: f64, y: f64) -> [f64; 2];
}

/// An objective bundled with both of its partial derivatives.
///
/// The partials are supplied together so a gradient can never be formed
/// from only one component.
#[derive(Debug, Clone, Copy)]
pub struct Partials<F, Dx, Dy> {
    pub objective: F,
    pub dfdx: Dx,
    pub dfdy: Dy,
}

impl<F, Dx, Dy> Partials<F, Dx, Dy> {
    /// Bundles an objective with its `∂f/∂x` and `∂f/∂y` functions.
    pub fn new(objective: F, dfdx: Dx, dfdy: Dy) -> Self {
        Self {
            objective,
            dfdx,
            dfdy,
        }
    }
}

impl<F, Dx, Dy> Objective for Partials<F, Dx, Dy>
where
    F: Objective,
{
    fn value(&self, x: f64, y: f64) -> f64 {
        self.objective.value(x, y)
    }
}

impl<F, Dx, Dy> Differentiable for Partials<F, Dx, Dy>
where
    F: Objective,
    Dx: Fn(f64, f64) -> f64,
    Dy: Fn(f64, f64) -> f64,
{
    fn gradient(&self, x: f64, y: f64) -> [f64; 2] {
        [(self.dfdx)(x, y), (self.dfdy)(x, y)]
    }
}
