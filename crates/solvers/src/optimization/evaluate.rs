use descent_core::{Differentiable, Objective, Point};

use super::{Error, Quantity};

/// An objective value paired with the point it was computed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub point: Point,
    pub value: f64,
}

impl Evaluation {
    /// Returns true if this evaluation is strictly better than `other`.
    #[must_use]
    pub fn improves_on(&self, other: &Self) -> bool {
        self.value < other.value
    }
}

/// Evaluates the objective at `point`.
///
/// # Errors
///
/// Returns [`Error::NonFiniteResult`] if the objective is NaN or infinite.
pub fn evaluate<F>(objective: &F, point: Point) -> Result<Evaluation, Error>
where
    F: Objective + ?Sized,
{
    let value = objective.value(point.x, point.y);
    if !value.is_finite() {
        return Err(Error::NonFiniteResult {
            quantity: Quantity::Objective,
            at: point,
            value,
        });
    }

    Ok(Evaluation { point, value })
}

/// Evaluates both partial derivatives at `point`.
///
/// # Errors
///
/// Returns [`Error::NonFiniteResult`] naming the first non-finite component.
pub fn evaluate_gradient<F>(objective: &F, point: Point) -> Result<[f64; 2], Error>
where
    F: Differentiable + ?Sized,
{
    let [dfdx, dfdy] = objective.gradient(point.x, point.y);

    for (quantity, value) in [(Quantity::PartialX, dfdx), (Quantity::PartialY, dfdy)] {
        if !value.is_finite() {
            return Err(Error::NonFiniteResult {
                quantity,
                at: point,
                value,
            });
        }
    }

    Ok([dfdx, dfdy])
}

/// Validates a starting point and evaluates the objective there.
pub(crate) fn evaluate_start<F>(objective: &F, start: Point) -> Result<Evaluation, Error>
where
    F: Objective + ?Sized,
{
    Error::require_finite("start.x", start.x)?;
    Error::require_finite("start.y", start.y)?;
    evaluate(objective, start)
}
