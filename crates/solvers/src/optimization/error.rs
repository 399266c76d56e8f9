use std::fmt;

use descent_core::Point;
use thiserror::Error;

/// Errors that can occur while minimizing an objective.
///
/// Reaching an iteration cap or a step-size floor is not an error; those
/// outcomes are reported through [`Status`](super::Status).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid argument: {name} = {value}")]
    InvalidArgument { name: &'static str, value: f64 },

    #[error("non-finite {quantity} ({value}) at {at}")]
    NonFiniteResult {
        quantity: Quantity,
        at: Point,
        value: f64,
    },

    #[error("non-finite line search sample ({value}) at {x}")]
    NonFiniteSample { x: f64, value: f64 },
}

impl Error {
    /// Passes `value` through if it is finite and strictly positive.
    pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidArgument { name, value })
        }
    }

    /// Passes `value` through if it is finite.
    pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::InvalidArgument { name, value })
        }
    }
}

/// The quantity that came back non-finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// The objective value.
    Objective,

    /// The partial derivative with respect to `x`.
    PartialX,

    /// The partial derivative with respect to `y`.
    PartialY,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Objective => "objective",
            Self::PartialX => "df/dx",
            Self::PartialY => "df/dy",
        })
    }
}
