/// Which probe produced an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The step along the drawn direction.
    Forward,

    /// The step against the drawn direction.
    Opposite,
}

/// Diagnostics attached to each random search record.
///
/// `step_size` is always the step used during that iteration; a halving
/// triggered by a stall shows up in the following record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Detail {
    /// The starting evaluation.
    Start { step_size: f64 },

    /// A probe improved the objective and was accepted.
    Moved {
        direction: Direction,
        /// Decrease in the objective.
        improvement: f64,
        step_size: f64,
    },

    /// Neither probe improved the objective.
    Stalled {
        /// Consecutive stalls including this one.
        streak: usize,
        step_size: f64,
    },
}

impl Detail {
    /// Returns the step size in effect for this record.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        match *self {
            Self::Start { step_size }
            | Self::Moved { step_size, .. }
            | Self::Stalled { step_size, .. } => step_size,
        }
    }

    /// Returns true if this record accepted a move.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}
