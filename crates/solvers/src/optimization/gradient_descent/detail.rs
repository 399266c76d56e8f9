use crate::optimization::Evaluation;

/// Diagnostics attached to each gradient descent record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Detail {
    /// The starting evaluation.
    Start { learning_rate: f64 },

    /// A step that was no worse than the current point.
    Accepted {
        /// Euclidean norm of the gradient the step was taken along.
        gradient_norm: f64,
        learning_rate: f64,
        /// Absolute change in the objective.
        change: f64,
    },

    /// A step that made things worse and was undone.
    ///
    /// The record's point is unchanged; `learning_rate` is the halved rate
    /// the next attempt will use.
    Reverted {
        learning_rate: f64,
        rejected: Evaluation,
    },
}

impl Detail {
    /// Returns the learning rate in effect after this record.
    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        match *self {
            Self::Start { learning_rate }
            | Self::Accepted { learning_rate, .. }
            | Self::Reverted { learning_rate, .. } => learning_rate,
        }
    }

    /// Returns true if this record undid a step.
    #[must_use]
    pub fn is_reverted(&self) -> bool {
        matches!(self, Self::Reverted { .. })
    }
}
