/// Diagnostics attached to each coordinate descent record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Detail {
    /// The starting evaluation.
    Start,

    /// A completed sweep over both axes.
    Sweep {
        /// Absolute change in the objective over the sweep.
        change: f64,

        /// Distance moved over the sweep.
        shift: f64,
    },
}
