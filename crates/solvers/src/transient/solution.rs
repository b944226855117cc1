use drift_core::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Status {
    /// Stepped until the accumulated time reached the end of the span.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a transient run.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// Samples from each step, starting with the initial condition.
    pub trajectory: Trajectory<S>,

    /// Number of integration steps completed.
    pub steps: usize,
}
