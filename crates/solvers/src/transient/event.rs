use drift_core::Sample;

/// Event emitted by the transient solvers for each produced sample.
///
/// Step 0 is the initial condition, before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone)]
pub struct Event<S> {
    /// The step number (0 for the initial condition).
    pub step: usize,

    /// The sample produced at this step.
    pub sample: Sample<S>,
}
