use drift_core::Observer;

use crate::traits::{CanStopEarly, HasTime};

/// Stops a run at the first sample at or past a given time.
///
/// Useful for cutting a long run short without rebuilding its span, for
/// example to inspect the start of an unstable configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAt {
    time: f64,
}

impl StopAt {
    #[must_use]
    pub fn new(time: f64) -> Self {
        Self { time }
    }
}

impl<E: HasTime, A: CanStopEarly> Observer<E, A> for StopAt {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.time() >= self.time).then(A::stop_early)
    }
}
