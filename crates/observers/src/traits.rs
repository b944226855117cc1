//! Capability traits for observers that work across solvers.
//!
//! # Event traits
//!
//! - [`HasTime`]: events that carry the simulation time of a sample
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use drift_core::Observer;
//! use drift_observers::traits::{CanStopEarly, HasTime};
//!
//! /// Stops after a fixed number of events.
//! struct Budget {
//!     remaining: usize,
//! }
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for Budget {
//!     fn observe(&mut self, _event: &E) -> Option<A> {
//!         self.remaining = self.remaining.saturating_sub(1);
//!         (self.remaining == 0).then(A::stop_early)
//!     }
//! }
//! ```

use drift_solvers::transient;

/// An event that carries the simulation time of a sample.
pub trait HasTime {
    fn time(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<S> HasTime for transient::Event<S> {
    fn time(&self) -> f64 {
        self.sample.time
    }
}

impl CanStopEarly for transient::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use drift_core::Sample;

    #[test]
    fn transient_event_reports_sample_time() {
        let event = transient::Event {
            step: 3,
            sample: Sample::new(0.75, 1.0),
        };
        assert_eq!(event.time(), 0.75);
    }

    #[test]
    fn transient_action_can_stop() {
        assert_eq!(transient::Action::stop_early(), transient::Action::StopEarly);
    }
}
