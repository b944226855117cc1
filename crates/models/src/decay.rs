use std::f64::consts::LN_2;

use drift_core::Derivative;
use uom::si::{f64::Time, time::second};

use crate::Analytical;

/// Radioactive decay with mean lifetime `τ`: `dN/dt = -N/τ`.
///
/// The state is the number of undecayed nuclei.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct RadioactiveDecay {
    tau: f64,
}

impl RadioactiveDecay {
    /// Creates a decay model from a mean lifetime.
    #[must_use]
    pub fn new(tau: Time) -> Self {
        Self::new_si(tau.get::<second>())
    }

    /// Creates a decay model from a mean lifetime in seconds.
    #[must_use]
    pub fn new_si(tau: f64) -> Self {
        Self { tau }
    }

    /// Mean lifetime in seconds.
    #[must_use]
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Time for half of the nuclei to decay, in seconds.
    #[must_use]
    pub fn half_life(&self) -> f64 {
        self.tau * LN_2
    }
}

impl Derivative<f64> for RadioactiveDecay {
    fn evaluate(&self, n: &f64, _time: f64) -> f64 {
        -n / self.tau
    }
}

impl Analytical<f64> for RadioactiveDecay {
    fn solution(&self, n0: &f64, elapsed: f64) -> f64 {
        n0 * (-elapsed / self.tau).exp()
    }
}
