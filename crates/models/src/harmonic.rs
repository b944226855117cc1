use drift_core::{Acceleration, Phase, Trajectory};
use uom::si::{angular_velocity::radian_per_second, f64::AngularVelocity};

use crate::Analytical;

/// An undamped unit-mass oscillator: `d²y/dt² = -ω² y`.
///
/// The default has `ω = 1`, giving `dv/dt = -y`, `dy/dt = v`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct HarmonicOscillator {
    omega: f64,
}

impl HarmonicOscillator {
    /// Creates an oscillator with natural angular frequency `omega`.
    #[must_use]
    pub fn new(omega: AngularVelocity) -> Self {
        Self::new_si(omega.get::<radian_per_second>())
    }

    /// Creates an oscillator from `omega` in rad/s.
    #[must_use]
    pub fn new_si(omega: f64) -> Self {
        Self { omega }
    }

    /// Creates the oscillator of a mass on a spring, `ω = sqrt(k / m)`.
    #[must_use]
    pub fn from_spring_si(stiffness: f64, mass: f64) -> Self {
        Self::new_si((stiffness / mass).sqrt())
    }

    #[must_use]
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Oscillation period in seconds.
    #[must_use]
    pub fn period(&self) -> f64 {
        std::f64::consts::TAU / self.omega
    }

    /// Total mechanical energy per unit mass, `v²/2 + ω² y²/2`.
    ///
    /// This is a diagnostic of the numerical method, not part of the
    /// integration: the exact motion conserves it.
    #[must_use]
    pub fn energy(&self, phase: &Phase) -> f64 {
        let stiffness = self.omega * self.omega;
        0.5 * phase.velocity * phase.velocity + 0.5 * stiffness * phase.position * phase.position
    }

    /// Energy of every sample, in step order.
    #[must_use]
    pub fn energy_series(&self, trajectory: &Trajectory<Phase>) -> Vec<f64> {
        trajectory.map_states(|phase| self.energy(phase))
    }
}

impl Default for HarmonicOscillator {
    fn default() -> Self {
        Self::new_si(1.0)
    }
}

impl Acceleration for HarmonicOscillator {
    fn acceleration(&self, position: f64, _time: f64) -> f64 {
        -self.omega * self.omega * position
    }
}

impl Analytical<Phase> for HarmonicOscillator {
    fn solution(&self, initial: &Phase, elapsed: f64) -> Phase {
        let w = self.omega;
        let (sin, cos) = (w * elapsed).sin_cos();
        Phase {
            position: initial.position * cos + initial.velocity / w * sin,
            velocity: -initial.position * w * sin + initial.velocity * cos,
        }
    }
}
