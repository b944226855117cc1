use crate::StepIntegrable;

/// Position and velocity of a one-dimensional second-order system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Phase {
    pub position: f64,
    pub velocity: f64,
}

/// Time derivative of a [`Phase`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseRate {
    pub d_position: f64,
    pub d_velocity: f64,
}

impl Phase {
    /// Creates a phase from a position and a velocity.
    #[must_use]
    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

impl StepIntegrable<f64> for Phase {
    type Derivative = PhaseRate;

    fn step(&self, derivative: PhaseRate, dt: f64) -> Self {
        Phase {
            position: self.position + derivative.d_position * dt,
            velocity: self.velocity + derivative.d_velocity * dt,
        }
    }
}
