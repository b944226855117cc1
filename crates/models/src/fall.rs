use drift_core::Derivative;
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Frequency},
    frequency::hertz,
};

use crate::Analytical;

/// Gravitational acceleration used by [`FreeFall::earth`], in m/s².
pub const EARTH_GRAVITY: f64 = 9.8;

/// A body falling without drag: `dv/dt = -g`.
///
/// The state is the vertical velocity, positive upward.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct FreeFall {
    g: f64,
}

impl FreeFall {
    #[must_use]
    pub fn new(g: Acceleration) -> Self {
        Self::new_si(g.get::<meter_per_second_squared>())
    }

    /// Creates a free-fall model from `g` in m/s².
    #[must_use]
    pub fn new_si(g: f64) -> Self {
        Self { g }
    }

    /// Free fall near the Earth's surface.
    #[must_use]
    pub fn earth() -> Self {
        Self::new_si(EARTH_GRAVITY)
    }

    #[must_use]
    pub fn g(&self) -> f64 {
        self.g
    }
}

impl Derivative<f64> for FreeFall {
    fn evaluate(&self, _v: &f64, _time: f64) -> f64 {
        -self.g
    }
}

impl Analytical<f64> for FreeFall {
    fn solution(&self, v0: &f64, elapsed: f64) -> f64 {
        v0 - self.g * elapsed
    }
}

/// An accelerating body with velocity-proportional friction: `dv/dt = a - b v`.
///
/// Velocity approaches the terminal value `a / b` at long times.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct LinearDrag {
    a: f64,
    b: f64,
}

impl LinearDrag {
    /// Creates a drag model from a driving acceleration and a friction rate.
    #[must_use]
    pub fn new(a: Acceleration, b: Frequency) -> Self {
        Self::new_si(a.get::<meter_per_second_squared>(), b.get::<hertz>())
    }

    /// Creates a drag model from `a` in m/s² and `b` in 1/s.
    #[must_use]
    pub fn new_si(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Velocity at which friction balances the driving acceleration.
    ///
    /// Infinite when `b` is zero.
    #[must_use]
    pub fn terminal_velocity(&self) -> f64 {
        self.a / self.b
    }
}

impl Derivative<f64> for LinearDrag {
    fn evaluate(&self, v: &f64, _time: f64) -> f64 {
        self.a - self.b * v
    }
}

impl Analytical<f64> for LinearDrag {
    fn solution(&self, v0: &f64, elapsed: f64) -> f64 {
        if self.b == 0.0 {
            return v0 + self.a * elapsed;
        }
        let decay = (-self.b * elapsed).exp();
        v0 * decay + self.terminal_velocity() * (1.0 - decay)
    }
}
