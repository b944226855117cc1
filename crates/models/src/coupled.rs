use drift_core::{Derivative, StepIntegrable};
use uom::si::{f64::Time, time::second};

use crate::Analytical;

/// Counts of two species converting into each other.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Populations {
    pub a: f64,
    pub b: f64,
}

/// Time derivative of [`Populations`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopulationRates {
    pub d_a: f64,
    pub d_b: f64,
}

impl Populations {
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Combined count of both species.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.a + self.b
    }
}

impl StepIntegrable<f64> for Populations {
    type Derivative = PopulationRates;

    fn step(&self, derivative: PopulationRates, dt: f64) -> Self {
        Populations {
            a: self.a + derivative.d_a * dt,
            b: self.b + derivative.d_b * dt,
        }
    }
}

/// Two species decaying into each other with lifetimes `τ_A` and `τ_B`:
///
/// ```text
/// dA/dt = B/τ_B - A/τ_A
/// dB/dt = A/τ_A - B/τ_B
/// ```
///
/// The total count is conserved, and the populations settle where
/// `A/τ_A = B/τ_B`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CoupledDecay {
    tau_a: f64,
    tau_b: f64,
}

impl CoupledDecay {
    #[must_use]
    pub fn new(tau_a: Time, tau_b: Time) -> Self {
        Self::new_si(tau_a.get::<second>(), tau_b.get::<second>())
    }

    /// Creates the model from both lifetimes in seconds.
    #[must_use]
    pub fn new_si(tau_a: f64, tau_b: f64) -> Self {
        Self { tau_a, tau_b }
    }

    /// The populations the system settles to from `initial`.
    #[must_use]
    pub fn equilibrium(&self, initial: &Populations) -> Populations {
        let total = initial.total();
        let sum = self.tau_a + self.tau_b;
        Populations {
            a: total * self.tau_a / sum,
            b: total * self.tau_b / sum,
        }
    }
}

impl Derivative<Populations> for CoupledDecay {
    fn evaluate(&self, state: &Populations, _time: f64) -> PopulationRates {
        let a_to_b = state.a / self.tau_a;
        let b_to_a = state.b / self.tau_b;
        PopulationRates {
            d_a: b_to_a - a_to_b,
            d_b: a_to_b - b_to_a,
        }
    }
}

impl Analytical<Populations> for CoupledDecay {
    fn solution(&self, initial: &Populations, elapsed: f64) -> Populations {
        let (tau_a, tau_b) = (self.tau_a, self.tau_b);
        let decay = (-elapsed * (1.0 / tau_a + 1.0 / tau_b)).exp();
        let sum = tau_a + tau_b;

        Populations {
            a: (initial.a * (tau_a + tau_b * decay) + initial.b * tau_a * (1.0 - decay)) / sum,
            b: (initial.b * (tau_b + tau_a * decay) + initial.a * tau_b * (1.0 - decay)) / sum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use drift_solvers::transient::{euler, midpoint};

    #[test]
    fn total_is_conserved_by_euler() {
        let model = CoupledDecay::new_si(2.0, 1.0);
        let trajectory =
            euler::integrate(&model, Populations::new(100.0, 0.0), 0.0, 10.0, 0.05).unwrap();

        for sample in &trajectory {
            assert_relative_eq!(sample.state.total(), 100.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn settles_at_equilibrium() {
        let model = CoupledDecay::new_si(2.0, 1.0);
        let initial = Populations::new(100.0, 0.0);
        let trajectory = midpoint::integrate(&model, initial, 0.0, 10.0, 0.05).unwrap();

        let equilibrium = model.equilibrium(&initial);
        let last = trajectory.last().unwrap().state;
        assert_relative_eq!(equilibrium.a, 200.0 / 3.0);
        assert_abs_diff_eq!(last.a, equilibrium.a, epsilon = 0.01);
        assert_abs_diff_eq!(last.b, equilibrium.b, epsilon = 0.01);
    }

    #[test]
    fn closed_form_starts_at_initial_and_ends_at_equilibrium() {
        let model = CoupledDecay::new(Time::new::<second>(0.5), Time::new::<second>(1.0));
        let initial = Populations::new(70.0, 30.0);

        let start = model.solution(&initial, 0.0);
        assert_relative_eq!(start.a, 70.0);
        assert_relative_eq!(start.b, 30.0);

        let late = model.solution(&initial, 100.0);
        let equilibrium = model.equilibrium(&initial);
        assert_relative_eq!(late.a, equilibrium.a, max_relative = 1e-12);
        assert_relative_eq!(late.b, equilibrium.b, max_relative = 1e-12);
    }

    #[test]
    fn euler_tracks_closed_form() {
        let model = CoupledDecay::new_si(2.0, 1.0);
        let trajectory =
            euler::integrate(&model, Populations::new(100.0, 0.0), 0.0, 10.0, 0.05).unwrap();
        let exact = model.reference(&trajectory);

        for (numerical, exact) in trajectory.iter().zip(&exact) {
            assert_abs_diff_eq!(numerical.state.a, exact.state.a, epsilon = 1.0);
            assert_abs_diff_eq!(numerical.state.b, exact.state.b, epsilon = 1.0);
        }
    }
}
