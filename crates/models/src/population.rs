use drift_core::Derivative;
use uom::si::{f64::Frequency, frequency::hertz};

use crate::Analytical;

/// Population growth with births and crowding deaths: `dN/dt = a N - b N²`.
///
/// With `b = 0` growth is exponential. Otherwise the population approaches
/// the carrying capacity `a / b` from either side.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Logistic {
    birth: f64,
    death: f64,
}

impl Logistic {
    /// Creates a growth model from the birth rate `a` and death rate `b`.
    ///
    /// Population counts are dimensionless, so both rates are per unit time.
    #[must_use]
    pub fn new(birth: Frequency, death: Frequency) -> Self {
        Self::new_si(birth.get::<hertz>(), death.get::<hertz>())
    }

    /// Creates a growth model from rates in 1/s.
    #[must_use]
    pub fn new_si(birth: f64, death: f64) -> Self {
        Self { birth, death }
    }

    /// Unchecked exponential growth at rate `a`, in 1/s.
    #[must_use]
    pub fn exponential(birth: f64) -> Self {
        Self::new_si(birth, 0.0)
    }

    #[must_use]
    pub fn birth(&self) -> f64 {
        self.birth
    }

    #[must_use]
    pub fn death(&self) -> f64 {
        self.death
    }

    /// The population at which births and deaths balance.
    ///
    /// Infinite when there are no deaths.
    #[must_use]
    pub fn carrying_capacity(&self) -> f64 {
        self.birth / self.death
    }
}

impl Derivative<f64> for Logistic {
    fn evaluate(&self, n: &f64, _time: f64) -> f64 {
        self.birth * n - self.death * n * n
    }
}

impl Analytical<f64> for Logistic {
    fn solution(&self, n0: &f64, elapsed: f64) -> f64 {
        let (a, b) = (self.birth, self.death);
        if a == 0.0 {
            return n0 / (1.0 + b * n0 * elapsed);
        }
        let growth = (a * elapsed).exp();
        a * n0 * growth / (a - b * n0 * (1.0 - growth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use drift_solvers::transient::euler;
    use uom::si::frequency::cycle_per_minute;

    #[test]
    fn rates_accept_uom_quantities() {
        let model = Logistic::new(
            Frequency::new::<hertz>(2.0),
            Frequency::new::<cycle_per_minute>(0.6),
        );
        assert_relative_eq!(model.birth(), 2.0);
        assert_relative_eq!(model.death(), 0.01, max_relative = 1e-12);
        assert_relative_eq!(model.carrying_capacity(), 200.0, max_relative = 1e-12);
    }

    #[test]
    fn closed_form_reduces_to_exponential_without_deaths() {
        let growth = Logistic::exponential(1.0);
        assert_relative_eq!(growth.solution(&1000.0, 2.0), 1000.0 * 2.0_f64.exp());
    }

    #[test]
    fn closed_form_approaches_carrying_capacity() {
        let model = Logistic::new_si(1.0, 0.02);
        assert_relative_eq!(model.carrying_capacity(), 50.0);
        assert_relative_eq!(model.solution(&1000.0, 0.0), 1000.0);
        assert_relative_eq!(model.solution(&1000.0, 50.0), 50.0, max_relative = 1e-12);
        assert_relative_eq!(model.solution(&1.0, 50.0), 50.0, max_relative = 1e-12);
    }

    #[test]
    fn closed_form_without_births_decays_hyperbolically() {
        let model = Logistic::new_si(0.0, 0.5);
        assert_relative_eq!(model.solution(&2.0, 1.0), 1.0);
    }

    #[test]
    fn euler_underestimates_exponential_growth() {
        let model = Logistic::exponential(1.0);
        let trajectory = euler::integrate(&model, 1000.0, 0.0, 5.0, 0.01).unwrap();
        let exact = model.reference(&trajectory);

        let last = trajectory.last().unwrap().state;
        let expected = exact.last().unwrap().state;
        assert!(last < expected);
        assert_relative_eq!(last, expected, max_relative = 0.03);
    }

    #[test]
    fn euler_settles_near_carrying_capacity() {
        let model = Logistic::new_si(1.0, 0.01);
        let trajectory = euler::integrate(&model, 1000.0, 0.0, 5.0, 0.01).unwrap();

        let last = trajectory.last().unwrap().state;
        assert_relative_eq!(last, model.carrying_capacity(), max_relative = 0.01);
    }
}
