/// A state that can be advanced by one explicit step using its derivative.
///
/// Implementing this trait lets the fixed-step solvers work with the type by
/// stepping it via `state + derivative * delta`, where the derivative is with
/// respect to `Delta`. The solvers in this workspace integrate over time with
/// `Delta = f64`, but nothing here requires that.
///
/// States are immutable: every call produces a new value and leaves `self`
/// untouched.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// Shorthand for `<T as StepIntegrable<Delta>>::Derivative`.
pub type DerivativeOf<T, Delta = f64> = <T as StepIntegrable<Delta>>::Derivative;

/// Scalar states (a population count, a velocity) step as plain numbers.
impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: f64, delta: f64) -> Self {
        self + derivative * delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Populations {
        a: f64,
        b: f64,
    }

    struct Rates {
        a: f64,
        b: f64,
    }

    impl StepIntegrable<f64> for Populations {
        type Derivative = Rates;

        fn step(&self, derivative: Rates, delta: f64) -> Self {
            Populations {
                a: self.a + derivative.a * delta,
                b: self.b + derivative.b * delta,
            }
        }
    }

    #[test]
    fn step_scalar_state() {
        let n = 100.0_f64;
        let next = n.step(-100.0, 0.5);
        assert_eq!(next, 50.0);
    }

    #[test]
    fn step_leaves_original_untouched() {
        let n = 3.0_f64;
        let _ = n.step(1.0, 1.0);
        assert_eq!(n, 3.0);
    }

    #[test]
    fn step_struct_state() {
        let state = Populations { a: 100.0, b: 0.0 };
        let rates = Rates { a: -50.0, b: 50.0 };

        let next = state.step(rates, 0.1);

        assert_eq!(next, Populations { a: 95.0, b: 5.0 });
    }
}
