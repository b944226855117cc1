//! Right-hand sides of first- and second-order ODEs.
//!
//! A right-hand side is a value, not ambient state: physical constants live in
//! the implementing type (or the closure's captures) and are fixed before a
//! run starts.

use crate::{DerivativeOf, Phase, PhaseRate, StepIntegrable};

/// The right-hand side of a first-order ODE `dy/dt = f(y, t)`.
///
/// Closures of the form `Fn(&S, f64) -> DerivativeOf<S>` implement this trait,
/// so an ad hoc right-hand side can be passed directly:
///
/// ```
/// use drift_core::Derivative;
///
/// let tau = 2.0;
/// let decay = move |n: &f64, _t: f64| -n / tau;
///
/// assert_eq!(decay.evaluate(&10.0, 0.0), -5.0);
/// ```
pub trait Derivative<S: StepIntegrable<f64>> {
    /// Evaluates the rate of change of `state` at `time`.
    fn evaluate(&self, state: &S, time: f64) -> DerivativeOf<S>;
}

impl<S, F> Derivative<S> for F
where
    S: StepIntegrable<f64>,
    F: Fn(&S, f64) -> DerivativeOf<S>,
{
    fn evaluate(&self, state: &S, time: f64) -> DerivativeOf<S> {
        self(state, time)
    }
}

/// The acceleration of a scalar second-order ODE `d²y/dt² = a(y, t)`.
///
/// This is the form the Verlet recurrence needs, since it never looks at
/// velocity. Closures `Fn(f64, f64) -> f64` taking `(position, time)`
/// implement it.
pub trait Acceleration {
    /// Evaluates the acceleration at `position` and `time`.
    fn acceleration(&self, position: f64, time: f64) -> f64;
}

impl<F> Acceleration for F
where
    F: Fn(f64, f64) -> f64,
{
    fn acceleration(&self, position: f64, time: f64) -> f64 {
        self(position, time)
    }
}

/// Views a second-order problem as a first-order one over [`Phase`].
///
/// The resulting system is `dy/dt = v`, `dv/dt = a(y, t)`, which lets Euler
/// and midpoint integrate anything Verlet can.
#[derive(Debug, Clone, Copy)]
pub struct SecondOrder<'a, A: ?Sized>(pub &'a A);

impl<A: Acceleration + ?Sized> Derivative<Phase> for SecondOrder<'_, A> {
    fn evaluate(&self, state: &Phase, time: f64) -> PhaseRate {
        PhaseRate {
            d_position: state.velocity,
            d_velocity: self.0.acceleration(state.position, time),
        }
    }
}
