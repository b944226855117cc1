//! Second-order Runge-Kutta, midpoint variant.
//!
//! Takes a half Euler step to estimate the state at the middle of the step,
//! then uses the derivative there for the full step:
//!
//! ```text
//! mid         = state_n + f(state_n, t_n) * dt/2
//! state_{n+1} = state_n + f(mid, t_n + dt/2) * dt
//! ```
//!
//! For the unit harmonic oscillator (`dy/dt = v`, `dv/dt = -y`) this is
//!
//! ```text
//! y_mid  = y + v * dt/2        v_mid  = v - y * dt/2
//! y_next = y + v_mid * dt      v_next = v - y_mid * dt
//! ```
//!
//! and energy grows only by a factor of `1 + dt⁴/4` per step.

use drift_core::{Derivative, Observer, StepIntegrable, TimeSpan, Trajectory};

use super::{Action, Error, Event, Method, Solution, march};

/// Integrates a first-order problem using the midpoint method.
///
/// The derivative is evaluated twice per step: at the start of the step and
/// at the half-step estimate. Events and early stopping work as in
/// [`euler::solve`](super::euler::solve).
pub fn solve<S, D, Obs>(problem: &D, initial: S, span: &TimeSpan, observer: Obs) -> Solution<S>
where
    S: StepIntegrable<f64> + Clone,
    D: Derivative<S> + ?Sized,
    Obs: Observer<Event<S>, Action>,
{
    let dt = span.step();
    let half = 0.5 * dt;
    march(
        Method::Midpoint,
        span,
        initial,
        |state, time| {
            let mid = state.step(problem.evaluate(state, time), half);
            state.step(problem.evaluate(&mid, time + half), dt)
        },
        observer,
    )
}

/// Integrates a first-order problem using the midpoint method without observation.
pub fn solve_unobserved<S, D>(problem: &D, initial: S, span: &TimeSpan) -> Solution<S>
where
    S: StepIntegrable<f64> + Clone,
    D: Derivative<S> + ?Sized,
{
    solve(problem, initial, span, ())
}

/// Integrates from raw span parameters and returns the trajectory.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `step <= 0` or `end < initial_time`.
pub fn integrate<S, D>(
    problem: &D,
    initial: S,
    initial_time: f64,
    end: f64,
    step: f64,
) -> Result<Trajectory<S>, Error>
where
    S: StepIntegrable<f64> + Clone,
    D: Derivative<S> + ?Sized,
{
    let span = TimeSpan::new(initial_time, end, step)?;
    Ok(solve_unobserved(problem, initial, &span).trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use drift_core::{Phase, PhaseRate};

    use crate::transient::{Status, euler};

    fn unit_oscillator(state: &Phase, _t: f64) -> PhaseRate {
        PhaseRate {
            d_position: state.velocity,
            d_velocity: -state.position,
        }
    }

    #[test]
    fn one_step_matches_hand_unrolled_oscillator_update() {
        let dt = 0.01;
        let (y, v) = (0.2, 0.0);

        let trajectory = integrate(&unit_oscillator, Phase::new(y, v), 0.0, dt, dt).unwrap();

        let y_mid = y + v * (0.5 * dt);
        let v_mid = v - y * (0.5 * dt);
        let next = trajectory[1].state;
        assert_relative_eq!(next.position, y + v_mid * dt);
        assert_relative_eq!(next.velocity, v - y_mid * dt);
    }

    #[test]
    fn derivative_is_evaluated_at_the_half_step_time() {
        // dy/dt = t has y(t) = t²/2, which the midpoint rule integrates exactly.
        let ramp = |_y: &f64, t: f64| t;
        let span = TimeSpan::new(0.0, 2.0, 0.5).unwrap();

        let solution = solve_unobserved(&ramp, 0.0, &span);

        assert_eq!(solution.status, Status::Complete);
        for sample in &solution.trajectory {
            assert_abs_diff_eq!(sample.state, 0.5 * sample.time * sample.time, epsilon = 1e-12);
        }
    }

    #[test]
    fn more_accurate_than_euler_on_decay() {
        let decay = |n: &f64, _t: f64| -n;
        let exact = 100.0 * (-1.0_f64).exp();

        let euler_last = euler::integrate(&decay, 100.0, 0.0, 1.0, 0.125).unwrap();
        let midpoint_last = integrate(&decay, 100.0, 0.0, 1.0, 0.125).unwrap();

        let euler_error = (euler_last.last().unwrap().state - exact).abs();
        let midpoint_error = (midpoint_last.last().unwrap().state - exact).abs();
        assert!(midpoint_error < euler_error / 10.0);
    }

    #[test]
    fn observer_can_stop_early() {
        let span = TimeSpan::new(0.0, 1.0, 0.1).unwrap();

        let solution = solve(
            &unit_oscillator,
            Phase::new(1.0, 0.0),
            &span,
            |event: &Event<Phase>| (event.step == 2).then_some(Action::StopEarly),
        );

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.trajectory.len(), 3);
    }
}
