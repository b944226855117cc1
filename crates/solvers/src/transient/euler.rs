//! Forward Euler.
//!
//! Steps a state forward with its derivative at the start of the step:
//!
//! ```text
//! state_{n+1} = state_n + f(state_n, t_n) * dt
//! ```
//!
//! First-order accurate. On the harmonic oscillator its energy grows by a
//! factor of `1 + dt²` every step.
//!
//! # Example
//!
//! ```
//! use drift_core::TimeSpan;
//! use drift_solvers::transient::euler;
//!
//! let tau = 1.0;
//! let decay = move |n: &f64, _t: f64| -n / tau;
//! let span = TimeSpan::new(0.0, 5.0, 0.05)?;
//!
//! let solution = euler::solve_unobserved(&decay, 100.0, &span);
//!
//! for sample in &solution.trajectory {
//!     println!("t={:.2}: N={:.3}", sample.time, sample.state);
//! }
//! # Ok::<(), drift_core::SpanError>(())
//! ```

use drift_core::{Derivative, Observer, StepIntegrable, TimeSpan, Trajectory};

use super::{Action, Error, Event, Method, Solution, march};

/// Integrates a first-order problem using forward Euler.
///
/// # Algorithm
///
/// 1. Record the initial condition as sample 0.
/// 2. While the accumulated time is below the end of the span:
///    - Evaluate the derivative at the current state and time.
///    - Step the state forward: `state + derivative * dt`.
///    - Advance time by `dt` and record the new sample.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 3. Return the solution with the full trajectory.
pub fn solve<S, D, Obs>(problem: &D, initial: S, span: &TimeSpan, observer: Obs) -> Solution<S>
where
    S: StepIntegrable<f64> + Clone,
    D: Derivative<S> + ?Sized,
    Obs: Observer<Event<S>, Action>,
{
    let dt = span.step();
    march(
        Method::Euler,
        span,
        initial,
        |state, time| state.step(problem.evaluate(state, time), dt),
        observer,
    )
}

/// Integrates a first-order problem using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
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
