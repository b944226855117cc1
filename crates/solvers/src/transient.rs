//! Fixed-step explicit integrators.
//!
//! Every method produces a [`Trajectory`] by the same rule: sample 0 is the
//! initial condition at the span's initial time, and while the accumulated
//! time is below the span's end another sample is produced one step later.
//! Time accumulates additively, so the last sample sits on the first grid
//! point at or past the end, give or take floating-point drift.
//!
//! - [`euler`] and [`midpoint`] integrate any
//!   [`StepIntegrable`](drift_core::StepIntegrable) state with a first-order
//!   [`Derivative`](drift_core::Derivative).
//! - [`verlet`] integrates scalar second-order [`Acceleration`] problems.
//! - [`solve`] and [`integrate`] pick one of the three by [`Method`] for
//!   second-order problems, where all three apply.
//!
//! # Example
//!
//! ```
//! use drift_core::Phase;
//! use drift_solvers::transient::{self, Method};
//!
//! let harmonic = |y: f64, _t: f64| -y;
//! let trajectory = transient::integrate(
//!     Method::Midpoint,
//!     &harmonic,
//!     Phase::new(0.2, 0.0),
//!     0.0,
//!     1.0,
//!     0.01,
//! )?;
//!
//! assert_eq!(trajectory[0].state, Phase::new(0.2, 0.0));
//! # Ok::<(), transient::Error>(())
//! ```

mod action;
mod error;
mod event;
mod method;
mod solution;

pub mod euler;
pub mod midpoint;
pub mod verlet;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use method::{Method, ParseMethodError};
pub use solution::{Solution, Status};

use drift_core::{Acceleration, Observer, Phase, Sample, SecondOrder, TimeSpan, Trajectory};
use tracing::debug;

/// Integrates a second-order problem with the selected method.
///
/// Euler and midpoint see the problem through [`SecondOrder`], as the
/// first-order system `dy/dt = v`, `dv/dt = a(y, t)`.
///
/// The observer receives an [`Event`] for every sample and may return
/// [`Action::StopEarly`] to end the run.
pub fn solve<A, Obs>(
    method: Method,
    problem: &A,
    initial: Phase,
    span: &TimeSpan,
    observer: Obs,
) -> Solution<Phase>
where
    A: Acceleration + ?Sized,
    Obs: Observer<Event<Phase>, Action>,
{
    match method {
        Method::Euler => euler::solve(&SecondOrder(problem), initial, span, observer),
        Method::Midpoint => midpoint::solve(&SecondOrder(problem), initial, span, observer),
        Method::Verlet => verlet::solve(problem, initial, span, observer),
    }
}

/// Integrates a second-order problem from raw span parameters.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `step <= 0` or `end < initial_time`,
/// before any stepping occurs.
pub fn integrate<A>(
    method: Method,
    problem: &A,
    initial: Phase,
    initial_time: f64,
    end: f64,
    step: f64,
) -> Result<Trajectory<Phase>, Error>
where
    A: Acceleration + ?Sized,
{
    let span = TimeSpan::new(initial_time, end, step)?;
    Ok(solve(method, problem, initial, &span, ()).trajectory)
}

/// Drives a one-step update rule across a span.
///
/// `advance` maps the state at a time to the state one step later. This is
/// shared by the single-seed methods; Verlet keeps its own loop because it
/// carries two positions.
fn march<S, Obs>(
    method: Method,
    span: &TimeSpan,
    initial: S,
    mut advance: impl FnMut(&S, f64) -> S,
    mut observer: Obs,
) -> Solution<S>
where
    S: Clone,
    Obs: Observer<Event<S>, Action>,
{
    started(method, span);

    let dt = span.step();
    let mut time = span.initial();
    let mut samples = sample_buffer(span);

    let mut current = Sample::new(time, initial);
    samples.push(current.clone());
    if stop_requested(&mut observer, 0, &current) {
        return finished(method, Status::StoppedByObserver, samples, 0);
    }

    let mut step = 0;
    while time < span.end() {
        let next_state = advance(&current.state, time);
        time += dt;
        step += 1;

        current = Sample::new(time, next_state);
        samples.push(current.clone());

        if stop_requested(&mut observer, step, &current) {
            return finished(method, Status::StoppedByObserver, samples, step);
        }
    }

    finished(method, Status::Complete, samples, step)
}

/// Emits an event and reports whether the observer asked to stop.
fn stop_requested<S, Obs>(observer: &mut Obs, step: usize, sample: &Sample<S>) -> bool
where
    S: Clone,
    Obs: Observer<Event<S>, Action>,
{
    let event = Event {
        step,
        sample: sample.clone(),
    };
    matches!(observer.observe(&event), Some(Action::StopEarly))
}

fn started(method: Method, span: &TimeSpan) {
    debug!(
        %method,
        initial = span.initial(),
        end = span.end(),
        step = span.step(),
        "starting transient run"
    );
}

fn finished<S>(
    method: Method,
    status: Status,
    samples: Vec<Sample<S>>,
    steps: usize,
) -> Solution<S> {
    debug!(%method, ?status, steps, samples = samples.len(), "transient run finished");
    Solution {
        status,
        trajectory: Trajectory::from(samples),
        steps,
    }
}

/// Upper bound on samples reserved before a run; longer runs grow as they go.
const MAX_RESERVED_SAMPLES: usize = 1 << 16;

/// An empty sample buffer sized for a run over `span`.
fn sample_buffer<S>(span: &TimeSpan) -> Vec<Sample<S>> {
    let expected = span.expected_len().saturating_add(1);
    Vec::with_capacity(expected.min(MAX_RESERVED_SAMPLES))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn harmonic(y: f64, _t: f64) -> f64 {
        -y
    }

    #[test]
    fn every_method_starts_at_the_initial_condition() {
        let span = TimeSpan::new(0.0, 1.0, 0.1).unwrap();
        let initial = Phase::new(0.2, 0.0);

        for method in Method::ALL {
            let solution = solve(method, &harmonic, initial, &span, ());
            assert_eq!(solution.status, Status::Complete);
            assert_eq!(solution.trajectory[0], Sample::new(0.0, initial));
        }
    }

    #[test]
    fn every_method_produces_the_same_time_grid() {
        let span = TimeSpan::new(0.0, 2.0, 0.25).unwrap();
        let grids: Vec<Vec<f64>> = Method::ALL
            .iter()
            .map(|&m| solve(m, &harmonic, Phase::new(1.0, 0.0), &span, ()).trajectory.times())
            .collect();

        assert_eq!(grids[0], grids[1]);
        assert_eq!(grids[1], grids[2]);
        assert_eq!(grids[0].len(), 9);
    }

    #[test]
    fn integrate_rejects_zero_step() {
        let result = integrate(Method::Euler, &harmonic, Phase::default(), 0.0, 1.0, 0.0);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn integrate_rejects_negative_step() {
        let result = integrate(Method::Verlet, &harmonic, Phase::default(), 0.0, 1.0, -0.1);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn integrate_rejects_reversed_span() {
        let result = integrate(Method::Midpoint, &harmonic, Phase::default(), 1.0, 0.0, 0.1);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn long_spans_reserve_a_bounded_buffer() {
        let span = TimeSpan::new(0.0, 1e15, 1.0).unwrap();
        let samples = sample_buffer::<Phase>(&span);
        assert!(samples.capacity() >= MAX_RESERVED_SAMPLES);
        assert!(samples.capacity() < 2 * MAX_RESERVED_SAMPLES);

        let short = TimeSpan::new(0.0, 1.0, 0.25).unwrap();
        assert!(sample_buffer::<Phase>(&short).capacity() >= 6);
    }

    #[test]
    fn long_span_can_be_cut_short_by_an_observer() {
        let span = TimeSpan::new(0.0, 1e15, 1.0).unwrap();
        let solution = solve(
            Method::Verlet,
            &harmonic,
            Phase::new(0.2, 0.0),
            &span,
            |event: &Event<Phase>| (event.step == 10).then_some(Action::StopEarly),
        );

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.trajectory.len(), 11);
    }

    #[test]
    fn euler_step_of_second_order_problem() {
        let trajectory =
            integrate(Method::Euler, &harmonic, Phase::new(0.2, 0.0), 0.0, 0.01, 0.01).unwrap();

        // v1 = v0 - y0 dt, y1 = y0 + v0 dt
        assert_eq!(trajectory.len(), 2);
        assert_relative_eq!(trajectory[1].state.position, 0.2);
        assert_relative_eq!(trajectory[1].state.velocity, -0.002);
    }
}
