//! Position Verlet for scalar second-order problems.
//!
//! The recurrence only ever looks at positions:
//!
//! ```text
//! y_1     = y_0 + v_0 * dt                       (Euler seed)
//! y_{n+1} = 2 y_n - y_{n-1} + a(y_n, t_n) * dt²
//! v_n     = (y_{n+1} - y_{n-1}) / (2 dt)         (central difference)
//! ```
//!
//! Unlike Euler and midpoint it needs two seed positions, so the solver keeps
//! the last two positions as running state. Velocity at a sample needs the
//! position one step *after* it, so the solver always works one position
//! ahead of the sample it reports. Sample 0 reports the given `v_0`.
//!
//! For `a(y) = -y` the recurrence reduces to `y_{n+1} = 2 y_n - y_{n-1} - y_n dt²`.

use drift_core::{Acceleration, Observer, Phase, Sample, TimeSpan, Trajectory};

use super::{
    Action, Error, Event, Method, Solution, Status, finished, sample_buffer, started, stop_requested,
};

/// Integrates `d²y/dt² = a(y, t)` with position Verlet.
///
/// # Algorithm
///
/// 1. Record `(y_0, v_0)` as sample 0 and seed `y_1 = y_0 + v_0 * dt`.
/// 2. While the accumulated time is below the end of the span:
///    - Advance time by `dt` to `t_n`.
///    - Compute `y_{n+1}` from `y_n`, `y_{n-1}` and `a(y_n, t_n)`.
///    - Record `(y_n, v_n)` with the central-difference velocity.
///    - Emit an [`Event`]; stop if the observer returns [`Action::StopEarly`].
///    - Shift the position window forward.
/// 3. Return the solution with the full trajectory.
pub fn solve<A, Obs>(
    problem: &A,
    initial: Phase,
    span: &TimeSpan,
    mut observer: Obs,
) -> Solution<Phase>
where
    A: Acceleration + ?Sized,
    Obs: Observer<Event<Phase>, Action>,
{
    started(Method::Verlet, span);

    let dt = span.step();
    let mut time = span.initial();
    let mut samples = sample_buffer(span);

    let first = Sample::new(time, initial);
    samples.push(first);
    if stop_requested(&mut observer, 0, &first) {
        return finished(Method::Verlet, Status::StoppedByObserver, samples, 0);
    }

    let mut previous = initial.position;
    let mut current = seed(initial, dt);

    let mut step = 0;
    while time < span.end() {
        time += dt;
        step += 1;

        let next = 2.0 * current - previous + problem.acceleration(current, time) * (dt * dt);
        let velocity = 0.5 * (next - previous) / dt;

        let sample = Sample::new(time, Phase::new(current, velocity));
        samples.push(sample);
        if stop_requested(&mut observer, step, &sample) {
            return finished(Method::Verlet, Status::StoppedByObserver, samples, step);
        }

        previous = current;
        current = next;
    }

    finished(Method::Verlet, Status::Complete, samples, step)
}

/// Integrates with position Verlet without observation.
pub fn solve_unobserved<A>(problem: &A, initial: Phase, span: &TimeSpan) -> Solution<Phase>
where
    A: Acceleration + ?Sized,
{
    solve(problem, initial, span, ())
}

/// Integrates from raw span parameters and returns the trajectory.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `step <= 0` or `end < initial_time`.
pub fn integrate<A>(
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
    Ok(solve_unobserved(problem, initial, &span).trajectory)
}

/// The second seed position, one Euler sub-step from the initial condition.
fn seed(initial: Phase, dt: f64) -> f64 {
    initial.position + initial.velocity * dt
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn harmonic(y: f64, _t: f64) -> f64 {
        -y
    }

    #[test]
    fn seed_is_one_euler_sub_step() {
        assert_eq!(seed(Phase::new(0.2, 0.0), 0.01), 0.2);
        assert_eq!(seed(Phase::new(1.0, 2.0), 0.5), 2.0);
    }

    #[test]
    fn second_sample_is_the_seed_position() {
        let trajectory = integrate(&harmonic, Phase::new(0.2, 0.0), 0.0, 1.0, 0.01).unwrap();
        assert_eq!(trajectory[1].state.position, 0.2);
    }

    #[test]
    fn recurrence_matches_harmonic_special_case() {
        let dt = 0.01;
        let trajectory = integrate(&harmonic, Phase::new(0.2, 0.0), 0.0, 0.05, dt).unwrap();
        let ys: Vec<f64> = trajectory.map_states(|p| p.position);

        for n in 1..ys.len() - 1 {
            let expected = 2.0 * ys[n] - ys[n - 1] - ys[n] * (dt * dt);
            assert_eq!(ys[n + 1], expected);
        }
    }

    #[test]
    fn velocity_is_central_difference() {
        let dt = 0.01;
        let trajectory = integrate(&harmonic, Phase::new(0.2, 0.1), 0.0, 0.1, dt).unwrap();

        assert_eq!(trajectory[0].state.velocity, 0.1);
        for n in 1..trajectory.len() - 1 {
            let expected =
                0.5 * (trajectory[n + 1].state.position - trajectory[n - 1].state.position) / dt;
            assert_relative_eq!(trajectory[n].state.velocity, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn constant_acceleration_gives_quadratic_positions() {
        // The recurrence is exact for constant acceleration; only the Euler
        // seed is off, by g dt²/2, and that offset grows linearly.
        let g = 9.8;
        let gravity = move |_y: f64, _t: f64| -g;
        let dt = 0.125;
        let trajectory = integrate(&gravity, Phase::new(100.0, 0.0), 0.0, 1.0, dt).unwrap();

        for sample in trajectory.iter().skip(1) {
            let t = sample.time;
            let exact = 100.0 - 0.5 * g * t * t;
            assert_relative_eq!(
                sample.state.position,
                exact + 0.5 * g * dt * dt * (t / dt),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn observer_can_stop_early() {
        let span = TimeSpan::new(0.0, 1.0, 0.01).unwrap();

        let solution = solve(&harmonic, Phase::new(0.2, 0.0), &span, |event: &Event<Phase>| {
            (event.step == 3).then_some(Action::StopEarly)
        });

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 3);
        assert_eq!(solution.trajectory.len(), 4);
    }
}
