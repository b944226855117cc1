use drift_core::{Sample, Trajectory};

/// A model whose ODE has a closed-form solution.
pub trait Analytical<S> {
    /// Returns the exact state `elapsed` time units after `initial`.
    fn solution(&self, initial: &S, elapsed: f64) -> S;

    /// Evaluates the exact solution at every sample time of `trajectory`.
    ///
    /// The trajectory's first sample is taken as the initial condition, so the
    /// result is directly comparable, sample by sample, with the numerical run.
    fn reference(&self, trajectory: &Trajectory<S>) -> Trajectory<S> {
        let Some(first) = trajectory.first() else {
            return Trajectory::default();
        };

        trajectory
            .iter()
            .map(|sample| {
                let elapsed = sample.time - first.time;
                Sample::new(sample.time, self.solution(&first.state, elapsed))
            })
            .collect()
    }
}
