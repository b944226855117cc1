use std::ops::Index;

/// A single `(time, state)` point of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Sample<S> {
    pub time: f64,
    pub state: S,
}

impl<S> Sample<S> {
    /// Creates a sample at `time`.
    pub fn new(time: f64, state: S) -> Self {
        Self { time, state }
    }
}

/// The ordered samples produced by one integration run.
///
/// Sample `0` is the initial condition and sample `i` lies `i` steps later.
/// A trajectory is built whole, from a `Vec` or an iterator of samples, and
/// is read-only afterwards: there is no way to append, remove, or reorder
/// samples.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Trajectory<S> {
    samples: Vec<Sample<S>>,
}

impl<S> Trajectory<S> {
    /// Number of samples, including the initial condition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the sample at `step`, if any.
    #[must_use]
    pub fn get(&self, step: usize) -> Option<&Sample<S>> {
        self.samples.get(step)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Sample<S>> {
        self.samples.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Sample<S>> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample<S>> {
        self.samples.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Sample<S>] {
        &self.samples
    }

    /// The sample times, in step order.
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    /// Maps every state through `f`, in step order.
    ///
    /// Useful for derived diagnostics such as an energy series.
    pub fn map_states<T>(&self, f: impl FnMut(&S) -> T) -> Vec<T> {
        self.samples.iter().map(|s| &s.state).map(f).collect()
    }

    /// Returns `[time, f(state)]` pairs, ready for a line plot.
    pub fn points(&self, mut f: impl FnMut(&S) -> f64) -> Vec<[f64; 2]> {
        self.samples.iter().map(|s| [s.time, f(&s.state)]).collect()
    }

    /// Splits the trajectory into parallel `(times, states)` sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<S>) {
        self.samples.into_iter().map(|s| (s.time, s.state)).unzip()
    }
}

impl<S: Clone> Trajectory<S> {
    /// The states, in step order.
    #[must_use]
    pub fn states(&self) -> Vec<S> {
        self.map_states(S::clone)
    }
}

impl<S> Default for Trajectory<S> {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
        }
    }
}

impl<S> From<Vec<Sample<S>>> for Trajectory<S> {
    fn from(samples: Vec<Sample<S>>) -> Self {
        Self { samples }
    }
}

impl<S> FromIterator<Sample<S>> for Trajectory<S> {
    fn from_iter<I: IntoIterator<Item = Sample<S>>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<S> Index<usize> for Trajectory<S> {
    type Output = Sample<S>;

    fn index(&self, step: usize) -> &Self::Output {
        &self.samples[step]
    }
}

impl<'a, S> IntoIterator for &'a Trajectory<S> {
    type Item = &'a Sample<S>;
    type IntoIter = std::slice::Iter<'a, Sample<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl<S> IntoIterator for Trajectory<S> {
    type Item = Sample<S>;
    type IntoIter = std::vec::IntoIter<Sample<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}
