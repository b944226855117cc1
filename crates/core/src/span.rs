use thiserror::Error;

/// The time interval and fixed step size of one integration run.
///
/// A `TimeSpan` is validated once, at construction, so the solvers never have
/// to re-check it:
///
/// - The step size must be strictly positive and finite.
/// - Both endpoints must be finite.
/// - The final time must not precede the initial time.
/// - The step must be large enough to move time at both endpoints, or an
///   accumulating clock would never reach the end.
///
/// ```
/// use drift_core::{SpanError, TimeSpan};
///
/// let span = TimeSpan::new(0.0, 5.0, 0.05)?;
/// assert_eq!(span.step(), 0.05);
///
/// assert!(matches!(
///     TimeSpan::new(0.0, 5.0, 0.0),
///     Err(SpanError::StepNotPositive(_))
/// ));
/// # Ok::<(), SpanError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSpan", into = "RawSpan")
)]
pub struct TimeSpan {
    initial: f64,
    end: f64,
    step: f64,
}

/// Error returned when constructing an invalid [`TimeSpan`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpanError {
    #[error("step size must be greater than zero, got {0}")]
    StepNotPositive(f64),

    #[error("final time {end} precedes initial time {initial}")]
    Reversed { initial: f64, end: f64 },

    #[error("time span endpoints must be finite, got [{initial}, {end}]")]
    NotFinite { initial: f64, end: f64 },

    #[error("step size {step} is below the floating-point resolution at time {time}")]
    StepTooSmall { time: f64, step: f64 },
}

impl TimeSpan {
    /// Creates a span from `initial` to `end` advanced in increments of `step`.
    ///
    /// # Errors
    ///
    /// Returns a [`SpanError`] if any of the invariants listed on [`TimeSpan`]
    /// does not hold.
    pub fn new(initial: f64, end: f64, step: f64) -> Result<Self, SpanError> {
        if step.is_nan() || step <= 0.0 || step.is_infinite() {
            return Err(SpanError::StepNotPositive(step));
        }
        if !initial.is_finite() || !end.is_finite() {
            return Err(SpanError::NotFinite { initial, end });
        }
        if end < initial {
            return Err(SpanError::Reversed { initial, end });
        }
        // Float spacing grows with magnitude, so the endpoints bound every
        // time in between.
        for time in [initial, end] {
            if time + step == time {
                return Err(SpanError::StepTooSmall { time, step });
            }
        }
        Ok(Self { initial, end, step })
    }

    /// The time of the first sample.
    #[must_use]
    pub fn initial(&self) -> f64 {
        self.initial
    }

    /// Stepping continues while the accumulated time is below this value.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// The fixed step size.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Nominal number of samples a run over this span produces.
    ///
    /// This is `floor((end - initial) / step) + 1`. Because time accumulates
    /// additively, an actual run may produce one more sample when the span is
    /// not a whole number of steps, or when rounding lands just short of `end`.
    ///
    /// Saturates at `usize::MAX` for spans with more steps than fit in memory.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn expected_len(&self) -> usize {
        let steps = ((self.end - self.initial) / self.step).floor() as usize;
        steps.saturating_add(1)
    }
}

#[cfg(feature = "serde-derive")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawSpan {
    initial: f64,
    end: f64,
    step: f64,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<RawSpan> for TimeSpan {
    type Error = SpanError;

    fn try_from(raw: RawSpan) -> Result<Self, Self::Error> {
        Self::new(raw.initial, raw.end, raw.step)
    }
}

#[cfg(feature = "serde-derive")]
impl From<TimeSpan> for RawSpan {
    fn from(span: TimeSpan) -> Self {
        RawSpan {
            initial: span.initial,
            end: span.end,
            step: span.step,
        }
    }
}
