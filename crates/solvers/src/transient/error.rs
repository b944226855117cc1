use drift_core::SpanError;

/// Errors that can occur when starting a transient run.
///
/// Runs never fail once stepping has begun. Unstable configurations are not
/// detected; non-finite values simply appear in the trajectory.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] SpanError),
}
