//! Error types for the metrics engine.

use std::time::Duration;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, EngineError>;

/// Failure reported by a `WorkoutLog` implementation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
  /// A query against the log store failed
  #[error("workout log query failed: {0}")]
  Query(String),

  /// The log store could not be reached at all
  #[error("workout log unavailable: {0}")]
  Unavailable(String),
}

/// Failure of one metrics computation. The engine never returns a partial
/// snapshot: any store failure aborts the whole call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
  /// The log read failed; no sub-metric was computed
  #[error("workout data unavailable: {0}")]
  DataUnavailable(#[from] StoreError),

  /// The log read exceeded the configured budget
  #[error("workout log read exceeded {0:?}")]
  Timeout(Duration),
}
