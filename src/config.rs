//! Engine configuration and documented defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunable inputs the engine falls back to when a caller passes `None`.
/// Explicit configuration rather than magic numbers, so the engine stays a
/// pure function of its inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
  /// Assumed body mass when the user has never recorded one.
  pub default_bodyweight_kg: f64,
  /// Assumed planned training frequency when none is configured.
  pub default_planned_per_week: i64,
  /// Budget for the log read phase; expiry fails the whole computation.
  pub log_read_timeout: Duration,
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      default_bodyweight_kg: 80.0,
      default_planned_per_week: 4,
      log_read_timeout: Duration::from_secs(5),
    }
  }
}
