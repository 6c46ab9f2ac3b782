use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged training session. Immutable once written; read-only to the
/// metrics engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
  pub id: i64,
  pub user_id: i64,
  pub started_at: DateTime<Utc>,
  pub duration_minutes: Option<i64>,
  pub completed: bool,
}

/// One performed unit of an exercise: a weight moved for a rep count.
///
/// `exercise_name` is the joined name from the log store; lift and
/// movement-pattern buckets are derived from it by substring matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetEntry {
  pub id: i64,
  pub session_id: i64,
  pub exercise_name: String,
  pub weight_kg: f64,
  pub reps: i64,
  /// May differ slightly from the parent session date.
  pub performed_at: DateTime<Utc>,
  /// Optional effort rating (RPE-style).
  pub effort: Option<f64>,
}

impl SetEntry {
  /// Tonnage for this set: weight x reps.
  pub fn volume(&self) -> f64 {
    self.weight_kg * self.reps as f64
  }
}
