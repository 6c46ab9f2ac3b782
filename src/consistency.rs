//! Streak and completion-rate tracking
//!
//! Walks the full session history for the current training streak and
//! measures logged sessions against the planned weekly frequency over 7-day
//! and 30-day windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::WorkoutSession;

/// A streak survives up to one full rest day between sessions.
const MAX_STREAK_GAP_DAYS: i64 = 2;

/// The 30-day window is treated as 4 planning weeks throughout.
const WEEKS_PER_MONTH_WINDOW: i64 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyMetrics {
  /// Consecutive qualifying sessions counted back from "now". A count of
  /// sessions, not calendar days.
  pub current_streak: i64,
  /// Mirrors current_streak: the engine does not retroactively scan
  /// historical gaps. Kept for parity with the reference behavior.
  pub longest_streak: i64,
  /// Sessions in the last 7 days against the planned weekly count, capped
  /// at 100.
  pub weekly_rate: f64,
  /// Sessions in the last 30 days against 4 planned weeks, capped at 100.
  pub monthly_rate: f64,
  /// Mean duration of sessions in the last 30 days that carry a duration.
  pub average_duration_minutes: f64,
  pub missed_workouts: i64,
}

impl ConsistencyMetrics {
  pub fn compute(
    sessions: &[WorkoutSession],
    planned_per_week: i64,
    now: DateTime<Utc>,
  ) -> Self {
    let mut ordered: Vec<&WorkoutSession> = sessions.iter().collect();
    ordered.sort_by(|a, b| b.started_at.cmp(&a.started_at));

    // Walk from the most recent session; the first comparison is against
    // "now" itself, later ones against the previous session in the walk.
    let mut current_streak = 0;
    let mut previous = now;
    for session in &ordered {
      let gap = (previous - session.started_at).num_days();
      if gap <= MAX_STREAK_GAP_DAYS {
        current_streak += 1;
        previous = session.started_at;
      } else {
        break;
      }
    }

    let in_week = ordered
      .iter()
      .filter(|s| (now - s.started_at).num_days() < 7)
      .count() as i64;
    let in_month: Vec<_> = ordered
      .iter()
      .filter(|s| (now - s.started_at).num_days() < 30)
      .collect();
    let in_month_count = in_month.len() as i64;

    let weekly_rate = completion_rate(in_week, planned_per_week);
    let monthly_rate = completion_rate(in_month_count, planned_per_week * WEEKS_PER_MONTH_WINDOW);

    let durations: Vec<i64> = in_month.iter().filter_map(|s| s.duration_minutes).collect();
    let average_duration_minutes = if durations.is_empty() {
      0.0
    } else {
      durations.iter().sum::<i64>() as f64 / durations.len() as f64
    };

    let missed_workouts =
      (planned_per_week * WEEKS_PER_MONTH_WINDOW - in_month_count).max(0);

    Self {
      current_streak,
      longest_streak: current_streak,
      weekly_rate: round1(weekly_rate),
      monthly_rate: round1(monthly_rate),
      average_duration_minutes: round1(average_duration_minutes),
      missed_workouts,
    }
  }
}

/// completed / planned as a percentage, capped at 100. A zero plan
/// short-circuits to 0 rather than dividing.
fn completion_rate(completed: i64, planned: i64) -> f64 {
  if planned <= 0 {
    return 0.0;
  }
  (completed as f64 / planned as f64 * 100.0).min(100.0)
}

fn round1(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
