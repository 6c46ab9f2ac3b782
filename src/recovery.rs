//! Rest-gap statistics and overtraining-risk classification
//!
//! Looks at the most recent sessions only: mean inter-session gap, whether
//! that gap clears the recovery floor, and a heuristic risk band combining
//! rest adequacy with the planned training frequency.

use serde::{Deserialize, Serialize};

use crate::models::WorkoutSession;

/// How many recent sessions feed the rest-gap statistics.
const RECENT_SESSION_COUNT: usize = 10;

/// Assumed gap when fewer than two sessions exist.
const DEFAULT_REST_HOURS: f64 = 48.0;

/// Minimum mean gap considered adequate recovery.
const ADEQUATE_REST_HOURS: f64 = 24.0;

/// ---------------------------------------------------------------------------
/// Output Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertrainingRisk {
  Low,
  Moderate,
  High,
}

impl OvertrainingRisk {
  pub fn as_str(&self) -> &'static str {
    match self {
      OvertrainingRisk::Low => "low",
      OvertrainingRisk::Moderate => "moderate",
      OvertrainingRisk::High => "high",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryMetrics {
  /// Mean gap in hours across the most recent session pairs.
  pub average_rest_hours: f64,
  pub adequate_recovery: bool,
  pub recommended_rest_days: i64,
  pub overtraining_risk: OvertrainingRisk,
  /// 0-100, penalized for inadequate rest and elevated risk.
  pub score: f64,
}

/// ---------------------------------------------------------------------------
/// Assessment
/// ---------------------------------------------------------------------------

impl RecoveryMetrics {
  pub fn compute(
    sessions: &[WorkoutSession],
    weekly_volume: f64,
    planned_per_week: i64,
  ) -> Self {
    let mut ordered: Vec<&WorkoutSession> = sessions.iter().collect();
    ordered.sort_by(|a, b| b.started_at.cmp(&a.started_at));
    let recent = &ordered[..ordered.len().min(RECENT_SESSION_COUNT)];

    let average_rest_hours = if recent.len() < 2 {
      DEFAULT_REST_HOURS
    } else {
      let total_hours: f64 = recent
        .windows(2)
        .map(|pair| (pair[0].started_at - pair[1].started_at).num_minutes() as f64 / 60.0)
        .sum();
      total_hours / (recent.len() - 1) as f64
    };

    let adequate_recovery = average_rest_hours >= ADEQUATE_REST_HOURS;

    // Per-session tonnage drives how much rest to prescribe
    let volume_per_session = if recent.is_empty() {
      0.0
    } else {
      weekly_volume / recent.len() as f64
    };
    let recommended_rest_days = if volume_per_session > 20_000.0 {
      3
    } else if volume_per_session < 10_000.0 {
      1
    } else {
      2
    };

    let overtraining_risk = if !adequate_recovery && planned_per_week > 5 {
      OvertrainingRisk::High
    } else if !adequate_recovery || planned_per_week > 6 {
      OvertrainingRisk::Moderate
    } else {
      OvertrainingRisk::Low
    };

    let mut score: f64 = 100.0;
    if !adequate_recovery {
      score -= 30.0;
    }
    score -= match overtraining_risk {
      OvertrainingRisk::High => 40.0,
      OvertrainingRisk::Moderate => 20.0,
      OvertrainingRisk::Low => 0.0,
    };

    Self {
      average_rest_hours: round1(average_rest_hours),
      adequate_recovery,
      recommended_rest_days,
      overtraining_risk,
      score: score.max(0.0),
    }
  }
}

fn round1(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
