//! Volume aggregation over rolling windows
//!
//! Sums lifted tonnage (weight x reps) across 7-day and 30-day windows and
//! classifies the month-over-month trend. Input is the 60-day set slice read
//! by the engine; windows are measured back from the computation instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::{ExerciseClassifier, MovementPattern};
use crate::models::SetEntry;

/// Percent-change band outside which the trend stops being "stable".
const TREND_THRESHOLD_PCT: f64 = 5.0;

/// ---------------------------------------------------------------------------
/// Output Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
  Increasing,
  Decreasing,
  Stable,
}

impl TrendDirection {
  pub fn as_str(&self) -> &'static str {
    match self {
      TrendDirection::Increasing => "increasing",
      TrendDirection::Decreasing => "decreasing",
      TrendDirection::Stable => "stable",
    }
  }
}

/// Tonnage split by movement pattern. Every set in the input slice lands
/// in exactly one bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VolumeBreakdown {
  pub push: f64,
  pub pull: f64,
  pub legs: f64,
  pub accessories: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeMetrics {
  /// Tonnage over the last 7 days.
  pub weekly_total: f64,
  /// Tonnage over the last 30 days.
  pub monthly_total: f64,
  /// monthly_total / 4: a rolling 4-week approximation, not an average of
  /// actual week boundaries.
  pub weekly_average: f64,
  /// Month-over-month change vs days 31-60 ago; 0 when there is no
  /// previous-month baseline.
  pub percent_change: f64,
  pub trend: TrendDirection,
  pub breakdown: VolumeBreakdown,
}

/// ---------------------------------------------------------------------------
/// Aggregation
/// ---------------------------------------------------------------------------

impl VolumeMetrics {
  /// Aggregate the 60-day set slice into windowed totals and a trend.
  pub fn compute(
    sets: &[SetEntry],
    classifier: &dyn ExerciseClassifier,
    now: DateTime<Utc>,
  ) -> Self {
    let mut weekly = 0.0;
    let mut monthly = 0.0;
    let mut previous_monthly = 0.0;
    let mut breakdown = VolumeBreakdown::default();

    for set in sets {
      let days_ago = (now - set.performed_at).num_days();
      let volume = set.volume();

      match classifier.movement_pattern(&set.exercise_name) {
        MovementPattern::Push => breakdown.push += volume,
        MovementPattern::Pull => breakdown.pull += volume,
        MovementPattern::Legs => breakdown.legs += volume,
        MovementPattern::Accessories => breakdown.accessories += volume,
      }

      if days_ago < 7 {
        weekly += volume;
      }
      if days_ago < 30 {
        monthly += volume;
      } else if days_ago < 60 {
        previous_monthly += volume;
      }
    }

    // Zero baseline collapses to 0 rather than a divide error
    let percent_change = if previous_monthly > 0.0 {
      (monthly - previous_monthly) / previous_monthly * 100.0
    } else {
      0.0
    };

    let trend = if percent_change > TREND_THRESHOLD_PCT {
      TrendDirection::Increasing
    } else if percent_change < -TREND_THRESHOLD_PCT {
      TrendDirection::Decreasing
    } else {
      TrendDirection::Stable
    };

    Self {
      weekly_total: weekly.round(),
      monthly_total: monthly.round(),
      weekly_average: (monthly / 4.0).round(),
      percent_change: round1(percent_change),
      trend,
      breakdown: VolumeBreakdown {
        push: breakdown.push.round(),
        pull: breakdown.pull.round(),
        legs: breakdown.legs.round(),
        accessories: breakdown.accessories.round(),
      },
    }
  }
}

fn round1(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
