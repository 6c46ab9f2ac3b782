//! Growth-rate synthesis
//!
//! Folds the volume trend, per-lift strength trends, and the weekly
//! completion rate into a handful of progression indicators. No regression
//! or date estimation happens here; the milestone field is a qualitative
//! band only.

use serde::{Deserialize, Serialize};

use crate::consistency::ConsistencyMetrics;
use crate::strength::StrengthMetrics;
use crate::volume::VolumeMetrics;

/// Weekly completion rate treated as the baseline expectation.
const CONSISTENCY_BASELINE_PCT: f64 = 75.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionMetrics {
  /// Month-over-month volume change, straight from the volume aggregator.
  pub volume_growth_rate: f64,
  /// Mean of the nonzero major-lift trends; 0 when every trend is flat.
  pub strength_growth_rate: f64,
  /// Weekly completion rate relative to the 75% baseline.
  pub consistency_improvement: f64,
  /// Growing on either axis counts as on track.
  pub on_track: bool,
  /// Qualitative band, never a regressed date.
  pub time_to_next_milestone: String,
}

impl ProgressionMetrics {
  pub fn compute(
    volume: &VolumeMetrics,
    strength: &StrengthMetrics,
    consistency: &ConsistencyMetrics,
    session_count: usize,
  ) -> Self {
    let lift_trends = [
      strength.trends.bench_press,
      strength.trends.squat,
      strength.trends.deadlift,
    ];
    let nonzero: Vec<f64> = lift_trends.iter().copied().filter(|t| *t != 0.0).collect();
    let strength_growth_rate = if nonzero.is_empty() {
      0.0
    } else {
      round1(nonzero.iter().sum::<f64>() / nonzero.len() as f64)
    };

    let volume_growth_rate = volume.percent_change;
    let on_track = volume_growth_rate > 0.0 || strength_growth_rate > 0.0;

    let time_to_next_milestone = if session_count < 2 {
      "insufficient data".to_string()
    } else if on_track {
      "4-6 weeks".to_string()
    } else {
      "8-12 weeks".to_string()
    };

    Self {
      volume_growth_rate,
      strength_growth_rate,
      consistency_improvement: round1(consistency.weekly_rate - CONSISTENCY_BASELINE_PCT),
      on_track,
      time_to_next_milestone,
    }
  }
}

fn round1(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
