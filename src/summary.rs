//! Composite score and qualitative callouts
//!
//! Folds the five component results into a single 0-100 score plus short
//! strength/improvement lists. The lists come from an ordered rule table
//! truncated to the first three matches; rule order decides, not magnitude.

use serde::{Deserialize, Serialize};

use crate::consistency::ConsistencyMetrics;
use crate::progression::ProgressionMetrics;
use crate::recovery::RecoveryMetrics;
use crate::strength::StrengthMetrics;
use crate::volume::{TrendDirection, VolumeMetrics};

/// Each callout list keeps the first this-many matching rules.
const MAX_CALLOUTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
  /// Unweighted mean of the five component scores, rounded.
  pub overall_score: f64,
  pub strengths: Vec<String>,
  pub improvements: Vec<String>,
}

impl MetricsSummary {
  pub fn compose(
    volume: &VolumeMetrics,
    strength: &StrengthMetrics,
    consistency: &ConsistencyMetrics,
    recovery: &RecoveryMetrics,
    progression: &ProgressionMetrics,
  ) -> Self {
    let volume_score = match volume.trend {
      TrendDirection::Increasing => 90.0,
      TrendDirection::Stable => 70.0,
      TrendDirection::Decreasing => 50.0,
    };
    let strength_score = if strength.total > 0.0 { 85.0 } else { 50.0 };
    let consistency_score = consistency.weekly_rate;
    let recovery_score = recovery.score;
    let progression_score = if progression.on_track { 80.0 } else { 60.0 };

    let overall_score = ((volume_score
      + strength_score
      + consistency_score
      + recovery_score
      + progression_score)
      / 5.0)
      .round();

    let mut strengths = Vec::new();
    if consistency.weekly_rate >= 85.0 {
      strengths.push("Excellent consistency".to_string());
    }
    if volume.trend == TrendDirection::Increasing {
      strengths.push("Volume trending up".to_string());
    }
    if recovery.score >= 80.0 {
      strengths.push("Good recovery".to_string());
    }
    if progression.on_track {
      strengths.push("Progressive overload maintained".to_string());
    }
    if consistency.current_streak >= 7 {
      strengths.push(format!(
        "{} session streak going strong",
        consistency.current_streak
      ));
    }
    strengths.truncate(MAX_CALLOUTS);

    let mut improvements = Vec::new();
    if consistency.weekly_rate < 60.0 {
      improvements.push("Inconsistent training schedule".to_string());
    }
    if volume.trend == TrendDirection::Decreasing {
      improvements.push("Training volume declining".to_string());
    }
    if recovery.score < 50.0 {
      improvements.push("Prioritize rest and recovery".to_string());
    }
    if !progression.on_track {
      improvements.push("Progression has stalled".to_string());
    }
    if consistency.missed_workouts >= 4 {
      improvements.push(format!(
        "{} planned sessions missed this month",
        consistency.missed_workouts
      ));
    }
    improvements.truncate(MAX_CALLOUTS);

    Self {
      overall_score,
      strengths,
      improvements,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
