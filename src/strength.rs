//! Estimated one-rep-max tracking per major lift
//!
//! Projects a single-repetition maximum from logged sets via the Epley
//! formula, per named lift, plus a bodyweight-relative score and a 30-day
//! trend per major lift. The relative score is a simple ratio, a placeholder
//! proxy rather than a physiological strength standard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::{ExerciseClassifier, NamedLift};
use crate::models::SetEntry;

/// The estimation formula is unreliable above this rep count; heavier-rep
/// sets never influence the estimate.
const MAX_ESTIMATION_REPS: i64 = 12;

/// ---------------------------------------------------------------------------
/// Output Types
/// ---------------------------------------------------------------------------

/// 30-day trend per major lift, in percent. 0 when there is no baseline
/// estimate older than 30 days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StrengthTrends {
  pub bench_press: f64,
  pub squat: f64,
  pub deadlift: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthMetrics {
  /// Estimated 1RM per lift; None when no qualifying set exists.
  pub bench_press: Option<f64>,
  pub squat: Option<f64>,
  pub deadlift: Option<f64>,
  pub overhead_press: Option<f64>,
  /// bench + squat + deadlift, missing estimates counted as 0. Overhead
  /// press is reported but not totalled.
  pub total: f64,
  /// total / bodyweight; None when bodyweight is unknown or nonsensical.
  pub relative_score: Option<f64>,
  pub trends: StrengthTrends,
}

/// ---------------------------------------------------------------------------
/// Estimation
/// ---------------------------------------------------------------------------

impl StrengthMetrics {
  pub fn compute(
    sets: &[SetEntry],
    bodyweight_kg: f64,
    classifier: &dyn ExerciseClassifier,
    now: DateTime<Utc>,
  ) -> Self {
    let bench = best_estimate(sets, NamedLift::BenchPress, classifier, None, now);
    let squat = best_estimate(sets, NamedLift::Squat, classifier, None, now);
    let deadlift = best_estimate(sets, NamedLift::Deadlift, classifier, None, now);
    let overhead = best_estimate(sets, NamedLift::OverheadPress, classifier, None, now);

    let total = bench.unwrap_or(0.0) + squat.unwrap_or(0.0) + deadlift.unwrap_or(0.0);

    let relative_score = if bodyweight_kg > 0.0 {
      Some(round2(total / bodyweight_kg))
    } else {
      None
    };

    let trends = StrengthTrends {
      bench_press: round1(trend(sets, NamedLift::BenchPress, bench, classifier, now)),
      squat: round1(trend(sets, NamedLift::Squat, squat, classifier, now)),
      deadlift: round1(trend(sets, NamedLift::Deadlift, deadlift, classifier, now)),
    };

    Self {
      bench_press: bench.map(round1),
      squat: squat.map(round1),
      deadlift: deadlift.map(round1),
      overhead_press: overhead.map(round1),
      total: round1(total),
      relative_score,
      trends,
    }
  }
}

/// Epley estimate. A single-rep set is already a max; the formula would
/// otherwise inflate it.
fn estimated_one_rep_max(weight_kg: f64, reps: i64) -> f64 {
  if reps == 1 {
    weight_kg
  } else {
    weight_kg * (1.0 + reps as f64 / 30.0)
  }
}

/// Best per-set estimate for one lift across qualifying sets, optionally
/// restricted to sets at least `older_than_days` old (the trend baseline).
fn best_estimate(
  sets: &[SetEntry],
  lift: NamedLift,
  classifier: &dyn ExerciseClassifier,
  older_than_days: Option<i64>,
  now: DateTime<Utc>,
) -> Option<f64> {
  let mut best: Option<f64> = None;

  for set in sets {
    if set.reps > MAX_ESTIMATION_REPS {
      continue;
    }
    if classifier.named_lift(&set.exercise_name) != Some(lift) {
      continue;
    }
    if let Some(min_age) = older_than_days {
      if (now - set.performed_at).num_days() < min_age {
        continue;
      }
    }

    let estimate = estimated_one_rep_max(set.weight_kg, set.reps);
    best = Some(best.map_or(estimate, |b: f64| b.max(estimate)));
  }

  best
}

/// Percent change of the current estimate against the estimate derived from
/// sets older than 30 days; 0 when no baseline exists.
fn trend(
  sets: &[SetEntry],
  lift: NamedLift,
  current: Option<f64>,
  classifier: &dyn ExerciseClassifier,
  now: DateTime<Utc>,
) -> f64 {
  let previous = best_estimate(sets, lift, classifier, Some(30), now);
  match (current, previous) {
    (Some(current), Some(previous)) if previous > 0.0 => {
      (current - previous) / previous * 100.0
    }
    _ => 0.0,
  }
}

fn round1(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::matching::KeywordClassifier;
  use crate::test_utils::set_days_ago;

  #[test]
  fn test_epley_formula_fidelity() {
    // 100 kg x 10 → 100 * (1 + 10/30) = 133.33, rounded to 133.3
    let now = Utc::now();
    let sets = vec![set_days_ago(1, "Bench Press", 100.0, 10, 1, now)];

    let metrics = StrengthMetrics::compute(&sets, 80.0, &KeywordClassifier, now);

    assert_eq!(metrics.bench_press, Some(133.3));
  }

  #[test]
  fn test_single_rep_set_is_already_a_max() {
    let now = Utc::now();
    let sets = vec![set_days_ago(1, "Back Squat", 180.0, 1, 1, now)];

    let metrics = StrengthMetrics::compute(&sets, 80.0, &KeywordClassifier, now);

    // Exactly the weight, not 180 * (1 + 1/30)
    assert_eq!(metrics.squat, Some(180.0));
  }

  #[test]
  fn test_high_rep_sets_never_qualify() {
    // Arrange: a 15-rep set at massive weight next to a modest 5-rep set
    let now = Utc::now();
    let sets = vec![
      set_days_ago(1, "Bench Press", 200.0, 15, 1, now),
      set_days_ago(2, "Bench Press", 100.0, 5, 2, now),
    ];

    // Act
    let metrics = StrengthMetrics::compute(&sets, 80.0, &KeywordClassifier, now);

    // Assert: only the 5-rep set counts: 100 * (1 + 5/30) = 116.7
    assert_eq!(metrics.bench_press, Some(116.7));
  }

  #[test]
  fn test_total_sums_major_lifts_only() {
    let now = Utc::now();
    let sets = vec![
      set_days_ago(1, "Bench Press", 100.0, 1, 1, now),
      set_days_ago(2, "Back Squat", 140.0, 1, 1, now),
      set_days_ago(3, "Deadlift", 180.0, 1, 1, now),
      set_days_ago(4, "Overhead Press", 60.0, 1, 1, now),
    ];

    let metrics = StrengthMetrics::compute(&sets, 80.0, &KeywordClassifier, now);

    // Overhead press is reported but excluded from the total
    assert_eq!(metrics.overhead_press, Some(60.0));
    assert_eq!(metrics.total, 420.0);
    assert_eq!(metrics.relative_score, Some(5.25));
  }

  #[test]
  fn test_missing_lifts_count_as_zero_in_total() {
    let now = Utc::now();
    let sets = vec![set_days_ago(1, "Deadlift", 150.0, 1, 1, now)];

    let metrics = StrengthMetrics::compute(&sets, 80.0, &KeywordClassifier, now);

    assert_eq!(metrics.bench_press, None);
    assert_eq!(metrics.squat, None);
    assert_eq!(metrics.total, 150.0);
  }

  #[test]
  fn test_relative_score_guards_bodyweight() {
    let now = Utc::now();
    let sets = vec![set_days_ago(1, "Deadlift", 150.0, 1, 1, now)];

    let zero_bw = StrengthMetrics::compute(&sets, 0.0, &KeywordClassifier, now);
    assert_eq!(zero_bw.relative_score, None);

    let negative_bw = StrengthMetrics::compute(&sets, -10.0, &KeywordClassifier, now);
    assert_eq!(negative_bw.relative_score, None);
  }

  #[test]
  fn test_trend_against_30_day_baseline() {
    // Arrange: 100 kg single 40 days ago, 110 kg single this week
    let now = Utc::now();
    let sets = vec![
      set_days_ago(1, "Bench Press", 110.0, 1, 2, now),
      set_days_ago(2, "Bench Press", 100.0, 1, 40, now),
    ];

    // Act
    let metrics = StrengthMetrics::compute(&sets, 80.0, &KeywordClassifier, now);

    // Assert: (110 - 100) / 100 * 100 = +10%
    assert_eq!(metrics.trends.bench_press, 10.0);
  }

  #[test]
  fn test_trend_without_baseline_is_zero() {
    // All sets are recent: no estimate older than 30 days exists
    let now = Utc::now();
    let sets = vec![set_days_ago(1, "Back Squat", 140.0, 5, 3, now)];

    let metrics = StrengthMetrics::compute(&sets, 80.0, &KeywordClassifier, now);

    assert_eq!(metrics.trends.squat, 0.0);
  }

  #[test]
  fn test_empty_history() {
    let metrics = StrengthMetrics::compute(&[], 80.0, &KeywordClassifier, Utc::now());

    assert_eq!(metrics.bench_press, None);
    assert_eq!(metrics.squat, None);
    assert_eq!(metrics.deadlift, None);
    assert_eq!(metrics.overhead_press, None);
    assert_eq!(metrics.total, 0.0);
    assert_eq!(metrics.relative_score, Some(0.0));
    assert_eq!(metrics.trends, StrengthTrends::default());
  }
}
