//! Name-based exercise classification
//!
//! The log store carries no canonical exercise ids, only names, so sets are
//! routed into movement-pattern and named-lift buckets by case-insensitive
//! substring matching. The tables live behind `ExerciseClassifier` so a
//! canonical-id scheme can replace them without touching the aggregators.

use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Buckets
/// ---------------------------------------------------------------------------

/// Coarse grouping of exercises by the muscle action they primarily train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
  Push,
  Pull,
  Legs,
  Accessories,
}

impl MovementPattern {
  pub fn as_str(&self) -> &'static str {
    match self {
      MovementPattern::Push => "push",
      MovementPattern::Pull => "pull",
      MovementPattern::Legs => "legs",
      MovementPattern::Accessories => "accessories",
    }
  }
}

/// The lifts tracked individually by the strength estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedLift {
  BenchPress,
  Squat,
  Deadlift,
  OverheadPress,
}

impl NamedLift {
  /// The three lifts that make up the strength total. Overhead press is
  /// estimated but excluded from the total.
  pub const MAJOR: [NamedLift; 3] = [
    NamedLift::BenchPress,
    NamedLift::Squat,
    NamedLift::Deadlift,
  ];
}

/// ---------------------------------------------------------------------------
/// Classifier Interface
/// ---------------------------------------------------------------------------

/// Maps exercise names into buckets. Matching is approximate;
/// implementations must be deterministic for identical inputs.
pub trait ExerciseClassifier: Send + Sync {
  fn movement_pattern(&self, exercise_name: &str) -> MovementPattern;
  fn named_lift(&self, exercise_name: &str) -> Option<NamedLift>;
}

/// ---------------------------------------------------------------------------
/// Default Keyword Tables
/// ---------------------------------------------------------------------------

/// Movement-pattern keywords, first-match-wins in listed order. A name that
/// matches nothing falls through to accessories.
const PATTERN_KEYWORDS: [(MovementPattern, &[&str]); 3] = [
  (MovementPattern::Push, &["bench", "press", "dip", "fly"]),
  (MovementPattern::Pull, &["row", "pull", "chin", "curl"]),
  (MovementPattern::Legs, &["squat", "deadlift", "lunge", "leg"]),
];

/// Named-lift aliases, first-match-wins in listed order.
const LIFT_ALIASES: [(NamedLift, &[&str]); 4] = [
  (NamedLift::BenchPress, &["bench press", "bench"]),
  (NamedLift::Squat, &["squat"]),
  (NamedLift::Deadlift, &["deadlift"]),
  (
    NamedLift::OverheadPress,
    &["overhead press", "military press", "shoulder press"],
  ),
];

/// Default classifier backed by the keyword tables above.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl ExerciseClassifier for KeywordClassifier {
  fn movement_pattern(&self, exercise_name: &str) -> MovementPattern {
    let name = exercise_name.to_lowercase();
    for (pattern, keywords) in PATTERN_KEYWORDS {
      if keywords.iter().any(|k| name.contains(k)) {
        return pattern;
      }
    }
    MovementPattern::Accessories
  }

  fn named_lift(&self, exercise_name: &str) -> Option<NamedLift> {
    let name = exercise_name.to_lowercase();
    for (lift, aliases) in LIFT_ALIASES {
      if aliases.iter().any(|a| name.contains(a)) {
        return Some(lift);
      }
    }
    None
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_movement_pattern_buckets() {
    let c = KeywordClassifier;
    assert_eq!(c.movement_pattern("Barbell Bench Press"), MovementPattern::Push);
    assert_eq!(c.movement_pattern("Tricep Dip"), MovementPattern::Push);
    assert_eq!(c.movement_pattern("Bent Over Row"), MovementPattern::Pull);
    assert_eq!(c.movement_pattern("Chin-up"), MovementPattern::Pull);
    assert_eq!(c.movement_pattern("Back Squat"), MovementPattern::Legs);
    assert_eq!(c.movement_pattern("Walking Lunge"), MovementPattern::Legs);
    assert_eq!(c.movement_pattern("Plank"), MovementPattern::Accessories);
    assert_eq!(c.movement_pattern("Crunch"), MovementPattern::Accessories);
  }

  #[test]
  fn test_first_match_wins_order() {
    let c = KeywordClassifier;

    // "leg press" hits the push keyword "press" before the legs keyword
    // "leg". The ordering quirk is part of the contract.
    assert_eq!(c.movement_pattern("Leg Press"), MovementPattern::Push);

    // "bicep curl" lands in pull, not accessories
    assert_eq!(c.movement_pattern("Bicep Curl"), MovementPattern::Pull);
  }

  #[test]
  fn test_matching_is_case_insensitive() {
    let c = KeywordClassifier;
    assert_eq!(c.movement_pattern("BENCH PRESS"), MovementPattern::Push);
    assert_eq!(c.named_lift("DEADLIFT"), Some(NamedLift::Deadlift));
    assert_eq!(c.named_lift("romanian deadlift"), Some(NamedLift::Deadlift));
  }

  #[test]
  fn test_named_lift_aliases() {
    let c = KeywordClassifier;
    assert_eq!(c.named_lift("Incline Bench Press"), Some(NamedLift::BenchPress));
    assert_eq!(c.named_lift("Front Squat"), Some(NamedLift::Squat));
    assert_eq!(c.named_lift("Military Press"), Some(NamedLift::OverheadPress));
    assert_eq!(c.named_lift("Shoulder Press"), Some(NamedLift::OverheadPress));
    assert_eq!(c.named_lift("Lat Pulldown"), None);
    assert_eq!(c.named_lift("Leg Extension"), None);
  }
}
