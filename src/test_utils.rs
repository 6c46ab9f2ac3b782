//! Test fixtures shared across component tests
//!
//! Factories for sessions, sets, and a seeded in-memory log. All fixtures
//! are anchored to an explicit "now" so tests stay deterministic.

use chrono::{DateTime, Duration, Utc};

use crate::models::{SetEntry, WorkoutSession};
use crate::store::InMemoryLog;

/// A completed one-hour session for user 1, `days_ago` days back.
pub fn session_days_ago(id: i64, days_ago: i64, now: DateTime<Utc>) -> WorkoutSession {
  WorkoutSession {
    id,
    user_id: 1,
    started_at: now - Duration::days(days_ago),
    duration_minutes: Some(60),
    completed: true,
  }
}

/// A session for user 1 at hour granularity, for rest-gap tests.
pub fn session_hours_ago(id: i64, hours_ago: i64, now: DateTime<Utc>) -> WorkoutSession {
  WorkoutSession {
    id,
    user_id: 1,
    started_at: now - Duration::hours(hours_ago),
    duration_minutes: Some(60),
    completed: true,
  }
}

/// A set performed `days_ago` days back. Session linkage defaults to 0;
/// tests that read through a store override it.
pub fn set_days_ago(
  id: i64,
  exercise_name: &str,
  weight_kg: f64,
  reps: i64,
  days_ago: i64,
  now: DateTime<Utc>,
) -> SetEntry {
  SetEntry {
    id,
    session_id: 0,
    exercise_name: exercise_name.to_string(),
    weight_kg,
    reps,
    performed_at: now - Duration::days(days_ago),
    effort: None,
  }
}

/// Six weeks of alternating bench/squat history for one user: a session
/// every other day, working weights slightly heavier in the recent month.
pub fn seeded_log(user_id: i64, now: DateTime<Utc>) -> InMemoryLog {
  let mut log = InMemoryLog::new();

  for (i, days_ago) in (0..60).step_by(2).enumerate() {
    let session_id = i as i64 + 1;
    let mut session = session_days_ago(session_id, days_ago, now);
    session.user_id = user_id;
    log.push_session(session);

    let (exercise, base) = if i % 2 == 0 {
      ("Bench Press", 90.0)
    } else {
      ("Back Squat", 120.0)
    };
    let weight = if days_ago < 30 { base + 5.0 } else { base };

    for set_no in 0..3 {
      let mut set = set_days_ago(
        session_id * 10 + set_no,
        exercise,
        weight,
        5,
        days_ago,
        now,
      );
      set.session_id = session_id;
      log.push_set(set);
    }
  }

  log
}
