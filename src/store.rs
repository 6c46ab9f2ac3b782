//! Read-only access to the workout log
//!
//! The engine owns no persistence. It reads sessions and sets through the
//! `WorkoutLog` trait; the application's relational store implements it
//! elsewhere. `InMemoryLog` is the reference implementation used by tests
//! and by callers that already hold the rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::models::{SetEntry, WorkoutSession};

/// The log-store contract the engine computes from. All ranges are
/// half-open `[from, to)`; the engine issues no writes.
#[async_trait]
pub trait WorkoutLog: Send + Sync {
  /// Every session the user has ever logged, in any order.
  async fn sessions(&self, user_id: i64) -> Result<Vec<WorkoutSession>, StoreError>;

  /// Sessions with `started_at` in `[from, to)`.
  async fn sessions_in_range(
    &self,
    user_id: i64,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
  ) -> Result<Vec<WorkoutSession>, StoreError>;

  /// Sets performed in `[from, to)`, each carrying its joined exercise
  /// name.
  async fn sets_in_range(
    &self,
    user_id: i64,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
  ) -> Result<Vec<SetEntry>, StoreError>;
}

/// ---------------------------------------------------------------------------
/// In-Memory Reference Store
/// ---------------------------------------------------------------------------

/// A plain-vector `WorkoutLog`. Set ownership is resolved by joining each
/// set's parent session, mirroring what the relational store does.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLog {
  sessions: Vec<WorkoutSession>,
  sets: Vec<SetEntry>,
}

impl InMemoryLog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push_session(&mut self, session: WorkoutSession) {
    self.sessions.push(session);
  }

  pub fn push_set(&mut self, set: SetEntry) {
    self.sets.push(set);
  }

  fn owns_session(&self, user_id: i64, session_id: i64) -> bool {
    self
      .sessions
      .iter()
      .any(|s| s.id == session_id && s.user_id == user_id)
  }
}

#[async_trait]
impl WorkoutLog for InMemoryLog {
  async fn sessions(&self, user_id: i64) -> Result<Vec<WorkoutSession>, StoreError> {
    Ok(
      self
        .sessions
        .iter()
        .filter(|s| s.user_id == user_id)
        .cloned()
        .collect(),
    )
  }

  async fn sessions_in_range(
    &self,
    user_id: i64,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
  ) -> Result<Vec<WorkoutSession>, StoreError> {
    Ok(
      self
        .sessions
        .iter()
        .filter(|s| s.user_id == user_id && s.started_at >= from && s.started_at < to)
        .cloned()
        .collect(),
    )
  }

  async fn sets_in_range(
    &self,
    user_id: i64,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
  ) -> Result<Vec<SetEntry>, StoreError> {
    Ok(
      self
        .sets
        .iter()
        .filter(|e| {
          e.performed_at >= from
            && e.performed_at < to
            && self.owns_session(user_id, e.session_id)
        })
        .cloned()
        .collect(),
    )
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{session_days_ago, set_days_ago};
  use chrono::Duration;

  fn seeded(now: DateTime<Utc>) -> InMemoryLog {
    let mut log = InMemoryLog::new();
    log.push_session(session_days_ago(1, 1, now));
    log.push_session(session_days_ago(2, 10, now));

    let mut other_user = session_days_ago(3, 1, now);
    other_user.user_id = 99;
    log.push_session(other_user);

    let mut set = set_days_ago(1, "Bench Press", 100.0, 5, 1, now);
    set.session_id = 1;
    log.push_set(set);
    let mut old_set = set_days_ago(2, "Bench Press", 90.0, 5, 10, now);
    old_set.session_id = 2;
    log.push_set(old_set);
    let mut foreign_set = set_days_ago(3, "Bench Press", 200.0, 5, 1, now);
    foreign_set.session_id = 3;
    log.push_set(foreign_set);

    log
  }

  #[tokio::test]
  async fn test_sessions_filter_by_user() {
    let now = Utc::now();
    let log = seeded(now);

    let sessions = log.sessions(1).await.unwrap();

    assert_eq!(sessions.len(), 2);
    assert!(sessions.iter().all(|s| s.user_id == 1));
  }

  #[tokio::test]
  async fn test_session_range_is_half_open() {
    let now = Utc::now();
    let log = seeded(now);

    // [now - 10d, now): includes the 10-day-old session, excludes "now"
    let from = now - Duration::days(10);
    let in_range = log.sessions_in_range(1, from, now).await.unwrap();
    assert_eq!(in_range.len(), 2);

    // [now - 5d, now): the 10-day-old session falls out
    let from = now - Duration::days(5);
    let in_range = log.sessions_in_range(1, from, now).await.unwrap();
    assert_eq!(in_range.len(), 1);
  }

  #[tokio::test]
  async fn test_sets_join_through_owning_session() {
    let now = Utc::now();
    let log = seeded(now);

    let sets = log
      .sets_in_range(1, now - Duration::days(60), now)
      .await
      .unwrap();

    // The 200 kg set belongs to user 99's session and must not leak in
    assert_eq!(sets.len(), 2);
    assert!(sets.iter().all(|s| s.weight_kg < 200.0));
  }
}
