//! Snapshot pipeline
//!
//! One call reads a bounded slice of the workout log and folds it into a
//! `MetricsSnapshot`. Nothing is cached between calls; recomputation is the
//! source of truth. The log read is the only suspension point and runs
//! under a single timeout so a slow store can never produce a partial
//! snapshot.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::consistency::ConsistencyMetrics;
use crate::error::{EngineError, Result};
use crate::matching::{ExerciseClassifier, KeywordClassifier};
use crate::progression::ProgressionMetrics;
use crate::recovery::RecoveryMetrics;
use crate::store::WorkoutLog;
use crate::strength::StrengthMetrics;
use crate::summary::MetricsSummary;
use crate::volume::VolumeMetrics;

/// The set slice the engine reads: volume windows plus the previous-month
/// baseline both fit in 60 days.
const SET_WINDOW_DAYS: i64 = 60;

/// Everything derived from one computation call. Never persisted by the
/// engine; recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
  pub user_id: i64,
  /// The instant the windows were measured back from.
  pub generated_at: DateTime<Utc>,
  pub volume: VolumeMetrics,
  pub strength: StrengthMetrics,
  pub consistency: ConsistencyMetrics,
  pub recovery: RecoveryMetrics,
  pub progression: ProgressionMetrics,
  pub summary: MetricsSummary,
}

impl MetricsSnapshot {
  /// Serialize for the presentation layer.
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}

/// ---------------------------------------------------------------------------
/// Engine
/// ---------------------------------------------------------------------------

pub struct MetricsEngine<L> {
  log: L,
  config: EngineConfig,
  classifier: Box<dyn ExerciseClassifier>,
}

impl<L: WorkoutLog> MetricsEngine<L> {
  pub fn new(log: L) -> Self {
    Self::with_config(log, EngineConfig::default())
  }

  pub fn with_config(log: L, config: EngineConfig) -> Self {
    Self {
      log,
      config,
      classifier: Box::new(KeywordClassifier),
    }
  }

  /// Swap the name-matching tables, e.g. for a canonical-id scheme.
  pub fn with_classifier(mut self, classifier: impl ExerciseClassifier + 'static) -> Self {
    self.classifier = Box::new(classifier);
    self
  }

  /// Compute a snapshot as of the current instant. `None` parameters fall
  /// back to the configured defaults.
  pub async fn compute(
    &self,
    user_id: i64,
    bodyweight_kg: Option<f64>,
    planned_per_week: Option<i64>,
  ) -> Result<MetricsSnapshot> {
    self
      .compute_at(user_id, bodyweight_kg, planned_per_week, Utc::now())
      .await
  }

  /// Compute a snapshot as of an explicit instant. Identical inputs and
  /// instant yield identical snapshots.
  pub async fn compute_at(
    &self,
    user_id: i64,
    bodyweight_kg: Option<f64>,
    planned_per_week: Option<i64>,
    now: DateTime<Utc>,
  ) -> Result<MetricsSnapshot> {
    let bodyweight_kg = bodyweight_kg.unwrap_or(self.config.default_bodyweight_kg);
    let planned_per_week = planned_per_week.unwrap_or(self.config.default_planned_per_week);
    let window_start = now - Duration::days(SET_WINDOW_DAYS);

    let read = async {
      tokio::try_join!(
        self.log.sessions(user_id),
        self.log.sets_in_range(user_id, window_start, now),
      )
    };
    let (sessions, sets) = match tokio::time::timeout(self.config.log_read_timeout, read).await
    {
      Ok(Ok(rows)) => rows,
      Ok(Err(e)) => {
        tracing::warn!(user_id, error = %e, "workout log read failed");
        return Err(e.into());
      }
      Err(_) => {
        tracing::warn!(user_id, "workout log read timed out");
        return Err(EngineError::Timeout(self.config.log_read_timeout));
      }
    };

    tracing::debug!(
      user_id,
      sessions = sessions.len(),
      sets = sets.len(),
      "computing metrics snapshot"
    );

    let volume = VolumeMetrics::compute(&sets, self.classifier.as_ref(), now);
    let strength =
      StrengthMetrics::compute(&sets, bodyweight_kg, self.classifier.as_ref(), now);
    let consistency = ConsistencyMetrics::compute(&sessions, planned_per_week, now);
    let recovery = RecoveryMetrics::compute(&sessions, volume.weekly_total, planned_per_week);
    let progression =
      ProgressionMetrics::compute(&volume, &strength, &consistency, sessions.len());
    let summary =
      MetricsSummary::compose(&volume, &strength, &consistency, &recovery, &progression);

    Ok(MetricsSnapshot {
      user_id,
      generated_at: now,
      volume,
      strength,
      consistency,
      recovery,
      progression,
      summary,
    })
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
