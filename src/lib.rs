//! Training metrics computation engine
//!
//! A pure, recompute-on-read analysis of logged workout history: windowed
//! volume totals, estimated one-rep maxima, streak and completion tracking,
//! rest-gap risk classification, and a composite progression score. The
//! presentation and reward layers consume the snapshot; this crate never
//! writes to the log store.

pub mod config;
pub mod consistency;
pub mod engine;
pub mod error;
pub mod matching;
pub mod models;
pub mod progression;
pub mod recovery;
pub mod store;
pub mod strength;
pub mod summary;
pub mod volume;

#[cfg(test)]
mod test_utils;

pub use config::EngineConfig;
pub use consistency::ConsistencyMetrics;
pub use engine::{MetricsEngine, MetricsSnapshot};
pub use error::{EngineError, Result, StoreError};
pub use matching::{ExerciseClassifier, KeywordClassifier, MovementPattern, NamedLift};
pub use models::{SetEntry, WorkoutSession};
pub use progression::ProgressionMetrics;
pub use recovery::{OvertrainingRisk, RecoveryMetrics};
pub use store::{InMemoryLog, WorkoutLog};
pub use strength::{StrengthMetrics, StrengthTrends};
pub use summary::MetricsSummary;
pub use volume::{TrendDirection, VolumeBreakdown, VolumeMetrics};
