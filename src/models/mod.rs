pub mod workout;

pub use workout::{SetEntry, WorkoutSession};
