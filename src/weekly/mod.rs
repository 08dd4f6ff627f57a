pub mod weekly_model;
pub mod weekly_service;
pub mod weekly_traits;

pub use weekly_model::WeeklyDelta;
pub use weekly_service::{week_start, MemorySnapshotStore, SystemClock, WeeklyDeltaTracker};
pub use weekly_traits::{ClockTrait, SnapshotStoreTrait};
