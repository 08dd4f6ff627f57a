use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;

/// Keyed persistent storage capability for weekly snapshots. A browser
/// shell backs this with device-local storage; it is not shared across
/// devices, so a second device starts a fresh baseline.
pub trait SnapshotStoreTrait: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Decimal>>;
    fn put(&self, key: &str, value: Decimal) -> Result<()>;
}

/// Injected clock so week rollover is testable without wall-clock time.
pub trait ClockTrait: Send + Sync {
    /// Today's calendar date in the user's local time zone.
    fn today(&self) -> NaiveDate;
}
