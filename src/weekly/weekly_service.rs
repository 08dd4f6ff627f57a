//! Weekly-Delta Tracker - "saved this week" figure
//!
//! One snapshot per (account, week) holds the highest USD balance seen
//! since Monday. The baseline only ratchets upward within a week: a
//! withdrawal shows as a negative delta but does not lower the baseline,
//! so a later deposit is measured against the week's peak, not its
//! trough.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::errors::{Error, Result, ValidationError};
use crate::weekly::weekly_model::WeeklyDelta;
use crate::weekly::weekly_traits::{ClockTrait, SnapshotStoreTrait};

pub struct WeeklyDeltaTracker<S: SnapshotStoreTrait, C: ClockTrait> {
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S: SnapshotStoreTrait, C: ClockTrait> WeeklyDeltaTracker<S, C> {
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        WeeklyDeltaTracker { store, clock }
    }

    /// Record a balance observation and report the change since the start
    /// of the current calendar week. The first observation of a week
    /// stores the baseline and reports a zero delta.
    pub fn observe(&self, account: &str, current_balance: Decimal) -> Result<WeeklyDelta> {
        if account.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "account address is required".to_string(),
            )));
        }

        let week_start = week_start(self.clock.today());
        let key = snapshot_key(account, week_start);

        match self.store.get(&key)? {
            None => {
                self.store.put(&key, current_balance)?;
                Ok(WeeklyDelta {
                    delta: Decimal::ZERO,
                    baseline: current_balance,
                    week_start,
                })
            }
            Some(baseline) => {
                let delta = current_balance - baseline;
                let updated = if current_balance > baseline {
                    self.store.put(&key, current_balance)?;
                    current_balance
                } else {
                    baseline
                };
                Ok(WeeklyDelta {
                    delta,
                    baseline: updated,
                    week_start,
                })
            }
        }
    }
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

fn snapshot_key(account: &str, week_start: NaiveDate) -> String {
    format!("{}:{}", account, week_start)
}

/// In-memory store, used in tests and by shells without persistence.
#[derive(Default)]
pub struct MemorySnapshotStore {
    entries: Mutex<HashMap<String, Decimal>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStoreTrait for MemorySnapshotStore {
    fn get(&self, key: &str) -> Result<Option<Decimal>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| Error::Storage(e.to_string()))?;
        Ok(entries.get(key).copied())
    }

    fn put(&self, key: &str, value: Decimal) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| Error::Storage(e.to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Wall-clock calendar date in local time.
pub struct SystemClock;

impl ClockTrait for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_starts_on_monday() {
        // 2025-01-08 is a Wednesday
        let date = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
        assert_eq!(week_start(date), NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        // A Monday is its own week start
        let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        assert_eq!(week_start(monday), monday);
    }
}
