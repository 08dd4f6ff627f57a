use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Week-over-week change for an account, measured against the highest
/// balance observed since Monday 00:00 local time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyDelta {
    /// Signed change since the week baseline
    pub delta: Decimal,
    /// The baseline after this observation (the week's peak so far)
    pub baseline: Decimal,
    pub week_start: NaiveDate,
}
