use serde::{Deserialize, Serialize};

/// Reconciled progress for one plan. Derived, never stored: the same
/// inputs always produce the same view, and every display surface (goal
/// card, plan card, NFT gallery) reads the same one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressView {
    /// Percentage, clamped to 0-100
    pub progress: f64,
    pub has50: bool,
    pub has100: bool,
}
