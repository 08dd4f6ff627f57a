use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw on-chain savings plan record, as returned by the contract.
/// Identified per (account, index); indices are not globally unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    pub zrc20_token: String,
    /// Target amount in the token's native decimals
    pub target_amount: u128,
    /// Accumulated amount, same units as the target
    pub current_amount: u128,
    /// Unix timestamp (seconds)
    pub start_time: u64,
    pub savings_goal: String,
    pub is_active: bool,
    pub milestone50_claimed: bool,
    pub milestone100_claimed: bool,
    pub source_chain_id: u64,
}

/// Token identity of a plan, resolved through the static registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanToken {
    pub address: String,
    pub symbol: String,
    pub decimals: u32,
    pub chain_name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneFlags {
    pub fifty: bool,
    pub hundred: bool,
}

/// A plan formatted for the display surfaces: decimal amounts, resolved
/// token metadata, and the merged plan-level progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanView {
    pub id: u64,
    pub token: PlanToken,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_amount_raw: u128,
    pub current_amount_raw: u128,
    /// Merged progress, 0-100
    pub progress: f64,
    pub start_time: DateTime<Utc>,
    pub savings_goal: String,
    pub is_active: bool,
    /// On-chain milestone claim flags
    pub milestones: MilestoneFlags,
    pub source_chain_id: u64,
}

/// Per-index read outcome. A failed read is preserved as `FetchFailed`
/// rather than collapsed into absence, so callers can tell "plan doesn't
/// exist" apart from "transient fetch failure".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum PlanReadOutcome {
    Present(PlanView),
    Absent,
    FetchFailed(String),
}

impl PlanReadOutcome {
    pub fn as_present(&self) -> Option<&PlanView> {
        match self {
            PlanReadOutcome::Present(view) => Some(view),
            _ => None,
        }
    }
}

/// Result of one full three-phase plan read for an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlansResult {
    pub plan_count: u64,
    /// One outcome per index in [0, plan_count)
    pub outcomes: Vec<PlanReadOutcome>,
}

impl PlansResult {
    pub fn empty() -> Self {
        PlansResult {
            plan_count: 0,
            outcomes: Vec::new(),
        }
    }

    /// The successfully read plans, in index order.
    pub fn plans(&self) -> Vec<&PlanView> {
        self.outcomes.iter().filter_map(|o| o.as_present()).collect()
    }
}
