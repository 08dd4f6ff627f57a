use serde::{Deserialize, Serialize};

use crate::balances::WalletBalances;
use crate::nfts::{AchievementNft, OwnedMilestones};
use crate::plans::{PlanView, PlansResult};
use crate::progress::ProgressView;
use crate::weekly::WeeklyDelta;

/// One plan together with its reconciled progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanProgressEntry {
    pub plan: PlanView,
    pub view: ProgressView,
}

/// Everything the dashboard surfaces render, produced in one pass so the
/// goal card, the plan cards, and the NFT gallery can never disagree.
/// Section-level fetch errors are carried as flags, not failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub balances: WalletBalances,
    pub plans: PlansResult,
    pub plans_error: Option<String>,
    pub progress: Vec<PlanProgressEntry>,
    pub nfts: Vec<AchievementNft>,
    pub nfts_error: Option<String>,
    pub owned_milestones: OwnedMilestones,
    pub weekly: Option<WeeklyDelta>,
}
