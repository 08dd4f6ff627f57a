//! Progress Reconciler - the single authoritative progress computation
//!
//! Merges one plan record, the wallet balances, and an optional
//! user-supplied USD target into one `ProgressView`. All invalid or
//! missing inputs degrade to progress = 0; the dashboard never shows an
//! error for a derived display number.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::balances::AssetBalance;
use crate::config::mock_usd_rate;
use crate::nfts::OwnedMilestones;
use crate::plans::PlanView;
use crate::progress::progress_model::ProgressView;

pub const MILESTONE_50_THRESHOLD: f64 = 50.0;
/// 99, not 100: a tolerance band absorbing floating rounding and
/// price-rate staleness between the USD view and the on-chain amounts.
pub const MILESTONE_100_THRESHOLD: f64 = 99.0;

/// Clamped percentage of `current_usd` against `target_usd`. Zero or
/// negative on either side yields 0.
pub fn progress_percent(current_usd: Decimal, target_usd: Decimal) -> f64 {
    if current_usd <= Decimal::ZERO || target_usd <= Decimal::ZERO {
        return 0.0;
    }
    let ratio = (current_usd / target_usd * Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0);
    ratio.min(100.0)
}

/// USD target for a plan: the user's explicit goal-setting input wins;
/// otherwise the native target converted at the mock rate (0 for unknown
/// symbols, which yields a 0 target and therefore 0 progress).
pub fn resolve_target_usd(plan: &PlanView, explicit_target_usd: Option<Decimal>) -> Decimal {
    match explicit_target_usd {
        Some(target) => target,
        None => plan.target_amount * mock_usd_rate(&plan.token.symbol),
    }
}

/// USD value backing a plan: the wallet balance of the plan's own asset
/// when its fetch succeeded, otherwise the aggregate total across all
/// assets. Matching is by symbol and chain-name string equality.
pub fn resolve_current_usd(
    plan: &PlanView,
    assets: &[AssetBalance],
    total_usd: Decimal,
) -> Decimal {
    assets
        .iter()
        .find(|a| {
            a.symbol == plan.token.symbol
                && a.chain_name == plan.token.chain_name
                && !a.is_error
                && !a.is_loading
        })
        .map(|a| a.usd_value)
        .unwrap_or(total_usd)
}

/// Produce the `ProgressView` consumed identically by every display
/// surface. Observed NFT ownership takes precedence over the computed
/// thresholds: ownership is ground truth, the threshold is a predictive
/// fallback used before the NFT exists.
pub fn reconcile(
    plan: &PlanView,
    explicit_target_usd: Option<Decimal>,
    assets: &[AssetBalance],
    total_usd: Decimal,
    owned: OwnedMilestones,
) -> ProgressView {
    let target_usd = resolve_target_usd(plan, explicit_target_usd);
    let current_usd = resolve_current_usd(plan, assets, total_usd);
    let progress = progress_percent(current_usd, target_usd);

    ProgressView {
        progress,
        has50: owned.fifty || progress >= MILESTONE_50_THRESHOLD,
        has100: owned.hundred || progress >= MILESTONE_100_THRESHOLD,
    }
}
