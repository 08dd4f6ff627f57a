//! Plan Reader - three-phase on-chain plan fetch
//!
//! Reads the account's plan count, then batch-reads every plan record and
//! the contract's own progress value, and formats the results for the
//! display surfaces. Token metadata comes from the static registry with
//! "Unknown"/18-decimals fallbacks.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::balances::format_units;
use crate::config::{get_chain_name, get_token_by_address};
use crate::errors::Result;
use crate::plans::plans_model::{
    MilestoneFlags, PlanReadOutcome, PlanRecord, PlanToken, PlanView, PlansResult,
};
use crate::plans::plans_traits::SavingsContractTrait;

pub struct PlanReader<T: SavingsContractTrait> {
    contract: Arc<T>,
}

impl<T: SavingsContractTrait> PlanReader<T> {
    pub fn new(contract: Arc<T>) -> Self {
        PlanReader { contract }
    }

    /// One full read pass. No connected account yields an empty result;
    /// a failed count read fails the whole batch.
    pub async fn fetch_plans(&self, account: Option<&str>) -> Result<PlansResult> {
        let address = match account {
            Some(a) if !a.is_empty() => a,
            _ => return Ok(PlansResult::empty()),
        };

        // Phase 1: plan count gates the two batched reads.
        let count = self.contract.plan_count(address).await?;
        if count == 0 {
            return Ok(PlansResult::empty());
        }
        let indices: Vec<u64> = (0..count).collect();

        // Phases 2 and 3 both depend only on the count.
        let (records, progresses) = futures::join!(
            self.contract.get_plans(address, &indices),
            self.contract.get_progress(address, &indices)
        );

        let mut outcomes = Vec::with_capacity(indices.len());
        for (i, record) in records.into_iter().enumerate() {
            let outcome = match record {
                Ok(Some(plan)) => {
                    let contract_progress = match progresses.get(i) {
                        Some(Ok(p)) => Some(*p),
                        Some(Err(e)) => {
                            debug!("progress read failed for plan {}: {}", i, e);
                            None
                        }
                        None => None,
                    };
                    PlanReadOutcome::Present(format_plan(i as u64, &plan, contract_progress))
                }
                Ok(None) => PlanReadOutcome::Absent,
                Err(e) => {
                    warn!("plan {} fetch failed: {}", i, e);
                    PlanReadOutcome::FetchFailed(e.to_string())
                }
            };
            outcomes.push(outcome);
        }

        debug!(
            "formatted {} of {} plans",
            outcomes.iter().filter(|o| o.as_present().is_some()).count(),
            count
        );

        Ok(PlansResult {
            plan_count: count,
            outcomes,
        })
    }
}

/// Resolve token metadata and merge the two progress sources into one
/// plan-level percentage.
fn format_plan(id: u64, plan: &PlanRecord, contract_progress: Option<u8>) -> PlanView {
    let token_info = get_token_by_address(&plan.zrc20_token);
    let decimals = token_info.map(|t| t.decimals).unwrap_or(18);
    let symbol = token_info.map(|t| t.symbol.to_string()).unwrap_or_else(|| "Unknown".to_string());
    let chain_name = token_info
        .map(|t| t.chain_name.to_string())
        .unwrap_or_else(|| get_chain_name(plan.source_chain_id));

    let target_amount = format_units(plan.target_amount, decimals);
    let current_amount = format_units(plan.current_amount, decimals);

    let progress = merge_progress(
        contract_progress,
        plan.current_amount,
        plan.target_amount,
        current_amount,
        target_amount,
    );

    PlanView {
        id,
        token: PlanToken {
            address: plan.zrc20_token.clone(),
            symbol,
            decimals,
            chain_name,
        },
        target_amount,
        current_amount,
        target_amount_raw: plan.target_amount,
        current_amount_raw: plan.current_amount,
        progress,
        start_time: DateTime::<Utc>::from_timestamp(plan.start_time as i64, 0)
            .unwrap_or_else(Utc::now),
        savings_goal: plan.savings_goal.clone(),
        is_active: plan.is_active,
        milestones: MilestoneFlags {
            fifty: plan.milestone50_claimed,
            hundred: plan.milestone100_claimed,
        },
        source_chain_id: plan.source_chain_id,
    }
}

/// Plan-level progress precedence: the contract value is used when it is
/// meaningful (> 0, or nothing has been deposited), but the amount-derived
/// value wins when it is more precise. The contract computes with integer
/// division and rounds small deposits down to 0.
fn merge_progress(
    contract_progress: Option<u8>,
    current_raw: u128,
    target_raw: u128,
    current: Decimal,
    target: Decimal,
) -> f64 {
    let mut progress = 0.0_f64;

    if let Some(cp) = contract_progress {
        if cp > 0 || current_raw == 0 {
            progress = f64::from(cp);
        }
    }

    if current_raw > 0 && target_raw > 0 && target > Decimal::ZERO {
        let ratio = (current / target * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0);
        let calculated = ratio.min(100.0);
        if calculated > progress || (progress == 0.0 && current > Decimal::ZERO) {
            progress = calculated;
        }
    }

    progress
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn contract_progress_used_when_meaningful() {
        let p = merge_progress(Some(40), 400, 1000, dec!(0.4), dec!(1));
        assert_eq!(p, 40.0);
    }

    #[test]
    fn calculated_progress_wins_when_contract_truncates_to_zero() {
        // 0.5% deposit: integer division in the contract reports 0
        let p = merge_progress(Some(0), 5, 1000, dec!(0.005), dec!(1));
        assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn zero_deposits_keep_contract_zero() {
        let p = merge_progress(Some(0), 0, 1000, dec!(0), dec!(1));
        assert_eq!(p, 0.0);
    }

    #[test]
    fn calculated_progress_clamps_at_hundred() {
        let p = merge_progress(None, 1500, 1000, dec!(1.5), dec!(1));
        assert_eq!(p, 100.0);
    }
}
