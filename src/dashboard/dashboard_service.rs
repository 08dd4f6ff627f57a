//! Dashboard Service - facade over the reconciliation pipeline
//!
//! Runs the balance aggregation, the plan read, and the NFT read in
//! parallel, reconciles progress once, and records the weekly balance
//! observation. Every display surface consumes the resulting snapshot;
//! none of them recomputes progress on its own.

use std::sync::Arc;

use log::warn;
use rust_decimal::Decimal;

use crate::balances::{BalanceAggregator, ChainClientTrait};
use crate::dashboard::dashboard_model::{DashboardSnapshot, PlanProgressEntry};
use crate::nfts::{AchievementNftTrait, NftReader, OwnedMilestones};
use crate::plans::{PlanReader, PlansResult, SavingsContractTrait};
use crate::progress::reconcile;
use crate::weekly::{ClockTrait, SnapshotStoreTrait, WeeklyDeltaTracker};

pub struct DashboardService<B, S, N, St, C>
where
    B: ChainClientTrait,
    S: SavingsContractTrait,
    N: AchievementNftTrait,
    St: SnapshotStoreTrait,
    C: ClockTrait,
{
    balances: BalanceAggregator<B>,
    plans: PlanReader<S>,
    nfts: NftReader<N>,
    weekly: WeeklyDeltaTracker<St, C>,
}

impl<B, S, N, St, C> DashboardService<B, S, N, St, C>
where
    B: ChainClientTrait,
    S: SavingsContractTrait,
    N: AchievementNftTrait,
    St: SnapshotStoreTrait,
    C: ClockTrait,
{
    pub fn new(chain_client: Arc<B>, contract: Arc<S>, nft_contract: Arc<N>, store: Arc<St>, clock: Arc<C>) -> Self {
        DashboardService {
            balances: BalanceAggregator::new(chain_client),
            plans: PlanReader::new(contract),
            nfts: NftReader::new(nft_contract),
            weekly: WeeklyDeltaTracker::new(store, clock),
        }
    }

    /// One full refresh pass. `explicit_target_usd` is the USD target
    /// from the user's original goal-setting input, when one exists.
    pub async fn snapshot(
        &self,
        account: Option<&str>,
        explicit_target_usd: Option<Decimal>,
    ) -> DashboardSnapshot {
        let (balances, plans_result, nfts_result) = futures::join!(
            self.balances.fetch_balances(account),
            self.plans.fetch_plans(account),
            self.nfts.fetch_nfts(account)
        );

        let (plans, plans_error) = match plans_result {
            Ok(p) => (p, None),
            Err(e) => {
                warn!("plan read failed: {}", e);
                (PlansResult::empty(), Some(e.to_string()))
            }
        };

        let (nfts, nfts_error) = match nfts_result {
            Ok(n) => (n, None),
            Err(e) => {
                warn!("NFT read failed: {}", e);
                (Vec::new(), Some(e.to_string()))
            }
        };

        let owned_milestones = OwnedMilestones::from_nfts(&nfts);

        let progress: Vec<PlanProgressEntry> = plans
            .plans()
            .into_iter()
            .map(|plan| PlanProgressEntry {
                view: reconcile(
                    plan,
                    explicit_target_usd,
                    &balances.assets,
                    balances.total_usd,
                    owned_milestones,
                ),
                plan: plan.clone(),
            })
            .collect();

        // Weekly tracking only applies to a connected account with a
        // resolved balance total; a storage failure degrades to no figure.
        let weekly = match account {
            Some(address) if balances.is_connected => {
                match self.weekly.observe(address, balances.total_usd) {
                    Ok(delta) => Some(delta),
                    Err(e) => {
                        warn!("weekly snapshot update failed: {}", e);
                        None
                    }
                }
            }
            _ => None,
        };

        DashboardSnapshot {
            balances,
            plans,
            plans_error,
            progress,
            nfts,
            nfts_error,
            owned_milestones,
            weekly,
        }
    }
}
