use crate::errors::Result;
use crate::plans::plans_model::PlanRecord;
use async_trait::async_trait;

/// Read surface of the ZetaSave contract on the settlement chain. Batched
/// methods mirror the multicall reads the contract layer performs: one
/// result per requested index, so a single revert or decode failure does
/// not poison its siblings.
#[async_trait]
pub trait SavingsContractTrait: Send + Sync {
    /// Number of plans the account has ever created.
    async fn plan_count(&self, account: &str) -> Result<u64>;

    /// Batched `getUserPlan` read. `Ok(None)` means the contract reports
    /// no plan at that index; `Err` is a fetch/decode failure.
    async fn get_plans(&self, account: &str, indices: &[u64]) -> Vec<Result<Option<PlanRecord>>>;

    /// Batched `getProgress` read: the contract's own integer-arithmetic
    /// percentage (0-100, truncating).
    async fn get_progress(&self, account: &str, indices: &[u64]) -> Vec<Result<u8>>;
}
