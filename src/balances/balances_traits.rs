use crate::errors::Result;
use async_trait::async_trait;

/// External blockchain-client capability for balance reads. The wallet
/// connector and RPC transport live behind this seam; the aggregator only
/// issues queries and interprets results.
#[async_trait]
pub trait ChainClientTrait: Send + Sync {
    /// Native currency balance of `account` on `chain_id`, in the
    /// chain's smallest unit.
    async fn native_balance(&self, chain_id: u64, account: &str) -> Result<u128>;

    /// ERC-20 `balanceOf(account)` for `token_address` on `chain_id`.
    async fn token_balance(&self, chain_id: u64, token_address: &str, account: &str)
        -> Result<u128>;
}
