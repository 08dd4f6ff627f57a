use crate::errors::Result;
use crate::nfts::nfts_model::NftMetadataRecord;
use async_trait::async_trait;

/// Read surface for the achievement-NFT side of the ZetaSave contract.
#[async_trait]
pub trait AchievementNftTrait: Send + Sync {
    /// All NFT token ids held by the account.
    async fn user_nft_ids(&self, account: &str) -> Result<Vec<u64>>;

    /// Batched `getNFTMetadata` read, one result per token id.
    async fn nft_metadata(&self, token_ids: &[u64]) -> Vec<Result<NftMetadataRecord>>;

    /// Batched `tokenURI` read, one result per token id.
    async fn token_uris(&self, token_ids: &[u64]) -> Vec<Result<String>>;
}
