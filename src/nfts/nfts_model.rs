use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw on-chain NFT metadata, as stored by the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftMetadataRecord {
    pub milestone_percent: u32,
    /// Unix timestamp (seconds)
    pub achievement_date: u64,
    pub savings_amount: u128,
    pub token_address: String,
    pub goal_description: String,
}

/// Achievement NFT formatted for the gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementNft {
    pub token_id: u64,
    pub milestone_percent: u32,
    pub achievement_date: DateTime<Utc>,
    pub savings_amount: Decimal,
    pub savings_amount_raw: u128,
    pub token_address: String,
    pub chain_name: String,
    pub asset_symbol: String,
    pub goal_description: String,
    /// HTTP gateway URL (ipfs:// already rewritten)
    pub image_url: String,
}

/// Metadata embedded in a Base64 `data:` token URI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUriMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<TokenUriAttribute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUriAttribute {
    pub trait_type: String,
    pub value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_type: Option<String>,
}

/// Milestone NFTs the account is known to hold. Observed ownership is
/// ground truth for milestone activation; computed thresholds are only a
/// predictive fallback used before the NFT exists.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedMilestones {
    pub fifty: bool,
    pub hundred: bool,
}

impl OwnedMilestones {
    pub fn from_nfts(nfts: &[AchievementNft]) -> Self {
        OwnedMilestones {
            fifty: nfts.iter().any(|n| n.milestone_percent >= 50),
            hundred: nfts.iter().any(|n| n.milestone_percent >= 100),
        }
    }
}
