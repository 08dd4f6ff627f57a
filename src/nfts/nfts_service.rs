//! NFT Reader - achievement NFT fetch with dynamic metadata parsing
//!
//! Token ids, on-chain metadata, and token URIs are read in three steps;
//! the Base64 JSON token URI carries the chain and asset attributes that
//! override the static registry. A token whose metadata read fails is
//! skipped; the rest of the gallery still renders.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use log::warn;

use crate::balances::format_units;
use crate::config::get_token_by_address;
use crate::errors::Result;
use crate::nfts::nfts_model::{AchievementNft, NftMetadataRecord, TokenUriMetadata};
use crate::nfts::nfts_traits::AchievementNftTrait;

const DATA_URI_PREFIX: &str = "data:application/json;base64,";
const FALLBACK_IMAGE: &str = "ipfs://bafybeidjcgqgolkjyhcezurig5h4azundsgjlx5aqeo5ka26lpdalxfz7i";
const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

pub struct NftReader<T: AchievementNftTrait> {
    contract: Arc<T>,
}

impl<T: AchievementNftTrait> NftReader<T> {
    pub fn new(contract: Arc<T>) -> Self {
        NftReader { contract }
    }

    /// Fetch and format the account's achievement NFTs. No connected
    /// account yields an empty gallery, not an error.
    pub async fn fetch_nfts(&self, account: Option<&str>) -> Result<Vec<AchievementNft>> {
        let address = match account {
            Some(a) if !a.is_empty() => a,
            _ => return Ok(Vec::new()),
        };

        let token_ids = self.contract.user_nft_ids(address).await?;
        if token_ids.is_empty() {
            return Ok(Vec::new());
        }

        let (metadata_results, uri_results) = futures::join!(
            self.contract.nft_metadata(&token_ids),
            self.contract.token_uris(&token_ids)
        );

        let mut nfts = Vec::with_capacity(token_ids.len());
        for (i, token_id) in token_ids.iter().enumerate() {
            let metadata = match metadata_results.get(i) {
                Some(Ok(m)) => m,
                Some(Err(e)) => {
                    warn!("metadata read failed for NFT #{}: {}", token_id, e);
                    continue;
                }
                None => continue,
            };

            let parsed_uri = match uri_results.get(i) {
                Some(Ok(uri)) => parse_token_uri(uri),
                _ => None,
            };

            nfts.push(format_nft(*token_id, metadata, parsed_uri.as_ref()));
        }

        Ok(nfts)
    }
}

fn format_nft(
    token_id: u64,
    metadata: &NftMetadataRecord,
    parsed_uri: Option<&TokenUriMetadata>,
) -> AchievementNft {
    let token_info = get_token_by_address(&metadata.token_address);
    let decimals = token_info.map(|t| t.decimals).unwrap_or(18);

    // Token URI attributes are more accurate than the registry: the
    // contract writes them at mint time from the plan itself.
    let chain_name = get_attribute(parsed_uri, "Chain")
        .or_else(|| token_info.map(|t| t.chain_name.to_string()))
        .unwrap_or_else(|| "Unknown".to_string());
    let asset_symbol = get_attribute(parsed_uri, "Asset")
        .or_else(|| token_info.map(|t| t.symbol.to_string()))
        .unwrap_or_else(|| "Unknown".to_string());

    let image_url = parsed_uri
        .map(|m| m.image.clone())
        .unwrap_or_else(|| FALLBACK_IMAGE.to_string());

    AchievementNft {
        token_id,
        milestone_percent: metadata.milestone_percent,
        achievement_date: DateTime::<Utc>::from_timestamp(metadata.achievement_date as i64, 0)
            .unwrap_or_else(Utc::now),
        savings_amount: format_units(metadata.savings_amount, decimals),
        savings_amount_raw: metadata.savings_amount,
        token_address: metadata.token_address.clone(),
        chain_name,
        asset_symbol,
        goal_description: metadata.goal_description.clone(),
        image_url: ipfs_to_http(&image_url),
    }
}

/// Decode a `data:application/json;base64,` token URI. Anything that is
/// not such a URI, or fails to decode, yields `None`.
pub fn parse_token_uri(uri: &str) -> Option<TokenUriMetadata> {
    let encoded = uri.strip_prefix(DATA_URI_PREFIX)?;
    let bytes = STANDARD.decode(encoded).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Case-insensitive attribute lookup in parsed token URI metadata.
pub fn get_attribute(metadata: Option<&TokenUriMetadata>, trait_type: &str) -> Option<String> {
    let attr = metadata?
        .attributes
        .iter()
        .find(|a| a.trait_type.eq_ignore_ascii_case(trait_type))?;
    match &attr.value {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Rewrite ipfs:// URLs to an HTTP gateway for display.
pub fn ipfs_to_http(url: &str) -> String {
    match url.strip_prefix("ipfs://") {
        Some(cid) => format!("{}{}", IPFS_GATEWAY, cid),
        None => url.to_string(),
    }
}
