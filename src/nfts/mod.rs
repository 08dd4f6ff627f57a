pub mod nfts_model;
pub mod nfts_service;
pub mod nfts_traits;

pub use nfts_model::{
    AchievementNft, NftMetadataRecord, OwnedMilestones, TokenUriAttribute, TokenUriMetadata,
};
pub use nfts_service::{get_attribute, ipfs_to_http, parse_token_uri, NftReader};
pub use nfts_traits::AchievementNftTrait;
