//! ZetaSave core - cross-chain savings plan reconciliation
//!
//! The logic shared by every dashboard surface of the ZetaSave dApp:
//! multi-chain balance aggregation, on-chain plan reading, USD-based
//! progress reconciliation with milestone activation, achievement-NFT
//! reading, and weekly balance-delta tracking. Wallet connection,
//! signing, and the RPC transport live behind the traits in each module.

pub mod balances;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod nfts;
pub mod plans;
pub mod progress;
pub mod tx;
pub mod weekly;

pub use errors::{Error, Result, ValidationError};
