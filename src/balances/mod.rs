pub mod balances_model;
pub mod balances_service;
pub mod balances_traits;

pub use balances_model::{
    format_amount, format_units, format_usd, total_usd_value, AssetBalance, WalletBalances,
};
pub use balances_service::BalanceAggregator;
pub use balances_traits::ChainClientTrait;
