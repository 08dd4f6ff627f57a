//! Balance Aggregator - multi-chain wallet balance collection
//!
//! Queries native and token balances for the fixed wallet-asset list,
//! converts each to a display amount and a mock USD value, and sums the
//! aggregate total. Fetches for different (chain, asset) tuples run
//! concurrently and fail independently.

use std::sync::Arc;

use futures::future::join_all;
use log::warn;
use rust_decimal::Decimal;

use crate::balances::balances_model::{
    format_amount, format_units, format_usd, total_usd_value, AssetBalance, WalletBalances,
};
use crate::balances::balances_traits::ChainClientTrait;
use crate::config::{mock_usd_rate, AssetConfig, BalanceSource, WALLET_ASSETS};

pub struct BalanceAggregator<T: ChainClientTrait> {
    client: Arc<T>,
}

impl<T: ChainClientTrait> BalanceAggregator<T> {
    pub fn new(client: Arc<T>) -> Self {
        BalanceAggregator { client }
    }

    /// One aggregation pass for the connected account. `None` means no
    /// wallet is connected: every entry reports a not-loading,
    /// not-connected state and the aggregate is empty.
    pub async fn fetch_balances(&self, account: Option<&str>) -> WalletBalances {
        let address = match account {
            Some(a) if !a.is_empty() => a,
            _ => return WalletBalances::disconnected(),
        };

        let fetches = WALLET_ASSETS
            .iter()
            .map(|cfg| self.fetch_asset(cfg, address));
        let assets: Vec<AssetBalance> = join_all(fetches).await;

        let total_usd = total_usd_value(&assets);
        let is_error = assets.iter().any(|a| a.is_error);

        WalletBalances {
            assets,
            total_usd,
            is_connected: true,
            is_loading: false,
            is_error,
        }
    }

    /// Re-issue all underlying queries. Duplicate concurrent refreshes
    /// are not coalesced; avoiding them is the caller's responsibility.
    pub async fn refetch(&self, account: Option<&str>) -> WalletBalances {
        self.fetch_balances(account).await
    }

    async fn fetch_asset(&self, cfg: &AssetConfig, account: &str) -> AssetBalance {
        let result = match &cfg.source {
            BalanceSource::Native => self.client.native_balance(cfg.chain_id, account).await,
            BalanceSource::Token(token) => {
                self.client.token_balance(cfg.chain_id, token, account).await
            }
        };

        match result {
            Ok(raw) => Self::resolved(cfg, raw),
            Err(e) => {
                warn!(
                    "balance fetch failed for {} on {}: {}",
                    cfg.symbol, cfg.chain_name, e
                );
                Self::errored(cfg)
            }
        }
    }

    fn resolved(cfg: &AssetConfig, raw: u128) -> AssetBalance {
        let amount = format_units(raw, cfg.decimals);
        let usd_value = amount * mock_usd_rate(cfg.symbol);

        AssetBalance {
            symbol: cfg.symbol.to_string(),
            name: cfg.name.to_string(),
            amount: format_amount(amount),
            value: format_usd(usd_value),
            raw_balance: raw,
            usd_value,
            chain_id: cfg.chain_id,
            chain_name: cfg.chain_name.to_string(),
            is_loading: false,
            is_error: false,
        }
    }

    fn errored(cfg: &AssetConfig) -> AssetBalance {
        AssetBalance {
            symbol: cfg.symbol.to_string(),
            name: cfg.name.to_string(),
            amount: format_amount(Decimal::ZERO),
            value: format_usd(Decimal::ZERO),
            raw_balance: 0,
            usd_value: Decimal::ZERO,
            chain_id: cfg.chain_id,
            chain_name: cfg.chain_name.to_string(),
            is_loading: false,
            is_error: true,
        }
    }
}
