//! Static on-chain configuration: ZRC-20 token registry, chain names,
//! wallet asset list, and the mock USD rate table used on testnet.
//!
//! All of this is external configuration data, not derived logic. The
//! savings contract lives on ZetaChain Athens; the wallet assets span the
//! supported source chains.

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

pub const ETH_SEPOLIA: u64 = 11_155_111;
pub const BASE_SEPOLIA: u64 = 84_532;
pub const ZETACHAIN_ATHENS: u64 = 7_001;

/// ZetaSave contract on ZetaChain Athens testnet.
pub const ZETASAVE_CONTRACT_ADDRESS: &str = "0x9BE8A2541A047E9A48d0626d64CF73d8f17D95DD";
pub const ZETASAVE_CONTRACT_CHAIN_ID: u64 = ZETACHAIN_ATHENS;

/// A known ZRC-20 token on the settlement chain, standing in for an asset
/// held on a source chain.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub address: &'static str,
    pub symbol: &'static str,
    pub decimals: u32,
    pub source_chain_id: u64,
    pub chain_name: &'static str,
}

/// Where a wallet asset's balance comes from on its chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceSource {
    /// Native currency balance query.
    Native,
    /// ERC-20 `balanceOf` query against the given contract.
    Token(&'static str),
}

/// One entry of the fixed wallet-asset list the aggregator queries.
#[derive(Debug, Clone)]
pub struct AssetConfig {
    pub symbol: &'static str,
    pub name: &'static str,
    pub chain_id: u64,
    pub chain_name: &'static str,
    pub decimals: u32,
    pub source: BalanceSource,
}

lazy_static! {
    /// Supported ZRC-20 tokens, keyed by lowercase contract address.
    pub static ref SUPPORTED_TOKENS: Vec<TokenInfo> = vec![
        TokenInfo {
            address: "0x05BA149A7bd6dC1F937fA9046A9e05C05f3b18b0",
            symbol: "ETH",
            decimals: 18,
            source_chain_id: ETH_SEPOLIA,
            chain_name: "ETH Sepolia",
        },
        TokenInfo {
            address: "0x236b0DE675cC8F46AE186897fCCeFe3370C9eDeD",
            symbol: "ETH",
            decimals: 18,
            source_chain_id: BASE_SEPOLIA,
            chain_name: "Base Sepolia",
        },
        TokenInfo {
            address: "0xcC683A782f4B30c138787CB5576a86AF66fdc31d",
            symbol: "USDC",
            decimals: 6,
            source_chain_id: ETH_SEPOLIA,
            chain_name: "ETH Sepolia",
        },
        TokenInfo {
            address: "0xd0eFed75622e7AA4555EE44F296dA3744E3ceE19",
            symbol: "USDC",
            decimals: 6,
            source_chain_id: BASE_SEPOLIA,
            chain_name: "Base Sepolia",
        },
    ];

    /// Human-readable chain names.
    pub static ref CHAIN_NAMES: HashMap<u64, &'static str> = {
        let mut m = HashMap::new();
        m.insert(ETH_SEPOLIA, "ETH Sepolia");
        m.insert(BASE_SEPOLIA, "Base Sepolia");
        m.insert(ZETACHAIN_ATHENS, "ZetaChain Athens");
        m
    };

    /// Mock USD rates for testnet assets (no real value, no live feed).
    pub static ref MOCK_USD_RATES: HashMap<&'static str, Decimal> = {
        let mut m = HashMap::new();
        m.insert("ETH", dec!(2500));
        m.insert("ZETA", dec!(0.8));
        m.insert("USDC", dec!(1.0));
        m
    };

    /// The fixed (chain, asset) tuples the balance aggregator queries.
    pub static ref WALLET_ASSETS: Vec<AssetConfig> = vec![
        AssetConfig {
            symbol: "ETH",
            name: "Ethereum",
            chain_id: ETH_SEPOLIA,
            chain_name: "Sepolia",
            decimals: 18,
            source: BalanceSource::Native,
        },
        AssetConfig {
            symbol: "ETH",
            name: "Base",
            chain_id: BASE_SEPOLIA,
            chain_name: "Base Sepolia",
            decimals: 18,
            source: BalanceSource::Native,
        },
        AssetConfig {
            symbol: "ZETA",
            name: "ZetaChain",
            chain_id: ZETACHAIN_ATHENS,
            chain_name: "Athens",
            decimals: 18,
            source: BalanceSource::Native,
        },
        AssetConfig {
            symbol: "USDC",
            name: "USD Coin",
            chain_id: ETH_SEPOLIA,
            chain_name: "Sepolia",
            decimals: 6,
            source: BalanceSource::Token("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238"),
        },
    ];
}

/// Look up a ZRC-20 token by its contract address (case-insensitive).
pub fn get_token_by_address(address: &str) -> Option<&'static TokenInfo> {
    let normalized = address.to_lowercase();
    SUPPORTED_TOKENS
        .iter()
        .find(|t| t.address.to_lowercase() == normalized)
}

/// Human chain name, falling back to `Chain {id}` for unknown chains.
pub fn get_chain_name(chain_id: u64) -> String {
    CHAIN_NAMES
        .get(&chain_id)
        .map(|n| n.to_string())
        .unwrap_or_else(|| format!("Chain {}", chain_id))
}

/// Mock USD rate for a symbol; zero when no rate is configured.
pub fn mock_usd_rate(symbol: &str) -> Decimal {
    MOCK_USD_RATES
        .get(symbol)
        .copied()
        .unwrap_or(Decimal::ZERO)
}
