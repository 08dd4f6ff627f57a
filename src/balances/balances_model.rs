use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance of one wallet asset on one chain, unique per (symbol, chainId)
/// within a single aggregation pass. Recomputed on every refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    pub symbol: String,
    pub name: String,
    /// Formatted display amount (e.g. "1.245")
    pub amount: String,
    /// Formatted USD value (e.g. "$2,890")
    pub value: String,
    /// Raw integer balance, retained unrounded for calculations
    pub raw_balance: u128,
    /// USD value as a number, for reconciliation
    pub usd_value: Decimal,
    pub chain_id: u64,
    pub chain_name: String,
    pub is_loading: bool,
    pub is_error: bool,
}

/// Result of one aggregation pass over the fixed wallet-asset list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalances {
    pub assets: Vec<AssetBalance>,
    /// Sum of USD values over resolved assets only (see `total_usd_value`)
    pub total_usd: Decimal,
    pub is_connected: bool,
    pub is_loading: bool,
    pub is_error: bool,
}

impl WalletBalances {
    pub fn disconnected() -> Self {
        WalletBalances {
            assets: Vec::new(),
            total_usd: Decimal::ZERO,
            is_connected: false,
            is_loading: false,
            is_error: false,
        }
    }
}

/// Aggregate USD total. Assets still loading or in error state are
/// excluded from the sum, not treated as zero, so the total is a lower
/// bound while any fetch is pending.
pub fn total_usd_value(assets: &[AssetBalance]) -> Decimal {
    assets
        .iter()
        .filter(|a| !a.is_loading && !a.is_error)
        .map(|a| a.usd_value)
        .sum()
}

/// Convert a raw integer balance to a decimal amount using the asset's
/// decimal count. Values outside `Decimal` range degrade to zero.
pub fn format_units(raw: u128, decimals: u32) -> Decimal {
    match i128::try_from(raw) {
        Ok(v) => Decimal::try_from_i128_with_scale(v, decimals).unwrap_or(Decimal::ZERO),
        Err(_) => Decimal::ZERO,
    }
}

/// Display amount with 2 to 4 fraction digits and thousands grouping,
/// matching the dashboard's formatting. Display only; raw values are kept
/// for calculations.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(4).normalize();
    let s = rounded.to_string();
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (s, String::new()),
    };
    let mut frac = frac_part;
    while frac.len() < 2 {
        frac.push('0');
    }
    format!("{}.{}", group_thousands(&int_part), frac)
}

/// USD display string rounded to whole dollars, e.g. "$2,890".
pub fn format_usd(value: Decimal) -> String {
    let rounded = value.round_dp(0);
    let s = rounded.to_string();
    match s.strip_prefix('-') {
        Some(rest) => format!("-${}", group_thousands(rest)),
        None => format!("${}", group_thousands(&s)),
    }
}

fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        let remaining = chars.len() - i;
        if i > 0 && remaining % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_units_with_decimals() {
        assert_eq!(format_units(1_500_000_000_000_000_000, 18), dec!(1.5));
        assert_eq!(format_units(2_500_000, 6), dec!(2.5));
    }

    #[test]
    fn amount_has_two_to_four_fraction_digits() {
        assert_eq!(format_amount(dec!(1.245)), "1.245");
        assert_eq!(format_amount(dec!(1)), "1.00");
        assert_eq!(format_amount(dec!(0.123456)), "0.1235");
        assert_eq!(format_amount(dec!(2450)), "2,450.00");
    }

    #[test]
    fn usd_rounds_to_whole_dollars() {
        assert_eq!(format_usd(dec!(2890.4)), "$2,890");
        assert_eq!(format_usd(dec!(1000000)), "$1,000,000");
        assert_eq!(format_usd(dec!(0)), "$0");
    }
}
