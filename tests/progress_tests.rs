/// Tests for the progress reconciler: the single computation every
/// dashboard surface must agree on.

#[cfg(test)]
mod progress_formula_tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use zetasave_core::progress::progress_percent;

    #[test]
    fn test_progress_is_clamped_ratio() {
        assert_eq!(progress_percent(dec!(5000), dec!(10000)), 50.0);
        assert_eq!(progress_percent(dec!(10500), dec!(10000)), 100.0);
        assert_eq!(progress_percent(dec!(25), dec!(10000)), 0.25);
    }

    #[test]
    fn test_zero_or_negative_target_yields_zero() {
        assert_eq!(progress_percent(dec!(5000), Decimal::ZERO), 0.0);
        assert_eq!(progress_percent(dec!(5000), dec!(-1)), 0.0);
        assert_eq!(progress_percent(Decimal::ZERO, dec!(10000)), 0.0);
        assert_eq!(progress_percent(dec!(-10), dec!(10000)), 0.0);
    }

    #[test]
    fn test_monotonic_in_current_for_fixed_target() {
        let target = dec!(10000);
        let mut last = 0.0;
        for current in [0u32, 1, 100, 2500, 5000, 9999, 10000, 20000] {
            let p = progress_percent(Decimal::from(current), target);
            assert!(
                p >= last,
                "progress must be non-decreasing: {} -> {}",
                last,
                p
            );
            last = p;
        }
    }

    #[test]
    fn test_full_target_reaches_exactly_hundred() {
        assert_eq!(progress_percent(dec!(10000), dec!(10000)), 100.0);
    }
}

#[cfg(test)]
mod reconciler_tests {
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use zetasave_core::balances::AssetBalance;
    use zetasave_core::nfts::OwnedMilestones;
    use zetasave_core::plans::{MilestoneFlags, PlanToken, PlanView};
    use zetasave_core::progress::reconcile;

    fn plan(symbol: &str, chain_name: &str, target_amount: Decimal) -> PlanView {
        PlanView {
            id: 0,
            token: PlanToken {
                address: "0x05BA149A7bd6dC1F937fA9046A9e05C05f3b18b0".to_string(),
                symbol: symbol.to_string(),
                decimals: 18,
                chain_name: chain_name.to_string(),
            },
            target_amount,
            current_amount: Decimal::ZERO,
            target_amount_raw: 0,
            current_amount_raw: 0,
            progress: 0.0,
            start_time: Utc::now(),
            savings_goal: "Vacation".to_string(),
            is_active: true,
            milestones: MilestoneFlags {
                fifty: false,
                hundred: false,
            },
            source_chain_id: 11_155_111,
        }
    }

    fn asset(symbol: &str, chain_name: &str, usd_value: Decimal, is_error: bool) -> AssetBalance {
        AssetBalance {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            amount: "0.00".to_string(),
            value: "$0".to_string(),
            raw_balance: 0,
            usd_value,
            chain_id: 11_155_111,
            chain_name: chain_name.to_string(),
            is_loading: false,
            is_error,
        }
    }

    #[test]
    fn test_scenario_a_halfway() {
        let plan = plan("ETH", "Sepolia", dec!(4));
        let assets = vec![asset("ETH", "Sepolia", dec!(5000), false)];
        let view = reconcile(
            &plan,
            Some(dec!(10000)),
            &assets,
            dec!(5000),
            OwnedMilestones::default(),
        );
        assert_eq!(view.progress, 50.0);
        assert!(view.has50);
        assert!(!view.has100);
    }

    #[test]
    fn test_scenario_b_overshoot_clamps() {
        let plan = plan("ETH", "Sepolia", dec!(4));
        let assets = vec![asset("ETH", "Sepolia", dec!(10500), false)];
        let view = reconcile(
            &plan,
            Some(dec!(10000)),
            &assets,
            dec!(10500),
            OwnedMilestones::default(),
        );
        assert_eq!(view.progress, 100.0);
        assert!(view.has100);
    }

    #[test]
    fn test_scenario_c_unknown_symbol_has_zero_target() {
        // No explicit target and no configured rate: targetUSD = 0, so
        // progress stays 0 no matter the balance.
        let plan = plan("MYSTERY", "Sepolia", dec!(1000));
        let assets = vec![asset("MYSTERY", "Sepolia", dec!(999999), false)];
        let view = reconcile(
            &plan,
            None,
            &assets,
            dec!(999999),
            OwnedMilestones::default(),
        );
        assert_eq!(view.progress, 0.0);
        assert!(!view.has50);
        assert!(!view.has100);
    }

    #[test]
    fn test_derived_target_uses_mock_rate() {
        // 4 ETH at the mock $2500 rate = $10,000 target
        let plan = plan("ETH", "Sepolia", dec!(4));
        let assets = vec![asset("ETH", "Sepolia", dec!(2500), false)];
        let view = reconcile(&plan, None, &assets, dec!(2500), OwnedMilestones::default());
        assert_eq!(view.progress, 25.0);
    }

    #[test]
    fn test_matching_asset_preferred_over_total() {
        let plan = plan("ETH", "Sepolia", dec!(4));
        let assets = vec![
            asset("ETH", "Sepolia", dec!(2000), false),
            asset("USDC", "Sepolia", dec!(3000), false),
        ];
        // Total is 5000 but the plan's own asset holds 2000.
        let view = reconcile(
            &plan,
            Some(dec!(10000)),
            &assets,
            dec!(5000),
            OwnedMilestones::default(),
        );
        assert_eq!(view.progress, 20.0);
    }

    #[test]
    fn test_errored_asset_falls_back_to_total() {
        let plan = plan("ETH", "Sepolia", dec!(4));
        let assets = vec![
            asset("ETH", "Sepolia", dec!(0), true),
            asset("USDC", "Sepolia", dec!(3000), false),
        ];
        let view = reconcile(
            &plan,
            Some(dec!(10000)),
            &assets,
            dec!(3000),
            OwnedMilestones::default(),
        );
        assert_eq!(view.progress, 30.0);
    }

    #[test]
    fn test_unmatched_chain_falls_back_to_total() {
        let plan = plan("ETH", "Base Sepolia", dec!(4));
        let assets = vec![asset("ETH", "Sepolia", dec!(2000), false)];
        let view = reconcile(
            &plan,
            Some(dec!(10000)),
            &assets,
            dec!(6000),
            OwnedMilestones::default(),
        );
        assert_eq!(view.progress, 60.0);
    }

    #[test]
    fn test_milestone_thresholds() {
        let plan = plan("ETH", "Sepolia", dec!(4));
        let none = OwnedMilestones::default();

        let at_49 = reconcile(
            &plan,
            Some(dec!(100)),
            &[asset("ETH", "Sepolia", dec!(49), false)],
            dec!(49),
            none,
        );
        assert!(!at_49.has50 && !at_49.has100);

        let at_50 = reconcile(
            &plan,
            Some(dec!(100)),
            &[asset("ETH", "Sepolia", dec!(50), false)],
            dec!(50),
            none,
        );
        assert!(at_50.has50 && !at_50.has100);

        // The 100% milestone activates at 99, a deliberate tolerance band.
        let at_99 = reconcile(
            &plan,
            Some(dec!(100)),
            &[asset("ETH", "Sepolia", dec!(99), false)],
            dec!(99),
            none,
        );
        assert!(at_99.has50 && at_99.has100);
    }

    #[test]
    fn test_owned_nft_overrides_threshold() {
        // Balance was withdrawn after the milestone NFT was minted: the
        // observed ownership still counts.
        let plan = plan("ETH", "Sepolia", dec!(4));
        let owned = OwnedMilestones {
            fifty: true,
            hundred: true,
        };
        let view = reconcile(
            &plan,
            Some(dec!(10000)),
            &[asset("ETH", "Sepolia", dec!(10), false)],
            dec!(10),
            owned,
        );
        assert!(view.progress < 1.0);
        assert!(view.has50);
        assert!(view.has100);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let plan = plan("ETH", "Sepolia", dec!(4));
        let assets = vec![asset("ETH", "Sepolia", dec!(5000), false)];
        let a = reconcile(
            &plan,
            Some(dec!(10000)),
            &assets,
            dec!(5000),
            OwnedMilestones::default(),
        );
        let b = reconcile(
            &plan,
            Some(dec!(10000)),
            &assets,
            dec!(5000),
            OwnedMilestones::default(),
        );
        assert_eq!(a, b);
    }
}
