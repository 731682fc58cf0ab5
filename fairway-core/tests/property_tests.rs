//! Property tests for engine invariants.
//!
//! Uses proptest to verify:
//! 1. Totality — every operation accepts any f64/i64 without panicking and
//!    returns an in-domain value
//! 2. Monotonicity — fees fall and unlocks rise with rank
//! 3. Purity — repeated calls are byte-identical
//! 4. Points-away laws — zero at reached targets, never negative

use proptest::prelude::*;
use fairway_core::engine::{
    algo_boost, drop_access_hours, payout_delay_days, platform_fee_rate,
    points_away_from_tier, points_until_next_tier, progress_percent_to_next_tier,
    tier_definition, TierStatus,
};
use fairway_core::money::format_price;
use fairway_core::settlement::SettlementQuote;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_rank() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => 0i64..4,
        1 => any::<i64>(),
    ]
}

fn arb_score() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 0.0..18.0f64,
        1 => any::<f64>(),
    ]
}

// ── 1. Totality ──────────────────────────────────────────────────────

proptest! {
    /// Lookups accept any rank and return a row with an in-domain rank.
    #[test]
    fn tier_definition_is_total(rank in any::<i64>()) {
        let def = tier_definition(rank);
        prop_assert!(def.prestige_rank <= 3);
    }

    /// Progress stays inside [0, 100] for any score, including NaN and ∞.
    #[test]
    fn progress_always_in_range(score in arb_score()) {
        let p = progress_percent_to_next_tier(score);
        prop_assert!((0.0..=100.0).contains(&p));
    }

    /// Points-until-next stays inside [0, 18] for any score.
    #[test]
    fn points_until_next_in_band(score in arb_score()) {
        let points = points_until_next_tier(score);
        prop_assert!((0.0..=18.0).contains(&points));
    }

    /// Status derivation never panics and agrees with the free functions.
    #[test]
    fn status_derivation_is_total(rank in arb_rank(), score in arb_score()) {
        let status = TierStatus::derive(rank, score);
        prop_assert_eq!(status.current, tier_definition(rank));
        prop_assert!((0.0..=100.0).contains(&status.progress_percent));
    }
}

// ── 2. Monotonicity ──────────────────────────────────────────────────

proptest! {
    /// Higher rank never pays a higher fee, waits longer, or loses boost.
    #[test]
    fn rank_order_implies_benefit_order(r1 in 0i64..4, r2 in 0i64..4) {
        if r1 < r2 {
            prop_assert!(platform_fee_rate(r1) > platform_fee_rate(r2));
            prop_assert!(payout_delay_days(r1) >= payout_delay_days(r2));
            prop_assert!(algo_boost(r1) <= algo_boost(r2));
            prop_assert!(drop_access_hours(r1) <= drop_access_hours(r2));
        }
    }
}

// ── 3. Purity ────────────────────────────────────────────────────────

proptest! {
    /// Same inputs, byte-identical outputs: the serialized status of two
    /// calls must match exactly.
    #[test]
    fn derivation_is_pure(rank in arb_rank(), score in arb_score()) {
        let a = serde_json::to_string(&TierStatus::derive(rank, score)).unwrap();
        let b = serde_json::to_string(&TierStatus::derive(rank, score)).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Quotes are deterministic to the cent.
    #[test]
    fn quotes_are_deterministic(rank in arb_rank(), price in any::<i32>()) {
        let delivered = chrono::NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let a = SettlementQuote::compute(rank, price as i64, delivered);
        let b = SettlementQuote::compute(rank, price as i64, delivered);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.platform_fee_cents + a.seller_net_cents, a.sale_price_cents);
        prop_assert!(a.platform_fee_cents >= 0);
    }
}

// ── 4. Points-away laws ──────────────────────────────────────────────

proptest! {
    /// Exactly zero whenever the target is at or below the current rank.
    #[test]
    fn zero_when_target_reached(
        target in -5i64..10,
        current in -5i64..10,
        score in arb_score(),
    ) {
        let away = points_away_from_tier(target, current, score);
        prop_assert!(away >= 0.0);
        let target_clamped = target.clamp(0, 3);
        let current_clamped = current.clamp(0, 3);
        if target_clamped <= current_clamped {
            prop_assert_eq!(away, 0.0);
        } else {
            // Bounded by the remaining bands.
            let bands = (target_clamped - current_clamped) as f64;
            prop_assert!(away <= 18.0 * bands);
        }
    }

    /// A farther target is never fewer points away.
    #[test]
    fn farther_targets_cost_more(current in 0i64..4, score in 0.0..18.0f64) {
        let mut last = 0.0;
        for target in current..4 {
            let away = points_away_from_tier(target, current, score);
            prop_assert!(away >= last);
            last = away;
        }
    }
}

// ── Money formatting ─────────────────────────────────────────────────

proptest! {
    /// Formatting is total over i64 and always carries two decimals.
    #[test]
    fn format_price_is_total(cents in any::<i64>()) {
        let s = format_price(cents);
        prop_assert!(s.contains('$'));
        let decimals = s.rsplit('.').next().unwrap();
        prop_assert_eq!(decimals.len(), 2);
    }
}
