//! Settlement quoting — seller earnings at sale time.
//!
//! The checkout flow needs two tier-derived facts per sale: how much the
//! platform retains and when the seller's funds unlock. Both are pure
//! projections of the schedule, so a quote is deterministic for a given
//! `(rank, price, delivery date)` and can be recomputed anywhere.

use crate::domain::Tier;
use crate::engine;
use crate::money::format_price;
use chrono::NaiveDate;
use serde::Serialize;

/// Fee and payout facts for one sale, derived from the seller's tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementQuote {
    pub tier: Tier,
    pub sale_price_cents: i64,
    pub platform_fee_cents: i64,
    pub seller_net_cents: i64,
    pub payout_delay_days: u16,
    /// Date funds become available: delivery confirmation plus the tier's
    /// payout delay.
    pub payout_available_on: NaiveDate,
}

impl SettlementQuote {
    /// Quote a sale for a seller at the given prestige rank.
    ///
    /// Fees use integer basis-point math with half-up rounding, so repeated
    /// quotes for the same inputs agree to the cent. Negative sale prices
    /// clamp to zero, matching the engine's clamp-never-reject policy.
    pub fn compute(rank: i64, sale_price_cents: i64, delivered_on: NaiveDate) -> Self {
        let def = engine::tier_definition(rank);
        let price = sale_price_cents.max(0);
        let fee = platform_fee_cents(price, def.platform_fee_bps);
        Self {
            tier: def.tier,
            sale_price_cents: price,
            platform_fee_cents: fee,
            seller_net_cents: price - fee,
            payout_delay_days: def.payout_delay_days,
            payout_available_on: delivered_on + chrono::Duration::days(def.payout_delay_days as i64),
        }
    }

    /// One-line summary for reports.
    pub fn summary(&self) -> String {
        format!(
            "{} sale: fee {} ({:.1}%), net {}, payout {}",
            self.tier,
            format_price(self.platform_fee_cents),
            engine::platform_fee_rate(self.tier.prestige_rank() as i64) * 100.0,
            format_price(self.seller_net_cents),
            self.payout_available_on,
        )
    }
}

/// `price * bps / 10_000`, rounded half-up in integer arithmetic.
fn platform_fee_cents(price_cents: i64, fee_bps: u16) -> i64 {
    (price_cents * fee_bps as i64 + 5_000) / 10_000
}
