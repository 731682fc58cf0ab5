//! Pure tier-derivation operations.
//!
//! Every function here is total and side-effect free: out-of-domain input
//! (negative ranks, scores past 18, NaN) is clamped, never rejected,
//! because these operations sit directly underneath display code that must
//! always render something reasonable. Nothing is cached — each call
//! recomputes from the static schedule and its arguments, so concurrent
//! callers need no coordination.

use crate::domain::{HandicapScore, Terrain, Tier, HANDICAP_MAX};
use crate::schedule::{TierDefinition, SCHEDULE};
use serde::Serialize;

/// Look up the definition for a prestige rank, clamped to `[0, 3]`.
pub fn tier_definition(rank: i64) -> &'static TierDefinition {
    &SCHEDULE[Tier::from_prestige_rank(rank).prestige_rank() as usize]
}

/// Definition for the rank above, saturating at the terminal tier.
///
/// At rank 3 this returns the Hole-in-One row itself — there is no tier
/// beyond it, and callers must treat "points until next tier" as zero
/// there rather than computing a target.
pub fn next_tier_definition(rank: i64) -> &'static TierDefinition {
    &SCHEDULE[Tier::from_prestige_rank(rank).next().prestige_rank() as usize]
}

/// Points still to work off before the next promotion becomes available.
///
/// Golf convention: the score itself is the remaining distance to the
/// elite bound (0.0) within the current band. Never negative.
pub fn points_until_next_tier(score: f64) -> f64 {
    HandicapScore::new(score).points_to_elite()
}

/// Progress through the current band as a percentage in `[0, 100]`.
/// Score 0.0 → 100% (ready to advance); score 18.0 → 0%.
pub fn progress_percent_to_next_tier(score: f64) -> f64 {
    HandicapScore::new(score).band_progress() * 100.0
}

/// Points between a member and a (possibly distant) target tier.
///
/// Zero whenever the target rank is at or below the current rank. Otherwise
/// the remaining points in the current band plus one full 18-point band per
/// tier beyond the immediate next one, rounded half-up to one decimal.
pub fn points_away_from_tier(target_rank: i64, current_rank: i64, score: f64) -> f64 {
    let target = Tier::from_prestige_rank(target_rank);
    let current = Tier::from_prestige_rank(current_rank);
    if target <= current {
        return 0.0;
    }
    let tiers_remaining = (target.prestige_rank() - current.prestige_rank()) as f64;
    round1(HandicapScore::new(score).raw() + HANDICAP_MAX * (tiers_remaining - 1.0))
}

/// Round half-up to one decimal place. `f64::round` is half-away-from-zero,
/// which coincides with half-up for the non-negative inputs here.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

// ── Field projections ────────────────────────────────────────────────
//
// Pricing, payout scheduling, and drop gating each need one attribute, not
// the whole row. Narrow accessors keep those callers decoupled from the
// definition shape; all of them read the one static table.

/// Platform fee as a fraction of sale price.
pub fn platform_fee_rate(rank: i64) -> f64 {
    tier_definition(rank).platform_fee_rate()
}

/// Days after delivery confirmation before funds release.
pub fn payout_delay_days(rank: i64) -> u16 {
    tier_definition(rank).payout_delay_days
}

/// Search/feed ranking boost as a fraction.
pub fn algo_boost(rank: i64) -> f64 {
    tier_definition(rank).visibility_boost_rate()
}

/// Hours of early access to limited drops.
pub fn drop_access_hours(rank: i64) -> u8 {
    tier_definition(rank).early_drop_access_hours
}

/// Storefront terrains available at this rank.
pub fn unlocked_terrains(rank: i64) -> &'static [Terrain] {
    tier_definition(rank).unlocked_terrains
}

/// All tier-derived facts for one member, recomputed on every call.
///
/// Convenience bundle for presentation callers that render a full status
/// card. Derivation only — holds no state the schedule and the two inputs
/// don't already determine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierStatus {
    pub tier: Tier,
    /// Clamped handicap score.
    pub score: f64,
    pub current: &'static TierDefinition,
    pub next: &'static TierDefinition,
    /// Zero at the terminal tier (no successor to progress toward).
    pub points_until_next: f64,
    pub progress_percent: f64,
}

impl TierStatus {
    pub fn derive(rank: i64, score: f64) -> Self {
        let tier = Tier::from_prestige_rank(rank);
        let clamped = HandicapScore::new(score);
        let points_until_next = if tier.is_terminal() {
            0.0
        } else {
            clamped.points_to_elite()
        };
        Self {
            tier,
            score: clamped.raw(),
            current: tier_definition(rank),
            next: next_tier_definition(rank),
            points_until_next,
            progress_percent: progress_percent_to_next_tier(score),
        }
    }
}
