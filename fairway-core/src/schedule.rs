//! The tier schedule — single source of truth for tier attributes.
//!
//! Every fee rate, payout delay, unlock, and benefit string lives in one
//! static table. Accessors in `engine` are field projections of this table;
//! nothing else in the workspace may restate these numbers.

use crate::domain::{Terrain, Tier};
use serde::Serialize;
use thiserror::Error;

/// Schedule revision. Bump whenever any row changes.
pub const SCHEDULE_VERSION: u32 = 1;

/// Immutable attribute row for one tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierDefinition {
    pub tier: Tier,
    pub name: &'static str,
    pub emoji: &'static str,
    /// Ordinal rank, equal to `tier.prestige_rank()`. Kept explicit so the
    /// serialized table is self-describing.
    pub prestige_rank: u8,
    /// Platform fee in basis points of sale price (seller side).
    pub platform_fee_bps: u16,
    /// Days after delivery confirmation before funds are released.
    pub payout_delay_days: u16,
    /// Hours of early access to limited drops.
    pub early_drop_access_hours: u8,
    /// Search/feed ranking boost, whole percent.
    pub visibility_boost_percent: u8,
    pub unlocked_terrains: &'static [Terrain],
    /// Display strings only — no logic reads these.
    pub benefits: &'static [&'static str],
}

impl TierDefinition {
    /// Fee as a fraction of sale price.
    pub fn platform_fee_rate(&self) -> f64 {
        self.platform_fee_bps as f64 / 10_000.0
    }

    /// Visibility boost as a fraction.
    pub fn visibility_boost_rate(&self) -> f64 {
        self.visibility_boost_percent as f64 / 100.0
    }

    pub fn has_terrain(&self, terrain: Terrain) -> bool {
        self.unlocked_terrains.contains(&terrain)
    }
}

/// The schedule, indexed by prestige rank.
pub static SCHEDULE: [TierDefinition; Tier::COUNT] = [
    TierDefinition {
        tier: Tier::Birdie,
        name: "Birdie",
        emoji: "🐦",
        prestige_rank: 0,
        platform_fee_bps: 1000,
        payout_delay_days: 5,
        early_drop_access_hours: 0,
        visibility_boost_percent: 0,
        unlocked_terrains: &[Terrain::Fairway, Terrain::Green],
        benefits: &[
            "Standard 10% platform fee",
            "Payout 5 days after delivery confirmation",
            "Fairway and Green storefront terrains",
        ],
    },
    TierDefinition {
        tier: Tier::Eagle,
        name: "Eagle",
        emoji: "🦅",
        prestige_rank: 1,
        platform_fee_bps: 950,
        payout_delay_days: 3,
        early_drop_access_hours: 1,
        visibility_boost_percent: 10,
        unlocked_terrains: &[Terrain::Fairway, Terrain::Green, Terrain::Bunker],
        benefits: &[
            "Reduced 9.5% platform fee",
            "Payout 3 days after delivery confirmation",
            "1-hour early access to limited drops",
            "+10% search visibility",
            "Bunker storefront terrain",
        ],
    },
    TierDefinition {
        tier: Tier::Albatross,
        name: "Albatross",
        emoji: "🕊️",
        prestige_rank: 2,
        platform_fee_bps: 900,
        payout_delay_days: 2,
        early_drop_access_hours: 2,
        visibility_boost_percent: 15,
        unlocked_terrains: &[
            Terrain::Fairway,
            Terrain::Green,
            Terrain::Bunker,
            Terrain::Links,
        ],
        benefits: &[
            "Reduced 9% platform fee",
            "Payout 2 days after delivery confirmation",
            "2-hour early access to limited drops",
            "+15% search visibility",
            "Links storefront terrain",
        ],
    },
    TierDefinition {
        tier: Tier::HoleInOne,
        name: "Hole-in-One",
        emoji: "⛳",
        prestige_rank: 3,
        platform_fee_bps: 850,
        payout_delay_days: 1,
        early_drop_access_hours: 3,
        visibility_boost_percent: 20,
        unlocked_terrains: &[
            Terrain::Fairway,
            Terrain::Green,
            Terrain::Bunker,
            Terrain::Links,
            Terrain::Clubhouse,
        ],
        benefits: &[
            "Lowest 8.5% platform fee",
            "Next-day payout after delivery confirmation",
            "3-hour early access to limited drops",
            "+20% search visibility",
            "Clubhouse storefront terrain",
        ],
    },
];

/// Deterministic fingerprint of the schedule.
///
/// BLAKE3 over the canonical JSON serialization of version + rows. Two
/// deployments charge the same fees iff their fingerprints match, so this
/// can be asserted across services at startup.
pub fn schedule_fingerprint() -> String {
    let canonical = serde_json::json!({
        "version": SCHEDULE_VERSION,
        "rows": SCHEDULE,
    });
    blake3::hash(canonical.to_string().as_bytes())
        .to_hex()
        .to_string()
}

/// Errors from schedule self-validation.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("row {index} has prestige_rank {found}, expected {index}")]
    RankMismatch { index: usize, found: u8 },
    #[error("platform fee must strictly decrease from rank {lower} to rank {upper}")]
    FeeNotDecreasing { lower: u8, upper: u8 },
    #[error("payout delay must strictly decrease from rank {lower} to rank {upper}")]
    PayoutNotDecreasing { lower: u8, upper: u8 },
    #[error("drop access must strictly increase from rank {lower} to rank {upper}")]
    DropAccessNotIncreasing { lower: u8, upper: u8 },
    #[error("visibility boost must strictly increase from rank {lower} to rank {upper}")]
    BoostNotIncreasing { lower: u8, upper: u8 },
    #[error("terrain unlocks must be cumulative: rank {upper} is missing {terrain}")]
    TerrainNotCumulative { upper: u8, terrain: Terrain },
}

/// Check the schedule's structural invariants: rows are indexed by rank,
/// fees and payout delays strictly decrease with rank, unlocks strictly
/// increase, and terrain sets are cumulative.
///
/// The accessors never call this — the static table is validated by tests
/// and by the CLI at startup.
pub fn validate_schedule() -> Result<(), ScheduleError> {
    for (index, row) in SCHEDULE.iter().enumerate() {
        if row.prestige_rank as usize != index || row.tier.prestige_rank() as usize != index {
            return Err(ScheduleError::RankMismatch {
                index,
                found: row.prestige_rank,
            });
        }
    }
    for pair in SCHEDULE.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        let ranks = (lower.prestige_rank, upper.prestige_rank);
        if upper.platform_fee_bps >= lower.platform_fee_bps {
            return Err(ScheduleError::FeeNotDecreasing {
                lower: ranks.0,
                upper: ranks.1,
            });
        }
        if upper.payout_delay_days >= lower.payout_delay_days {
            return Err(ScheduleError::PayoutNotDecreasing {
                lower: ranks.0,
                upper: ranks.1,
            });
        }
        if upper.early_drop_access_hours <= lower.early_drop_access_hours {
            return Err(ScheduleError::DropAccessNotIncreasing {
                lower: ranks.0,
                upper: ranks.1,
            });
        }
        if upper.visibility_boost_percent <= lower.visibility_boost_percent {
            return Err(ScheduleError::BoostNotIncreasing {
                lower: ranks.0,
                upper: ranks.1,
            });
        }
        for terrain in lower.unlocked_terrains {
            if !upper.has_terrain(*terrain) {
                return Err(ScheduleError::TerrainNotCumulative {
                    upper: ranks.1,
                    terrain: *terrain,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_is_valid() {
        validate_schedule().unwrap();
    }

    #[test]
    fn rows_match_published_rates() {
        assert_eq!(SCHEDULE[0].platform_fee_bps, 1000);
        assert_eq!(SCHEDULE[0].payout_delay_days, 5);
        assert_eq!(SCHEDULE[1].platform_fee_bps, 950);
        assert_eq!(SCHEDULE[1].payout_delay_days, 3);
        assert_eq!(SCHEDULE[2].platform_fee_bps, 900);
        assert_eq!(SCHEDULE[2].payout_delay_days, 2);
        assert_eq!(SCHEDULE[3].platform_fee_bps, 850);
        assert_eq!(SCHEDULE[3].payout_delay_days, 1);
    }

    #[test]
    fn fee_rate_is_a_fraction() {
        assert_eq!(SCHEDULE[0].platform_fee_rate(), 0.10);
        assert_eq!(SCHEDULE[3].platform_fee_rate(), 0.085);
        assert_eq!(SCHEDULE[1].visibility_boost_rate(), 0.10);
    }

    #[test]
    fn fingerprint_is_stable_across_calls() {
        let a = schedule_fingerprint();
        let b = schedule_fingerprint();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn terminal_row_unlocks_every_terrain() {
        let top = &SCHEDULE[Tier::COUNT - 1];
        for terrain in [
            Terrain::Fairway,
            Terrain::Green,
            Terrain::Bunker,
            Terrain::Links,
            Terrain::Clubhouse,
        ] {
            assert!(top.has_terrain(terrain));
        }
    }
}
