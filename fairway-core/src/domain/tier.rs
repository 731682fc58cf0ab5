//! Tier — the four-level prestige ladder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prestige tier, declared worst-to-best so the derived `Ord` agrees with
/// prestige rank: `Birdie < Eagle < Albatross < HoleInOne`.
///
/// Tier is anchored to the member's prestige rank, which advances only on
/// discrete promotion events owned by the order-settlement system. The
/// handicap score measures progress *within* a rank band and never moves a
/// member between tiers on its own.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Birdie,
    Eagle,
    Albatross,
    HoleInOne,
}

impl Tier {
    pub const COUNT: usize = 4;

    /// Highest tier; has no successor.
    pub const TERMINAL: Tier = Tier::HoleInOne;

    /// All tiers in ascending prestige order.
    pub const ALL: [Tier; Tier::COUNT] =
        [Tier::Birdie, Tier::Eagle, Tier::Albatross, Tier::HoleInOne];

    /// Ordinal rank: Birdie = 0 .. HoleInOne = 3.
    pub fn prestige_rank(self) -> u8 {
        self as u8
    }

    /// Clamped conversion from an externally supplied rank.
    ///
    /// Upstream snapshots are not trusted to be in-domain: negative ranks map
    /// to Birdie, ranks above 3 to HoleInOne. Out-of-domain input is never an
    /// error here — this sits underneath display code that must always render.
    pub fn from_prestige_rank(rank: i64) -> Self {
        match rank {
            ..=0 => Tier::Birdie,
            1 => Tier::Eagle,
            2 => Tier::Albatross,
            _ => Tier::HoleInOne,
        }
    }

    /// The next tier up, saturating at [`Tier::TERMINAL`].
    pub fn next(self) -> Self {
        match self {
            Tier::Birdie => Tier::Eagle,
            Tier::Eagle => Tier::Albatross,
            Tier::Albatross => Tier::HoleInOne,
            Tier::HoleInOne => Tier::HoleInOne,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Tier::TERMINAL
    }

    /// Case-insensitive name parse. Unrecognized names map to Birdie:
    /// treating an unknown tier as the lowest never grants undeserved
    /// benefits.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "eagle" => Tier::Eagle,
            "albatross" => Tier::Albatross,
            "hole_in_one" | "hole-in-one" | "holeinone" => Tier::HoleInOne,
            _ => Tier::Birdie,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Birdie => "Birdie",
            Tier::Eagle => "Eagle",
            Tier::Albatross => "Albatross",
            Tier::HoleInOne => "Hole-in-One",
        };
        write!(f, "{name}")
    }
}
