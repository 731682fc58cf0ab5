//! Terrain — storefront-cosmetic backgrounds unlocked by tier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storefront terrain identifier.
///
/// Unlocks are cumulative: every tier's terrain set is a superset of the
/// tier below it (checked by `schedule::validate_schedule`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Fairway,
    Green,
    Bunker,
    Links,
    Clubhouse,
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terrain::Fairway => "Fairway",
            Terrain::Green => "Green",
            Terrain::Bunker => "Bunker",
            Terrain::Links => "Links",
            Terrain::Clubhouse => "Clubhouse",
        };
        write!(f, "{name}")
    }
}

/// Comma-joined display list, for reports.
pub fn terrain_list(terrains: &[Terrain]) -> String {
    terrains
        .iter()
        .map(Terrain::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
