//! Member snapshot — the engine's input record.

use super::handicap::HandicapScore;
use super::tier::Tier;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Marketplace role. Prestige rank and handicap score are tracked per
/// member per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Seller,
    Buyer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Seller => "seller",
            Role::Buyer => "buyer",
        }
    }
}

/// Point-in-time performance record supplied by the order-settlement
/// system.
///
/// `prestige_rank` and `handicap_score` are kept raw here — trusted but not
/// assumed in-domain. Clamping happens in the derivation layer
/// ([`Tier::from_prestige_rank`], [`HandicapScore::new`]), never at parse
/// time, so a snapshot file round-trips byte-for-byte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberSnapshot {
    pub member_id: String,
    pub role: Role,
    pub prestige_rank: i64,
    pub handicap_score: f64,
    /// Date the settlement system produced this snapshot (quoted
    /// `"YYYY-MM-DD"` string in TOML).
    pub as_of: NaiveDate,
}

impl MemberSnapshot {
    /// Tier anchored to the snapshot's prestige rank, clamped.
    pub fn tier(&self) -> Tier {
        Tier::from_prestige_rank(self.prestige_rank)
    }

    /// Clamped handicap score.
    pub fn score(&self) -> HandicapScore {
        HandicapScore::new(self.handicap_score)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, SnapshotError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, SnapshotError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}

/// Errors from snapshot ingestion. The derivation operations themselves
/// never fail; only the file/TOML boundary does.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse snapshot TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
