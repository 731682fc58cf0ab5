//! Fairway Core — the handicap/tier progression engine behind the
//! marketplace.
//!
//! This crate contains the deterministic heart of the tier system:
//! - Domain types (tiers, terrains, handicap scores, member snapshots)
//! - The versioned tier schedule (single source of truth for fees,
//!   payout delays, and unlocks)
//! - Pure derivation operations (lookups, progress math, accessors)
//! - Settlement quoting and money formatting
//!
//! Everything is a pure function of its inputs plus the static schedule.
//! No I/O, no caching, no mutable shared state — prestige rank and
//! handicap score are owned by the external order-settlement system and
//! arrive here as read-only snapshots.

pub mod domain;
pub mod engine;
pub mod money;
pub mod schedule;
pub mod settlement;
