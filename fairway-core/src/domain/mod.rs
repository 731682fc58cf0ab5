//! Domain types for the Fairway tier engine.

pub mod handicap;
pub mod member;
pub mod terrain;
pub mod tier;

pub use handicap::{HandicapScore, HANDICAP_MAX, HANDICAP_MIN};
pub use member::{MemberSnapshot, Role, SnapshotError};
pub use terrain::{terrain_list, Terrain};
pub use tier::Tier;
