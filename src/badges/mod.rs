//! Badge catalog and unlock records.
//!
//! Badges are one-time-unlockable achievements carrying a flat XP reward.
//! The catalog in [`data`] is static; unlock state lives in
//! [`ProgressionState`](crate::state::ProgressionState) and is mutated only
//! through the store.

pub mod data;
pub mod types;

pub use data::{badge_def, CATALOG};
pub use types::{BadgeCategory, BadgeDef, BadgeRarity, BadgeStatus, UnlockedBadge};
