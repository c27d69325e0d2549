//! Ascend - progression engine for the platform.
//!
//! Tracks a user's experience points, derives a level from a static
//! threshold table, unlocks badges idempotently, maintains a daily login
//! streak with a consumable freeze, and merges the user's live values into
//! timeframe-scoped leaderboards.
//!
//! All mutation funnels through [`ProgressionStore`]; persistence and
//! notifications are pluggable collaborators behind traits and are strictly
//! best-effort (a failed save never rolls back in-memory state).

pub mod badges;
pub mod constants;
pub mod leaderboard;
pub mod levels;
pub mod notify;
pub mod persist;
pub mod state;
pub mod store;
pub mod streak;

pub use badges::{BadgeCategory, BadgeDef, BadgeRarity, BadgeStatus};
pub use leaderboard::{
    LeaderboardEntry, LeaderboardError, LeaderboardSource, RankedEntry, Timeframe,
};
pub use levels::LevelDef;
pub use notify::{Notification, NotificationSink};
pub use persist::{PersistenceAdapter, PersistError};
pub use state::{ProgressionState, XpTransaction};
pub use store::ProgressionStore;
pub use streak::{StreakOutcome, StreakRecord};
