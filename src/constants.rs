// XP awarded for the daily login, plus a per-day bonus scaled by the
// current streak length.
pub const DAILY_LOGIN_XP: i64 = 10;
pub const STREAK_BONUS_XP: i64 = 5;

// Bounded retention for the recent-transaction display log. The running XP
// total is authoritative; this log is UI-only.
pub const MAX_RECENT_TRANSACTIONS: usize = 50;

// Streak lengths that unlock a badge, paired with the badge id in the catalog.
pub const STREAK_BADGE_THRESHOLDS: &[(u32, &str)] = &[
    (3, "streak-3"),
    (7, "streak-7"),
    (30, "streak-30"),
    (100, "streak-100"),
];

// Rows kept after merging the caller's own entry into a leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

// Toast durations, in milliseconds.
pub const XP_TOAST_MS: u64 = 3000;
pub const BADGE_TOAST_MS: u64 = 4000;
pub const LEVEL_UP_TOAST_MS: u64 = 5000;
