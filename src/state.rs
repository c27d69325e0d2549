//! The progression snapshot owned by the store.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::badges::UnlockedBadge;
use crate::constants::MAX_RECENT_TRANSACTIONS;
use crate::levels;
use crate::streak::StreakRecord;

/// One XP award, kept for UI display only. The running total in
/// [`ProgressionState::xp`] is authoritative; this log is bounded to the
/// most recent 50 entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpTransaction {
    pub id: Uuid,
    pub amount: i64,
    pub reason: String,
    pub category: String,
    pub timestamp: DateTime<Utc>,
}

/// Full progression snapshot for one user: XP total, derived level fields,
/// unlocked badges, streak record, and the bounded transaction log.
///
/// Mutated only through [`ProgressionStore`](crate::store::ProgressionStore);
/// serialized as-is by persistence adapters. Badge unlocks live in a
/// `BTreeMap` so snapshots serialize in a stable order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionState {
    pub xp: i64,
    pub level: u32,
    pub level_progress: u8,
    pub unlocked_badges: BTreeMap<String, UnlockedBadge>,
    pub streak: StreakRecord,
    pub recent_transactions: Vec<XpTransaction>,
    pub weekly_xp: i64,
    pub monthly_xp: i64,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressionState {
    /// Fresh state for a first-time user: zero XP at level 1.
    pub fn new() -> Self {
        Self {
            xp: 0,
            level: 1,
            level_progress: 0,
            unlocked_badges: BTreeMap::new(),
            streak: StreakRecord::default(),
            recent_transactions: Vec::new(),
            weekly_xp: 0,
            monthly_xp: 0,
        }
    }

    /// Recompute the derived level fields from the XP total.
    pub(crate) fn recompute_derived(&mut self) {
        let level = levels::level_for_xp(self.xp);
        self.level = level.level;
        self.level_progress = levels::level_progress(self.xp, level);
    }

    /// Prepend a transaction, dropping the oldest beyond the retention cap.
    pub(crate) fn push_transaction(&mut self, txn: XpTransaction) {
        self.recent_transactions.insert(0, txn);
        self.recent_transactions.truncate(MAX_RECENT_TRANSACTIONS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(amount: i64) -> XpTransaction {
        XpTransaction {
            id: Uuid::new_v4(),
            amount,
            reason: "test".to_string(),
            category: "general".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_new_state_defaults() {
        let state = ProgressionState::new();
        assert_eq!(state.xp, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.level_progress, 0);
        assert!(state.unlocked_badges.is_empty());
        assert_eq!(state.streak.current_streak, 0);
    }

    #[test]
    fn test_recompute_derived() {
        let mut state = ProgressionState::new();
        state.xp = 175;
        state.recompute_derived();
        assert_eq!(state.level, 2);
        assert_eq!(state.level_progress, 50);
    }

    #[test]
    fn test_transaction_log_is_bounded_and_newest_first() {
        let mut state = ProgressionState::new();
        for i in 0..60 {
            state.push_transaction(txn(i));
        }
        assert_eq!(state.recent_transactions.len(), MAX_RECENT_TRANSACTIONS);
        assert_eq!(state.recent_transactions[0].amount, 59);
        assert_eq!(state.recent_transactions[49].amount, 10);
    }

    #[test]
    fn test_json_round_trip_is_byte_stable() {
        let mut state = ProgressionState::new();
        state.xp = 1234;
        state.recompute_derived();
        state.unlocked_badges.insert(
            "first-prompt".to_string(),
            crate::badges::UnlockedBadge {
                unlocked_at: Utc::now(),
            },
        );
        state.push_transaction(txn(1234));
        state.streak.advance(chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());

        let json = serde_json::to_string_pretty(&state).unwrap();
        let loaded: ProgressionState = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, state);
        let json_again = serde_json::to_string_pretty(&loaded).unwrap();
        assert_eq!(json, json_again);
    }

    #[test]
    fn test_dates_serialize_as_iso_strings() {
        let mut state = ProgressionState::new();
        state.streak.advance(chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"2026-03-01\""));
    }
}
