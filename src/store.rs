//! The stateful core of the progression engine.
//!
//! One [`ProgressionStore`] exists per authenticated user. All mutation goes
//! through [`award_xp`](ProgressionStore::award_xp),
//! [`unlock_badge`](ProgressionStore::unlock_badge), and
//! [`update_streak`](ProgressionStore::update_streak); each recomputes the
//! derived level fields, persists the snapshot best-effort, and emits
//! notifications. The in-memory state is authoritative: a persistence
//! failure never rolls a mutation back, and the next successful save carries
//! everything accumulated since.

use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::badges::{self, BadgeDef, BadgeStatus, UnlockedBadge};
use crate::constants::{
    BADGE_TOAST_MS, DAILY_LOGIN_XP, LEVEL_UP_TOAST_MS, STREAK_BADGE_THRESHOLDS, STREAK_BONUS_XP,
    XP_TOAST_MS,
};
use crate::leaderboard::{
    merge_and_rank, LeaderboardEntry, LeaderboardError, LeaderboardSource, RankedEntry, Timeframe,
};
use crate::levels::{self, LevelDef};
use crate::notify::{Notification, NotificationSink};
use crate::persist::PersistenceAdapter;
use crate::state::{ProgressionState, XpTransaction};
use crate::streak::{StreakOutcome, StreakRecord};

pub struct ProgressionStore {
    user_id: String,
    username: String,
    state: ProgressionState,
    persistence: Arc<dyn PersistenceAdapter>,
    notifications: Arc<dyn NotificationSink>,
    leaderboard: Arc<dyn LeaderboardSource>,
}

impl ProgressionStore {
    /// Restore the user's snapshot, or start fresh if none exists. A load
    /// failure is logged and treated as a fresh start, never an error.
    pub fn open(
        user_id: impl Into<String>,
        username: impl Into<String>,
        persistence: Arc<dyn PersistenceAdapter>,
        notifications: Arc<dyn NotificationSink>,
        leaderboard: Arc<dyn LeaderboardSource>,
    ) -> Self {
        let user_id = user_id.into();
        let mut state = match persistence.load(&user_id) {
            Ok(Some(state)) => state,
            Ok(None) => ProgressionState::new(),
            Err(err) => {
                warn!(
                    user_id = %user_id,
                    error = %err,
                    "failed to load progression snapshot, starting fresh"
                );
                ProgressionState::new()
            }
        };
        // Derived fields are recomputed from the XP total rather than
        // trusted from disk.
        state.recompute_derived();

        Self {
            user_id,
            username: username.into(),
            state,
            persistence,
            notifications,
            leaderboard,
        }
    }

    // === Read surface ===

    pub fn xp(&self) -> i64 {
        self.state.xp
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    /// Percent progress through the current level, 0-100.
    pub fn level_progress(&self) -> u8 {
        self.state.level_progress
    }

    pub fn current_level(&self) -> &'static LevelDef {
        levels::level_for_xp(self.state.xp)
    }

    pub fn next_level(&self) -> Option<&'static LevelDef> {
        levels::next_level(self.current_level())
    }

    /// XP still needed to reach the next level; 0 at the terminal level.
    pub fn xp_to_next_level(&self) -> i64 {
        levels::xp_to_next(self.state.xp)
    }

    /// Every catalog badge with its unlock status.
    pub fn badges(&self) -> Vec<BadgeStatus> {
        badges::CATALOG
            .iter()
            .map(|def| {
                let unlocked = self.state.unlocked_badges.get(def.id);
                BadgeStatus {
                    def,
                    unlocked: unlocked.is_some(),
                    unlocked_at: unlocked.map(|u| u.unlocked_at),
                }
            })
            .collect()
    }

    pub fn streak(&self) -> &StreakRecord {
        &self.state.streak
    }

    /// Most recent XP awards, newest first, at most 50.
    pub fn recent_transactions(&self) -> &[XpTransaction] {
        &self.state.recent_transactions
    }

    pub fn weekly_xp(&self) -> i64 {
        self.state.weekly_xp
    }

    pub fn monthly_xp(&self) -> i64 {
        self.state.monthly_xp
    }

    /// The full snapshot, read-only.
    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    // === Mutations ===

    /// Add XP and recompute the derived level fields. `category` defaults to
    /// `"general"`.
    ///
    /// Negative amounts are accepted as-is and re-derive the level downward;
    /// validating them away is an open product question.
    pub fn award_xp(&mut self, amount: i64, reason: &str, category: Option<&str>) {
        self.apply_award(amount, reason, category);
        self.persist();
    }

    /// Unlock a badge by id. Idempotent: an already-unlocked badge is a
    /// no-op, and an id absent from the catalog never mutates state. Returns
    /// true only for a fresh unlock.
    pub fn unlock_badge(&mut self, badge_id: &str) -> bool {
        let Some(def) = badges::badge_def(badge_id) else {
            debug!(badge_id, "ignoring unlock for unknown badge id");
            return false;
        };
        if self.state.unlocked_badges.contains_key(badge_id) {
            debug!(badge_id, "badge already unlocked");
            return false;
        }
        self.apply_unlock(def);
        self.persist();
        true
    }

    /// Daily streak check against the local calendar day.
    pub fn update_streak(&mut self) {
        self.update_streak_on(Local::now().date_naive());
    }

    /// Daily streak check against an explicit "today" (the host's clock).
    ///
    /// A same-day repeat is a pure no-op with zero persistence writes. When
    /// the streak strictly increases, the daily XP bonus is awarded and
    /// every streak badge threshold at or below the new length is checked.
    pub fn update_streak_on(&mut self, today: NaiveDate) {
        let before = self.state.streak.current_streak;
        let outcome = self.state.streak.advance(today);
        if outcome == StreakOutcome::AlreadyCredited {
            debug!(user_id = %self.user_id, "streak already credited today");
            return;
        }

        let current = self.state.streak.current_streak;
        if current > before {
            let bonus = DAILY_LOGIN_XP + STREAK_BONUS_XP * i64::from(current);
            self.apply_award(bonus, &format!("Daily streak: day {current}"), Some("streak"));

            // Thresholds are independent checks; unlocks are idempotent so
            // every one at or below the current length is safe to attempt.
            for &(threshold, badge_id) in STREAK_BADGE_THRESHOLDS {
                if current >= threshold {
                    if let Some(def) = badges::badge_def(badge_id) {
                        self.apply_unlock(def);
                    }
                }
            }
        }

        self.persist();
    }

    /// Fetch a timeframe's rankings and merge the caller's live row in.
    /// Source failures propagate untouched; nothing here mutates state.
    pub fn get_leaderboard(
        &self,
        timeframe: Timeframe,
    ) -> Result<Vec<RankedEntry>, LeaderboardError> {
        let rows = self.leaderboard.fetch(timeframe)?;
        let own = LeaderboardEntry {
            user_id: self.user_id.clone(),
            username: self.username.clone(),
            xp: self.state.xp,
            level: self.state.level,
            badge_count: self.state.unlocked_badges.len(),
        };
        Ok(merge_and_rank(rows, own))
    }

    // === Internals ===

    /// Core award path shared by every mutation: mutates and notifies but
    /// does not persist, so each public entry point writes exactly once.
    fn apply_award(&mut self, amount: i64, reason: &str, category: Option<&str>) {
        let previous_level = self.state.level;

        self.state.xp += amount;
        self.state.weekly_xp += amount;
        self.state.monthly_xp += amount;
        self.state.recompute_derived();
        self.state.push_transaction(XpTransaction {
            id: Uuid::new_v4(),
            amount,
            reason: reason.to_string(),
            category: category.unwrap_or("general").to_string(),
            timestamp: Utc::now(),
        });

        let title = if amount >= 0 {
            format!("+{amount} XP")
        } else {
            format!("{amount} XP")
        };
        self.notify(Notification {
            title,
            description: reason.to_string(),
            duration_ms: XP_TOAST_MS,
        });

        // The level-up notice follows the XP notice, never precedes it.
        if self.state.level > previous_level {
            let level = self.current_level();
            self.notify(Notification {
                title: format!("Level up! You reached level {}", level.level),
                description: format!("You are now a {}", level.name),
                duration_ms: LEVEL_UP_TOAST_MS,
            });
        }
    }

    /// Unlock path shared with the streak check. Skips silently when already
    /// unlocked; awards the badge's XP through the shared award path.
    fn apply_unlock(&mut self, def: &'static BadgeDef) {
        if self.state.unlocked_badges.contains_key(def.id) {
            return;
        }
        self.state.unlocked_badges.insert(
            def.id.to_string(),
            UnlockedBadge {
                unlocked_at: Utc::now(),
            },
        );
        if def.xp_reward != 0 {
            self.apply_award(
                def.xp_reward,
                &format!("Badge unlocked: {}", def.name),
                Some("badge"),
            );
        }
        self.notify(Notification {
            title: format!("Badge unlocked: {}", def.name),
            description: def.description.to_string(),
            duration_ms: BADGE_TOAST_MS,
        });
    }

    /// Best-effort flush of the current snapshot. The in-memory state stays
    /// authoritative when the adapter fails.
    fn persist(&self) {
        if let Err(err) = self.persistence.save(&self.user_id, &self.state) {
            warn!(
                user_id = %self.user_id,
                error = %err,
                "failed to persist progression snapshot"
            );
        }
    }

    fn notify(&self, note: Notification) {
        self.notifications.notify(note);
    }
}
