//! Daily login streak with a consumable "freeze" grace resource.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consecutive-day activity counter. A freeze forgives one missed day
/// without resetting the counter; freezes only ever decrease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StreakRecord {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_active_date: Option<NaiveDate>,
    pub streak_freezes: u32,
}

/// What a call to [`StreakRecord::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakOutcome {
    /// Already credited today; nothing changed.
    AlreadyCredited,
    /// Active yesterday; the streak grew by one.
    Extended,
    /// Missed at least one day but a freeze covered it; the streak is kept
    /// as-is and one freeze is consumed.
    Frozen,
    /// Missed with no freeze available, or first activity ever; the streak
    /// restarts at 1.
    Reset,
}

impl StreakRecord {
    /// Advance the streak for `today`. Same-day calls mutate nothing; every
    /// other branch stamps `last_active_date` and keeps
    /// `longest_streak >= current_streak`.
    pub fn advance(&mut self, today: NaiveDate) -> StreakOutcome {
        if self.last_active_date == Some(today) {
            return StreakOutcome::AlreadyCredited;
        }

        let gap_days = self
            .last_active_date
            .map(|last| (today - last).num_days());

        let outcome = match gap_days {
            Some(1) => {
                self.current_streak += 1;
                StreakOutcome::Extended
            }
            Some(gap) if gap > 1 && self.streak_freezes > 0 => {
                // The freeze covers the missed day: it prevents the reset
                // but does not grow the streak.
                self.streak_freezes -= 1;
                StreakOutcome::Frozen
            }
            _ => {
                self.current_streak = 1;
                StreakOutcome::Reset
            }
        };

        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_active_date = Some(today);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn test_first_activity_starts_at_one() {
        let mut streak = StreakRecord::default();
        assert_eq!(streak.advance(day(1)), StreakOutcome::Reset);
        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.longest_streak, 1);
        assert_eq!(streak.last_active_date, Some(day(1)));
    }

    #[test]
    fn test_same_day_is_a_no_op() {
        let mut streak = StreakRecord::default();
        streak.advance(day(1));
        let before = streak.clone();
        assert_eq!(streak.advance(day(1)), StreakOutcome::AlreadyCredited);
        assert_eq!(streak, before);
    }

    #[test]
    fn test_consecutive_days_extend() {
        let mut streak = StreakRecord::default();
        streak.advance(day(1));
        assert_eq!(streak.advance(day(2)), StreakOutcome::Extended);
        assert_eq!(streak.advance(day(3)), StreakOutcome::Extended);
        assert_eq!(streak.current_streak, 3);
        assert_eq!(streak.longest_streak, 3);
    }

    #[test]
    fn test_freeze_covers_a_miss_without_growing() {
        let mut streak = StreakRecord {
            current_streak: 5,
            longest_streak: 5,
            last_active_date: Some(day(1)),
            streak_freezes: 1,
        };
        // Three days later: one freeze consumed, streak kept.
        assert_eq!(streak.advance(day(4)), StreakOutcome::Frozen);
        assert_eq!(streak.current_streak, 5);
        assert_eq!(streak.streak_freezes, 0);
        assert_eq!(streak.last_active_date, Some(day(4)));
    }

    #[test]
    fn test_miss_without_freeze_resets() {
        let mut streak = StreakRecord {
            current_streak: 5,
            longest_streak: 5,
            last_active_date: Some(day(1)),
            streak_freezes: 0,
        };
        assert_eq!(streak.advance(day(4)), StreakOutcome::Reset);
        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.longest_streak, 5);
    }

    #[test]
    fn test_longest_never_decreases() {
        let mut streak = StreakRecord::default();
        streak.advance(day(1));
        streak.advance(day(2));
        streak.advance(day(3));
        assert_eq!(streak.longest_streak, 3);
        // Break the streak; longest survives the reset.
        streak.advance(day(10));
        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.longest_streak, 3);
    }

    #[test]
    fn test_freeze_then_next_day_extends() {
        let mut streak = StreakRecord {
            current_streak: 5,
            longest_streak: 5,
            last_active_date: Some(day(1)),
            streak_freezes: 2,
        };
        streak.advance(day(3));
        assert_eq!(streak.streak_freezes, 1);
        assert_eq!(streak.advance(day(4)), StreakOutcome::Extended);
        assert_eq!(streak.current_streak, 6);
        assert_eq!(streak.longest_streak, 6);
    }
}
