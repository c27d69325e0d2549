//! Leaderboard fetch, merge, and ranking.
//!
//! The source is an external collaborator; the engine replaces any stale row
//! it returned for the caller with the live progression values, re-ranks by
//! XP, and keeps the top ten. Nothing here mutates progression state, and
//! source failures propagate to the caller untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::LEADERBOARD_SIZE;

/// Timeframe a leaderboard is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    Daily,
    Weekly,
    Monthly,
    AllTime,
}

impl Timeframe {
    /// All timeframes in display order.
    pub const ALL: [Timeframe; 4] = [
        Timeframe::Daily,
        Timeframe::Weekly,
        Timeframe::Monthly,
        Timeframe::AllTime,
    ];

    /// Wire name used by leaderboard sources.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Daily => "daily",
            Timeframe::Weekly => "weekly",
            Timeframe::Monthly => "monthly",
            Timeframe::AllTime => "allTime",
        }
    }
}

/// One row as returned by a leaderboard source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub username: String,
    pub xp: i64,
    pub level: u32,
    pub badge_count: usize,
}

/// A row after merging and ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: u32,
    pub entry: LeaderboardEntry,
    /// True for the caller's own row.
    pub is_self: bool,
}

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("leaderboard request failed: {0}")]
    Request(#[from] ureq::Error),
    #[error("invalid leaderboard payload: {0}")]
    Decode(#[from] std::io::Error),
}

/// Ranked-entry provider for a timeframe.
pub trait LeaderboardSource: Send + Sync {
    fn fetch(&self, timeframe: Timeframe) -> Result<Vec<LeaderboardEntry>, LeaderboardError>;
}

/// Merge the caller's live row into the source rows and re-rank.
///
/// Any row the source returned for the caller is dropped in favor of `own`
/// (the live store is authoritative for the caller). Sorting is descending
/// by XP and stable, so ties keep their insertion order.
pub fn merge_and_rank(rows: Vec<LeaderboardEntry>, own: LeaderboardEntry) -> Vec<RankedEntry> {
    let own_id = own.user_id.clone();
    let mut combined: Vec<LeaderboardEntry> = rows
        .into_iter()
        .filter(|row| row.user_id != own_id)
        .collect();
    combined.push(own);
    combined.sort_by(|a, b| b.xp.cmp(&a.xp));
    combined.truncate(LEADERBOARD_SIZE);
    combined
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_self = entry.user_id == own_id;
            RankedEntry {
                rank: i as u32 + 1,
                entry,
                is_self,
            }
        })
        .collect()
}

/// Serves a fixed set of rows; useful for tests and offline demos.
pub struct FixedSource {
    rows: Vec<LeaderboardEntry>,
}

impl FixedSource {
    pub fn new(rows: Vec<LeaderboardEntry>) -> Self {
        Self { rows }
    }
}

impl LeaderboardSource for FixedSource {
    fn fetch(&self, _timeframe: Timeframe) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        Ok(self.rows.clone())
    }
}

/// Fetches rows from an HTTP endpoint serving one JSON array per timeframe:
/// `GET <base>/leaderboard/<timeframe>`.
pub struct HttpLeaderboardSource {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpLeaderboardSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            agent: ureq::Agent::new(),
            base_url: base_url.into(),
        }
    }
}

impl LeaderboardSource for HttpLeaderboardSource {
    fn fetch(&self, timeframe: Timeframe) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let url = format!(
            "{}/leaderboard/{}",
            self.base_url.trim_end_matches('/'),
            timeframe.as_str()
        );
        let rows = self.agent.get(&url).call()?.into_json()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(user_id: &str, xp: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            user_id: user_id.to_string(),
            username: user_id.to_uppercase(),
            xp,
            level: 1,
            badge_count: 0,
        }
    }

    #[test]
    fn test_timeframe_wire_names() {
        assert_eq!(Timeframe::Daily.as_str(), "daily");
        assert_eq!(Timeframe::Weekly.as_str(), "weekly");
        assert_eq!(Timeframe::Monthly.as_str(), "monthly");
        assert_eq!(Timeframe::AllTime.as_str(), "allTime");
    }

    #[test]
    fn test_entry_deserializes_camel_case() {
        let json = r#"{"userId":"u1","username":"U1","xp":10,"level":1,"badgeCount":2}"#;
        let row: LeaderboardEntry = serde_json::from_str(json).unwrap();
        assert_eq!(row.user_id, "u1");
        assert_eq!(row.badge_count, 2);
    }

    #[test]
    fn test_merge_ranks_descending_by_xp() {
        let rows = vec![entry("a", 50), entry("b", 200), entry("c", 120)];
        let ranked = merge_and_rank(rows, entry("me", 150));

        let order: Vec<&str> = ranked.iter().map(|r| r.entry.user_id.as_str()).collect();
        assert_eq!(order, ["b", "me", "c", "a"]);
        let ranks: Vec<u32> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, [1, 2, 3, 4]);
        assert!(ranked[1].is_self);
    }

    #[test]
    fn test_merge_replaces_stale_self_row() {
        // The source still has an old XP value for "me"; the live row wins
        // and the stale one disappears entirely.
        let rows = vec![entry("me", 10), entry("a", 50)];
        let ranked = merge_and_rank(rows, entry("me", 150));

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].entry.user_id, "me");
        assert_eq!(ranked[0].entry.xp, 150);
    }

    #[test]
    fn test_merge_truncates_to_top_ten() {
        let rows: Vec<LeaderboardEntry> = (0..15)
            .map(|i| entry(&format!("u{i}"), 1000 - i as i64))
            .collect();
        let ranked = merge_and_rank(rows, entry("me", 1));
        assert_eq!(ranked.len(), 10);
        assert!(ranked.iter().all(|r| !r.is_self));
        assert_eq!(ranked.last().unwrap().rank, 10);
    }

    #[test]
    fn test_merge_ties_are_stable() {
        let rows = vec![entry("first", 100), entry("second", 100)];
        let ranked = merge_and_rank(rows, entry("me", 100));
        let order: Vec<&str> = ranked.iter().map(|r| r.entry.user_id.as_str()).collect();
        // Equal XP keeps insertion order: source rows, then the appended self.
        assert_eq!(order, ["first", "second", "me"]);
    }
}
