//! Static level table and pure level-resolution helpers.
//!
//! Levels are derived entirely from the XP total; nothing here caches or
//! mutates. The table is contiguous: each level's `min_xp` equals the
//! previous level's `max_xp`, and the final level is unbounded.

/// A named tier in the XP curve. `max_xp == None` marks the terminal level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDef {
    pub level: u32,
    pub name: &'static str,
    pub min_xp: i64,
    pub max_xp: Option<i64>,
    pub perks: &'static [&'static str],
    /// Display color token for the UI theme.
    pub color: &'static str,
}

/// All level definitions in ascending order.
pub const LEVELS: &[LevelDef] = &[
    LevelDef {
        level: 1,
        name: "Newcomer",
        min_xp: 0,
        max_xp: Some(100),
        perks: &["Basic prompt generation"],
        color: "zinc",
    },
    LevelDef {
        level: 2,
        name: "Explorer",
        min_xp: 100,
        max_xp: Some(250),
        perks: &["Prompt history"],
        color: "emerald",
    },
    LevelDef {
        level: 3,
        name: "Apprentice",
        min_xp: 250,
        max_xp: Some(500),
        perks: &["Custom categories"],
        color: "sky",
    },
    LevelDef {
        level: 4,
        name: "Practitioner",
        min_xp: 500,
        max_xp: Some(1000),
        perks: &["Prompt templates", "Priority queue"],
        color: "violet",
    },
    LevelDef {
        level: 5,
        name: "Craftsman",
        min_xp: 1000,
        max_xp: Some(2000),
        perks: &["Advanced templates"],
        color: "amber",
    },
    LevelDef {
        level: 6,
        name: "Expert",
        min_xp: 2000,
        max_xp: Some(3500),
        perks: &["Beta features"],
        color: "rose",
    },
    LevelDef {
        level: 7,
        name: "Artisan",
        min_xp: 3500,
        max_xp: Some(5500),
        perks: &["Custom voice personas"],
        color: "cyan",
    },
    LevelDef {
        level: 8,
        name: "Master",
        min_xp: 5500,
        max_xp: Some(8000),
        perks: &["Academy fast-track"],
        color: "fuchsia",
    },
    LevelDef {
        level: 9,
        name: "Grandmaster",
        min_xp: 8000,
        max_xp: Some(11000),
        perks: &["Community spotlight"],
        color: "orange",
    },
    LevelDef {
        level: 10,
        name: "Legend",
        min_xp: 11000,
        max_xp: None,
        perks: &["Legend profile frame", "All perks"],
        color: "gold",
    },
];

/// Resolve the level an XP total falls in: scan highest to lowest and take
/// the first level whose `min_xp` is at or below the total. Never returns
/// less than level 1, so negative totals resolve to level 1.
pub fn level_for_xp(xp: i64) -> &'static LevelDef {
    LEVELS
        .iter()
        .rev()
        .find(|l| l.min_xp <= xp)
        .unwrap_or(&LEVELS[0])
}

/// Percent progress through a level, 0-100. The terminal level always
/// reports 100.
pub fn level_progress(xp: i64, level: &LevelDef) -> u8 {
    let Some(max_xp) = level.max_xp else {
        return 100;
    };
    let span = max_xp - level.min_xp;
    if span <= 0 {
        return 100;
    }
    // Integer rounding to the nearest percent.
    let pct = ((xp - level.min_xp) * 100 + span / 2) / span;
    pct.clamp(0, 100) as u8
}

/// The level after the given one, if any.
pub fn next_level(level: &LevelDef) -> Option<&'static LevelDef> {
    LEVELS.iter().find(|l| l.level == level.level + 1)
}

/// XP still needed to reach the next level; 0 once at the terminal level.
pub fn xp_to_next(xp: i64) -> i64 {
    match level_for_xp(xp).max_xp {
        Some(max_xp) => (max_xp - xp).max(0),
        None => 0,
    }
}
