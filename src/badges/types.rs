//! Badge system types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Badge categories for organization in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Achievement,
    Milestone,
    Skill,
    Social,
    Special,
}

impl BadgeCategory {
    /// All categories in display order.
    pub const ALL: [BadgeCategory; 5] = [
        BadgeCategory::Achievement,
        BadgeCategory::Milestone,
        BadgeCategory::Skill,
        BadgeCategory::Social,
        BadgeCategory::Special,
    ];

    /// Display name for the category.
    pub fn name(&self) -> &'static str {
        match self {
            BadgeCategory::Achievement => "Achievement",
            BadgeCategory::Milestone => "Milestone",
            BadgeCategory::Skill => "Skill",
            BadgeCategory::Social => "Social",
            BadgeCategory::Special => "Special",
        }
    }
}

/// Badge rarity tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl BadgeRarity {
    pub fn name(&self) -> &'static str {
        match self {
            BadgeRarity::Common => "Common",
            BadgeRarity::Rare => "Rare",
            BadgeRarity::Epic => "Epic",
            BadgeRarity::Legendary => "Legendary",
        }
    }
}

/// Static definition of a badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: BadgeCategory,
    pub rarity: BadgeRarity,
    pub xp_reward: i64,
}

/// Record of an unlocked badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedBadge {
    pub unlocked_at: DateTime<Utc>,
}

/// Catalog definition plus unlock status, for the UI read surface.
#[derive(Debug, Clone)]
pub struct BadgeStatus {
    pub def: &'static BadgeDef,
    pub unlocked: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        assert_eq!(BadgeCategory::Achievement.name(), "Achievement");
        assert_eq!(BadgeCategory::Milestone.name(), "Milestone");
        assert_eq!(BadgeCategory::Skill.name(), "Skill");
        assert_eq!(BadgeCategory::Social.name(), "Social");
        assert_eq!(BadgeCategory::Special.name(), "Special");
    }

    #[test]
    fn test_category_serde_wire_names() {
        let json = serde_json::to_string(&BadgeCategory::Special).unwrap();
        assert_eq!(json, "\"special\"");
        let json = serde_json::to_string(&BadgeRarity::Legendary).unwrap();
        assert_eq!(json, "\"legendary\"");
    }
}
