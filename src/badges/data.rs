//! Static badge definitions.

use super::types::{BadgeCategory, BadgeDef, BadgeRarity};

/// All badge definitions in display order.
pub const CATALOG: &[BadgeDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // PROMPT ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    BadgeDef {
        id: "first-prompt",
        name: "First Spark",
        description: "Generate your first prompt",
        category: BadgeCategory::Achievement,
        rarity: BadgeRarity::Common,
        xp_reward: 25,
    },
    BadgeDef {
        id: "prompt-10",
        name: "Prompt Artisan",
        description: "Generate 10 prompts",
        category: BadgeCategory::Milestone,
        rarity: BadgeRarity::Common,
        xp_reward: 50,
    },
    BadgeDef {
        id: "prompt-100",
        name: "Prompt Machine",
        description: "Generate 100 prompts",
        category: BadgeCategory::Milestone,
        rarity: BadgeRarity::Rare,
        xp_reward: 150,
    },
    BadgeDef {
        id: "prompt-1000",
        name: "Prompt Factory",
        description: "Generate 1,000 prompts",
        category: BadgeCategory::Milestone,
        rarity: BadgeRarity::Epic,
        xp_reward: 500,
    },
    // ═══════════════════════════════════════════════════════════════
    // ACADEMY
    // ═══════════════════════════════════════════════════════════════
    BadgeDef {
        id: "first-lesson",
        name: "Student",
        description: "Complete your first Academy lesson",
        category: BadgeCategory::Skill,
        rarity: BadgeRarity::Common,
        xp_reward: 25,
    },
    BadgeDef {
        id: "quiz-perfect",
        name: "Perfectionist",
        description: "Score 100% on an Academy quiz",
        category: BadgeCategory::Skill,
        rarity: BadgeRarity::Rare,
        xp_reward: 100,
    },
    BadgeDef {
        id: "course-complete",
        name: "Graduate",
        description: "Complete a full Academy course",
        category: BadgeCategory::Skill,
        rarity: BadgeRarity::Epic,
        xp_reward: 300,
    },
    // ═══════════════════════════════════════════════════════════════
    // STREAKS
    // ═══════════════════════════════════════════════════════════════
    BadgeDef {
        id: "streak-3",
        name: "Warming Up",
        description: "Keep a 3-day activity streak",
        category: BadgeCategory::Milestone,
        rarity: BadgeRarity::Common,
        xp_reward: 30,
    },
    BadgeDef {
        id: "streak-7",
        name: "Week One",
        description: "Keep a 7-day activity streak",
        category: BadgeCategory::Milestone,
        rarity: BadgeRarity::Rare,
        xp_reward: 75,
    },
    BadgeDef {
        id: "streak-30",
        name: "Monthly Devotion",
        description: "Keep a 30-day activity streak",
        category: BadgeCategory::Milestone,
        rarity: BadgeRarity::Epic,
        xp_reward: 250,
    },
    BadgeDef {
        id: "streak-100",
        name: "Centurion",
        description: "Keep a 100-day activity streak",
        category: BadgeCategory::Milestone,
        rarity: BadgeRarity::Legendary,
        xp_reward: 1000,
    },
    // ═══════════════════════════════════════════════════════════════
    // LEVELS
    // ═══════════════════════════════════════════════════════════════
    BadgeDef {
        id: "level-5",
        name: "Rising Star",
        description: "Reach level 5",
        category: BadgeCategory::Achievement,
        rarity: BadgeRarity::Rare,
        xp_reward: 100,
    },
    BadgeDef {
        id: "level-10",
        name: "Summit",
        description: "Reach level 10",
        category: BadgeCategory::Achievement,
        rarity: BadgeRarity::Legendary,
        xp_reward: 500,
    },
    // ═══════════════════════════════════════════════════════════════
    // SOCIAL & SPECIAL
    // ═══════════════════════════════════════════════════════════════
    BadgeDef {
        id: "first-share",
        name: "Show and Tell",
        description: "Share a prompt with the community",
        category: BadgeCategory::Social,
        rarity: BadgeRarity::Common,
        xp_reward: 20,
    },
    BadgeDef {
        id: "community-helper",
        name: "Helping Hand",
        description: "Answer 10 community questions",
        category: BadgeCategory::Social,
        rarity: BadgeRarity::Rare,
        xp_reward: 75,
    },
    BadgeDef {
        id: "early-adopter",
        name: "Early Adopter",
        description: "Joined during the launch window",
        category: BadgeCategory::Special,
        rarity: BadgeRarity::Legendary,
        xp_reward: 500,
    },
    BadgeDef {
        id: "night-owl",
        name: "Night Owl",
        description: "Generate a prompt after midnight",
        category: BadgeCategory::Special,
        rarity: BadgeRarity::Common,
        xp_reward: 15,
    },
];

/// Look up a badge definition by id.
pub fn badge_def(id: &str) -> Option<&'static BadgeDef> {
    CATALOG.iter().find(|b| b.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STREAK_BADGE_THRESHOLDS;
    use std::collections::HashSet;

    #[test]
    fn test_badge_ids_are_unique() {
        let mut seen = HashSet::new();
        for def in CATALOG {
            assert!(seen.insert(def.id), "duplicate badge id {}", def.id);
        }
    }

    #[test]
    fn test_rewards_are_non_negative() {
        for def in CATALOG {
            assert!(def.xp_reward >= 0, "badge {} has negative reward", def.id);
        }
    }

    #[test]
    fn test_streak_threshold_badges_exist() {
        for (_, id) in STREAK_BADGE_THRESHOLDS {
            assert!(badge_def(id).is_some(), "missing streak badge {id}");
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(badge_def("first-prompt").unwrap().name, "First Spark");
        assert!(badge_def("no-such-badge").is_none());
    }
}
