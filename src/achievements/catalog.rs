//! Static achievement definitions - the built-in set every profile sees

use crate::achievements::condition::Condition;

/// Definition of a built-in achievement
#[derive(Debug, Clone)]
pub struct AchievementDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Icon name for the UI layer
    pub icon: &'static str,
    pub condition: Condition,
}

/// Built-in achievement catalog
pub static ACHIEVEMENT_CATALOG: &[AchievementDefinition] = &[
    // Level achievements
    AchievementDefinition {
        id: "level_5",
        title: "Novice Adventurer",
        description: "Reach Level 5.",
        icon: "bi-shield-check",
        condition: Condition::LevelAtLeast(5),
    },
    AchievementDefinition {
        id: "level_10",
        title: "Seasoned Explorer",
        description: "Reach Level 10.",
        icon: "bi-shield-fill-check",
        condition: Condition::LevelAtLeast(10),
    },
    // Task achievements
    AchievementDefinition {
        id: "tasks_1",
        title: "First Step",
        description: "Complete your first task.",
        icon: "bi-check2-circle",
        condition: Condition::TasksCompletedAtLeast(1),
    },
    AchievementDefinition {
        id: "tasks_50",
        title: "Task Master",
        description: "Complete 50 tasks.",
        icon: "bi-list-task",
        condition: Condition::TasksCompletedAtLeast(50),
    },
    // Pomodoro achievements
    AchievementDefinition {
        id: "pomodoro_10",
        title: "Focused Mind",
        description: "Complete 10 Pomodoro cycles.",
        icon: "bi-clock-history",
        condition: Condition::PomodoroCyclesAtLeast(10),
    },
    // Store/coin achievements
    AchievementDefinition {
        id: "coins_1000",
        title: "Coin Collector",
        description: "Possess 1000 coins at one time.",
        icon: "bi-coin",
        condition: Condition::CoinsAtLeast(1000),
    },
    AchievementDefinition {
        id: "buy_theme",
        title: "Personal Touch",
        description: "Buy your first theme from the store.",
        icon: "bi-palette-fill",
        // Everyone starts with the default theme, so owning two means a purchase
        condition: Condition::ThemesOwnedAtLeast(2),
    },
];

/// Look up a built-in definition by id
pub fn get_achievement_definition(id: &str) -> Option<&'static AchievementDefinition> {
    ACHIEVEMENT_CATALOG.iter().find(|def| def.id == id)
}
