//! The shared user record every feature reads and mutates
//!
//! Pages of the original suite each pulled this record from storage and
//! wrote it back; here it is an explicit value handed to every operation.
//! Every field is `#[serde(default)]` so partially-initialized persisted
//! records load as well-formed defaults instead of failing - a missing
//! sub-record just means no achievement condition over it is satisfied.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::types::{Level, Xp};
use crate::progress::habits::HabitLog;
use crate::progress::pomodoro::PomodoroLog;
use crate::progress::store::StoreState;

/// Task counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskLog {
    /// Lifetime completed tasks
    #[serde(default)]
    pub completed: u32,
}

/// Daily water tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterLog {
    /// Glasses drunk today
    #[serde(default)]
    pub intake: u32,

    /// Daily goal in glasses
    #[serde(default = "default_water_goal")]
    pub goal: u32,

    /// Days the goal was reached
    #[serde(default)]
    pub streak: u32,
}

fn default_water_goal() -> u32 {
    8
}

impl Default for WaterLog {
    fn default() -> Self {
        Self {
            intake: 0,
            goal: default_water_goal(),
            streak: 0,
        }
    }
}

/// Journal counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalLog {
    /// Entries written
    #[serde(default)]
    pub entries: u32,
}

/// Unlocked achievement ids
///
/// The set only ever grows; `BTreeSet` keeps persisted order stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementState {
    #[serde(default)]
    pub unlocked: BTreeSet<String>,
}

impl AchievementState {
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }
}

/// The single per-user progress record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default = "default_level")]
    pub level: Level,

    /// XP within the current level, always below the level threshold
    #[serde(default)]
    pub xp: Xp,

    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default)]
    pub tasks: TaskLog,

    #[serde(default)]
    pub habits: HabitLog,

    #[serde(default)]
    pub water: WaterLog,

    #[serde(default)]
    pub pomodoro: PomodoroLog,

    #[serde(default)]
    pub journal: JournalLog,

    #[serde(default)]
    pub store: StoreState,

    #[serde(default)]
    pub achievements: AchievementState,
}

fn default_level() -> Level {
    1
}

fn default_username() -> String {
    "User".to_string()
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            level: default_level(),
            xp: 0,
            username: default_username(),
            tasks: TaskLog::default(),
            habits: HabitLog::default(),
            water: WaterLog::default(),
            pomodoro: PomodoroLog::default(),
            journal: JournalLog::default(),
            store: StoreState::default(),
            achievements: AchievementState::default(),
        }
    }
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_profile_defaults() {
        let profile = UserProfile::new();
        assert_eq!(profile.level, 1);
        assert_eq!(profile.xp, 0);
        assert_eq!(profile.water.goal, 8);
        assert!(profile.achievements.unlocked.is_empty());
        assert!(profile.store.owns_theme("theme-default"));
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        // Only a couple of fields present, the rest missing entirely
        let profile: UserProfile = serde_json::from_str(r#"{"xp": 40}"#).unwrap();
        assert_eq!(profile.level, 1);
        assert_eq!(profile.xp, 40);
        assert_eq!(profile.tasks.completed, 0);
        assert_eq!(profile.water.goal, 8);
        assert!(profile.achievements.unlocked.is_empty());
    }

    #[test]
    fn test_partial_sub_record_fills_defaults() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"water": {"intake": 3}, "store": {"coins": 20}}"#).unwrap();
        assert_eq!(profile.water.intake, 3);
        assert_eq!(profile.water.goal, 8);
        assert_eq!(profile.store.coins, 20);
        // Owned themes fall back to the default when absent
        assert!(profile.store.owns_theme("theme-default"));
    }

    #[test]
    fn test_roundtrip_preserves_unlocks() {
        let mut profile = UserProfile::new();
        profile.achievements.unlocked.insert("tasks_1".to_string());
        profile.level = 3;

        let json = serde_json::to_string(&profile).unwrap();
        let restored: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.level, 3);
        assert!(restored.achievements.is_unlocked("tasks_1"));
    }
}
