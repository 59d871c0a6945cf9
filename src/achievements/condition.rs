//! Threshold predicates over a profile snapshot

use serde::{Deserialize, Serialize};

use crate::profile::user::UserProfile;

/// A pure predicate an achievement is gated on
///
/// Conditions only read the snapshot; a default-valued (missing)
/// sub-record simply fails its threshold rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    LevelAtLeast(u32),
    TasksCompletedAtLeast(u32),
    PomodoroCyclesAtLeast(u32),
    /// Current balance, not lifetime earnings
    CoinsAtLeast(u64),
    ThemesOwnedAtLeast(usize),
    HabitStreakAtLeast(u32),
    WaterStreakAtLeast(u32),
    JournalEntriesAtLeast(u32),
}

impl Condition {
    /// Test this condition against a profile snapshot
    pub fn is_met(&self, profile: &UserProfile) -> bool {
        match *self {
            Self::LevelAtLeast(n) => profile.level >= n,
            Self::TasksCompletedAtLeast(n) => profile.tasks.completed >= n,
            Self::PomodoroCyclesAtLeast(n) => profile.pomodoro.cycles >= n,
            Self::CoinsAtLeast(n) => profile.store.coins >= n,
            Self::ThemesOwnedAtLeast(n) => profile.store.owned_themes.len() >= n,
            Self::HabitStreakAtLeast(n) => profile.habits.best_streak >= n,
            Self::WaterStreakAtLeast(n) => profile.water.streak >= n,
            Self::JournalEntriesAtLeast(n) => profile.journal.entries >= n,
        }
    }
}
