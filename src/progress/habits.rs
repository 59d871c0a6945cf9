//! Habit day grids and weekly streaks
//!
//! Each habit tracks one week of completion flags (Sunday = index 0).
//! A streak is the run of consecutive completed days ending today; the
//! first unchecked day breaks it.

use serde::{Deserialize, Serialize};

use crate::core::types::DayIndex;

/// Days in a habit week grid
pub const DAYS_PER_WEEK: usize = 7;

/// A single tracked habit with this week's completion grid
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    /// Completion flags for the current week, Sunday = index 0
    #[serde(default)]
    pub days: [bool; DAYS_PER_WEEK],
}

impl Habit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            days: [false; DAYS_PER_WEEK],
        }
    }

    /// Consecutive completed days ending at `today`, scanning backwards
    pub fn current_streak(&self, today: DayIndex) -> u32 {
        let today = today.min(DAYS_PER_WEEK - 1);
        let mut streak = 0;
        for day in (0..=today).rev() {
            if self.days[day] {
                streak += 1;
            } else {
                break;
            }
        }
        streak
    }
}

/// All habit state on the user profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HabitLog {
    #[serde(default)]
    pub habits: Vec<Habit>,

    /// Lifetime habit check-offs
    #[serde(default)]
    pub total_completions: u32,

    /// Longest weekly streak ever observed
    ///
    /// Cached at mark time so achievement conditions can read it from a
    /// snapshot without knowing what day it is.
    #[serde(default)]
    pub best_streak: u32,
}

impl HabitLog {
    /// Mark the habit at `index` complete for `today`.
    ///
    /// Returns false when the habit does not exist or was already checked
    /// today; callers use that to avoid awarding XP twice.
    pub fn mark_complete(&mut self, index: usize, today: DayIndex) -> bool {
        let today = today.min(DAYS_PER_WEEK - 1);
        let Some(habit) = self.habits.get_mut(index) else {
            return false;
        };
        if habit.days[today] {
            return false;
        }
        habit.days[today] = true;
        self.total_completions += 1;

        let streak = habit.current_streak(today);
        self.best_streak = self.best_streak.max(streak);
        true
    }

    /// Clear every habit's day grid for a fresh week.
    ///
    /// The caller decides when a week has rolled over (the engine holds no
    /// clock). Lifetime counters and the best-streak record are untouched.
    pub fn start_new_week(&mut self) {
        for habit in &mut self.habits {
            habit.days = [false; DAYS_PER_WEEK];
        }
    }
}
