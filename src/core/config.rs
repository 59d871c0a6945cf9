//! Progression configuration with documented constants
//!
//! All reward tunables are collected here with explanations of their
//! purpose and how they interact with each other.

use crate::core::types::{Coins, Xp};

/// Configuration for the progression systems
///
/// These values set the pacing of the XP economy. Changing them shifts
/// how quickly users level up and how much store currency circulates.
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    // === LEVEL CURVE ===
    /// XP required to advance one level
    ///
    /// The XP bar always runs 0..xp_per_level; leveling subtracts this
    /// amount rather than resetting to zero, so overshoot carries over.
    pub xp_per_level: Xp,

    /// Coins granted on each level-up
    ///
    /// The only coin faucet. At 100 coins per level and theme prices in
    /// the 250-500 range, the first theme purchase lands around level 4.
    pub level_coin_bonus: Coins,

    // === ACTIVITY REWARDS ===
    /// XP for completing a task
    ///
    /// The baseline reward; ten tasks equal one level.
    pub task_xp: Xp,

    /// XP for checking off a habit for today
    ///
    /// Higher than a task: habits are once-per-day, tasks are unbounded.
    pub habit_xp: Xp,

    /// XP per glass of water logged
    pub water_glass_xp: Xp,

    /// Bonus XP when daily water intake reaches the goal
    ///
    /// Paid exactly once per day, at the moment intake hits the goal.
    pub water_goal_bonus_xp: Xp,

    // === POMODORO ===
    /// Focus cycles between long breaks
    ///
    /// After this many finished focus sessions the next break is a long
    /// one; otherwise a short break.
    pub cycles_per_long_break: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            xp_per_level: 100,
            level_coin_bonus: 100,
            task_xp: 10,
            habit_xp: 15,
            water_glass_xp: 5,
            water_goal_bonus_xp: 50,
            cycles_per_long_break: 4,
        }
    }
}
