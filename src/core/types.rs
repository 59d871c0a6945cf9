//! Core type definitions used throughout the codebase

/// Progression tier, starts at 1 and only goes up
pub type Level = u32;

/// Experience points within the current level
pub type Xp = u32;

/// Spendable currency earned by leveling up
pub type Coins = u64;

/// Day-of-week index into a habit week grid (Sunday = 0)
pub type DayIndex = usize;
