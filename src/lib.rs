//! TaskNova - gamification engine for a personal productivity suite

pub mod achievements;
pub mod core;
pub mod profile;
pub mod progress;
