//! The XP ledger: experience in, levels and coins out
//!
//! Crossing the level threshold subtracts the threshold rather than
//! resetting XP, so overshoot carries into the new level. Each level
//! gained pays the coin bonus once.

use crate::core::config::ProgressConfig;
use crate::core::types::{Coins, Xp};
use crate::profile::user::UserProfile;

/// What one `add_xp` call produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelUpSummary {
    pub levels_gained: u32,
    pub coins_awarded: Coins,
}

impl LevelUpSummary {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Add XP to the profile, applying as many level-ups as the total covers.
///
/// Afterwards `profile.xp` is always below `config.xp_per_level`, and the
/// level rose by exactly `(old_xp + amount) / xp_per_level` (integer
/// division). Total function: any `amount` is accepted.
pub fn add_xp(profile: &mut UserProfile, amount: Xp, config: &ProgressConfig) -> LevelUpSummary {
    // A zero threshold could never settle; treat it as "leveling disabled"
    if config.xp_per_level == 0 {
        return LevelUpSummary::default();
    }

    profile.xp = profile.xp.saturating_add(amount);

    let mut summary = LevelUpSummary::default();
    while profile.xp >= config.xp_per_level {
        profile.xp -= config.xp_per_level;
        profile.level += 1;
        profile.store.coins += config.level_coin_bonus;
        summary.levels_gained += 1;
        summary.coins_awarded += config.level_coin_bonus;
        tracing::info!(level = profile.level, "level up");
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_award_no_level_up() {
        let config = ProgressConfig::default();
        let mut profile = UserProfile::new();

        let summary = add_xp(&mut profile, 40, &config);
        assert_eq!(profile.level, 1);
        assert_eq!(profile.xp, 40);
        assert!(!summary.leveled_up());
        assert_eq!(profile.store.coins, 0);
    }

    #[test]
    fn test_threshold_crossing_carries_overshoot() {
        let config = ProgressConfig::default();
        let mut profile = UserProfile::new();
        profile.xp = 95;

        let summary = add_xp(&mut profile, 10, &config);
        assert_eq!(profile.level, 2);
        assert_eq!(profile.xp, 5);
        assert_eq!(summary.levels_gained, 1);
        assert_eq!(summary.coins_awarded, 100);
        assert_eq!(profile.store.coins, 100);
    }

    #[test]
    fn test_large_award_multiple_level_ups() {
        let config = ProgressConfig::default();
        let mut profile = UserProfile::new();

        let summary = add_xp(&mut profile, 250, &config);
        assert_eq!(profile.level, 3);
        assert_eq!(profile.xp, 50);
        assert_eq!(summary.levels_gained, 2);
        assert_eq!(profile.store.coins, 200);
    }

    #[test]
    fn test_exact_threshold_lands_on_zero() {
        let config = ProgressConfig::default();
        let mut profile = UserProfile::new();

        add_xp(&mut profile, 100, &config);
        assert_eq!(profile.level, 2);
        assert_eq!(profile.xp, 0);
    }

    #[test]
    fn test_zero_amount_is_noop() {
        let config = ProgressConfig::default();
        let mut profile = UserProfile::new();
        profile.xp = 30;

        let summary = add_xp(&mut profile, 0, &config);
        assert_eq!(profile.xp, 30);
        assert_eq!(profile.level, 1);
        assert_eq!(summary, LevelUpSummary::default());
    }

    #[test]
    fn test_zero_threshold_disables_leveling() {
        let config = ProgressConfig {
            xp_per_level: 0,
            ..ProgressConfig::default()
        };
        let mut profile = UserProfile::new();

        let summary = add_xp(&mut profile, 500, &config);
        assert_eq!(profile.level, 1);
        assert!(!summary.leveled_up());
    }
}
