//! XP-earning activities and the single entry point that records them
//!
//! `record_activity` is the read-modify-return unit the UI calls: bump the
//! feature counter, route XP through the ledger, then rescan achievement
//! conditions. Everything happens synchronously on the borrowed profile,
//! so one call is one atomic state transition.

use crate::achievements::engine::evaluate;
use crate::achievements::registry::AchievementRegistry;
use crate::core::config::ProgressConfig;
use crate::core::types::{Coins, DayIndex, Xp};
use crate::profile::user::UserProfile;
use crate::progress::ledger::add_xp;
use crate::progress::pomodoro::PomodoroMode;

/// Something the user did that the engine should account for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    TaskCompleted,
    /// Habit at `habit` checked off for `today` (Sunday = 0)
    HabitCompleted { habit: usize, today: DayIndex },
    WaterGlass,
    PomodoroCycleFinished,
    JournalEntryWritten,
}

/// Everything one recorded activity produced, for the UI to render
#[derive(Debug, Clone, Default)]
pub struct ActivityOutcome {
    pub xp_awarded: Xp,
    pub levels_gained: u32,
    pub coins_awarded: Coins,
    /// Achievement ids unlocked by this activity
    pub newly_unlocked: Vec<String>,
    /// Next timer phase, set only for pomodoro activities
    pub next_pomodoro: Option<PomodoroMode>,
}

/// Record one activity against the profile.
///
/// Already-satisfied actions (habit checked twice, water past goal) award
/// nothing but still return a well-formed outcome.
pub fn record_activity(
    profile: &mut UserProfile,
    registry: &AchievementRegistry,
    activity: Activity,
    config: &ProgressConfig,
) -> ActivityOutcome {
    let mut xp = 0;
    let mut next_pomodoro = None;

    match activity {
        Activity::TaskCompleted => {
            profile.tasks.completed += 1;
            xp = config.task_xp;
        }
        Activity::HabitCompleted { habit, today } => {
            if profile.habits.mark_complete(habit, today) {
                xp = config.habit_xp;
            }
        }
        Activity::WaterGlass => {
            if profile.water.intake < profile.water.goal {
                profile.water.intake += 1;
                xp = config.water_glass_xp;
                if profile.water.intake == profile.water.goal {
                    xp += config.water_goal_bonus_xp;
                    profile.water.streak += 1;
                }
            }
        }
        Activity::PomodoroCycleFinished => {
            next_pomodoro = Some(profile.pomodoro.finish_focus(config));
        }
        Activity::JournalEntryWritten => {
            profile.journal.entries += 1;
        }
    }

    tracing::debug!(?activity, xp, "activity recorded");

    let summary = add_xp(profile, xp, config);
    let newly_unlocked = evaluate(registry, profile);

    ActivityOutcome {
        xp_awarded: xp,
        levels_gained: summary.levels_gained,
        coins_awarded: summary.coins_awarded,
        newly_unlocked,
        next_pomodoro,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::habits::Habit;

    fn setup() -> (UserProfile, AchievementRegistry, ProgressConfig) {
        (
            UserProfile::new(),
            AchievementRegistry::builtin(),
            ProgressConfig::default(),
        )
    }

    #[test]
    fn test_task_awards_xp_and_counter() {
        let (mut profile, registry, config) = setup();

        let outcome = record_activity(&mut profile, &registry, Activity::TaskCompleted, &config);
        assert_eq!(outcome.xp_awarded, 10);
        assert_eq!(profile.tasks.completed, 1);
        assert_eq!(profile.xp, 10);
        // First task unlocks the starter achievement
        assert_eq!(outcome.newly_unlocked, vec!["tasks_1".to_string()]);
    }

    #[test]
    fn test_habit_double_check_awards_nothing() {
        let (mut profile, registry, config) = setup();
        profile.habits.habits.push(Habit::new("read"));

        let first = record_activity(
            &mut profile,
            &registry,
            Activity::HabitCompleted { habit: 0, today: 2 },
            &config,
        );
        assert_eq!(first.xp_awarded, 15);

        let second = record_activity(
            &mut profile,
            &registry,
            Activity::HabitCompleted { habit: 0, today: 2 },
            &config,
        );
        assert_eq!(second.xp_awarded, 0);
        assert_eq!(profile.xp, 15);
    }

    #[test]
    fn test_water_goal_bonus_paid_once() {
        let (mut profile, registry, config) = setup();
        profile.water.goal = 2;

        let first = record_activity(&mut profile, &registry, Activity::WaterGlass, &config);
        assert_eq!(first.xp_awarded, 5);

        // Second glass hits the goal: glass XP plus the bonus
        let second = record_activity(&mut profile, &registry, Activity::WaterGlass, &config);
        assert_eq!(second.xp_awarded, 55);
        assert_eq!(profile.water.streak, 1);

        // Past the goal nothing accrues
        let third = record_activity(&mut profile, &registry, Activity::WaterGlass, &config);
        assert_eq!(third.xp_awarded, 0);
        assert_eq!(profile.water.intake, 2);
        assert_eq!(profile.water.streak, 1);
    }

    #[test]
    fn test_pomodoro_reports_next_phase() {
        let (mut profile, registry, config) = setup();

        let outcome = record_activity(
            &mut profile,
            &registry,
            Activity::PomodoroCycleFinished,
            &config,
        );
        assert_eq!(outcome.next_pomodoro, Some(PomodoroMode::ShortBreak));
        assert_eq!(outcome.xp_awarded, 0);
        assert_eq!(profile.pomodoro.cycles, 1);
    }

    #[test]
    fn test_level_up_flows_into_outcome() {
        let (mut profile, registry, config) = setup();
        profile.xp = 95;

        let outcome = record_activity(&mut profile, &registry, Activity::TaskCompleted, &config);
        assert_eq!(outcome.levels_gained, 1);
        assert_eq!(outcome.coins_awarded, 100);
        assert_eq!(profile.level, 2);
        assert_eq!(profile.xp, 5);
    }
}
