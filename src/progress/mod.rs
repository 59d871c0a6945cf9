//! Progress ledger and the activities that feed it
//!
//! Every XP-earning action in the suite routes through here: the ledger
//! turns XP into levels and coins, and the feature modules keep the
//! counters that achievement conditions read.

pub mod activity;
pub mod habits;
pub mod ledger;
pub mod pomodoro;
pub mod store;

pub use activity::{record_activity, Activity, ActivityOutcome};
pub use habits::{Habit, HabitLog, DAYS_PER_WEEK};
pub use ledger::{add_xp, LevelUpSummary};
pub use pomodoro::{PomodoroLog, PomodoroMode};
pub use store::{equip_theme, get_theme_definition, purchase_theme, StoreState, ThemeDefinition, THEME_CATALOG};
