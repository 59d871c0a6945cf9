//! Pomodoro cycle bookkeeping
//!
//! Wall-clock timing lives in the UI layer; this module only tracks how
//! many focus sessions finished and which break comes next.

use serde::{Deserialize, Serialize};

use crate::core::config::ProgressConfig;

/// Timer phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PomodoroMode {
    Focus,
    ShortBreak,
    LongBreak,
}

/// Pomodoro state on the user profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PomodoroLog {
    /// Finished focus sessions
    #[serde(default)]
    pub cycles: u32,
}

impl PomodoroLog {
    /// Record a finished focus session and return the break that follows.
    ///
    /// Every `cycles_per_long_break`-th cycle earns a long break.
    pub fn finish_focus(&mut self, config: &ProgressConfig) -> PomodoroMode {
        self.cycles += 1;
        if config.cycles_per_long_break > 0 && self.cycles % config.cycles_per_long_break == 0 {
            PomodoroMode::LongBreak
        } else {
            PomodoroMode::ShortBreak
        }
    }

    /// Breaks always hand back to focus
    pub fn finish_break(&self) -> PomodoroMode {
        PomodoroMode::Focus
    }
}
