pub mod storage;
pub mod user;

pub use storage::{load_profile, save_profile};
pub use user::{AchievementState, JournalLog, TaskLog, UserProfile, WaterLog};
