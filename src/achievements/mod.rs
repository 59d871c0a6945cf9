//! Declarative achievement rules evaluated over profile snapshots
//!
//! Definitions are fixed at process start: a static built-in catalog plus
//! optional TOML-loaded extras. The engine is a single-pass full rescan;
//! the unlocked set on the profile only ever grows.

pub mod catalog;
pub mod condition;
pub mod engine;
pub mod loader;
pub mod registry;

pub use catalog::{AchievementDefinition, ACHIEVEMENT_CATALOG};
pub use condition::Condition;
pub use engine::evaluate;
pub use loader::load_achievement_files;
pub use registry::{AchievementEntry, AchievementRegistry};
