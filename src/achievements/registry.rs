//! Runtime achievement registry
//!
//! Built once at startup from the static catalog plus any TOML-loaded
//! definitions, then treated as immutable by the engine.

use crate::achievements::catalog::{AchievementDefinition, ACHIEVEMENT_CATALOG};
use crate::achievements::condition::Condition;
use crate::core::error::{NovaError, Result};

/// An achievement definition as held at runtime (ids may come from files)
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub condition: Condition,
}

impl From<&AchievementDefinition> for AchievementEntry {
    fn from(def: &AchievementDefinition) -> Self {
        Self {
            id: def.id.to_string(),
            title: def.title.to_string(),
            description: def.description.to_string(),
            icon: def.icon.to_string(),
            condition: def.condition,
        }
    }
}

/// The full rule set the engine scans
#[derive(Debug, Clone)]
pub struct AchievementRegistry {
    entries: Vec<AchievementEntry>,
}

impl AchievementRegistry {
    /// A registry with no definitions (mostly for tests)
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// A registry holding the built-in catalog
    pub fn builtin() -> Self {
        Self {
            entries: ACHIEVEMENT_CATALOG.iter().map(AchievementEntry::from).collect(),
        }
    }

    /// Add a definition, rejecting duplicate ids
    pub fn add(&mut self, entry: AchievementEntry) -> Result<()> {
        if self.contains(&entry.id) {
            return Err(NovaError::DuplicateAchievement(entry.id));
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&AchievementEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[AchievementEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AchievementRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
