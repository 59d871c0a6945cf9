//! Load extra achievement definitions from TOML files
//!
//! Each file carries an `[[achievements]]` array:
//!
//! ```toml
//! [[achievements]]
//! id = "journal_30"
//! title = "Dear Diary"
//! description = "Write 30 journal entries."
//! icon = "bi-journal-text"
//! condition = "journal_entries"
//! threshold = 30
//! ```

use std::fs;
use std::path::Path;

use crate::achievements::condition::Condition;
use crate::achievements::registry::{AchievementEntry, AchievementRegistry};
use crate::core::error::{NovaError, Result};

/// Load all `*.toml` achievement files from a directory into the registry.
///
/// A missing directory is fine (no custom achievements installed).
/// Returns the number of definitions added.
pub fn load_achievement_files(dir: &Path, registry: &mut AchievementRegistry) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut loaded = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            continue;
        }
        let content = fs::read_to_string(&path)?;
        for parsed in parse_manifest(&content)? {
            registry.add(parsed)?;
            loaded += 1;
        }
    }

    tracing::debug!(loaded, "custom achievements loaded");
    Ok(loaded)
}

fn parse_manifest(content: &str) -> Result<Vec<AchievementEntry>> {
    let toml: toml::Value = content
        .parse()
        .map_err(|e| NovaError::InvalidAchievement(format!("invalid TOML: {}", e)))?;

    let mut entries = Vec::new();
    if let Some(achievements) = toml.get("achievements").and_then(|v| v.as_array()) {
        for value in achievements {
            entries.push(parse_achievement(value)?);
        }
    }
    Ok(entries)
}

fn parse_achievement(value: &toml::Value) -> Result<AchievementEntry> {
    let id = value
        .get("id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| NovaError::InvalidAchievement("achievement missing id".to_string()))?
        .to_string();

    let title = value
        .get("title")
        .and_then(|v| v.as_str())
        .ok_or_else(|| NovaError::InvalidAchievement(format!("{}: missing title", id)))?
        .to_string();

    let description = value
        .get("description")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();

    let icon = value
        .get("icon")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();

    let kind = value
        .get("condition")
        .and_then(|v| v.as_str())
        .ok_or_else(|| NovaError::InvalidAchievement(format!("{}: missing condition", id)))?;

    let threshold = value
        .get("threshold")
        .and_then(|v| v.as_integer())
        .ok_or_else(|| NovaError::InvalidAchievement(format!("{}: missing threshold", id)))?;

    let condition = parse_condition(kind, threshold).ok_or_else(|| {
        NovaError::InvalidAchievement(format!("{}: unknown condition '{}'", id, kind))
    })?;

    Ok(AchievementEntry {
        id,
        title,
        description,
        icon,
        condition,
    })
}

fn parse_condition(kind: &str, threshold: i64) -> Option<Condition> {
    match kind {
        "level" => Some(Condition::LevelAtLeast(u32::try_from(threshold).ok()?)),
        "tasks_completed" => Some(Condition::TasksCompletedAtLeast(u32::try_from(threshold).ok()?)),
        "pomodoro_cycles" => Some(Condition::PomodoroCyclesAtLeast(u32::try_from(threshold).ok()?)),
        "coins" => Some(Condition::CoinsAtLeast(u64::try_from(threshold).ok()?)),
        "themes_owned" => Some(Condition::ThemesOwnedAtLeast(usize::try_from(threshold).ok()?)),
        "habit_streak" => Some(Condition::HabitStreakAtLeast(u32::try_from(threshold).ok()?)),
        "water_streak" => Some(Condition::WaterStreakAtLeast(u32::try_from(threshold).ok()?)),
        "journal_entries" => Some(Condition::JournalEntriesAtLeast(u32::try_from(threshold).ok()?)),
        _ => None,
    }
}
