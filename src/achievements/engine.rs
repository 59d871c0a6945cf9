//! Achievement evaluation - idempotent single-pass rescan
//!
//! For every definition whose id is not yet on the profile, test its
//! condition against the current snapshot and unlock on success. Ids are
//! inserted at most once and never removed, so re-running over the same
//! state is a no-op.

use crate::achievements::registry::AchievementRegistry;
use crate::profile::user::UserProfile;

/// Scan all definitions and unlock any whose condition now holds.
///
/// Returns the newly-unlocked ids, in registry order, so callers can
/// present notifications. Persisting the updated profile is the caller's
/// responsibility.
pub fn evaluate(registry: &AchievementRegistry, profile: &mut UserProfile) -> Vec<String> {
    let mut newly_unlocked = Vec::new();

    for entry in registry.entries() {
        if profile.achievements.is_unlocked(&entry.id) {
            continue;
        }
        if entry.condition.is_met(profile) {
            profile.achievements.unlocked.insert(entry.id.clone());
            tracing::info!(id = %entry.id, title = %entry.title, "achievement unlocked");
            newly_unlocked.push(entry.id.clone());
        }
    }

    newly_unlocked
}
