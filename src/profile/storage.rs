//! JSON snapshot persistence for the user profile
//!
//! One profile, one document. Durability and transactions are the
//! platform's concern; a missing or corrupt file surfaces as an error and
//! callers typically fall back to `UserProfile::default()`.

use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::profile::user::UserProfile;

/// Read a profile snapshot from disk
pub fn load_profile(path: &Path) -> Result<UserProfile> {
    let content = fs::read_to_string(path)?;
    let profile = serde_json::from_str(&content)?;
    Ok(profile)
}

/// Write the profile snapshot to disk, replacing any previous one
pub fn save_profile(path: &Path, profile: &UserProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}
