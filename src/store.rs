//! JSON profile storage with per-user locking
//!
//! Each user is one `<user_id>.json` file in the data directory. `update`
//! holds an exclusive lock on `<user_id>.json.lock` across load, compute and
//! save, so two processes recording workouts for the same user cannot lose
//! each other's updates. Saves go through a temp file and a rename, so stats
//! and unlocked achievements land together or not at all.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::fsio;
use crate::profile::UserProfile;

#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under ~/.workhome/profiles
    pub fn open_default() -> Self {
        let dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".workhome")
            .join("profiles");
        Self::new(dir)
    }

    pub fn profile_path(&self, user_id: &str) -> Result<PathBuf> {
        validate_user_id(user_id)?;
        Ok(self.dir.join(format!("{user_id}.json")))
    }

    /// Load a profile, or a fresh one if the user has none yet
    pub fn load(&self, user_id: &str) -> Result<UserProfile> {
        let path = self.profile_path(user_id)?;
        if !path.exists() {
            tracing::debug!("No profile for {}, starting fresh", user_id);
            return Ok(UserProfile::new(user_id));
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        let profile: UserProfile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse profile: {}", path.display()))?;

        if profile.user_id != user_id {
            bail!(
                "Profile {} belongs to '{}', expected '{}'",
                path.display(),
                profile.user_id,
                user_id
            );
        }
        Ok(profile)
    }

    /// Load, modify and save a profile as one critical section.
    ///
    /// If `f` fails nothing is written.
    pub fn update<T>(
        &self,
        user_id: &str,
        f: impl FnOnce(&mut UserProfile) -> Result<T>,
    ) -> Result<T> {
        let _lock = self.lock(user_id)?;
        let mut profile = self.load(user_id)?;
        let value = f(&mut profile)?;
        self.write_atomic(&profile)?;
        Ok(value)
    }

    fn lock(&self, user_id: &str) -> Result<File> {
        let path = self.profile_path(user_id)?;
        fsio::lock_exclusive(&path.with_extension("json.lock"))
            .with_context(|| format!("Failed to lock profile for '{user_id}'"))
    }

    fn write_atomic(&self, profile: &UserProfile) -> Result<()> {
        let path = self.profile_path(&profile.user_id)?;
        let content =
            serde_json::to_vec_pretty(profile).with_context(|| "Failed to serialize profile")?;
        fsio::write_atomic(&path, &content)
    }
}

/// User IDs become file names, so keep them to a safe alphabet
fn validate_user_id(user_id: &str) -> Result<()> {
    if user_id.is_empty() || user_id.len() > 64 {
        bail!("User id must be 1-64 characters");
    }
    if !user_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        bail!("User id '{user_id}' may only contain letters, digits, '-' and '_'");
    }
    Ok(())
}
