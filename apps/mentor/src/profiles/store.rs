//! Profile Store: a single JSON file mapping profile name to profile record.
//!
//! `load` never fails: a missing, unreadable or malformed file yields an empty
//! mapping, and a record that cannot be read is skipped on its own. `save` overwrites the whole file. There is no locking; a single
//! logical writer is assumed.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::profiles::models::{NewProfile, Profile};

/// All profiles keyed by name.
pub type Profiles = BTreeMap<String, Profile>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write profile file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize profiles: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every profile from disk.
    pub async fn load(&self) -> Profiles {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Profiles::new(),
            Err(e) => {
                warn!("Could not read {}: {e}; starting empty", self.path.display());
                return Profiles::new();
            }
        };

        let records: Map<String, Value> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Malformed profile file {}: {e}; starting empty", self.path.display());
                return Profiles::new();
            }
        };

        let mut profiles = Profiles::new();
        for (key, record) in records {
            let mut profile: Profile = match serde_json::from_value(record) {
                Ok(profile) => profile,
                Err(e) => {
                    warn!("Skipping unreadable profile '{key}' in {}: {e}", self.path.display());
                    continue;
                }
            };
            if profile.name.is_empty() {
                profile.name = key.clone();
            }
            profiles.insert(key, profile);
        }
        profiles
    }

    /// Serializes the full mapping, overwriting the file.
    pub async fn save(&self, profiles: &Profiles) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(profiles)?;
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }

    /// Inserts (or overwrites) a profile with an empty chat history and persists.
    ///
    /// A blank name is a no-op: `profiles` is left untouched, nothing is written,
    /// and `Ok(false)` is returned.
    pub async fn create(&self, profiles: &mut Profiles, new: NewProfile) -> Result<bool, StoreError> {
        if new.name.trim().is_empty() {
            return Ok(false);
        }
        let profile = new.into_profile();
        info!("Creating profile '{}' ({})", profile.name, profile.language);
        profiles.insert(profile.name.clone(), profile);
        self.save(profiles).await?;
        Ok(true)
    }
}

/// Removes a profile from the mapping. The caller persists.
pub fn delete_profile(profiles: &mut Profiles, name: &str) -> Option<Profile> {
    profiles.remove(name)
}
