//! Persisted user preferences: last opened deck, sound toggle and color theme.
//! Stored as a small pretty-printed JSON file that is rewritten in full on every change.

use super::Theme;
use crate::error::AppError;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    #[serde(rename = "last_flashcard_path")]
    pub last_path: String,
    pub sound_on: bool,
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            last_path: String::new(),
            sound_on: true,
            theme: Theme::default(),
        }
    }
}

impl Preferences {
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_on = !self.sound_on;
        self.sound_on
    }

    pub fn cycle_theme(&mut self) -> Theme {
        self.theme = self.theme.next();
        self.theme
    }

    pub fn set_last_path(&mut self, path: &Path) {
        self.last_path = path.to_string_lossy().into_owned();
    }

    /// Last deck path, if one was recorded.
    pub fn last_path(&self) -> Option<PathBuf> {
        if self.last_path.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.last_path))
        }
    }
}

pub struct PreferencesStore {
    path: PathBuf,
}

impl Default for PreferencesStore {
    fn default() -> Self {
        Self::new(paths::settings_path())
    }
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored preferences, falling back to defaults when the file
    /// is absent, unreadable or malformed.
    pub fn load(&self) -> Preferences {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No preferences at '{}', using defaults", self.path.display());
                return Preferences::default();
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read preferences '{}': {}. Using defaults.",
                    self.path.display(),
                    e
                );
                return Preferences::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(
                    "Malformed preferences '{}': {}. Using defaults.",
                    self.path.display(),
                    e
                );
                Preferences::default()
            }
        }
    }

    /// Writes the whole record.
    pub fn save(&self, prefs: &Preferences) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(prefs)?;
        paths::ensure_parent_dir(&self.path);
        fs::write(&self.path, json).map_err(|source| AppError::PreferencesIo {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!("Preferences saved to '{}'", self.path.display());
        Ok(())
    }
}
