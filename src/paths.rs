//! File locations for preferences and sound assets.
//!
//! ## Environment Variables
//!
//! - `EXQUIZZITE_CONFIG_DIR`: directory holding `settings.json`
//!   (default: the platform config dir, e.g. `~/.config/exquizzite`)
//! - `EXQUIZZITE_SOUNDS_DIR`: directory holding `correct.wav`, `incorrect.wav`
//!   and `all_done.wav` (default: `sounds/` next to the executable)

use std::env;
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "exquizzite";
const SETTINGS_FILE: &str = "settings.json";

pub fn config_dir() -> PathBuf {
    if let Ok(dir) = env::var("EXQUIZZITE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::config_dir() {
        Some(dir) => dir.join(APP_NAME),
        None => PathBuf::from("."),
    }
}

pub fn settings_path() -> PathBuf {
    config_dir().join(SETTINGS_FILE)
}

pub fn sounds_dir() -> PathBuf {
    if let Ok(dir) = env::var("EXQUIZZITE_SOUNDS_DIR") {
        return PathBuf::from(dir);
    }
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("sounds")))
        .unwrap_or_else(|| PathBuf::from("sounds"))
}

/// Creates the directory that will hold `path`, ignoring failures.
pub fn ensure_parent_dir(path: &std::path::Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            tracing::warn!("Cannot create '{}': {}", parent.display(), e);
        }
    }
}
