//! Settings file persistence.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::model::FilterConfig;
use crate::error::Result;

/// Directory name under the platform config directory.
const APP_DIR: &str = "silencecrew";

/// File name of the settings file.
const SETTINGS_FILE: &str = "settings.json";

/// Default settings file location, e.g. `~/.config/silencecrew/settings.json`.
///
/// Falls back to the current directory when the platform has no config dir.
#[must_use]
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(SETTINGS_FILE)
}

impl FilterConfig {
    /// Load settings from `path`.
    ///
    /// A missing file yields the defaults. Keys absent from the file keep
    /// their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        debug!(path = %path.display(), "Settings loaded");
        Ok(config)
    }

    /// Save settings to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file can't be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        info!("Settings saved to {:?}", path);
        Ok(())
    }
}
