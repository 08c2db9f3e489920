//! Preference resolution with layered overrides

use super::{LAUNCH_DIR, PREFERENCES_FILE};
use crate::Result;
use crate::preferences::{LaunchPreferences, PreferenceLayer, PreferenceStore};
use std::path::PathBuf;

/// Resolves preferences by merging the global and workspace layers.
///
/// Changes made through the returned [`PreferenceStore`] are written to the
/// workspace layer.
pub struct PreferenceResolver {
    /// Workspace root directory
    root: PathBuf,

    /// Override for the global config directory (used for testing).
    /// When `None`, the platform-appropriate directory is used via `dirs::config_dir()`.
    global_config_dir_override: Option<PathBuf>,
}

impl PreferenceResolver {
    /// Create a resolver for the workspace at `root`
    ///
    /// Uses the platform-appropriate global config directory:
    /// - Linux: `~/.config/context-launch/`
    /// - macOS: `~/Library/Application Support/context-launch/`
    /// - Windows: `%APPDATA%\context-launch\`
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            global_config_dir_override: None,
        }
    }

    /// Create a resolver with a custom global config directory.
    pub fn with_global_config_dir(root: PathBuf, global_config_dir: PathBuf) -> Self {
        Self {
            root,
            global_config_dir_override: Some(global_config_dir),
        }
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join("context-launch"))
    }

    /// Path of the writable workspace layer
    pub fn workspace_preferences_path(&self) -> PathBuf {
        self.root.join(LAUNCH_DIR).join(PREFERENCES_FILE)
    }

    /// Merge defaults, the global layer and the workspace layer.
    ///
    /// Missing layers are skipped. Invalid TOML in any layer is an error.
    pub fn resolve(&self) -> Result<PreferenceStore> {
        let mut effective = LaunchPreferences::default();

        // Layer 1 - global preferences
        if let Some(global_dir) = self.global_config_dir() {
            let global_path = global_dir.join(PREFERENCES_FILE);
            if global_path.is_file() {
                tracing::debug!(?global_path, "Loading global preferences (layer 1)");
                effective.apply(&PreferenceLayer::load(&global_path)?);
            } else {
                tracing::debug!(?global_path, "No global preferences (layer 1), skipping");
            }
        }

        // Layer 2 - workspace preferences
        let local_path = self.workspace_preferences_path();
        let local = PreferenceLayer::load(&local_path)?;
        if local != PreferenceLayer::default() {
            tracing::debug!(?local_path, "Loaded workspace preferences (layer 2)");
        }
        effective.apply(&local);

        Ok(PreferenceStore::backed_by(effective, local, local_path))
    }
}
