//! Context-launching preferences
//!
//! Preferences come in layers (see [`crate::config::PreferenceResolver`]).
//! A [`PreferenceLayer`] is one file's worth of optional values; the
//! [`PreferenceStore`] holds the effective values and writes changes back to
//! the innermost layer only.

use crate::collaborators::Preferences;
use crate::history::DEFAULT_HISTORY_SIZE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Effective preference values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchPreferences {
    pub auto_escalate_to_parent: bool,
    pub context_launching_enabled: bool,
    pub history_size: usize,
}

impl Default for LaunchPreferences {
    fn default() -> Self {
        Self {
            auto_escalate_to_parent: false,
            context_launching_enabled: true,
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

impl LaunchPreferences {
    /// Apply every value present in `layer`
    pub fn apply(&mut self, layer: &PreferenceLayer) {
        if let Some(v) = layer.auto_escalate_to_parent {
            self.auto_escalate_to_parent = v;
        }
        if let Some(v) = layer.context_launching_enabled {
            self.context_launching_enabled = v;
        }
        if let Some(v) = layer.history_size {
            self.history_size = v.max(1);
        }
    }
}

/// Preference values from a single `preferences.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceLayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_escalate_to_parent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_launching_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_size: Option<usize>,
}

impl PreferenceLayer {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a layer; a missing file is an empty layer
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

/// Names of the settable preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKey {
    AutoEscalateToParent,
    ContextLaunchingEnabled,
    HistorySize,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 3] = [
        PreferenceKey::AutoEscalateToParent,
        PreferenceKey::ContextLaunchingEnabled,
        PreferenceKey::HistorySize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::AutoEscalateToParent => "auto_escalate_to_parent",
            PreferenceKey::ContextLaunchingEnabled => "context_launching_enabled",
            PreferenceKey::HistorySize => "history_size",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.replace('-', "_");
        PreferenceKey::ALL
            .into_iter()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| Error::UnknownPreference { key: s.to_string() })
    }
}

/// Effective preferences plus the writable innermost layer
#[derive(Debug)]
pub struct PreferenceStore {
    effective: RefCell<LaunchPreferences>,
    local: RefCell<PreferenceLayer>,
    path: Option<PathBuf>,
}

impl PreferenceStore {
    /// Preferences that live only in memory
    pub fn in_memory(values: LaunchPreferences) -> Self {
        Self {
            effective: RefCell::new(values),
            local: RefCell::new(PreferenceLayer::default()),
            path: None,
        }
    }

    /// Preferences whose changes are written to `path`
    pub fn backed_by(effective: LaunchPreferences, local: PreferenceLayer, path: PathBuf) -> Self {
        Self {
            effective: RefCell::new(effective),
            local: RefCell::new(local),
            path: Some(path),
        }
    }

    pub fn values(&self) -> LaunchPreferences {
        *self.effective.borrow()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Set a preference from its textual form and persist it
    pub fn set_from_str(&self, key: PreferenceKey, value: &str) -> Result<()> {
        let invalid = || Error::InvalidPreferenceValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            PreferenceKey::AutoEscalateToParent => {
                self.set_auto_escalate_to_parent(value.parse().map_err(|_| invalid())?)
            }
            PreferenceKey::ContextLaunchingEnabled => {
                self.set_context_launching_enabled(value.parse().map_err(|_| invalid())?)
            }
            PreferenceKey::HistorySize => {
                let size: usize = value.parse().map_err(|_| invalid())?;
                self.update(|layer| layer.history_size = Some(size.max(1)))
            }
        }
    }

    /// Nothing changes in memory unless the layer was saved.
    fn update(&self, change: impl FnOnce(&mut PreferenceLayer)) -> Result<()> {
        let mut local = self.local.borrow().clone();
        change(&mut local);
        if let Some(path) = &self.path {
            tracing::debug!(?path, "Saving preferences");
            local.save(path)?;
        }
        self.effective.borrow_mut().apply(&local);
        *self.local.borrow_mut() = local;
        Ok(())
    }
}

impl Preferences for PreferenceStore {
    fn auto_escalate_to_parent(&self) -> bool {
        self.effective.borrow().auto_escalate_to_parent
    }

    fn set_auto_escalate_to_parent(&self, value: bool) -> Result<()> {
        self.update(|layer| layer.auto_escalate_to_parent = Some(value))
    }

    fn context_launching_enabled(&self) -> bool {
        self.effective.borrow().context_launching_enabled
    }

    fn set_context_launching_enabled(&self, value: bool) -> Result<()> {
        self.update(|layer| layer.context_launching_enabled = Some(value))
    }
}
