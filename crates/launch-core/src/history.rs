//! Launch history
//!
//! [`LaunchHistory`] keeps a bounded, most-recent-first list of launched
//! configurations per launch group. It is persisted as JSON with the same
//! lock-then-rename discipline used for every file this crate writes.

use crate::Result;
use crate::collaborators::HistoryStore;
use chrono::{DateTime, Utc};
use fs2::FileExt;
use launch_model::Configuration;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Read;
use std::path::Path;

/// Default number of entries kept per group
pub const DEFAULT_HISTORY_SIZE: usize = 10;

/// One launch of a configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub configuration: Configuration,
    pub launched_at: DateTime<Utc>,
}

/// Per-group recency-ordered launch history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchHistory {
    /// History format version for forward compatibility
    version: String,
    #[serde(default = "default_max_size")]
    max_size: usize,
    #[serde(default)]
    groups: BTreeMap<String, Vec<HistoryEntry>>,
}

fn default_max_size() -> usize {
    DEFAULT_HISTORY_SIZE
}

impl Default for LaunchHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchHistory {
    /// Create an empty history with the default size bound
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_SIZE)
    }

    /// Create an empty history keeping at most `max_size` entries per group
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            version: "1.0".to_string(),
            max_size: max_size.max(1),
            groups: BTreeMap::new(),
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Change the bound, truncating existing groups if needed
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size.max(1);
        for entries in self.groups.values_mut() {
            entries.truncate(self.max_size);
        }
    }

    /// Record a launch at the front of `group_id`'s history.
    ///
    /// An earlier entry for the same configuration is removed, and the
    /// oldest entries beyond the size bound are dropped.
    pub fn record_launch(&mut self, group_id: &str, configuration: Configuration) {
        self.record_launch_at(group_id, configuration, Utc::now());
    }

    pub fn record_launch_at(
        &mut self,
        group_id: &str,
        configuration: Configuration,
        launched_at: DateTime<Utc>,
    ) {
        let entries = self.groups.entry(group_id.to_string()).or_default();
        entries.retain(|e| e.configuration != configuration);
        entries.insert(
            0,
            HistoryEntry {
                configuration,
                launched_at,
            },
        );
        entries.truncate(self.max_size);
        tracing::debug!(group = group_id, size = entries.len(), "Recorded launch");
    }

    /// Entries for a group, most recent first
    pub fn entries(&self, group_id: &str) -> &[HistoryEntry] {
        self.groups.get(group_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remove every entry for `group_id`
    pub fn clear(&mut self, group_id: &str) {
        self.groups.remove(group_id);
    }

    /// Load history from a JSON file with a shared lock
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        file.lock_shared()?;

        // Read through the locked handle
        let mut content = String::new();
        (&file).read_to_string(&mut content)?;
        let mut history: LaunchHistory = serde_json::from_str(&content)?;
        history.max_size = history.max_size.max(1);
        Ok(history)
    }

    /// Load history, or start empty when the file does not exist yet
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(?path, "No history file, starting empty");
            Ok(Self::new())
        }
    }

    /// Save atomically under an exclusive lock
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        lock_file.lock_exclusive()?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

impl HistoryStore for LaunchHistory {
    fn recent_launch(&self, group_id: &str) -> Option<Configuration> {
        self.entries(group_id).first().map(|e| e.configuration.clone())
    }

    fn complete_history(&self, group_id: &str) -> Vec<Configuration> {
        self.entries(group_id)
            .iter()
            .map(|e| e.configuration.clone())
            .collect()
    }
}
