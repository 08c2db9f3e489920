//! Workspace detection and the loaded launch context
//!
//! Commands work from anywhere inside a workspace: the root is the nearest
//! ancestor directory holding `.launch/workspace.toml`, unless one is given
//! explicitly.

use launch_core::config::{HISTORY_FILE, LAUNCH_DIR};
use launch_core::{
    Collaborators, ContextResolver, Disambiguator, Error as CoreError, GroupRegistry,
    LaunchHistory, Launcher, PreferenceResolver, PreferenceStore, SelectionSource, Workspace,
};
use launch_model::{Configuration, Resource};
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// Find the workspace root by walking up from `start`
pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| Workspace::manifest_path(dir).is_file())
        .map(Path::to_path_buf)
}

/// Pick the workspace root: the explicit one, or the nearest from `cwd`
pub fn resolve_root(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    match explicit {
        Some(root) => Ok(root.to_path_buf()),
        None => find_workspace_root(cwd).ok_or_else(|| {
            CliError::user(format!(
                "Not inside a workspace: no {}/workspace.toml found above {}",
                LAUNCH_DIR,
                cwd.display()
            ))
        }),
    }
}

/// Selection taken from the command line
pub struct CommandLineSelection(Option<Resource>);

impl CommandLineSelection {
    pub fn into_resource(self) -> Option<Resource> {
        self.0
    }
}

impl SelectionSource for CommandLineSelection {
    fn current(&self) -> Option<Resource> {
        self.0.clone()
    }
}

/// A workspace with its preferences and history loaded
pub struct LaunchContext {
    workspace: Workspace,
    preferences: PreferenceStore,
    history: LaunchHistory,
    history_path: PathBuf,
}

impl LaunchContext {
    /// Load the workspace at `root`, layering global preferences from
    /// `config_dir` when given
    pub fn open(root: &Path, config_dir: Option<&Path>) -> Result<Self> {
        let workspace = Workspace::load(root)?;

        let resolver = match config_dir {
            Some(dir) => PreferenceResolver::with_global_config_dir(root.to_path_buf(), dir.to_path_buf()),
            None => PreferenceResolver::new(root.to_path_buf()),
        };
        let preferences = resolver.resolve()?;

        let history_path = root.join(LAUNCH_DIR).join(HISTORY_FILE);
        let mut history = LaunchHistory::load_or_default(&history_path)?;
        history.set_max_size(preferences.values().history_size);

        tracing::debug!(root = %root.display(), resources = workspace.resources().len(), "Workspace loaded");
        Ok(Self {
            workspace,
            preferences,
            history,
            history_path,
        })
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn history(&self) -> &LaunchHistory {
        &self.history
    }

    /// Look up `id` as the selection; `None` means nothing is selected
    pub fn selection(&self, id: Option<&str>) -> Result<CommandLineSelection> {
        let resource = match id {
            Some(id) => Some(self.workspace.resource(id).cloned().ok_or_else(|| {
                CoreError::UnknownResource { id: id.to_string() }
            })?),
            None => None,
        };
        Ok(CommandLineSelection(resource))
    }

    /// Build a resolver over this context
    pub fn resolver<'a>(
        &'a self,
        selection: &'a CommandLineSelection,
        disambiguator: &'a dyn Disambiguator,
        launcher: &'a dyn Launcher,
    ) -> ContextResolver<'a> {
        ContextResolver::new(Collaborators {
            selection,
            catalog: self.workspace.catalog(),
            history: &self.history,
            groups: self.workspace.groups(),
            preferences: &self.preferences,
            disambiguator,
            launcher,
        })
    }

    /// Record launched configurations in the canonical group for `mode` and save
    pub fn record_launches(&mut self, mode: &str, launched: Vec<Configuration>) -> Result<()> {
        if launched.is_empty() {
            return Ok(());
        }
        let Some(group) = self.workspace.groups().canonical(mode) else {
            tracing::debug!(mode, "No canonical launch group, launch not recorded");
            return Ok(());
        };
        for configuration in launched {
            self.history.record_launch(&group.id, configuration);
        }
        self.save_history()
    }

    /// Forget the canonical group's history for `mode` and save
    pub fn clear_history(&mut self, mode: &str) -> Result<bool> {
        let Some(group) = self.workspace.groups().canonical(mode) else {
            return Ok(false);
        };
        self.history.clear(&group.id);
        self.save_history()?;
        Ok(true)
    }

    fn save_history(&self) -> Result<()> {
        tracing::debug!(path = ?self.history_path, "Saving launch history");
        self.history.save(&self.history_path)?;
        Ok(())
    }
}
