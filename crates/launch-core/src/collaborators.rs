//! Collaborator contracts consumed by the resolver
//!
//! The resolver borrows one implementation of each trait. Every method takes
//! `&self`; implementations that need to mutate (preferences, recording
//! fakes) use interior mutability.

use crate::error::CatalogQueryFailure;
use crate::Result;
use launch_model::{Configuration, LaunchGroup, Resource, SelectionContext, ShortcutExtension};
use std::fmt;

/// Answers "what is selected right now"
pub trait SelectionSource {
    fn current(&self) -> Option<Resource>;
}

/// Read-only registry of configurations and shortcuts
pub trait Catalog {
    /// The configuration stored inside `resource`, if the resource is one
    fn shared_config(&self, resource: &Resource)
    -> std::result::Result<Option<Configuration>, CatalogQueryFailure>;

    /// Configurations mapped to `resource`, deduplicated, in catalog order
    fn applicable_configurations(
        &self,
        resource: &Resource,
    ) -> std::result::Result<Vec<Configuration>, CatalogQueryFailure>;

    /// Shortcuts enabled for `resource` and visible, deduplicated
    fn shortcuts_for(
        &self,
        resource: &Resource,
    ) -> std::result::Result<Vec<ShortcutExtension>, CatalogQueryFailure>;

    /// Shortcuts enabled for an empty selection and visible, deduplicated
    fn empty_selection_shortcuts(
        &self,
    ) -> std::result::Result<Vec<ShortcutExtension>, CatalogQueryFailure>;
}

/// Per-group launch history, most recent first
pub trait HistoryStore {
    fn recent_launch(&self, group_id: &str) -> Option<Configuration>;

    fn complete_history(&self, group_id: &str) -> Vec<Configuration>;
}

/// Registered launch groups
pub trait GroupRegistry {
    /// All groups in registration order
    fn groups(&self) -> Vec<LaunchGroup>;

    /// The first group whose mode matches exactly and that has no category
    fn canonical(&self, mode: &str) -> Option<LaunchGroup> {
        self.groups().into_iter().find(|g| g.is_canonical_for(mode))
    }
}

/// The two context-launching preferences
pub trait Preferences {
    /// Escalate to the parent project without asking
    fn auto_escalate_to_parent(&self) -> bool;

    fn set_auto_escalate_to_parent(&self, value: bool) -> Result<()>;

    /// Whether callers should use context launching at all
    fn context_launching_enabled(&self) -> bool;

    fn set_context_launching_enabled(&self, value: bool) -> Result<()>;
}

/// Answer to an escalation confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationAnswer {
    Yes { remember: bool },
    Cancel,
}

/// Informational messages shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// No selection, no history and no empty-selection shortcuts
    NothingToLaunch,
    /// The resource exists but nothing can launch it
    NotLaunchable { resource: String },
    /// The resource does not exist or cannot be read
    Inaccessible { resource: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NothingToLaunch => write!(
                f,
                "The selection cannot be launched, and there are no recent launches."
            ),
            Notice::NotLaunchable { resource } => write!(
                f,
                "The selection '{resource}' cannot be launched, and there are no recent launches."
            ),
            Notice::Inaccessible { resource } => write!(
                f,
                "The resource '{resource}' does not exist or is not accessible, and cannot be launched."
            ),
        }
    }
}

/// Human interaction: pickers, the escalation question and notices.
///
/// Pickers return `None` when the user cancels.
pub trait Disambiguator {
    fn pick_configuration(&self, candidates: &[Configuration], mode: &str) -> Option<Configuration>;

    fn pick_shortcut(
        &self,
        candidates: &[ShortcutExtension],
        resource: Option<&Resource>,
        mode: &str,
    ) -> Option<ShortcutExtension>;

    fn confirm_escalation(&self, child: &Resource, parent: &Resource) -> EscalationAnswer;

    fn notify(&self, notice: &Notice);
}

/// What the launcher is asked to execute
#[derive(Debug, Clone, Copy)]
pub enum LaunchTarget<'a> {
    Configuration(&'a Configuration),
    Shortcut {
        shortcut: &'a ShortcutExtension,
        selection: &'a SelectionContext,
    },
}

/// Executes a resolved target. Failures are reported by the launcher itself.
pub trait Launcher {
    fn execute(&self, target: LaunchTarget<'_>, mode: &str);
}
