//! Context launch resolution
//!
//! [`ContextResolver`] turns "launch in this mode" into at most one launch.
//! With a selected resource it walks these tiers, stopping at the first that
//! applies:
//!
//! 1. a configuration stored in the resource (shared configuration)
//! 2. exactly one applicable configuration
//! 3. several applicable configurations: the most recently launched one,
//!    otherwise the user picks
//! 4. exactly one enabled shortcut, or the user picks among several
//! 5. the enclosing project, after confirmation unless auto-escalation is on
//! 6. a notice that the resource cannot be launched
//!
//! Without a selection the last launch for the mode is relaunched; failing
//! that, the user is offered the shortcuts that apply to an empty selection.

mod label;
mod mru;
mod outcome;

pub use label::{AMBIGUOUS_LABEL, PARENT_LABEL};
pub use mru::{last_launch, mru_tie_break};
pub use outcome::{Resolution, ResolutionOutcome, ResolutionTier, TierEvent};

use crate::collaborators::{
    Catalog, Disambiguator, EscalationAnswer, GroupRegistry, HistoryStore, LaunchTarget, Launcher,
    Notice, Preferences, SelectionSource,
};
use launch_model::{Configuration, Resource, SelectionContext, ShortcutExtension};
use outcome::Trace;

/// The collaborators a resolver borrows
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub selection: &'a dyn SelectionSource,
    pub catalog: &'a dyn Catalog,
    pub history: &'a dyn HistoryStore,
    pub groups: &'a dyn GroupRegistry,
    pub preferences: &'a dyn Preferences,
    pub disambiguator: &'a dyn Disambiguator,
    pub launcher: &'a dyn Launcher,
}

/// Decides what to launch for the current selection.
///
/// Holds no state besides its collaborators; each call is independent.
pub struct ContextResolver<'a> {
    selection: &'a dyn SelectionSource,
    catalog: &'a dyn Catalog,
    history: &'a dyn HistoryStore,
    groups: &'a dyn GroupRegistry,
    preferences: &'a dyn Preferences,
    disambiguator: &'a dyn Disambiguator,
    launcher: &'a dyn Launcher,
}

impl<'a> ContextResolver<'a> {
    pub fn new(collaborators: Collaborators<'a>) -> Self {
        Self {
            selection: collaborators.selection,
            catalog: collaborators.catalog,
            history: collaborators.history,
            groups: collaborators.groups,
            preferences: collaborators.preferences,
            disambiguator: collaborators.disambiguator,
            launcher: collaborators.launcher,
        }
    }

    /// Whether callers should route launches through this resolver
    pub fn is_context_launch_enabled(&self) -> bool {
        self.preferences.context_launching_enabled()
    }

    /// The most recent launch in the canonical group for `mode`
    pub fn last_launch(&self, mode: &str) -> Option<Configuration> {
        last_launch(self.groups, self.history, mode)
    }

    /// Resolve the current selection and launch the result.
    ///
    /// Invokes the launcher at most once and never fails: every path ends in
    /// a launch, a cancellation, or a notice shown through the disambiguator.
    pub fn resolve_and_launch(&self, mode: &str) -> Resolution {
        let mut trace = Trace::default();
        let outcome = match self.selection.current() {
            Some(resource) => {
                tracing::debug!(resource = %resource.id(), mode, "Resolving selected resource");
                self.resolve_for_resource(&resource, mode, &mut trace)
            }
            None => {
                tracing::debug!(mode, "Nothing selected");
                self.resolve_empty_selection(mode, &mut trace)
            }
        };
        trace.finish(outcome)
    }

    /// Resolve and launch for an explicit resource, ignoring the selection source
    pub fn resolve_resource(&self, resource: &Resource, mode: &str) -> Resolution {
        let mut trace = Trace::default();
        let outcome = self.resolve_for_resource(resource, mode, &mut trace);
        trace.finish(outcome)
    }

    fn resolve_empty_selection(&self, mode: &str, trace: &mut Trace) -> ResolutionOutcome {
        if let Some(configuration) = self.last_launch(mode) {
            trace.fire(ResolutionTier::LastLaunch, None);
            return self.launch_configuration(configuration, mode);
        }

        let shortcuts = trace.degrade(self.catalog.empty_selection_shortcuts());
        if shortcuts.is_empty() {
            trace.fire(ResolutionTier::NothingToLaunch, None);
            return self.nothing_applicable(Notice::NothingToLaunch);
        }

        // A single candidate is still offered, so launching stays a user decision.
        trace.fire(ResolutionTier::EmptySelectionShortcuts, None);
        match self.choose_shortcut(&shortcuts, None, mode) {
            Some(shortcut) => self.launch_shortcut(shortcut, None, mode),
            None => ResolutionOutcome::UserCancelled,
        }
    }

    fn resolve_for_resource(
        &self,
        resource: &Resource,
        mode: &str,
        trace: &mut Trace,
    ) -> ResolutionOutcome {
        if let Some(configuration) = trace.degrade(self.catalog.shared_config(resource)) {
            trace.fire(ResolutionTier::SharedConfiguration, Some(resource));
            return self.launch_configuration(configuration, mode);
        }

        let applicable = trace.degrade(self.catalog.applicable_configurations(resource));
        tracing::debug!(resource = %resource.id(), candidates = applicable.len(), "Applicable configurations");
        match applicable.as_slice() {
            [] => {}
            [only] => {
                trace.fire(ResolutionTier::SingleConfiguration, Some(resource));
                return self.launch_configuration(only.clone(), mode);
            }
            _ => {
                if let Some(configuration) = self.mru_tie_break(&applicable, mode) {
                    trace.fire(ResolutionTier::MruTieBreak, Some(resource));
                    return self.launch_configuration(configuration, mode);
                }
                trace.fire(ResolutionTier::ConfigurationPicker, Some(resource));
                return match self.choose_configuration(&applicable, mode) {
                    Some(configuration) => self.launch_configuration(configuration, mode),
                    None => ResolutionOutcome::UserCancelled,
                };
            }
        }

        let shortcuts = trace.degrade(self.catalog.shortcuts_for(resource));
        tracing::debug!(resource = %resource.id(), candidates = shortcuts.len(), "Applicable shortcuts");
        match shortcuts.as_slice() {
            [] => {}
            [only] => {
                trace.fire(ResolutionTier::SingleShortcut, Some(resource));
                return self.launch_shortcut(only.clone(), Some(resource), mode);
            }
            _ => {
                trace.fire(ResolutionTier::ShortcutPicker, Some(resource));
                return match self.choose_shortcut(&shortcuts, Some(resource), mode) {
                    Some(shortcut) => self.launch_shortcut(shortcut, Some(resource), mode),
                    None => ResolutionOutcome::UserCancelled,
                };
            }
        }

        self.escalate(resource, mode, trace)
    }

    fn escalate(&self, resource: &Resource, mode: &str, trace: &mut Trace) -> ResolutionOutcome {
        let parent = resource
            .project_container()
            .filter(|parent| parent.id() != resource.id());

        let Some(parent) = parent else {
            return if resource.is_accessible() {
                trace.fire(ResolutionTier::NotLaunchable, Some(resource));
                self.nothing_applicable(Notice::NotLaunchable {
                    resource: resource.name().to_string(),
                })
            } else {
                trace.fire(ResolutionTier::Inaccessible, Some(resource));
                self.nothing_applicable(Notice::Inaccessible {
                    resource: resource.name().to_string(),
                })
            };
        };

        if !self.preferences.auto_escalate_to_parent() {
            trace.fire(ResolutionTier::EscalationPrompt, Some(resource));
            match self.disambiguator.confirm_escalation(resource, parent) {
                EscalationAnswer::Yes { remember } => {
                    if remember {
                        if let Err(e) = self.preferences.set_auto_escalate_to_parent(true) {
                            tracing::warn!(error = %e, "Failed to store auto-escalation preference");
                        }
                    }
                }
                EscalationAnswer::Cancel => return ResolutionOutcome::UserCancelled,
            }
        }

        trace.fire(ResolutionTier::ParentEscalation, Some(resource));
        let outcome = self.resolve_for_resource(parent, mode, trace);
        ResolutionOutcome::Escalated {
            from: resource.id().clone(),
            to: parent.id().clone(),
            outcome: Box::new(outcome),
        }
    }

    /// The most recently launched member of `candidates`, if any
    pub fn mru_tie_break(&self, candidates: &[Configuration], mode: &str) -> Option<Configuration> {
        mru_tie_break(self.groups, self.history, candidates, mode)
    }

    fn choose_configuration(&self, candidates: &[Configuration], mode: &str) -> Option<Configuration> {
        let pick = self.disambiguator.pick_configuration(candidates, mode)?;
        if candidates.contains(&pick) {
            Some(pick)
        } else {
            tracing::warn!(configuration = %pick.id, "Picked configuration is not a candidate, ignoring");
            None
        }
    }

    fn choose_shortcut(
        &self,
        candidates: &[ShortcutExtension],
        resource: Option<&Resource>,
        mode: &str,
    ) -> Option<ShortcutExtension> {
        let pick = self.disambiguator.pick_shortcut(candidates, resource, mode)?;
        if candidates.contains(&pick) {
            Some(pick)
        } else {
            tracing::warn!(shortcut = %pick.id, "Picked shortcut is not a candidate, ignoring");
            None
        }
    }

    fn launch_configuration(&self, configuration: Configuration, mode: &str) -> ResolutionOutcome {
        tracing::debug!(configuration = %configuration.id, mode, "Launching configuration");
        self.launcher
            .execute(LaunchTarget::Configuration(&configuration), mode);
        ResolutionOutcome::LaunchedConfiguration { configuration }
    }

    fn launch_shortcut(
        &self,
        shortcut: ShortcutExtension,
        resource: Option<&Resource>,
        mode: &str,
    ) -> ResolutionOutcome {
        let selection = match resource {
            Some(resource) => SelectionContext::single(resource.clone()),
            None => SelectionContext::empty(),
        };
        tracing::debug!(shortcut = %shortcut.id, mode, "Launching shortcut");
        self.launcher.execute(
            LaunchTarget::Shortcut {
                shortcut: &shortcut,
                selection: &selection,
            },
            mode,
        );
        ResolutionOutcome::LaunchedViaShortcut {
            shortcut,
            resource: resource.map(|r| r.id().clone()),
        }
    }

    fn nothing_applicable(&self, notice: Notice) -> ResolutionOutcome {
        tracing::debug!(%notice, "Nothing to launch");
        self.disambiguator.notify(&notice);
        ResolutionOutcome::NothingApplicable { notice }
    }
}
