//! Resolution outcomes and the tier trace

use crate::collaborators::Notice;
use crate::error::CatalogQueryFailure;
use launch_model::{Configuration, Resource, ResourceId, ShortcutExtension};
use std::fmt;

/// The decision point that produced (part of) a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionTier {
    /// No selection; the last launch for the mode was relaunched
    LastLaunch,
    /// No selection, no history; the user was offered empty-selection shortcuts
    EmptySelectionShortcuts,
    /// No selection, no history, no shortcuts
    NothingToLaunch,
    SharedConfiguration,
    SingleConfiguration,
    MruTieBreak,
    ConfigurationPicker,
    SingleShortcut,
    ShortcutPicker,
    /// The user was asked whether to try the parent project
    EscalationPrompt,
    ParentEscalation,
    NotLaunchable,
    Inaccessible,
}

impl ResolutionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionTier::LastLaunch => "last_launch",
            ResolutionTier::EmptySelectionShortcuts => "empty_selection_shortcuts",
            ResolutionTier::NothingToLaunch => "nothing_to_launch",
            ResolutionTier::SharedConfiguration => "shared_configuration",
            ResolutionTier::SingleConfiguration => "single_configuration",
            ResolutionTier::MruTieBreak => "mru_tie_break",
            ResolutionTier::ConfigurationPicker => "configuration_picker",
            ResolutionTier::SingleShortcut => "single_shortcut",
            ResolutionTier::ShortcutPicker => "shortcut_picker",
            ResolutionTier::EscalationPrompt => "escalation_prompt",
            ResolutionTier::ParentEscalation => "parent_escalation",
            ResolutionTier::NotLaunchable => "not_launchable",
            ResolutionTier::Inaccessible => "inaccessible",
        }
    }
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tier firing, keyed by the resource it fired for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierEvent {
    pub tier: ResolutionTier,
    pub resource: Option<ResourceId>,
}

/// How a resolution request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    LaunchedConfiguration {
        configuration: Configuration,
    },
    LaunchedViaShortcut {
        shortcut: ShortcutExtension,
        resource: Option<ResourceId>,
    },
    UserCancelled,
    /// Resolution moved from `from` to its parent project `to`
    Escalated {
        from: ResourceId,
        to: ResourceId,
        outcome: Box<ResolutionOutcome>,
    },
    NothingApplicable {
        notice: Notice,
    },
}

impl ResolutionOutcome {
    /// The outcome after following every escalation
    pub fn terminal(&self) -> &ResolutionOutcome {
        match self {
            ResolutionOutcome::Escalated { outcome, .. } => outcome.terminal(),
            other => other,
        }
    }

    /// Whether the launcher was invoked
    pub fn launched(&self) -> bool {
        matches!(
            self.terminal(),
            ResolutionOutcome::LaunchedConfiguration { .. }
                | ResolutionOutcome::LaunchedViaShortcut { .. }
        )
    }

    /// The configuration launched, if resolution launched one
    pub fn launched_configuration(&self) -> Option<&Configuration> {
        match self.terminal() {
            ResolutionOutcome::LaunchedConfiguration { configuration } => Some(configuration),
            _ => None,
        }
    }
}

/// The result of one resolution request.
///
/// Carries the outcome, every tier that fired in order, and the catalog
/// queries that failed and were treated as empty.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub outcome: ResolutionOutcome,
    pub trace: Vec<TierEvent>,
    pub failures: Vec<CatalogQueryFailure>,
}

impl Resolution {
    /// Tiers in firing order
    pub fn tiers(&self) -> Vec<ResolutionTier> {
        self.trace.iter().map(|e| e.tier).collect()
    }

    pub fn fired(&self, tier: ResolutionTier) -> bool {
        self.trace.iter().any(|e| e.tier == tier)
    }
}

/// Collects tier events and degraded queries during one request
#[derive(Debug, Default)]
pub(crate) struct Trace {
    events: Vec<TierEvent>,
    failures: Vec<CatalogQueryFailure>,
}

impl Trace {
    pub(crate) fn fire(&mut self, tier: ResolutionTier, resource: Option<&Resource>) {
        tracing::debug!(
            tier = tier.as_str(),
            resource = resource.map(|r| r.id().as_str()),
            "Resolution tier fired"
        );
        self.events.push(TierEvent {
            tier,
            resource: resource.map(|r| r.id().clone()),
        });
    }

    /// Unwrap a catalog answer, treating a failure as an empty result
    pub(crate) fn degrade<T: Default>(&mut self, answer: Result<T, CatalogQueryFailure>) -> T {
        match answer {
            Ok(value) => value,
            Err(failure) => {
                tracing::warn!(tier = %failure.tier, error = %failure, "Catalog query failed, treating as empty");
                self.failures.push(failure);
                T::default()
            }
        }
    }

    pub(crate) fn finish(self, outcome: ResolutionOutcome) -> Resolution {
        Resolution {
            outcome,
            trace: self.events,
            failures: self.failures,
        }
    }
}
