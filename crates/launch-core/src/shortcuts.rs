//! Shortcut filtering: enablement, visibility and deduplication

use crate::error::{CatalogQueryFailure, QueryTier};
use launch_model::{SelectionContext, ShortcutExtension};
use std::collections::HashSet;

/// Decides whether a shortcut is hidden from the user
pub trait VisibilityPolicy {
    fn is_hidden(&self, shortcut: &ShortcutExtension) -> bool;
}

/// Hides shortcuts that belong to a disabled activity
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    disabled: HashSet<String>,
}

impl ActivityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_disabled<I, S>(activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            disabled: activities.into_iter().map(Into::into).collect(),
        }
    }

    pub fn disable(&mut self, activity: impl Into<String>) {
        self.disabled.insert(activity.into());
    }

    pub fn is_disabled(&self, activity: &str) -> bool {
        self.disabled.contains(activity)
    }
}

impl VisibilityPolicy for ActivityFilter {
    fn is_hidden(&self, shortcut: &ShortcutExtension) -> bool {
        shortcut
            .activity
            .as_deref()
            .is_some_and(|activity| self.is_disabled(activity))
    }
}

/// Keep the shortcuts enabled for `context` and visible under `policy`,
/// deduplicated by id, in registry order.
///
/// An enablement evaluation error fails the whole query.
pub fn filter_shortcuts(
    registered: &[ShortcutExtension],
    context: &SelectionContext,
    policy: &dyn VisibilityPolicy,
    tier: QueryTier,
) -> Result<Vec<ShortcutExtension>, CatalogQueryFailure> {
    let mut seen = HashSet::new();
    let mut applicable = Vec::new();
    for shortcut in registered {
        let enabled = shortcut
            .is_enabled_for(context)
            .map_err(|e| CatalogQueryFailure::new(tier, format!("{}: {}", shortcut.id, e)))?;
        if enabled && !policy.is_hidden(shortcut) && seen.insert(shortcut.id.as_str()) {
            applicable.push(shortcut.clone());
        }
    }
    Ok(applicable)
}

/// Every registered shortcut that applies when nothing is selected
pub fn shortcuts_for_empty_selection(
    registered: &[ShortcutExtension],
    policy: &dyn VisibilityPolicy,
) -> Result<Vec<ShortcutExtension>, CatalogQueryFailure> {
    filter_shortcuts(
        registered,
        &SelectionContext::empty(),
        policy,
        QueryTier::EmptySelectionShortcuts,
    )
}
