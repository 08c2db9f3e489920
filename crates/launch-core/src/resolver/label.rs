//! Side-effect free description of what a launch would do
//!
//! Labels mirror the resolution tiers without launching, prompting or
//! writing preferences. Where resolution would ask the user, the label is a
//! fixed placeholder.

use super::ContextResolver;
use crate::error::CatalogQueryFailure;
use launch_model::Resource;

/// Label when resolution would need the user to choose
pub const AMBIGUOUS_LABEL: &str = "(multiple launch options)";

/// Label when resolution would ask before trying the parent project
pub const PARENT_LABEL: &str = "(launch parent project)";

impl ContextResolver<'_> {
    /// Describe what [`ContextResolver::resolve_and_launch`] would launch.
    ///
    /// Returns the empty string when nothing would launch.
    pub fn context_label(&self, mode: &str) -> String {
        match self.selection.current() {
            Some(resource) => self.resource_label(&resource, mode),
            None => self
                .last_launch(mode)
                .map(|c| c.name)
                .unwrap_or_default(),
        }
    }

    /// Describe what resolving `resource` in `mode` would launch
    pub fn resource_label(&self, resource: &Resource, mode: &str) -> String {
        if let Some(configuration) = degraded(self.catalog.shared_config(resource)) {
            return configuration.name;
        }

        let applicable = degraded(self.catalog.applicable_configurations(resource));
        match applicable.as_slice() {
            [] => {}
            [only] => return only.name.clone(),
            _ => {
                return self
                    .mru_tie_break(&applicable, mode)
                    .map(|c| c.name)
                    .unwrap_or_else(|| AMBIGUOUS_LABEL.to_string());
            }
        }

        let shortcuts = degraded(self.catalog.shortcuts_for(resource));
        match shortcuts.len() {
            0 => {}
            1 => return resource.name().to_string(),
            _ => return AMBIGUOUS_LABEL.to_string(),
        }

        match resource
            .project_container()
            .filter(|parent| parent.id() != resource.id())
        {
            Some(parent) if self.preferences.auto_escalate_to_parent() => {
                self.resource_label(parent, mode)
            }
            Some(_) => PARENT_LABEL.to_string(),
            None => String::new(),
        }
    }
}

/// A failed query labels as an empty tier, the same as resolution.
fn degraded<T: Default>(result: Result<T, CatalogQueryFailure>) -> T {
    result.unwrap_or_else(|failure| {
        tracing::warn!(tier = %failure.tier, error = %failure, "Catalog query failed while labelling");
        T::default()
    })
}
