//! In-memory launch catalog
//!
//! [`LaunchCatalog`] answers the resolver's catalog queries from a fixed set
//! of configuration entries and registered shortcuts, usually loaded from a
//! workspace manifest.

use crate::collaborators::Catalog;
use crate::error::{CatalogQueryFailure, QueryTier};
use crate::shortcuts::{ActivityFilter, VisibilityPolicy, filter_shortcuts, shortcuts_for_empty_selection};
use launch_model::{Configuration, Resource, ResourceId, SelectionContext, ShortcutExtension};
use std::collections::HashSet;

/// A configuration together with the resources it applies to
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub configuration: Configuration,
    /// Resources the configuration is mapped to
    pub mapped_resources: Vec<ResourceId>,
    /// The resource the configuration is stored in, which makes it shared
    pub stored_in: Option<ResourceId>,
}

impl CatalogEntry {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            mapped_resources: Vec::new(),
            stored_in: None,
        }
    }

    pub fn mapped_to(mut self, resource: ResourceId) -> Self {
        self.mapped_resources.push(resource);
        self
    }

    pub fn stored_in(mut self, resource: ResourceId) -> Self {
        self.stored_in = Some(resource);
        self
    }

    fn applies_to(&self, resource: &ResourceId) -> bool {
        self.mapped_resources.iter().any(|r| r == resource)
    }
}

/// Catalog backed by in-memory entries and shortcut registrations
pub struct LaunchCatalog {
    entries: Vec<CatalogEntry>,
    shortcuts: Vec<ShortcutExtension>,
    visibility: Box<dyn VisibilityPolicy>,
}

impl Default for LaunchCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchCatalog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            shortcuts: Vec::new(),
            visibility: Box::new(ActivityFilter::new()),
        }
    }

    pub fn with_visibility(mut self, policy: impl VisibilityPolicy + 'static) -> Self {
        self.visibility = Box::new(policy);
        self
    }

    pub fn add_entry(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    pub fn register_shortcut(&mut self, shortcut: ShortcutExtension) {
        self.shortcuts.push(shortcut);
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Registered shortcuts in registration order, unfiltered
    pub fn shortcuts(&self) -> &[ShortcutExtension] {
        &self.shortcuts
    }

    /// Look up a configuration by id
    pub fn configuration(&self, id: &str) -> Option<&Configuration> {
        self.entries
            .iter()
            .map(|e| &e.configuration)
            .find(|c| c.id.as_str() == id)
    }
}

impl Catalog for LaunchCatalog {
    fn shared_config(
        &self,
        resource: &Resource,
    ) -> Result<Option<Configuration>, CatalogQueryFailure> {
        Ok(self
            .entries
            .iter()
            .find(|e| e.stored_in.as_ref() == Some(resource.id()))
            .map(|e| e.configuration.clone()))
    }

    fn applicable_configurations(
        &self,
        resource: &Resource,
    ) -> Result<Vec<Configuration>, CatalogQueryFailure> {
        let mut seen = HashSet::new();
        Ok(self
            .entries
            .iter()
            .filter(|e| e.applies_to(resource.id()))
            .filter(|e| seen.insert(e.configuration.id.clone()))
            .map(|e| e.configuration.clone())
            .collect())
    }

    fn shortcuts_for(&self, resource: &Resource) -> Result<Vec<ShortcutExtension>, CatalogQueryFailure> {
        filter_shortcuts(
            &self.shortcuts,
            &SelectionContext::single(resource.clone()),
            self.visibility.as_ref(),
            QueryTier::Shortcuts,
        )
    }

    fn empty_selection_shortcuts(&self) -> Result<Vec<ShortcutExtension>, CatalogQueryFailure> {
        shortcuts_for_empty_selection(&self.shortcuts, self.visibility.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launch_model::{ConfigurationId, Enablement, ResourceKind};

    fn rid(s: &str) -> ResourceId {
        ResourceId::new(s).unwrap()
    }

    fn config(id: &str) -> Configuration {
        Configuration::new(ConfigurationId::new(id).unwrap(), id, "cargo")
    }

    fn file(id: &str) -> Resource {
        Resource::new(rid(id), ResourceKind::File)
    }

    #[test]
    fn applicable_configurations_are_deduplicated_in_order() {
        let mut catalog = LaunchCatalog::new();
        catalog.add_entry(CatalogEntry::new(config("b")).mapped_to(rid("main.rs")));
        catalog.add_entry(CatalogEntry::new(config("a")).mapped_to(rid("main.rs")));
        catalog.add_entry(CatalogEntry::new(config("b")).mapped_to(rid("main.rs")));
        catalog.add_entry(CatalogEntry::new(config("c")).mapped_to(rid("lib.rs")));

        let found = catalog.applicable_configurations(&file("main.rs")).unwrap();
        let ids: Vec<_> = found.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn shared_config_is_found_by_storage_resource() {
        let mut catalog = LaunchCatalog::new();
        catalog.add_entry(CatalogEntry::new(config("shared")).stored_in(rid("app/shared.launch")));

        assert_eq!(
            catalog.shared_config(&file("app/shared.launch")).unwrap(),
            Some(config("shared"))
        );
        assert_eq!(catalog.shared_config(&file("main.rs")).unwrap(), None);
    }

    #[test]
    fn shortcuts_for_uses_resource_as_selection() {
        let mut catalog = LaunchCatalog::new();
        catalog.register_shortcut(
            ShortcutExtension::new("rust", "Rust").with_enablement(Enablement::Extension { ext: "rs".into() }),
        );
        catalog.register_shortcut(
            ShortcutExtension::new("py", "Python").with_enablement(Enablement::Extension { ext: "py".into() }),
        );

        let found = catalog.shortcuts_for(&file("main.rs")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "rust");
        assert!(catalog.empty_selection_shortcuts().unwrap().is_empty());
    }

    #[test]
    fn visibility_policy_applies_to_resource_queries() {
        let mut catalog = LaunchCatalog::new().with_visibility(ActivityFilter::with_disabled(["rust"]));
        catalog.register_shortcut(
            ShortcutExtension::new("rust", "Rust")
                .with_activity("rust")
                .with_enablement(Enablement::Always),
        );
        assert!(catalog.shortcuts_for(&file("main.rs")).unwrap().is_empty());
    }
}
