//! Shared resolver harness for launch-core integration tests

#![allow(dead_code)]

use launch_core::{
    Catalog, CatalogEntry, Collaborators, ContextResolver, HistoryStore, LaunchCatalog,
    LaunchGroupRegistry, LaunchHistory, Resolution,
};
use launch_model::{Configuration, Resource};
use launch_test_utils::fakes::{
    MemoryPreferences, RecordingLauncher, ScriptedDisambiguator, StaticSelection,
};

/// Owns one of each collaborator and builds resolvers over them
pub struct Harness {
    pub catalog: Box<dyn Catalog>,
    pub history: Box<dyn HistoryStore>,
    pub groups: LaunchGroupRegistry,
    pub prefs: MemoryPreferences,
    pub prompts: ScriptedDisambiguator,
    pub launcher: RecordingLauncher,
}

impl Harness {
    pub fn new(catalog: impl Catalog + 'static) -> Self {
        Self {
            catalog: Box::new(catalog),
            history: Box::new(LaunchHistory::new()),
            groups: LaunchGroupRegistry::with_builtins(),
            prefs: MemoryPreferences::new(),
            prompts: ScriptedDisambiguator::new(),
            launcher: RecordingLauncher::new(),
        }
    }

    pub fn with_history(mut self, history: impl HistoryStore + 'static) -> Self {
        self.history = Box::new(history);
        self
    }

    pub fn with_groups(mut self, groups: LaunchGroupRegistry) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_prefs(mut self, prefs: MemoryPreferences) -> Self {
        self.prefs = prefs;
        self
    }

    pub fn with_prompts(mut self, prompts: ScriptedDisambiguator) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn resolver<'a>(&'a self, selection: &'a StaticSelection) -> ContextResolver<'a> {
        ContextResolver::new(Collaborators {
            selection,
            catalog: self.catalog.as_ref(),
            history: self.history.as_ref(),
            groups: &self.groups,
            preferences: &self.prefs,
            disambiguator: &self.prompts,
            launcher: &self.launcher,
        })
    }

    /// Run one resolution with `selected` as the ambient resource
    pub fn launch(&self, selected: Option<&Resource>, mode: &str) -> Resolution {
        let selection = StaticSelection(selected.cloned());
        self.resolver(&selection).resolve_and_launch(mode)
    }

    pub fn label(&self, selected: Option<&Resource>, mode: &str) -> String {
        let selection = StaticSelection(selected.cloned());
        self.resolver(&selection).context_label(mode)
    }
}

/// Map each configuration to `resource`
pub fn map_all(catalog: &mut LaunchCatalog, resource: &Resource, configurations: &[Configuration]) {
    for configuration in configurations {
        catalog.add_entry(CatalogEntry::new(configuration.clone()).mapped_to(resource.id().clone()));
    }
}
