//! Scripted and recording collaborators
//!
//! Every fake counts its interactions so tests can assert "zero prompts" or
//! "exactly one launch" directly.

use launch_core::{
    Catalog, CatalogQueryFailure, Disambiguator, EscalationAnswer, HistoryStore, LaunchCatalog,
    LaunchTarget, Launcher, Notice, Preferences, QueryTier, SelectionSource,
};
use launch_model::{Configuration, Resource, ResourceId, ShortcutExtension};
use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};

/// Selection source returning a fixed resource (or nothing)
pub struct StaticSelection(pub Option<Resource>);

impl StaticSelection {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn of(resource: &Resource) -> Self {
        Self(Some(resource.clone()))
    }
}

impl SelectionSource for StaticSelection {
    fn current(&self) -> Option<Resource> {
        self.0.clone()
    }
}

/// History store with independently scripted answers for one group.
///
/// Unlike [`launch_core::LaunchHistory`], the recent launch and the complete
/// history need not agree, which lets tests pin each lookup separately.
pub struct MemoryHistory {
    group_id: String,
    recent: Option<Configuration>,
    complete: Vec<Configuration>,
}

impl MemoryHistory {
    pub fn new(group_id: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            recent: None,
            complete: Vec::new(),
        }
    }

    pub fn recent(mut self, configuration: Configuration) -> Self {
        self.recent = Some(configuration);
        self
    }

    pub fn complete(mut self, configurations: Vec<Configuration>) -> Self {
        self.complete = configurations;
        self
    }
}

impl HistoryStore for MemoryHistory {
    fn recent_launch(&self, group_id: &str) -> Option<Configuration> {
        if group_id == self.group_id {
            self.recent.clone()
        } else {
            None
        }
    }

    fn complete_history(&self, group_id: &str) -> Vec<Configuration> {
        if group_id == self.group_id {
            self.complete.clone()
        } else {
            Vec::new()
        }
    }
}

/// Disambiguator answering from queues.
///
/// Pick queues hold ids; `None` (or an empty queue) cancels. An empty
/// escalation queue answers [`EscalationAnswer::Cancel`].
#[derive(Default)]
pub struct ScriptedDisambiguator {
    configuration_picks: RefCell<VecDeque<Option<String>>>,
    shortcut_picks: RefCell<VecDeque<Option<String>>>,
    escalations: RefCell<VecDeque<EscalationAnswer>>,
    /// Configuration candidate lists offered, in order
    pub offered_configurations: RefCell<Vec<Vec<Configuration>>>,
    /// Shortcut candidate lists offered, in order
    pub offered_shortcuts: RefCell<Vec<Vec<ShortcutExtension>>>,
    /// (child, parent) ids for each escalation question
    pub escalation_prompts: RefCell<Vec<(ResourceId, ResourceId)>>,
    pub notices: RefCell<Vec<Notice>>,
}

impl ScriptedDisambiguator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pick_configuration_id(self, id: &str) -> Self {
        self.configuration_picks
            .borrow_mut()
            .push_back(Some(id.to_string()));
        self
    }

    pub fn cancel_configuration(self) -> Self {
        self.configuration_picks.borrow_mut().push_back(None);
        self
    }

    pub fn pick_shortcut_id(self, id: &str) -> Self {
        self.shortcut_picks.borrow_mut().push_back(Some(id.to_string()));
        self
    }

    pub fn answer_escalation(self, answer: EscalationAnswer) -> Self {
        self.escalations.borrow_mut().push_back(answer);
        self
    }

    /// Total pickers and questions shown, excluding notices
    pub fn prompt_count(&self) -> usize {
        self.offered_configurations.borrow().len()
            + self.offered_shortcuts.borrow().len()
            + self.escalation_prompts.borrow().len()
    }

    pub fn notice_count(&self) -> usize {
        self.notices.borrow().len()
    }
}

impl Disambiguator for ScriptedDisambiguator {
    fn pick_configuration(&self, candidates: &[Configuration], _mode: &str) -> Option<Configuration> {
        self.offered_configurations
            .borrow_mut()
            .push(candidates.to_vec());
        let id = self.configuration_picks.borrow_mut().pop_front().flatten()?;
        // Unknown ids are answered as-is so tests can check out-of-set handling.
        Some(
            candidates
                .iter()
                .find(|c| c.id.as_str() == id)
                .cloned()
                .unwrap_or_else(|| crate::tree::config(&id)),
        )
    }

    fn pick_shortcut(
        &self,
        candidates: &[ShortcutExtension],
        _resource: Option<&Resource>,
        _mode: &str,
    ) -> Option<ShortcutExtension> {
        self.offered_shortcuts.borrow_mut().push(candidates.to_vec());
        let id = self.shortcut_picks.borrow_mut().pop_front().flatten()?;
        Some(
            candidates
                .iter()
                .find(|s| s.id == id)
                .cloned()
                .unwrap_or_else(|| ShortcutExtension::new(id.clone(), id)),
        )
    }

    fn confirm_escalation(&self, child: &Resource, parent: &Resource) -> EscalationAnswer {
        self.escalation_prompts
            .borrow_mut()
            .push((child.id().clone(), parent.id().clone()));
        self.escalations
            .borrow_mut()
            .pop_front()
            .unwrap_or(EscalationAnswer::Cancel)
    }

    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}

/// What a [`RecordingLauncher`] was asked to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launched {
    Configuration { id: String, mode: String },
    Shortcut {
        id: String,
        selection: Vec<ResourceId>,
        mode: String,
    },
}

/// Launcher that records instead of executing
#[derive(Default)]
pub struct RecordingLauncher {
    pub launches: RefCell<Vec<Launched>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.launches.borrow().len()
    }

    pub fn only(&self) -> Launched {
        let launches = self.launches.borrow();
        assert_eq!(launches.len(), 1, "expected exactly one launch, got {:?}", launches);
        launches[0].clone()
    }
}

impl Launcher for RecordingLauncher {
    fn execute(&self, target: LaunchTarget<'_>, mode: &str) {
        let launched = match target {
            LaunchTarget::Configuration(configuration) => Launched::Configuration {
                id: configuration.id.to_string(),
                mode: mode.to_string(),
            },
            LaunchTarget::Shortcut {
                shortcut,
                selection,
            } => Launched::Shortcut {
                id: shortcut.id.clone(),
                selection: selection.elements().iter().map(|r| r.id().clone()).collect(),
                mode: mode.to_string(),
            },
        };
        self.launches.borrow_mut().push(launched);
    }
}

/// In-memory preferences counting writes
#[derive(Default)]
pub struct MemoryPreferences {
    auto_escalate: Cell<bool>,
    context_launching: Cell<bool>,
    fail_writes: bool,
    pub writes: Cell<usize>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self {
            context_launching: Cell::new(true),
            ..Self::default()
        }
    }

    pub fn auto_escalating() -> Self {
        let prefs = Self::new();
        prefs.auto_escalate.set(true);
        prefs
    }

    /// Preferences whose setters always fail
    pub fn read_only() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    fn write(&self, cell: &Cell<bool>, value: bool) -> launch_core::Result<()> {
        if self.fail_writes {
            return Err(launch_core::Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "preferences are read-only",
            )));
        }
        cell.set(value);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl Preferences for MemoryPreferences {
    fn auto_escalate_to_parent(&self) -> bool {
        self.auto_escalate.get()
    }

    fn set_auto_escalate_to_parent(&self, value: bool) -> launch_core::Result<()> {
        self.write(&self.auto_escalate, value)
    }

    fn context_launching_enabled(&self) -> bool {
        self.context_launching.get()
    }

    fn set_context_launching_enabled(&self, value: bool) -> launch_core::Result<()> {
        self.write(&self.context_launching, value)
    }
}

/// Catalog that delegates to a [`LaunchCatalog`] but fails chosen tiers
pub struct FailingCatalog {
    inner: LaunchCatalog,
    failing: HashSet<QueryTier>,
}

impl FailingCatalog {
    pub fn new(inner: LaunchCatalog) -> Self {
        Self {
            inner,
            failing: HashSet::new(),
        }
    }

    pub fn failing(mut self, tier: QueryTier) -> Self {
        self.failing.insert(tier);
        self
    }

    fn check(&self, tier: QueryTier) -> Result<(), CatalogQueryFailure> {
        if self.failing.contains(&tier) {
            Err(CatalogQueryFailure::new(tier, "injected failure"))
        } else {
            Ok(())
        }
    }
}

impl Catalog for FailingCatalog {
    fn shared_config(&self, resource: &Resource) -> Result<Option<Configuration>, CatalogQueryFailure> {
        self.check(QueryTier::SharedConfig)?;
        self.inner.shared_config(resource)
    }

    fn applicable_configurations(
        &self,
        resource: &Resource,
    ) -> Result<Vec<Configuration>, CatalogQueryFailure> {
        self.check(QueryTier::ApplicableConfigurations)?;
        self.inner.applicable_configurations(resource)
    }

    fn shortcuts_for(&self, resource: &Resource) -> Result<Vec<ShortcutExtension>, CatalogQueryFailure> {
        self.check(QueryTier::Shortcuts)?;
        self.inner.shortcuts_for(resource)
    }

    fn empty_selection_shortcuts(&self) -> Result<Vec<ShortcutExtension>, CatalogQueryFailure> {
        self.check(QueryTier::EmptySelectionShortcuts)?;
        self.inner.empty_selection_shortcuts()
    }
}
