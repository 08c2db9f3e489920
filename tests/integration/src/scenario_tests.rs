//! Scenario tests across the manifest, resolver, history and preferences.
//!
//! Each scenario builds a workspace on disk, runs several launch requests
//! the way a session would, and persists state between them.

use launch_core::groups::{DEBUG_GROUP, RUN_GROUP};
use launch_core::{
    Collaborators, ContextResolver, EscalationAnswer, GroupRegistry, LaunchHistory, Notice,
    PreferenceKey, PreferenceResolver, PreferenceStore, Preferences, Resolution,
    ResolutionOutcome, ResolutionTier, Workspace,
};
use launch_test_utils::fakes::{Launched, RecordingLauncher, ScriptedDisambiguator, StaticSelection};
use launch_test_utils::workspace::TestWorkspace;
use pretty_assertions::assert_eq;
use rstest::rstest;

// =============================================================================
// Test Infrastructure
// =============================================================================

const MONOREPO: &str = r#"
[[resources]]
id = "mono"
kind = "project"

[[resources]]
id = "mono/web"
kind = "project"
parent = "mono"

[[resources]]
id = "mono/web/index.ts"
kind = "file"
parent = "mono/web"

[[resources]]
id = "mono/web/index.test.ts"
kind = "file"
parent = "mono/web"

[[resources]]
id = "mono/web/styles.css"
kind = "file"
parent = "mono/web"

[[resources]]
id = "mono/tools/gen.py"
kind = "file"
parent = "mono"

[[resources]]
id = "mono/docs"
kind = "folder"
parent = "mono"
accessible = false

[[configurations]]
id = "web-dev"
name = "Web Dev Server"
type = "node"
resources = ["mono/web"]

[[configurations]]
id = "web-test"
name = "Web Tests"
type = "node-test"
resources = ["mono/web/index.test.ts"]

[[configurations]]
id = "web-test-watch"
name = "Web Tests (watch)"
type = "node-test"
resources = ["mono/web/index.test.ts"]

[[shortcuts]]
id = "ts-file"
label = "Run TypeScript File"
enablement = { type = "all", of = [
    { type = "kind", kind = "file" },
    { type = "extension", ext = "ts" },
    { type = "not", expr = { type = "name_matches", pattern = "\\.test\\.ts$" } },
] }

[[shortcuts]]
id = "py-file"
label = "Run Python Script"
activity = "python"
enablement = { type = "extension", ext = "py" }

[[shortcuts]]
id = "mono-all"
label = "Run Everything"
enablement = { type = "any", of = [
    { type = "selection_empty" },
    { type = "name_matches", pattern = "^mono$" },
] }

[[groups]]
id = "launch.group.run"
label = "Run"
mode = "run"

[[groups]]
id = "launch.group.debug"
label = "Debug"
mode = "debug"
"#;

/// A workspace session: state loaded from disk, with scripted answers
struct Session {
    workspace: Workspace,
    history: LaunchHistory,
    preferences: PreferenceStore,
    prompts: ScriptedDisambiguator,
    launcher: RecordingLauncher,
}

impl Session {
    fn open(test: &TestWorkspace, prompts: ScriptedDisambiguator) -> Self {
        let preferences = PreferenceResolver::with_global_config_dir(
            test.root().to_path_buf(),
            test.global_dir().to_path_buf(),
        )
        .resolve()
        .unwrap();
        let mut history = LaunchHistory::load_or_default(&test.history_path()).unwrap();
        history.set_max_size(preferences.values().history_size);
        Self {
            workspace: Workspace::load(test.root()).unwrap(),
            history,
            preferences,
            prompts,
            launcher: RecordingLauncher::new(),
        }
    }

    fn resolve(&self, resource_id: Option<&str>, mode: &str) -> Resolution {
        let selection = match resource_id {
            Some(id) => StaticSelection(Some(self.workspace.resource(id).unwrap().clone())),
            None => StaticSelection::none(),
        };
        ContextResolver::new(Collaborators {
            selection: &selection,
            catalog: self.workspace.catalog(),
            history: &self.history,
            groups: self.workspace.groups(),
            preferences: &self.preferences,
            disambiguator: &self.prompts,
            launcher: &self.launcher,
        })
        .resolve_and_launch(mode)
    }

    /// Resolve, record any launched configuration and save the history
    fn launch(&mut self, test: &TestWorkspace, resource_id: Option<&str>, mode: &str) -> Resolution {
        let resolution = self.resolve(resource_id, mode);
        if let Some(configuration) = resolution.outcome.launched_configuration() {
            let group = self.workspace.groups().canonical(mode).unwrap();
            self.history.record_launch(&group.id, configuration.clone());
            self.history.save(&test.history_path()).unwrap();
        }
        resolution
    }
}

fn monorepo() -> TestWorkspace {
    let test = TestWorkspace::new();
    test.write_manifest(MONOREPO);
    test
}

// =============================================================================
// Enablement from the manifest
// =============================================================================

#[rstest]
#[case::plain_ts("mono/web/index.ts", Some("ts-file"))]
#[case::python("mono/tools/gen.py", Some("py-file"))]
#[case::root_project("mono", Some("mono-all"))]
fn manifest_enablement_selects_the_shortcut(#[case] resource: &str, #[case] expected: Option<&str>) {
    let test = monorepo();
    let session = Session::open(&test, ScriptedDisambiguator::new());

    session.resolve(Some(resource), "run");

    let launched = session.launcher.launches.borrow().clone();
    let ids: Vec<String> = launched
        .into_iter()
        .filter_map(|l| match l {
            Launched::Shortcut { id, .. } => Some(id),
            Launched::Configuration { .. } => None,
        })
        .collect();
    assert_eq!(ids, expected.map(str::to_string).into_iter().collect::<Vec<_>>());
}

#[test]
fn test_files_are_excluded_from_the_ts_shortcut() {
    let test = monorepo();
    let session = Session::open(&test, ScriptedDisambiguator::new().pick_configuration_id("web-test"));

    let resolution = session.resolve(Some("mono/web/index.test.ts"), "run");

    assert!(resolution.fired(ResolutionTier::ConfigurationPicker));
    assert_eq!(
        session.launcher.only(),
        Launched::Configuration {
            id: "web-test".to_string(),
            mode: "run".to_string(),
        }
    );
}

#[test]
fn disabled_activity_hides_the_python_shortcut() {
    let test = TestWorkspace::new();
    test.write_manifest(&format!("{}\n[activities]\ndisabled = [\"python\"]\n", MONOREPO));
    let session = Session::open(
        &test,
        ScriptedDisambiguator::new().answer_escalation(EscalationAnswer::Yes { remember: false }),
    );

    let resolution = session.resolve(Some("mono/tools/gen.py"), "run");

    assert_eq!(
        resolution.tiers(),
        vec![
            ResolutionTier::EscalationPrompt,
            ResolutionTier::ParentEscalation,
            ResolutionTier::SingleShortcut
        ]
    );
    assert!(matches!(
        session.launcher.only(),
        Launched::Shortcut { id, .. } if id == "mono-all"
    ));
}

// =============================================================================
// Nested projects
// =============================================================================

#[test]
fn nested_project_escalates_to_the_nearest_project_only() {
    let test = monorepo();
    let session = Session::open(
        &test,
        ScriptedDisambiguator::new().answer_escalation(EscalationAnswer::Yes { remember: false }),
    );

    let resolution = session.resolve(Some("mono/web/styles.css"), "run");

    assert_eq!(
        session.prompts.escalation_prompts.borrow()[0].1.as_str(),
        "mono/web"
    );
    assert_eq!(
        session.launcher.only(),
        Launched::Configuration {
            id: "web-dev".to_string(),
            mode: "run".to_string(),
        }
    );
    assert!(matches!(
        resolution.outcome,
        ResolutionOutcome::Escalated { ref to, .. } if to.as_str() == "mono/web"
    ));
}

#[test]
fn inaccessible_folder_escalates_like_any_other_resource() {
    let test = monorepo();
    test.write_preferences("auto_escalate_to_parent = true\n");
    let session = Session::open(&test, ScriptedDisambiguator::new());

    let resolution = session.resolve(Some("mono/docs"), "run");

    assert!(resolution.fired(ResolutionTier::ParentEscalation));
    assert!(matches!(
        session.launcher.only(),
        Launched::Shortcut { id, .. } if id == "mono-all"
    ));
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn a_day_of_launching() {
    let test = monorepo();

    // Morning: pick the watch configuration once.
    let mut session = Session::open(
        &test,
        ScriptedDisambiguator::new().pick_configuration_id("web-test-watch"),
    );
    session.launch(&test, Some("mono/web/index.test.ts"), "debug");
    assert_eq!(session.prompts.prompt_count(), 1);

    // Later sessions reuse the choice in debug mode without asking.
    let mut session = Session::open(&test, ScriptedDisambiguator::new());
    let resolution = session.launch(&test, Some("mono/web/index.test.ts"), "debug");
    assert!(resolution.fired(ResolutionTier::MruTieBreak));
    assert_eq!(session.prompts.prompt_count(), 0);

    // Run mode has its own history, so it asks.
    let resolution = session.resolve(Some("mono/web/index.test.ts"), "run");
    assert_eq!(resolution.outcome, ResolutionOutcome::UserCancelled);

    // Nothing selected: the last debug launch comes back.
    let resolution = session.resolve(None, "debug");
    assert_eq!(resolution.tiers(), vec![ResolutionTier::LastLaunch]);
    assert_eq!(
        resolution.outcome.launched_configuration().map(|c| c.id.as_str()),
        Some("web-test-watch")
    );

    let history = LaunchHistory::load(&test.history_path()).unwrap();
    assert_eq!(history.entries(DEBUG_GROUP).len(), 1);
    assert!(history.entries(RUN_GROUP).is_empty());
}

#[test]
fn empty_selection_offers_the_workspace_shortcut() {
    let test = monorepo();
    let session = Session::open(&test, ScriptedDisambiguator::new().pick_shortcut_id("mono-all"));

    let resolution = session.resolve(None, "run");

    assert!(resolution.fired(ResolutionTier::EmptySelectionShortcuts));
    assert_eq!(
        session.launcher.only(),
        Launched::Shortcut {
            id: "mono-all".to_string(),
            selection: Vec::new(),
            mode: "run".to_string(),
        }
    );
}

#[test]
fn history_size_preference_bounds_recorded_launches() {
    let test = monorepo();
    test.write_preferences("history_size = 1\n");

    let mut session = Session::open(&test, ScriptedDisambiguator::new());
    session.launch(&test, Some("mono/web"), "run");
    let mut session = Session::open(&test, ScriptedDisambiguator::new().pick_configuration_id("web-test"));
    session.launch(&test, Some("mono/web/index.test.ts"), "run");

    let history = LaunchHistory::load(&test.history_path()).unwrap();
    let ids: Vec<&str> = history
        .entries(RUN_GROUP)
        .iter()
        .map(|e| e.configuration.id.as_str())
        .collect();
    assert_eq!(ids, vec!["web-test"]);
}

#[test]
fn remembered_escalation_survives_reload() {
    let test = monorepo();
    let session = Session::open(
        &test,
        ScriptedDisambiguator::new().answer_escalation(EscalationAnswer::Yes { remember: true }),
    );
    session.resolve(Some("mono/web/styles.css"), "run");

    let reloaded = Session::open(&test, ScriptedDisambiguator::new());
    assert!(reloaded.preferences.auto_escalate_to_parent());
    reloaded
        .preferences
        .set_from_str(PreferenceKey::AutoEscalateToParent, "false")
        .unwrap();

    let again = Session::open(&test, ScriptedDisambiguator::new());
    let resolution = again.resolve(Some("mono/web/styles.css"), "run");
    assert_eq!(resolution.outcome, ResolutionOutcome::UserCancelled);
    assert_eq!(again.prompts.escalation_prompts.borrow().len(), 1);
}

#[test]
fn inaccessible_orphan_gets_its_own_notice() {
    let test = TestWorkspace::new();
    test.write_manifest("[[resources]]\nid = \"gone.txt\"\nkind = \"file\"\naccessible = false\n");
    let session = Session::open(&test, ScriptedDisambiguator::new());

    session.resolve(Some("gone.txt"), "run");

    assert_eq!(
        *session.prompts.notices.borrow(),
        vec![Notice::Inaccessible {
            resource: "gone.txt".to_string()
        }]
    );
}
