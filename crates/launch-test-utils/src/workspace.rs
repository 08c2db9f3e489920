//! [`TestWorkspace`] builder for on-disk `.launch/` scenarios.

use launch_core::config::{HISTORY_FILE, LAUNCH_DIR, MANIFEST_FILE, PREFERENCES_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manifest used by [`TestWorkspace::with_sample_manifest`].
///
/// - `app/src/main.rs` has one configuration (`app-main`)
/// - `app/tests/it.rs` has two configurations (`it-fast`, `it-full`)
/// - `app/README.md` has nothing; the project has the `app-all` shortcut
/// - `app/app.launch` stores the shared `app-shared` configuration
/// - `scratch.txt` is outside any project
pub const SAMPLE_MANIFEST: &str = r#"
[[resources]]
id = "app"
kind = "project"

[[resources]]
id = "app/src"
kind = "folder"
parent = "app"

[[resources]]
id = "app/src/main.rs"
kind = "file"
parent = "app/src"

[[resources]]
id = "app/tests/it.rs"
kind = "file"
parent = "app"

[[resources]]
id = "app/README.md"
kind = "file"
parent = "app"

[[resources]]
id = "app/app.launch"
kind = "file"
parent = "app"

[[resources]]
id = "scratch.txt"
kind = "file"

[[configurations]]
id = "app-main"
name = "App Main"
type = "cargo"
resources = ["app/src/main.rs"]

[[configurations]]
id = "it-fast"
name = "Integration (fast)"
type = "cargo-test"
resources = ["app/tests/it.rs"]

[[configurations]]
id = "it-full"
name = "Integration (full)"
type = "cargo-test"
resources = ["app/tests/it.rs"]

[[configurations]]
id = "app-shared"
name = "App Shared"
type = "cargo"
stored_in = "app/app.launch"

[[shortcuts]]
id = "app-all"
label = "Run Project"
enablement = { type = "kind", kind = "project" }
"#;

/// A temporary workspace directory with a `.launch/` folder
pub struct TestWorkspace {
    temp_dir: TempDir,
    global_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty workspace with an empty, isolated global config dir
    pub fn new() -> Self {
        let workspace = Self {
            temp_dir: TempDir::new().unwrap(),
            global_dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(workspace.launch_dir()).unwrap();
        workspace
    }

    /// Create a workspace holding [`SAMPLE_MANIFEST`]
    pub fn with_sample_manifest() -> Self {
        let workspace = Self::new();
        workspace.write_manifest(SAMPLE_MANIFEST);
        workspace
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory to use as the global config directory
    pub fn global_dir(&self) -> &Path {
        self.global_dir.path()
    }

    pub fn launch_dir(&self) -> PathBuf {
        self.root().join(LAUNCH_DIR)
    }

    pub fn history_path(&self) -> PathBuf {
        self.launch_dir().join(HISTORY_FILE)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.launch_dir().join(PREFERENCES_FILE)
    }

    pub fn write_manifest(&self, content: &str) {
        fs::write(self.launch_dir().join(MANIFEST_FILE), content).unwrap();
    }

    pub fn write_preferences(&self, content: &str) {
        fs::write(self.preferences_path(), content).unwrap();
    }

    /// Read a file relative to the workspace root
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative)).unwrap()
    }
}
