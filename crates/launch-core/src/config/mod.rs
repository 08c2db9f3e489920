//! Workspace configuration and preference resolution
//!
//! A workspace keeps its launch state under `.launch/`:
//!
//! - `workspace.toml` - resources, configurations, shortcuts and groups
//! - `preferences.toml` - workspace preference overrides
//! - `history.json` - launch history
//!
//! Preferences are layered (later layers override earlier):
//!
//! 1. **Built-in defaults**
//! 2. **Global preferences** - `<config_dir>/context-launch/preferences.toml`
//! 3. **Workspace preferences** - `.launch/preferences.toml`
//!
//! # Example
//!
//! ```ignore
//! use launch_core::config::{PreferenceResolver, Workspace};
//!
//! let workspace = Workspace::load(root)?;
//! let preferences = PreferenceResolver::new(root.to_path_buf()).resolve()?;
//! ```

mod manifest;
mod resolver;
mod workspace;

pub use manifest::{ActivitiesSection, ConfigurationDecl, ResourceDecl, WorkspaceManifest};
pub use resolver::PreferenceResolver;
pub use workspace::Workspace;

/// Directory holding a workspace's launch state
pub const LAUNCH_DIR: &str = ".launch";
/// Workspace manifest file name inside [`LAUNCH_DIR`]
pub const MANIFEST_FILE: &str = "workspace.toml";
/// Preferences file name, both globally and inside [`LAUNCH_DIR`]
pub const PREFERENCES_FILE: &str = "preferences.toml";
/// History file name inside [`LAUNCH_DIR`]
pub const HISTORY_FILE: &str = "history.json";
