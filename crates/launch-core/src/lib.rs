//! Context launch resolution for Context Launch
//!
//! This crate decides what to run when the user asks to launch "the current
//! thing" in a mode such as `run` or `debug`:
//!
//! - **Collaborators**: traits for the selection, catalog, history, launch
//!   groups, preferences, user interaction and the launcher
//! - **Resolver**: the tiered decision chain with most-recently-used
//!   tie-breaking and parent-project escalation
//! - **Catalog / history / groups / preferences**: concrete collaborators
//!   backed by memory and the `.launch/` workspace directory
//!
//! # Architecture
//!
//! ```text
//!                 launch-cli
//!                     |
//!                launch-core
//!                     |
//!                launch-model
//! ```
//!
//! # Example
//!
//! ```ignore
//! use launch_core::{Collaborators, ContextResolver};
//!
//! let resolver = ContextResolver::new(Collaborators {
//!     selection: &selection,
//!     catalog: workspace.catalog(),
//!     history: &history,
//!     groups: workspace.groups(),
//!     preferences: &preferences,
//!     disambiguator: &prompts,
//!     launcher: &launcher,
//! });
//! let resolution = resolver.resolve_and_launch("debug");
//! ```

pub mod catalog;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod groups;
pub mod history;
pub mod preferences;
pub mod resolver;
pub mod shortcuts;

pub use catalog::{CatalogEntry, LaunchCatalog};
pub use collaborators::{
    Catalog, Disambiguator, EscalationAnswer, GroupRegistry, HistoryStore, LaunchTarget, Launcher,
    Notice, Preferences, SelectionSource,
};
pub use config::{PreferenceResolver, Workspace, WorkspaceManifest};
pub use error::{CatalogQueryFailure, Error, QueryTier, Result};
pub use groups::LaunchGroupRegistry;
pub use history::{HistoryEntry, LaunchHistory};
pub use preferences::{LaunchPreferences, PreferenceKey, PreferenceStore};
pub use resolver::{
    AMBIGUOUS_LABEL, Collaborators, ContextResolver, PARENT_LABEL, Resolution, ResolutionOutcome,
    ResolutionTier, TierEvent,
};
pub use shortcuts::{ActivityFilter, VisibilityPolicy, shortcuts_for_empty_selection};
