//! Domain types for context launching.
//!
//! This crate holds the plain data the resolver reasons about:
//!
//! - [`Resource`]: a unit of selection arranged in a container tree
//! - [`Configuration`]: a named, runnable launch definition
//! - [`ShortcutExtension`]: a strategy that launches straight from a resource
//! - [`LaunchGroup`]: the (mode, category) partition history is kept under
//! - [`Enablement`]: the expression deciding whether a shortcut applies to a
//!   [`SelectionContext`]

pub mod configuration;
pub mod enablement;
pub mod error;
pub mod group;
pub mod resource;
pub mod shortcut;

pub use configuration::{Configuration, ConfigurationId};
pub use enablement::{Enablement, SelectionContext};
pub use error::{Error, Result};
pub use group::{DEBUG_MODE, LaunchGroup, PROFILE_MODE, RUN_MODE};
pub use resource::{Resource, ResourceId, ResourceKind};
pub use shortcut::ShortcutExtension;
