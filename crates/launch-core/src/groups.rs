//! Launch group registry

use crate::collaborators::GroupRegistry;
use launch_model::{DEBUG_MODE, LaunchGroup, PROFILE_MODE, RUN_MODE};

/// Identifier of the built-in run group
pub const RUN_GROUP: &str = "launch.group.run";
/// Identifier of the built-in debug group
pub const DEBUG_GROUP: &str = "launch.group.debug";
/// Identifier of the built-in profile group
pub const PROFILE_GROUP: &str = "launch.group.profile";
/// Identifier of the built-in categorized external tools group
pub const EXTERNAL_TOOLS_GROUP: &str = "launch.group.external-tools";

/// Ordered registry of launch groups.
///
/// Registration order matters: canonical lookup returns the first match.
#[derive(Debug, Clone, Default)]
pub struct LaunchGroupRegistry {
    groups: Vec<LaunchGroup>,
}

impl LaunchGroupRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Create a registry with the built-in groups.
    ///
    /// Registers canonical run, debug and profile groups and a categorized
    /// external tools group in run mode.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(
            LaunchGroup::new(EXTERNAL_TOOLS_GROUP, "External Tools", RUN_MODE)
                .with_category("external-tools"),
        );
        registry.register(LaunchGroup::new(RUN_GROUP, "Run", RUN_MODE));
        registry.register(LaunchGroup::new(DEBUG_GROUP, "Debug", DEBUG_MODE));
        registry.register(LaunchGroup::new(PROFILE_GROUP, "Profile", PROFILE_MODE));
        registry
    }

    /// Register a group, replacing an existing group with the same id in place.
    pub fn register(&mut self, group: LaunchGroup) {
        match self.groups.iter_mut().find(|g| g.id == group.id) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
    }

    pub fn get(&self, id: &str) -> Option<&LaunchGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LaunchGroup> {
        self.groups.iter()
    }
}

impl GroupRegistry for LaunchGroupRegistry {
    fn groups(&self) -> Vec<LaunchGroup> {
        self.groups.clone()
    }
}
