//! Launch groups
//!
//! A launch group partitions launch history by mode and an optional
//! category. The group with no category is the canonical group for its mode.

use serde::{Deserialize, Serialize};

/// The standard run mode
pub const RUN_MODE: &str = "run";
/// The standard debug mode
pub const DEBUG_MODE: &str = "debug";
/// The standard profile mode
pub const PROFILE_MODE: &str = "profile";

/// A (mode, category) partition under which launch history is tracked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchGroup {
    pub id: String,
    pub label: String,
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl LaunchGroup {
    /// Create an uncategorized group
    pub fn new(id: impl Into<String>, label: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            mode: mode.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether this is the canonical group for `mode`
    pub fn is_canonical_for(&self, mode: &str) -> bool {
        self.mode == mode && self.category.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorized_group_is_never_canonical() {
        let group = LaunchGroup::new("tools", "External Tools", RUN_MODE).with_category("tools");
        assert!(!group.is_canonical_for(RUN_MODE));
    }

    #[test]
    fn mode_must_match_exactly() {
        let group = LaunchGroup::new("run", "Run", RUN_MODE);
        assert!(group.is_canonical_for("run"));
        assert!(!group.is_canonical_for("Run"));
        assert!(!group.is_canonical_for(DEBUG_MODE));
    }
}
