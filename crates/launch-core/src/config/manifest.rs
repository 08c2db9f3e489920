//! Manifest parsing for `workspace.toml`

use crate::Result;
use launch_model::{LaunchGroup, ResourceKind, ShortcutExtension};
use serde::{Deserialize, Serialize};

fn default_accessible() -> bool {
    true
}

/// A declared resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDecl {
    pub id: String,
    pub kind: ResourceKind,
    /// Display name; defaults to the last segment of the id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default = "default_accessible")]
    pub accessible: bool,
}

/// A declared launch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationDecl {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub type_id: String,
    /// Resources the configuration applies to
    #[serde(default)]
    pub resources: Vec<String>,
    /// Resource the configuration is stored in, making it shared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_in: Option<String>,
}

/// Activity settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivitiesSection {
    /// Activities whose shortcuts are hidden
    #[serde(default)]
    pub disabled: Vec<String>,
}

/// Workspace manifest parsed from `.launch/workspace.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceManifest {
    #[serde(default)]
    pub resources: Vec<ResourceDecl>,

    #[serde(default)]
    pub configurations: Vec<ConfigurationDecl>,

    #[serde(default)]
    pub shortcuts: Vec<ShortcutExtension>,

    /// Launch groups; the built-in groups are used when empty
    #[serde(default)]
    pub groups: Vec<LaunchGroup>,

    #[serde(default)]
    pub activities: ActivitiesSection,
}

impl WorkspaceManifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use launch_core::config::WorkspaceManifest;
    ///
    /// let manifest = WorkspaceManifest::parse(r#"
    /// [[resources]]
    /// id = "app"
    /// kind = "project"
    /// "#).unwrap();
    /// assert_eq!(manifest.resources.len(), 1);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
