//! Launch shortcuts

use crate::{Enablement, Result, SelectionContext};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered strategy that launches directly from a selection, without a
/// pre-existing configuration.
///
/// Shortcuts without an enablement expression never take part in context
/// launching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortcutExtension {
    pub id: String,
    pub label: String,
    /// Activity the shortcut belongs to; disabled activities hide it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enablement: Option<Enablement>,
}

impl ShortcutExtension {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            activity: None,
            enablement: None,
        }
    }

    pub fn with_enablement(mut self, enablement: Enablement) -> Self {
        self.enablement = Some(enablement);
        self
    }

    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(activity.into());
        self
    }

    /// Whether the shortcut applies to `context`
    pub fn is_enabled_for(&self, context: &SelectionContext) -> Result<bool> {
        match &self.enablement {
            Some(expr) => expr.evaluate(context),
            None => Ok(false),
        }
    }
}

impl PartialEq for ShortcutExtension {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ShortcutExtension {}

impl fmt::Display for ShortcutExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
