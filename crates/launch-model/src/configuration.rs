//! Launch configurations

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a launch configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigurationId(String);

impl ConfigurationId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::EmptyId {
                what: "configuration",
            });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigurationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, runnable launch definition.
///
/// Equality and hashing use the id only; renaming a configuration does not
/// change which history entries refer to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    pub id: ConfigurationId,
    pub name: String,
    /// Launch configuration type, e.g. `cargo` or `python`
    #[serde(rename = "type")]
    pub type_id: String,
}

impl Configuration {
    pub fn new(id: ConfigurationId, name: impl Into<String>, type_id: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            type_id: type_id.into(),
        }
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Configuration {}

impl std::hash::Hash for Configuration {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
