//! Error types for launch-core

use std::path::PathBuf;

/// Result type for launch-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in launch-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workspace manifest not found at expected path
    #[error("Workspace manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// The manifest parsed but describes an invalid workspace
    #[error("Invalid workspace manifest: {message}")]
    InvalidManifest { message: String },

    /// A resource referenced an id that is not declared
    #[error("Unknown resource: {id}")]
    UnknownResource { id: String },

    /// Resource parents form a cycle
    #[error("Resource parent cycle through {id}")]
    ResourceCycle { id: String },

    /// An id was declared twice
    #[error("Duplicate {what} id: {id}")]
    DuplicateId { what: &'static str, id: String },

    /// Unknown preference key
    #[error("Unknown preference: {key}")]
    UnknownPreference { key: String },

    /// A preference value could not be parsed
    #[error("Invalid value '{value}' for preference {key}")]
    InvalidPreferenceValue { key: String, value: String },

    // Transparent wrappers for underlying crate errors
    /// Model error from launch-model
    #[error(transparent)]
    Model(#[from] launch_model::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

/// Which catalog query failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryTier {
    SharedConfig,
    ApplicableConfigurations,
    Shortcuts,
    EmptySelectionShortcuts,
}

impl std::fmt::Display for QueryTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QueryTier::SharedConfig => "shared configuration",
            QueryTier::ApplicableConfigurations => "applicable configurations",
            QueryTier::Shortcuts => "shortcuts",
            QueryTier::EmptySelectionShortcuts => "empty-selection shortcuts",
        };
        f.write_str(name)
    }
}

/// A catalog query that could not be answered.
///
/// The resolver never propagates this: it records the failure and treats the
/// tier as empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Catalog query for {tier} failed: {message}")]
pub struct CatalogQueryFailure {
    pub tier: QueryTier,
    pub message: String,
}

impl CatalogQueryFailure {
    pub fn new(tier: QueryTier, message: impl Into<String>) -> Self {
        Self {
            tier,
            message: message.into(),
        }
    }
}
