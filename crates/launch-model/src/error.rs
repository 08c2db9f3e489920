//! Error types for launch-model

/// Result type for launch-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or evaluating model values
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An enablement expression referenced an invalid name pattern
    #[error("Invalid name pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A selection count range was empty
    #[error("Invalid selection count range: min {min} is greater than max {max}")]
    InvalidCountRange { min: usize, max: usize },

    /// An identifier was empty
    #[error("Empty {what} identifier")]
    EmptyId { what: &'static str },
}
