//! Errors raised while mapping resource nodes to films

use thiserror::Error;

/// Result type for node mapping
pub type MappingResult<T> = Result<T, MappingError>;

/// A resource node could not be mapped to a [`super::Film`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The child is not a JSON object
    #[error("Resource node '{0}' is not an object")]
    NotANode(String),

    /// A required property is absent
    #[error("Resource node is missing required property '{0}'")]
    MissingField(&'static str),

    /// A property is present but has the wrong type or range
    #[error("Property '{field}' has invalid value {value}")]
    InvalidField {
        field: &'static str,
        value: String,
    },
}

impl MappingError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        "OSCAR_SOURCE_MAPPING_FAILED"
    }
}
