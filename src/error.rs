//! Error types for attribute tree operations.
//!
//! Lookups never fail: absence is reported with `Option`. Errors only arise
//! when a deep copy meets a value that cannot be duplicated, or when an
//! attribute is built against a definition it does not conform to.

/// Main error type for attribute operations.
#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    /// A leaf value refused to duplicate itself during a deep copy
    #[error("Failed to copy attribute '{attribute}': {message}")]
    CopyFailed { attribute: String, message: String },

    /// Attribute value doesn't match the type declared by its definition
    #[error("Attribute '{attribute}' has invalid type, expected {expected}, got {actual}")]
    TypeMismatch {
        attribute: String,
        expected: String,
        actual: String,
    },

    /// An anonymous attribute was used where a name is needed
    #[error("Attribute has no name and no definition to take one from")]
    UnnamedAttribute,

    /// Complex definition applied to a non-complex attribute
    #[error("Attribute '{attribute}' is not a complex attribute")]
    NotComplex { attribute: String },

    /// Multi-valued definition applied to a single-valued attribute
    #[error("Attribute '{attribute}' must be multi-valued")]
    ExpectedMultiValue { attribute: String },

    /// Single-valued definition applied to a multi-valued attribute
    #[error("Attribute '{attribute}' must be single-valued")]
    ExpectedSingleValue { attribute: String },

    /// No definition is known for the attribute
    #[error("No definition found for attribute '{attribute}'")]
    UnknownDefinition { attribute: String },

    /// JSON errors while reading attribute definitions
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AttributeError {
    /// Create a copy failure error
    pub fn copy_failed(attribute: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CopyFailed {
            attribute: attribute.into(),
            message: message.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        attribute: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            attribute: attribute.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an unknown definition error
    pub fn unknown_definition(attribute: impl Into<String>) -> Self {
        Self::UnknownDefinition {
            attribute: attribute.into(),
        }
    }
}

pub type AttributeResult<T> = Result<T, AttributeError>;
