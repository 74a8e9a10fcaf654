//! Error types for validation, normalization and registry construction.
//!
//! Configuration problems found while walking a configuration tree are not
//! errors in this sense: they are collected as [`Diagnostic`](crate::diagnostics::Diagnostic)
//! records. The enums here cover value-object construction, profile
//! normalization and building a [`DiscriminatorRegistry`](crate::fields::DiscriminatorRegistry).

/// Errors raised when constructing validated value objects.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Value does not conform to the CUID format
    #[error("Invalid cuid '{value}': {reason}")]
    InvalidCuid { value: String, reason: String },

    /// Attribute path step with an empty name
    #[error("Attribute name cannot be empty")]
    EmptyAttributeName,

    /// General validation error with custom message
    #[error("Validation failed: {message}")]
    Custom { message: String },
}

/// Errors raised by the subject profile normalizer.
///
/// Normalization has exactly one input and one output, so failures are
/// returned directly instead of being collected as diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// Input is none of the recognized source profile shapes
    #[error("expects a {expected} type but did not receive one")]
    UnexpectedShape { expected: &'static str },

    /// Input carries a recognized shape tag but its body does not decode
    #[error("malformed {typename} record: {source}")]
    MalformedRecord {
        typename: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur while building a discriminator registry.
///
/// These are configuration mistakes in static registry data and surface when
/// the registry is built, never during validation.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A required field is missing from the allow-list of the same spec
    #[error("Field spec for '{discriminator}' requires fields that are not allowed: {fields:?}")]
    RequiredNotAllowed {
        discriminator: String,
        fields: Vec<String>,
    },

    /// The same discriminator value was registered twice
    #[error("Discriminator value '{discriminator}' is already registered")]
    DuplicateDiscriminator { discriminator: String },

    /// Registry data is not valid JSON or has the wrong structure
    #[error("Invalid registry data: {0}")]
    Json(#[from] serde_json::Error),

    /// Registry file could not be read
    #[error("Failed to read registry file: {0}")]
    Io(#[from] std::io::Error),
}

impl ValidationError {
    /// Create an invalid cuid error
    pub fn invalid_cuid(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCuid {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a custom validation error
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }
}

impl NormalizeError {
    /// Create the error for an input that matches no registered shape
    pub fn unexpected_shape() -> Self {
        Self::UnexpectedShape {
            expected: crate::profile::EXPECTED_SHAPE,
        }
    }
}

// Result type aliases for convenience
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type NormalizeResult<T> = Result<T, NormalizeError>;
pub type BuildResult<T> = Result<T, BuildError>;
