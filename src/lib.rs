//! Validation and normalization for declarative provider configuration.
//!
//! Sits between a schema-described configuration tree, whose values may be
//! null or not yet known, and the record shapes returned by upstream APIs.
//!
//! # Core Components
//!
//! - [`CuidValidator`] - checks that reference attributes hold a CUID
//! - [`ConditionalFieldsValidator`] - allowed and required fields of a block
//!   selected by a sibling discriminator attribute
//! - [`profile::normalize`] - maps heterogeneous subject profiles onto one
//!   [`CanonicalProfile`]
//!
//! # Quick Start
//!
//! ```rust
//! use provider_validators::config::ConfigValue;
//! use provider_validators::validators::ChannelConfigValidator;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigValue::from_json(&json!({
//!     "channels": [{
//!         "type": "SLACK",
//!         "definition": {"url": "https://hooks.slack.com/services/T0/B0/x"}
//!     }]
//! }));
//!
//! let diagnostics = ChannelConfigValidator::builtin()?.validate(&config);
//! assert!(diagnostics.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fields;
pub mod identifier;
pub mod profile;
pub mod validators;

// Re-export commonly used types for convenience
pub use config::{AttributePath, ConfigObject, ConfigValue};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{BuildError, NormalizeError, ValidationError};
pub use fields::{DiscriminatorRegistry, FieldSpec};
pub use identifier::Cuid;
pub use profile::{CanonicalProfile, SourceProfile};
pub use validators::{
    AttributeValidator, ChannelConfigValidator, ConditionalFieldsValidator, CuidValidator,
    ValidationPass,
};
