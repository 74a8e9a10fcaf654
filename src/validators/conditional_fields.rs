//! Field rules that depend on a sibling discriminator attribute.
//!
//! A channel block such as
//!
//! ```text
//! type       = "SLACK"
//! definition = { url = "...", channel = "#alerts" }
//! ```
//!
//! may only carry the `definition` fields registered for its `type`, and must
//! carry the required ones. The validator is attached to `definition` and
//! reads `type` from the same enclosing block.

use super::{AttributeValidator, ValidationRequest};
use crate::config::{AttributePath, ConfigValue, KnownValue};
use crate::diagnostics::Diagnostics;
use crate::fields::DiscriminatorRegistry;
use crate::fields::types::join;
use log::{trace, warn};
use std::sync::Arc;

/// Enforces the [`FieldSpec`](crate::fields::FieldSpec) selected by a sibling
/// discriminator.
#[derive(Debug, Clone)]
pub struct ConditionalFieldsValidator {
    discriminator: String,
    label: String,
    registry: Arc<DiscriminatorRegistry>,
}

impl ConditionalFieldsValidator {
    /// Create a validator reading the discriminator from the sibling
    /// attribute `discriminator`.
    pub fn new(discriminator: impl Into<String>, registry: Arc<DiscriminatorRegistry>) -> Self {
        let discriminator = discriminator.into();
        Self {
            label: discriminator.clone(),
            discriminator,
            registry,
        }
    }

    /// Name used for the discriminated thing in messages, e.g. `channel`.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }

    pub fn registry(&self) -> &DiscriminatorRegistry {
        &self.registry
    }

    /// Validate `definition` against the rules selected by `discriminator`.
    ///
    /// Both values are passed in explicitly; diagnostics are attached to
    /// `path`, the location of `definition`.
    pub fn validate_definition(
        &self,
        path: &AttributePath,
        definition: &ConfigValue,
        discriminator: &ConfigValue,
        diagnostics: &mut Diagnostics,
    ) {
        if definition.is_null_or_unknown() {
            trace!("Skipping field checks for {}: value is {}", path, definition);
            return;
        }
        if discriminator.is_null_or_unknown() {
            trace!(
                "Deferring field checks for {}: {} is {}",
                path, self.discriminator, discriminator
            );
            return;
        }

        let type_name = match discriminator.as_str() {
            Some(s) => s.to_string(),
            None => discriminator.to_string(),
        };
        let Some(spec) = self.registry.get(&type_name) else {
            warn!("Unknown {} type '{}' at {}", self.label, type_name, path);
            diagnostics.add_error(
                path.clone(),
                "Invalid Attribute Value",
                format!("Unknown {} type: {}", self.label, type_name),
            );
            return;
        };

        let Some(KnownValue::Object(object)) = definition.as_known() else {
            diagnostics.add_error(
                path.clone(),
                "Invalid Attribute Type",
                format!("Attribute {} must be an object, got: {}", path, definition),
            );
            return;
        };

        let invalid: Vec<String> = object
            .iter()
            .filter(|(name, value)| value.is_known() && !spec.is_allowed(name))
            .map(|(name, _)| name.to_string())
            .collect();
        if !invalid.is_empty() {
            diagnostics.add_error(
                path.clone(),
                "Invalid Fields",
                format!(
                    "Invalid fields for {} type {}: {}. Allowed fields: {}",
                    self.label,
                    type_name,
                    join(&invalid),
                    spec.allowed_list()
                ),
            );
        }

        let missing: Vec<&String> = spec
            .required
            .iter()
            .filter(|name| object.get(name).is_none_or(ConfigValue::is_null))
            .collect();
        if !missing.is_empty() {
            diagnostics.add_error(
                path.clone(),
                "Missing Required Fields",
                format!(
                    "Missing required fields for {} type {}: {}",
                    self.label,
                    type_name,
                    join(missing)
                ),
            );
        }
    }
}

impl AttributeValidator for ConditionalFieldsValidator {
    fn description(&self) -> String {
        format!(
            "fields must match the rules registered for the value of {}",
            self.discriminator
        )
    }

    fn validate(&self, request: &ValidationRequest<'_>, diagnostics: &mut Diagnostics) {
        let absent = ConfigValue::Null;
        let sibling = request.path.sibling(&self.discriminator);
        let discriminator = request.config.get_path(&sibling).unwrap_or(&absent);
        self.validate_definition(request.path, request.value, discriminator, diagnostics);
    }
}
