//! CUID format check for string attributes.

use super::{AttributeValidator, ValidationRequest};
use crate::config::{AttributePath, ConfigValue};
use crate::diagnostics::Diagnostics;
use crate::identifier::Cuid;
use log::trace;

/// Validates that a string attribute holds a CUID.
///
/// `Null` and `Unknown` values are skipped: a value that may still change
/// cannot be judged yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct CuidValidator;

impl CuidValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check one value, pushing a diagnostic if it is a known non-CUID.
    pub fn check(&self, path: &AttributePath, value: &ConfigValue, diagnostics: &mut Diagnostics) {
        if value.is_null_or_unknown() {
            trace!("Skipping cuid check for {} ({})", path, value);
            return;
        }

        let valid = value.as_str().is_some_and(Cuid::is_valid);
        if !valid {
            diagnostics.add_error(
                path.clone(),
                "Invalid Attribute Value",
                format!("Attribute {} {}, got: {}", path, self.description(), value),
            );
        }
    }
}

impl AttributeValidator for CuidValidator {
    fn description(&self) -> String {
        "value must be a cuid".to_string()
    }

    fn validate(&self, request: &ValidationRequest<'_>, diagnostics: &mut Diagnostics) {
        self.check(request.path, request.value, diagnostics);
    }
}
