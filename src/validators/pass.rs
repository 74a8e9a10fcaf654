//! One validation pass over a configuration tree.

use super::{AttributeValidator, ValidationRequest};
use crate::config::{AttributePath, ConfigValue};
use crate::diagnostics::Diagnostics;
use log::{debug, trace};

/// Runs validators against attributes of one configuration and collects
/// every diagnostic they produce.
///
/// ```rust
/// use provider_validators::config::{AttributePath, ConfigValue};
/// use provider_validators::validators::{CuidValidator, ValidationPass};
/// use serde_json::json;
///
/// let config = ConfigValue::from_json(&json!({"ownerId": "c123"}));
/// let diagnostics = ValidationPass::new(&config)
///     .validate_attribute(&AttributePath::root().attribute("ownerId"), &CuidValidator::new())
///     .finish();
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[derive(Debug)]
pub struct ValidationPass<'a> {
    config: &'a ConfigValue,
    diagnostics: Diagnostics,
    checked: usize,
}

impl<'a> ValidationPass<'a> {
    pub fn new(config: &'a ConfigValue) -> Self {
        debug!("Starting validation pass");
        Self {
            config,
            diagnostics: Diagnostics::new(),
            checked: 0,
        }
    }

    /// Validate the attribute at `path`. An absent attribute is validated as
    /// `Null`.
    pub fn validate_attribute(
        &mut self,
        path: &AttributePath,
        validator: &dyn AttributeValidator,
    ) -> &mut Self {
        let absent = ConfigValue::Null;
        let value = self.config.get_path(path).unwrap_or(&absent);
        trace!("Validating {} ({})", path, validator.description());

        let request = ValidationRequest {
            path,
            value,
            config: self.config,
        };
        validator.validate(&request, &mut self.diagnostics);
        self.checked += 1;
        self
    }

    /// Validate `attribute` of every element of the list at `list`.
    ///
    /// Nothing is checked when the list itself is null, unknown or absent.
    pub fn validate_each(
        &mut self,
        list: &AttributePath,
        attribute: &str,
        validator: &dyn AttributeValidator,
    ) -> &mut Self {
        let len = self
            .config
            .get_path(list)
            .and_then(ConfigValue::as_list)
            .map_or(0, <[ConfigValue]>::len);

        for index in 0..len {
            let path = list.clone().index(index).attribute(attribute);
            self.validate_attribute(&path, validator);
        }
        self
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// End the pass and hand back everything collected.
    pub fn finish(&mut self) -> Diagnostics {
        debug!(
            "Validation pass finished: {} attributes checked, {} diagnostics",
            self.checked,
            self.diagnostics.len()
        );
        std::mem::take(&mut self.diagnostics)
    }
}
