//! Validators of a notification channel configuration.
//!
//! The configuration holds a `channels` list whose blocks look like
//!
//! ```text
//! { id = "c...", ownerId = "c...", type = "SLACK", definition = { ... } }
//! ```

use super::{ConditionalFieldsValidator, CuidValidator, ValidationPass};
use crate::config::{AttributePath, ConfigValue};
use crate::diagnostics::Diagnostics;
use crate::error::BuildResult;
use crate::fields::DiscriminatorRegistry;
use std::sync::Arc;

/// Attributes of a channel block that must hold CUIDs.
pub const CUID_ATTRIBUTES: [&str; 2] = ["id", "ownerId"];

/// Runs the channel block validators over a whole configuration.
#[derive(Debug, Clone)]
pub struct ChannelConfigValidator {
    cuid: CuidValidator,
    definition: ConditionalFieldsValidator,
}

impl ChannelConfigValidator {
    pub fn new(registry: Arc<DiscriminatorRegistry>) -> Self {
        Self {
            cuid: CuidValidator::new(),
            definition: ConditionalFieldsValidator::new("type", registry).with_label("channel"),
        }
    }

    /// Validator using the built-in channel catalog.
    pub fn builtin() -> BuildResult<Self> {
        Ok(Self::new(Arc::new(DiscriminatorRegistry::builtin()?)))
    }

    /// Validate every channel block, collecting all diagnostics.
    pub fn validate(&self, config: &ConfigValue) -> Diagnostics {
        let channels = AttributePath::root().attribute("channels");
        let mut pass = ValidationPass::new(config);
        for attribute in CUID_ATTRIBUTES {
            pass.validate_each(&channels, attribute, &self.cuid);
        }
        pass.validate_each(&channels, "definition", &self.definition);
        pass.finish()
    }
}
