//! Registry of field rules keyed by discriminator value.

use super::embedded;
use super::types::FieldSpec;
use crate::error::{BuildError, BuildResult};
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Mapping from discriminator value to [`FieldSpec`].
///
/// Built once from static data and read-only afterwards, so a single
/// registry can be shared between any number of concurrent validators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscriminatorRegistry {
    specs: BTreeMap<String, FieldSpec>,
}

impl DiscriminatorRegistry {
    /// Start building a registry.
    pub fn builder() -> DiscriminatorRegistryBuilder {
        DiscriminatorRegistryBuilder::default()
    }

    /// Registry holding the built-in channel catalog.
    pub fn builtin() -> BuildResult<Self> {
        Self::from_json_str(embedded::channel_field_specs())
    }

    /// Load a registry from JSON text mapping discriminator values to specs.
    pub fn from_json_str(json: &str) -> BuildResult<Self> {
        let specs: BTreeMap<String, FieldSpec> = serde_json::from_str(json)?;
        specs
            .into_iter()
            .try_fold(Self::builder(), |builder, (value, spec)| {
                builder.register(value, spec)
            })
            .map(DiscriminatorRegistryBuilder::build)
    }

    /// Load a registry from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> BuildResult<Self> {
        let content = fs::read_to_string(&path)?;
        Self::from_json_str(&content)
    }

    /// Look up the rules for a discriminator value.
    pub fn get(&self, discriminator: &str) -> Option<&FieldSpec> {
        self.specs.get(discriminator)
    }

    pub fn contains(&self, discriminator: &str) -> bool {
        self.specs.contains_key(discriminator)
    }

    /// Registered discriminator values in sorted order.
    pub fn discriminators(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.specs.iter().map(|(value, spec)| (value.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Builder checking each [`FieldSpec`] as it is registered.
#[derive(Debug, Default)]
pub struct DiscriminatorRegistryBuilder {
    specs: BTreeMap<String, FieldSpec>,
}

impl DiscriminatorRegistryBuilder {
    /// Register the rules for one discriminator value.
    ///
    /// Fails when a required field is not allowed or the value is already
    /// registered.
    pub fn register(mut self, discriminator: impl Into<String>, spec: FieldSpec) -> BuildResult<Self> {
        let discriminator = discriminator.into();

        let fields = spec.required_not_allowed();
        if !fields.is_empty() {
            return Err(BuildError::RequiredNotAllowed {
                discriminator,
                fields,
            });
        }
        if self.specs.contains_key(&discriminator) {
            return Err(BuildError::DuplicateDiscriminator { discriminator });
        }

        self.specs.insert(discriminator, spec);
        Ok(self)
    }

    pub fn build(self) -> DiscriminatorRegistry {
        debug!(
            "Built discriminator registry with {} values: {:?}",
            self.specs.len(),
            self.specs.keys().collect::<Vec<_>>()
        );
        DiscriminatorRegistry { specs: self.specs }
    }
}
