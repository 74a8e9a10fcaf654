//! Field rule definitions for discriminated configuration blocks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Allow-list and required-list of field names for one discriminator value.
///
/// Every required field must also be allowed; the registry checks this when
/// the spec is registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field names that may appear in the block
    pub allowed: BTreeSet<String>,
    /// Field names that must be present and non-null
    #[serde(default)]
    pub required: BTreeSet<String>,
}

impl FieldSpec {
    /// Create a spec from allowed and required field names.
    pub fn new<A, R, S, T>(allowed: A, required: R) -> Self
    where
        A: IntoIterator<Item = S>,
        R: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            required: required.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_allowed(&self, field: &str) -> bool {
        self.allowed.contains(field)
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.required.contains(field)
    }

    /// Required fields that are missing from the allow-list.
    pub fn required_not_allowed(&self) -> Vec<String> {
        self.required.difference(&self.allowed).cloned().collect()
    }

    /// Allowed field names joined for display, in sorted order.
    pub fn allowed_list(&self) -> String {
        join(&self.allowed)
    }
}

pub(crate) fn join<'a>(names: impl IntoIterator<Item = &'a String>) -> String {
    names
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
