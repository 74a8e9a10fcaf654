//! Unified profile written to provider state.

use crate::config::{ConfigObject, ConfigValue};
use serde::{Deserialize, Serialize};

/// The single output shape of the profile normalizer.
///
/// All six fields are always present. `id` is required by every source
/// shape; any other field the source shape did not carry is `None`,
/// serialized as an explicit `null` and never as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalProfile {
    pub id: String,
    pub subject_type: Option<String>,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub api_token_name: Option<String>,
}

impl CanonicalProfile {
    /// Profile in the tri-state model, absent fields as `Null`.
    pub fn to_config_object(&self) -> ConfigObject {
        ConfigObject::new()
            .with("id", ConfigValue::string(self.id.clone()))
            .with("subjectType", self.subject_type.clone().into())
            .with("username", self.username.clone().into())
            .with("fullName", self.full_name.clone().into())
            .with("avatarUrl", self.avatar_url.clone().into())
            .with("apiTokenName", self.api_token_name.clone().into())
    }
}
