//! Subject profile shapes returned by upstream APIs.
//!
//! Each subsystem returns its own record shape for "who did this". The
//! shapes overlap but differ in which fields exist at all.

use serde::{Deserialize, Serialize};

/// Profile of a human user, as returned by the account subsystem.
///
/// Never carries an API token name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub subject_type: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Profile with only its identifier set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject_type: None,
            username: None,
            full_name: None,
            avatar_url: None,
        }
    }
}

/// Profile of a service key, as returned by the API token subsystem.
///
/// Never carries username, full name or avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceKeyProfile {
    pub id: String,
    #[serde(default)]
    pub subject_type: Option<String>,
    #[serde(default)]
    pub api_token_name: Option<String>,
}

impl ServiceKeyProfile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject_type: None,
            api_token_name: None,
        }
    }
}

/// Subject profile as returned by the audit subsystem, which may describe
/// either kind of subject and so carries every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicSubjectProfile {
    pub id: String,
    #[serde(default)]
    pub subject_type: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub api_token_name: Option<String>,
}

impl BasicSubjectProfile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject_type: None,
            username: None,
            full_name: None,
            avatar_url: None,
            api_token_name: None,
        }
    }
}
