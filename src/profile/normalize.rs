//! Mapping of recognized source shapes onto [`CanonicalProfile`].

use super::EXPECTED_SHAPE;
use super::canonical::CanonicalProfile;
use super::variants::{BasicSubjectProfile, ServiceKeyProfile, UserProfile};
use crate::error::{NormalizeError, NormalizeResult};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;
use std::rc::Rc;
use std::sync::Arc;

/// Tag field naming the shape of a record at the JSON boundary.
pub const TYPENAME_FIELD: &str = "__typename";

/// The closed set of recognized source shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum SourceProfile {
    #[serde(rename = "User")]
    User(UserProfile),
    #[serde(rename = "ServiceKey")]
    ServiceKey(ServiceKeyProfile),
    #[serde(rename = "BasicSubjectProfile")]
    BasicSubject(BasicSubjectProfile),
}

impl SourceProfile {
    /// `__typename` values recognized at the JSON boundary.
    pub const TYPENAMES: [&'static str; 3] = ["User", "ServiceKey", "BasicSubjectProfile"];

    /// Decode an upstream JSON record, rejecting any unrecognized shape.
    pub fn from_json(value: &Value) -> NormalizeResult<Self> {
        let typename = value
            .as_object()
            .and_then(|obj| obj.get(TYPENAME_FIELD))
            .and_then(Value::as_str)
            .filter(|name| Self::TYPENAMES.iter().any(|known| known == name))
            .ok_or_else(|| {
                warn!("Unrecognized profile record: {}", describe(value));
                NormalizeError::unexpected_shape()
            })?;

        serde_json::from_value(value.clone()).map_err(|source| NormalizeError::MalformedRecord {
            typename: typename.to_string(),
            source,
        })
    }

    /// Map onto the canonical profile.
    pub fn normalize(self) -> CanonicalProfile {
        match self {
            Self::User(p) => CanonicalProfile {
                id: p.id,
                subject_type: p.subject_type,
                username: p.username,
                full_name: p.full_name,
                avatar_url: p.avatar_url,
                api_token_name: None,
            },
            Self::ServiceKey(p) => CanonicalProfile {
                id: p.id,
                subject_type: p.subject_type,
                username: None,
                full_name: None,
                avatar_url: None,
                api_token_name: p.api_token_name,
            },
            Self::BasicSubject(p) => CanonicalProfile {
                id: p.id,
                subject_type: p.subject_type,
                username: p.username,
                full_name: p.full_name,
                avatar_url: p.avatar_url,
                api_token_name: p.api_token_name,
            },
        }
    }
}

macro_rules! impl_source_profile_from {
    ($($variant:ident => $shape:ty),* $(,)?) => {
        $(
            impl From<$shape> for SourceProfile {
                fn from(profile: $shape) -> Self {
                    Self::$variant(profile)
                }
            }

            impl From<&$shape> for SourceProfile {
                fn from(profile: &$shape) -> Self {
                    Self::$variant(profile.clone())
                }
            }

            impl From<$shape> for CanonicalProfile {
                fn from(profile: $shape) -> Self {
                    SourceProfile::from(profile).normalize()
                }
            }

            impl From<&$shape> for CanonicalProfile {
                fn from(profile: &$shape) -> Self {
                    SourceProfile::from(profile).normalize()
                }
            }
        )*
    };
}

impl_source_profile_from! {
    User => UserProfile,
    ServiceKey => ServiceKeyProfile,
    BasicSubject => BasicSubjectProfile,
}

impl From<SourceProfile> for CanonicalProfile {
    fn from(profile: SourceProfile) -> Self {
        profile.normalize()
    }
}

/// Recover a `T` passed either by value or behind exactly one level of
/// `Box`, `Rc`, `Arc` or `&'static` indirection.
fn downcast<T: Any + Clone>(value: &dyn Any) -> Option<T> {
    if let Some(v) = value.downcast_ref::<T>() {
        return Some(v.clone());
    }
    if let Some(v) = value.downcast_ref::<Box<T>>() {
        return Some(T::clone(v));
    }
    if let Some(v) = value.downcast_ref::<Rc<T>>() {
        return Some(T::clone(v));
    }
    if let Some(v) = value.downcast_ref::<Arc<T>>() {
        return Some(T::clone(v));
    }
    value.downcast_ref::<&'static T>().map(|v| T::clone(v))
}

/// Normalize a value whose static type is not known.
///
/// The value must be one of the recognized source shapes (or a
/// [`SourceProfile`]) passed directly or behind one level of indirection.
/// Anything else, including `()` or `None`, fails without a partial result.
///
/// ```rust
/// use provider_validators::profile::{normalize, ServiceKeyProfile};
/// use std::sync::Arc;
///
/// let key = ServiceKeyProfile {
///     id: "id".to_string(),
///     subject_type: Some("SERVICEKEY".to_string()),
///     api_token_name: Some("tok".to_string()),
/// };
/// let by_value = normalize(&key).unwrap();
/// let by_ref = normalize(&Arc::new(key)).unwrap();
/// assert_eq!(by_value, by_ref);
/// assert!(by_value.username.is_none());
///
/// assert!(normalize(&"a string").is_err());
/// ```
pub fn normalize(value: &dyn Any) -> NormalizeResult<CanonicalProfile> {
    let source = downcast::<SourceProfile>(value)
        .or_else(|| downcast::<UserProfile>(value).map(SourceProfile::from))
        .or_else(|| downcast::<ServiceKeyProfile>(value).map(SourceProfile::from))
        .or_else(|| downcast::<BasicSubjectProfile>(value).map(SourceProfile::from));

    match source {
        Some(source) => {
            debug!("Normalizing {} profile", variant_name(&source));
            Ok(source.normalize())
        }
        None => {
            warn!("Value is not a recognized {}", EXPECTED_SHAPE);
            Err(NormalizeError::unexpected_shape())
        }
    }
}

/// Decode and normalize an upstream JSON record.
pub fn normalize_json(value: &Value) -> NormalizeResult<CanonicalProfile> {
    SourceProfile::from_json(value).map(SourceProfile::normalize)
}

fn variant_name(source: &SourceProfile) -> &'static str {
    match source {
        SourceProfile::User(_) => "User",
        SourceProfile::ServiceKey(_) => "ServiceKey",
        SourceProfile::BasicSubject(_) => "BasicSubjectProfile",
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object without a recognized __typename",
    }
}
