//! Tri-state configuration values.
//!
//! A configuration value seen during plan-time evaluation is either `Null`
//! (explicitly absent), `Unknown` (will only be known after apply) or `Known`.
//! Validators skip both `Null` and `Unknown`, but required-field checks must
//! still tell them apart, so the three states are never collapsed into an
//! `Option`.

use super::object::ConfigObject;
use super::path::{AttributePath, PathStep};
use serde_json::{Number, Value};
use std::fmt;

/// Placeholder a JSON configuration document uses for an unknown value.
pub const UNKNOWN_PLACEHOLDER: &str = "(known after apply)";

static NULL: ConfigValue = ConfigValue::Null;
static UNKNOWN: ConfigValue = ConfigValue::Unknown;

/// A configuration value that may not be resolvable yet.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// Explicitly absent
    Null,
    /// Not yet resolvable; may or may not satisfy a constraint once known
    Unknown,
    /// A concrete value
    Known(KnownValue),
}

/// The concrete payload of a [`ConfigValue::Known`].
#[derive(Debug, Clone, PartialEq)]
pub enum KnownValue {
    String(String),
    Number(Number),
    Bool(bool),
    List(Vec<ConfigValue>),
    Object(ConfigObject),
}

impl ConfigValue {
    /// Create a known string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::Known(KnownValue::String(value.into()))
    }

    /// Create a known boolean value.
    pub fn bool(value: bool) -> Self {
        Self::Known(KnownValue::Bool(value))
    }

    /// Create a known integer value.
    pub fn int(value: i64) -> Self {
        Self::Known(KnownValue::Number(Number::from(value)))
    }

    /// Create a known list value.
    pub fn list(values: impl IntoIterator<Item = ConfigValue>) -> Self {
        Self::Known(KnownValue::List(values.into_iter().collect()))
    }

    /// Create a known object value.
    pub fn object(object: ConfigObject) -> Self {
        Self::Known(KnownValue::Object(object))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// True when a validator cannot judge this value yet.
    pub fn is_null_or_unknown(&self) -> bool {
        !self.is_known()
    }

    /// Get the concrete payload, if known.
    pub fn as_known(&self) -> Option<&KnownValue> {
        match self {
            Self::Known(value) => Some(value),
            _ => None,
        }
    }

    /// Get the value as a string slice, if it is a known string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Known(KnownValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an object, if it is a known object.
    pub fn as_object(&self) -> Option<&ConfigObject> {
        match self {
            Self::Known(KnownValue::Object(obj)) => Some(obj),
            _ => None,
        }
    }

    /// Get the value as a list, if it is a known list.
    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::Known(KnownValue::List(items)) => Some(items),
            _ => None,
        }
    }

    /// Resolve a path relative to this value.
    ///
    /// Walking through a `Null` or `Unknown` value yields that same state for
    /// every descendant. Returns `None` when an attribute or element along the
    /// path does not exist, or when a step does not fit the value's shape.
    pub fn get_path(&self, path: &AttributePath) -> Option<&ConfigValue> {
        let mut current = self;
        for step in path.steps() {
            current = match current {
                Self::Null => return Some(&NULL),
                Self::Unknown => return Some(&UNKNOWN),
                Self::Known(known) => match (step, known) {
                    (PathStep::Attribute(name), KnownValue::Object(obj)) => obj.get(name)?,
                    (PathStep::Index(index), KnownValue::List(items)) => items.get(*index)?,
                    _ => return None,
                },
            };
        }
        Some(current)
    }

    /// Convert a JSON document into the tri-state model.
    ///
    /// JSON `null` becomes `Null` and the [`UNKNOWN_PLACEHOLDER`] string
    /// becomes `Unknown`; everything else is `Known`, recursively.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::String(s) if s == UNKNOWN_PLACEHOLDER => Self::Unknown,
            Value::String(s) => Self::string(s.clone()),
            Value::Bool(b) => Self::bool(*b),
            Value::Number(n) => Self::Known(KnownValue::Number(n.clone())),
            Value::Array(items) => Self::list(items.iter().map(Self::from_json)),
            Value::Object(map) => Self::object(
                map.iter()
                    .map(|(name, v)| (name.clone(), Self::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Convert back to JSON, writing `Unknown` as the placeholder string.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Unknown => Value::String(UNKNOWN_PLACEHOLDER.to_string()),
            Self::Known(KnownValue::String(s)) => Value::String(s.clone()),
            Self::Known(KnownValue::Number(n)) => Value::Number(n.clone()),
            Self::Known(KnownValue::Bool(b)) => Value::Bool(*b),
            Self::Known(KnownValue::List(items)) => {
                Value::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Known(KnownValue::Object(obj)) => Value::Object(
                obj.iter()
                    .map(|(name, v)| (name.to_string(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<Option<String>> for ConfigValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, |s| Self::string(s))
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Unknown => write!(f, "<unknown>"),
            Self::Known(_) => write!(f, "{}", self.to_json()),
        }
    }
}
