//! Cuid value object for collision-resistant reference identifiers.
//!
//! Reference fields such as a channel owner point at records identified by a
//! CUID: a lowercase `c` followed by 24 base36 characters. Identifiers are
//! minted upstream; this crate only checks their shape.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Total length of a CUID, prefix included.
pub const CUID_LENGTH: usize = 25;

const PREFIX: char = 'c';

/// A validated CUID.
///
/// ## Examples
///
/// ```rust
/// use provider_validators::identifier::Cuid;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let id = Cuid::new("ch72gsb320000udocl363eofy".to_string())?;
///     assert_eq!(id.as_str(), "ch72gsb320000udocl363eofy");
///
///     assert!(Cuid::new("c123".to_string()).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cuid(String);

impl Cuid {
    /// Create a new Cuid with validation.
    pub fn new(value: String) -> ValidationResult<Self> {
        Self::validate_format(&value)?;
        Ok(Self(value))
    }

    /// Check a string against the CUID format without constructing one.
    pub fn is_valid(value: &str) -> bool {
        Self::validate_format(value).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    fn validate_format(value: &str) -> ValidationResult<()> {
        if !value.starts_with(PREFIX) {
            return Err(ValidationError::invalid_cuid(
                value,
                format!("must start with '{}'", PREFIX),
            ));
        }
        if value.len() != CUID_LENGTH {
            return Err(ValidationError::invalid_cuid(
                value,
                format!("must be {} characters long", CUID_LENGTH),
            ));
        }
        if let Some(bad) = value
            .chars()
            .find(|c| !(c.is_ascii_digit() || c.is_ascii_lowercase()))
        {
            return Err(ValidationError::invalid_cuid(
                value,
                format!("contains character '{}' outside the base36 alphabet", bad),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Cuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Cuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for Cuid {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Cuid {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}
