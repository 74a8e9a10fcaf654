//! Normalization of upstream subject profiles.
//!
//! Different upstream subsystems describe the subject behind a record (who
//! created a channel, who owns a key) with different record shapes. This
//! module maps each recognized shape onto one [`CanonicalProfile`] and treats
//! every other shape as a hard error.
//!
//! # Key Types
//!
//! - [`SourceProfile`] - sum type over the recognized shapes
//! - [`CanonicalProfile`] - unified output with explicit absent fields
//! - [`normalize`] - entry point for values of unknown static type
//! - [`normalize_json`] - entry point for `__typename`-tagged JSON records

pub mod canonical;
pub mod normalize;
pub mod variants;


pub use canonical::CanonicalProfile;
pub use normalize::{SourceProfile, TYPENAME_FIELD, normalize, normalize_json};
pub use variants::{BasicSubjectProfile, ServiceKeyProfile, UserProfile};

/// Name of the shape family reported when normalization fails.
pub const EXPECTED_SHAPE: &str = "BasicSubjectProfile";
