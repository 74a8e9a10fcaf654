//! Configuration tree model used by the validators.
//!
//! - [`ConfigValue`] - tri-state value (`Null`, `Unknown`, `Known`)
//! - [`ConfigObject`] - ordered block of named fields
//! - [`AttributePath`] - path-addressed access from the configuration root

pub mod object;
pub mod path;
pub mod value;

pub use object::ConfigObject;
pub use path::{AttributePath, PathStep};
pub use value::{ConfigValue, KnownValue, UNKNOWN_PLACEHOLDER};
