//! Discriminator-keyed field rules.
//!
//! A [`DiscriminatorRegistry`] maps each value of a discriminator attribute
//! (for example a channel's `type`) to the [`FieldSpec`] its sibling block
//! must satisfy.
//!
//! # Examples
//!
//! ```rust
//! use provider_validators::fields::{DiscriminatorRegistry, FieldSpec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = DiscriminatorRegistry::builder()
//!     .register("SLACK", FieldSpec::new(["url", "channel"], ["url"]))?
//!     .build();
//! assert!(registry.get("SLACK").unwrap().is_required("url"));
//! # Ok(())
//! # }
//! ```

pub mod embedded;
pub mod registry;
pub mod types;


pub use registry::{DiscriminatorRegistry, DiscriminatorRegistryBuilder};
pub use types::FieldSpec;
