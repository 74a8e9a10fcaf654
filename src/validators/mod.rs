//! Attribute validators run while walking a configuration tree.
//!
//! Validators are synchronous and side-effect free apart from pushing
//! [`Diagnostic`](crate::diagnostics::Diagnostic)s. They never fail the pass:
//! every violation in the tree is collected and reported together.
//!
//! - [`CuidValidator`] - attribute must hold a CUID
//! - [`ConditionalFieldsValidator`] - allowed/required fields of a block depend
//!   on a sibling discriminator attribute
//! - [`ValidationPass`] - binds validators to paths and collects diagnostics
//! - [`ChannelConfigValidator`] - the validators of a channel configuration

pub mod channels;
pub mod conditional_fields;
pub mod cuid;
pub mod pass;

pub use channels::ChannelConfigValidator;
pub use conditional_fields::ConditionalFieldsValidator;
pub use cuid::CuidValidator;
pub use pass::ValidationPass;

use crate::config::{AttributePath, ConfigValue};
use crate::diagnostics::Diagnostics;

/// The attribute under validation together with the whole configuration.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRequest<'a> {
    /// Path of the attribute being validated
    pub path: &'a AttributePath,
    /// Value of the attribute being validated
    pub value: &'a ConfigValue,
    /// Root of the configuration tree, for reading sibling attributes
    pub config: &'a ConfigValue,
}

/// A check applied to one attribute of a configuration tree.
pub trait AttributeValidator: Send + Sync {
    /// Human-readable rule description used in diagnostics
    fn description(&self) -> String;

    /// Validate the requested attribute, pushing any violations
    fn validate(&self, request: &ValidationRequest<'_>, diagnostics: &mut Diagnostics);
}
