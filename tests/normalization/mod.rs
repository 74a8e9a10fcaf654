//! Profile normalization tests module.
