//! Common test utilities for configuration validation testing.

use provider_validators::config::ConfigValue;
use provider_validators::diagnostics::{Diagnostic, Diagnostics};
use serde_json::{Value, json};


/// Assert that a set of diagnostics is empty, printing it otherwise
#[macro_export]
macro_rules! assert_no_diagnostics {
    ($diagnostics:expr) => {
        let diagnostics = &$diagnostics;
        assert!(
            diagnostics.is_empty(),
            "Expected no diagnostics, got:\n{}",
            diagnostics
        );
    };
}

/// Assert the exact sequence of diagnostic summaries
#[macro_export]
macro_rules! assert_summaries {
    ($diagnostics:expr, [$($summary:expr),* $(,)?]) => {
        let summaries: Vec<&str> = $diagnostics.iter().map(|d| d.summary.as_str()).collect();
        let expected: Vec<&str> = vec![$($summary),*];
        assert_eq!(summaries, expected, "Diagnostics:\n{}", $diagnostics);
    };
}

/// Wrap channel blocks into a configuration tree
pub fn config_with_channels(channels: Vec<Value>) -> ConfigValue {
    ConfigValue::from_json(&json!({ "channels": channels }))
}

/// Diagnostics attached to a given path
pub fn diagnostics_at<'a>(diagnostics: &'a Diagnostics, path: &str) -> Vec<&'a Diagnostic> {
    diagnostics
        .iter()
        .filter(|d| d.path.to_string() == path)
        .collect()
}
