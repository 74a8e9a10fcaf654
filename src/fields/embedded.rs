//! Built-in field rules for notification channel definitions.
//!
//! The catalog is embedded as JSON so the rules stay data: adding a channel
//! type means adding an entry here, never touching the validator.

/// Returns the built-in channel catalog as a JSON string.
///
/// Keys are channel `type` values; each entry lists the fields its
/// `definition` block may and must carry.
pub fn channel_field_specs() -> &'static str {
    r#"{
  "EMAIL": {
    "allowed": ["emails"],
    "required": ["emails"]
  },
  "SLACK": {
    "allowed": ["url", "channel", "username", "iconEmoji"],
    "required": ["url"]
  },
  "WEBHOOK": {
    "allowed": ["url", "method", "headers", "body"],
    "required": ["url"]
  },
  "PAGERDUTY": {
    "allowed": ["integrationKey", "severity"],
    "required": ["integrationKey"]
  },
  "OPSGENIE": {
    "allowed": ["apiKey", "region", "priority", "tags"],
    "required": ["apiKey"]
  },
  "MSTEAMS": {
    "allowed": ["url"],
    "required": ["url"]
  },
  "DISCORD": {
    "allowed": ["url", "username"],
    "required": ["url"]
  }
}"#
}
