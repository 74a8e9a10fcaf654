//! Discriminator-conditioned field validation tests.
//!
//! The validator is driven through a `ValidationPass` so the discriminator is
//! read from the sibling `type` attribute exactly as in a real configuration.

use crate::common::builders::ChannelBuilder;
use crate::common::fixtures::test_registry;
use crate::common::{config_with_channels, diagnostics_at};
use provider_validators::config::{AttributePath, ConfigObject, ConfigValue};
use provider_validators::diagnostics::{Diagnostics, Severity};
use provider_validators::validators::{ConditionalFieldsValidator, ValidationPass};
use serde_json::{Value, json};

fn validate(channels: Vec<Value>) -> Diagnostics {
    let config = config_with_channels(channels);
    let validator = ConditionalFieldsValidator::new("type", test_registry()).with_label("channel");
    ValidationPass::new(&config)
        .validate_each(
            &AttributePath::root().attribute("channels"),
            "definition",
            &validator,
        )
        .finish()
}

#[test]
fn test_valid_channels_pass() {
    let diagnostics = validate(vec![
        ChannelBuilder::slack().build(),
        ChannelBuilder::webhook().with_field("headers", json!({"X-Team": "ops"})).build(),
        ChannelBuilder::email().build(),
    ]);
    assert_no_diagnostics!(diagnostics);
}

#[test]
fn test_extra_field_reported_with_allowed_list() {
    let diagnostics = validate(vec![
        ChannelBuilder::slack().with_field("token", json!("xoxb")).build(),
    ]);

    assert_summaries!(diagnostics, ["Invalid Fields"]);
    let at_definition = diagnostics_at(&diagnostics, "channels[0].definition");
    let d = at_definition[0];
    assert_eq!(d.severity, Severity::Error);
    assert_eq!(
        d.detail,
        "Invalid fields for channel type SLACK: token. Allowed fields: channel, url"
    );
}

#[test]
fn test_several_extra_fields_share_one_diagnostic() {
    let diagnostics = validate(vec![
        ChannelBuilder::email()
            .with_field("url", json!("https://example.com"))
            .with_field("channel", json!("#x"))
            .build(),
    ]);

    assert_summaries!(diagnostics, ["Invalid Fields"]);
    let detail = &diagnostics.iter().next().unwrap().detail;
    assert!(detail.contains("url"));
    assert!(detail.contains("channel"));
    assert!(detail.ends_with("Allowed fields: emails"));
}

#[test]
fn test_extra_fields_listed_in_declaration_order() {
    let channel = json!({
        "type": "SLACK",
        "definition": {"url": "https://hooks.slack.com/x", "zeta": 1, "alpha": 2}
    });
    let diagnostics = validate(vec![channel]);

    assert_summaries!(diagnostics, ["Invalid Fields"]);
    assert_eq!(
        diagnostics.iter().next().unwrap().detail,
        "Invalid fields for channel type SLACK: zeta, alpha. Allowed fields: channel, url"
    );
}

#[test]
fn test_json_definition_keeps_key_order() {
    let definition = ConfigValue::from_json(&json!({"url": "u", "zeta": 1, "alpha": 2}));
    let keys: Vec<&str> = definition.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["url", "zeta", "alpha"]);
}

#[test]
fn test_missing_required_field() {
    let diagnostics = validate(vec![ChannelBuilder::webhook().without_field("method").build()]);

    assert_summaries!(diagnostics, ["Missing Required Fields"]);
    assert_eq!(
        diagnostics.iter().next().unwrap().detail,
        "Missing required fields for channel type WEBHOOK: method"
    );
}

#[test]
fn test_null_required_field_is_missing() {
    let diagnostics = validate(vec![ChannelBuilder::webhook().with_field("url", Value::Null).build()]);
    assert_summaries!(diagnostics, ["Missing Required Fields"]);
}

#[test]
fn test_unknown_required_field_is_not_missing() {
    let diagnostics = validate(vec![
        ChannelBuilder::webhook()
            .with_field("url", json!("(known after apply)"))
            .build(),
    ]);
    assert_no_diagnostics!(diagnostics);
}

#[test]
fn test_extra_and_missing_reported_in_one_pass() {
    let diagnostics = validate(vec![
        ChannelBuilder::webhook()
            .without_field("url")
            .with_field("channel", json!("#alerts"))
            .build(),
    ]);
    assert_summaries!(diagnostics, ["Invalid Fields", "Missing Required Fields"]);
}

#[test]
fn test_unknown_channel_type_is_terminal_for_that_block_only() {
    let diagnostics = validate(vec![
        ChannelBuilder::slack()
            .with_type(json!("CARRIER_PIGEON"))
            .with_field("token", json!("x"))
            .without_field("url")
            .build(),
        ChannelBuilder::webhook().without_field("method").build(),
    ]);

    let first = diagnostics_at(&diagnostics, "channels[0].definition");
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].detail, "Unknown channel type: CARRIER_PIGEON");

    let second = diagnostics_at(&diagnostics, "channels[1].definition");
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].summary, "Missing Required Fields");
}

#[test]
fn test_unresolved_channel_type_defers_checks() {
    let diagnostics = validate(vec![
        ChannelBuilder::slack()
            .with_unknown_type()
            .with_field("token", json!("x"))
            .build(),
        ChannelBuilder::slack()
            .with_type(Value::Null)
            .without_field("url")
            .build(),
        ChannelBuilder::slack().without_type().with_field("bogus", json!(1)).build(),
    ]);
    assert_no_diagnostics!(diagnostics);
}

#[test]
fn test_unresolved_definition_is_skipped() {
    let diagnostics = validate(vec![
        ChannelBuilder::slack().with_definition(Value::Null).build(),
        ChannelBuilder::slack()
            .with_definition(json!("(known after apply)"))
            .build(),
    ]);
    assert_no_diagnostics!(diagnostics);
}

#[test]
fn test_spec_without_required_fields_accepts_empty_block() {
    let diagnostics = validate(vec![
        ChannelBuilder::slack()
            .with_type(json!("NOOP"))
            .with_definition(json!({}))
            .build(),
    ]);
    assert_no_diagnostics!(diagnostics);
}

#[test]
fn test_explicit_values_without_tree() {
    let validator = ConditionalFieldsValidator::new("type", test_registry());
    let definition = ConfigValue::object(
        ConfigObject::new().with("emails", ConfigValue::list([ConfigValue::string("a@b.c")])),
    );

    let mut diagnostics = Diagnostics::new();
    validator.validate_definition(
        &AttributePath::root().attribute("definition"),
        &definition,
        &ConfigValue::string("EMAIL"),
        &mut diagnostics,
    );
    assert_no_diagnostics!(diagnostics);
}
