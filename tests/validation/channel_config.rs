//! Whole-configuration validation using the built-in channel catalog.

use crate::common::builders::ChannelBuilder;
use crate::common::fixtures::builtin_registry;
use crate::common::{config_with_channels, diagnostics_at};
use provider_validators::config::ConfigValue;
use provider_validators::validators::ChannelConfigValidator;
use serde_json::json;

#[test]
fn test_valid_configuration() {
    let config = config_with_channels(vec![
        ChannelBuilder::slack().build(),
        ChannelBuilder::webhook().build(),
        ChannelBuilder::email().build(),
    ]);
    let diagnostics = ChannelConfigValidator::new(builtin_registry()).validate(&config);
    assert_no_diagnostics!(diagnostics);
}

#[test]
fn test_all_violations_collected_across_tree() {
    let config = config_with_channels(vec![
        ChannelBuilder::slack().with_owner_id(json!("c123")).build(),
        ChannelBuilder::webhook()
            .with_type(json!("FAX"))
            .with_id(json!("abc!@#"))
            .build(),
        ChannelBuilder::email()
            .without_field("emails")
            .with_field("url", json!("https://example.com"))
            .build(),
    ]);

    let diagnostics = ChannelConfigValidator::builtin()
        .unwrap()
        .validate(&config);

    assert_eq!(diagnostics.error_count(), 5, "{}", diagnostics);
    assert_eq!(diagnostics_at(&diagnostics, "channels[0].ownerId").len(), 1);
    assert_eq!(diagnostics_at(&diagnostics, "channels[1].id").len(), 1);
    assert_eq!(
        diagnostics_at(&diagnostics, "channels[1].definition")[0].detail,
        "Unknown channel type: FAX"
    );

    let third = diagnostics_at(&diagnostics, "channels[2].definition");
    let summaries: Vec<&str> = third.iter().map(|d| d.summary.as_str()).collect();
    assert_eq!(summaries, vec!["Invalid Fields", "Missing Required Fields"]);
}

#[test]
fn test_unknown_values_pass_plan_time_validation() {
    let config = ConfigValue::from_json(&json!({
        "channels": [{
            "id": "(known after apply)",
            "ownerId": "(known after apply)",
            "type": "(known after apply)",
            "definition": {"anything": "goes"}
        }]
    }));
    let diagnostics = ChannelConfigValidator::builtin().unwrap().validate(&config);
    assert_no_diagnostics!(diagnostics);
}

#[test]
fn test_configuration_without_channels() {
    let config = ConfigValue::from_json(&json!({}));
    let diagnostics = ChannelConfigValidator::builtin().unwrap().validate(&config);
    assert_no_diagnostics!(diagnostics);
}

#[test]
fn test_diagnostics_serialize_for_reporting() {
    let config = config_with_channels(vec![ChannelBuilder::slack().with_id(json!("c123")).build()]);
    let diagnostics = ChannelConfigValidator::builtin().unwrap().validate(&config);

    let json = serde_json::to_value(&diagnostics).unwrap();
    assert_eq!(json[0]["path"], "channels[0].id");
    assert_eq!(json[0]["summary"], "Invalid Attribute Value");
}
