//! Property tests over every registered discriminator value.

use crate::common::fixtures::builtin_registry;
use provider_validators::config::{AttributePath, ConfigObject, ConfigValue};
use provider_validators::diagnostics::Diagnostics;
use provider_validators::fields::FieldSpec;
use provider_validators::validators::ConditionalFieldsValidator;
use proptest::prelude::*;

fn registered() -> Vec<(String, FieldSpec)> {
    builtin_registry()
        .iter()
        .map(|(value, spec)| (value.to_string(), spec.clone()))
        .collect()
}

/// Block with every required field plus the optional fields selected by `mask`
fn valid_definition(spec: &FieldSpec, mask: &[bool]) -> ConfigObject {
    let mut object = ConfigObject::new();
    for name in &spec.required {
        object.insert(name.clone(), ConfigValue::string(format!("{name}-value")));
    }
    let optional = spec.allowed.difference(&spec.required);
    for (name, keep) in optional.zip(mask.iter().cycle()) {
        if *keep {
            object.insert(name.clone(), ConfigValue::string(format!("{name}-value")));
        }
    }
    object
}

fn run(discriminator: &str, definition: ConfigObject) -> Diagnostics {
    let validator = ConditionalFieldsValidator::new("type", builtin_registry()).with_label("channel");
    let mut diagnostics = Diagnostics::new();
    validator.validate_definition(
        &AttributePath::root().attribute("definition"),
        &ConfigValue::object(definition),
        &ConfigValue::string(discriminator),
        &mut diagnostics,
    );
    diagnostics
}

proptest! {
    #[test]
    fn prop_required_plus_optional_subset_passes(
        index in 0usize..64,
        mask in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        let specs = registered();
        let (value, spec) = &specs[index % specs.len()];
        let diagnostics = run(value, valid_definition(spec, &mask));
        prop_assert!(diagnostics.is_empty(), "{}", diagnostics);
    }

    #[test]
    fn prop_omitting_one_required_field_reports_it(
        index in 0usize..64,
        pick in 0usize..16,
        mask in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        let specs = registered();
        let (value, spec) = &specs[index % specs.len()];
        prop_assume!(!spec.required.is_empty());

        let required: Vec<&String> = spec.required.iter().collect();
        let omitted = required[pick % required.len()];
        let definition: ConfigObject = valid_definition(spec, &mask)
            .iter()
            .filter(|(name, _)| *name != omitted.as_str())
            .map(|(name, v)| (name.to_string(), v.clone()))
            .collect();

        let diagnostics = run(value, definition);
        prop_assert_eq!(diagnostics.len(), 1);
        let d = diagnostics.iter().next().unwrap();
        prop_assert_eq!(d.summary.as_str(), "Missing Required Fields");
        let expected_suffix = format!(": {}", omitted);
        prop_assert!(d.detail.ends_with(&expected_suffix));
    }

    #[test]
    fn prop_extra_field_reports_it_with_allowed_list(
        index in 0usize..64,
        extra in "[a-z]{3,12}",
        mask in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        let specs = registered();
        let (value, spec) = &specs[index % specs.len()];
        prop_assume!(!spec.is_allowed(&extra));

        let definition = valid_definition(spec, &mask)
            .with(extra.clone(), ConfigValue::string("x"));
        let diagnostics = run(value, definition);

        prop_assert_eq!(diagnostics.len(), 1);
        let d = diagnostics.iter().next().unwrap();
        prop_assert_eq!(d.summary.as_str(), "Invalid Fields");
        prop_assert_eq!(
            d.detail.clone(),
            format!(
                "Invalid fields for channel type {}: {}. Allowed fields: {}",
                value,
                extra,
                spec.allowed_list()
            )
        );
    }

    #[test]
    fn prop_unregistered_value_reports_only_unknown_type(
        value in "[A-Z]{3,12}",
        extra in "[a-z]{3,12}",
    ) {
        prop_assume!(!builtin_registry().contains(&value));

        let definition = ConfigObject::new().with(extra, ConfigValue::string("x"));
        let diagnostics = run(&value, definition);

        prop_assert_eq!(diagnostics.len(), 1);
        prop_assert_eq!(
            diagnostics.iter().next().unwrap().detail.clone(),
            format!("Unknown channel type: {}", value)
        );
    }
}
