use crate::checker::Severity;
use crate::config::{DatasetConfig, ThinField};

use super::*;

fn config_with(dataset: DatasetConfig) -> Config {
    let mut config = Config::default();
    config.datasets.push(dataset);
    config
}

fn custom(rule: CheckSpec) -> Config {
    let mut dataset = DatasetConfig::new("custom", "custom.json");
    dataset.rules.push(RuleSpec::new(rule));
    config_with(dataset)
}

#[test]
fn default_config_is_valid() {
    assert!(validate_config_semantics(&Config::default()).is_ok());
}

#[test]
fn preset_datasets_are_valid() {
    let config = config_with(DatasetConfig::new("obs", "observables.json").with_preset("observables"));
    assert!(validate_config_semantics(&config).is_ok());
}

#[test]
fn zero_limit_is_rejected() {
    let config = Config {
        limit: 0,
        ..Config::default()
    };
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("limit must be at least 1"));
}

#[test]
fn duplicate_dataset_names_are_rejected() {
    let mut config = config_with(DatasetConfig::new("metrics", "a.json"));
    config.datasets.push(DatasetConfig::new("metrics", "b.json"));
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("Duplicate dataset name 'metrics'"));
}

#[test]
fn unknown_preset_is_rejected() {
    let config = config_with(DatasetConfig::new("x", "x.json").with_preset("nope"));
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("Unknown preset: 'nope'"));
}

#[test]
fn coverage_max_below_min_names_the_rule() {
    let config = custom(CheckSpec::Coverage {
        field: "capabilityId".to_string(),
        categories: vec!["C1".to_string()],
        min: 3,
        max: Some(2),
        list_below: 0,
    });
    let message = validate_config_semantics(&config).unwrap_err().to_string();
    assert!(message.contains("dataset 'custom' rules[0] (coverage)"));
    assert!(message.contains("max (2) must be at least min (3)"));
}

#[test]
fn empty_field_lists_are_rejected() {
    let config = custom(CheckSpec::Punctuation {
        fields: Vec::new(),
        checks: Vec::new(),
    });
    let message = validate_config_semantics(&config).unwrap_err().to_string();
    assert!(message.contains("fields must not be empty"));
}

#[test]
fn thin_content_needs_positive_lengths() {
    let config = custom(CheckSpec::ThinContent {
        fields: vec![ThinField {
            field: "name".to_string(),
            min_length: 0,
        }],
    });
    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn similarity_threshold_must_be_a_ratio() {
    let config = custom(CheckSpec::NearDuplicates {
        field: "shortText".to_string(),
        threshold: 1.5,
    });
    let message = validate_config_semantics(&config).unwrap_err().to_string();
    assert!(message.contains("threshold must be between 0.0 and 1.0"));
}

#[test]
fn weight_sum_needs_exactly_one_grouping() {
    let config = custom(CheckSpec::WeightSum {
        group_field: Some("capabilityId".to_string()),
        group_pattern: Some("^(?P<group>C\\d+)-".to_string()),
        weight_field: "defaultWeight".to_string(),
        target: 1.0,
        tolerance: 0.05,
    });
    let message = validate_config_semantics(&config).unwrap_err().to_string();
    assert!(message.contains("exactly one of group_field or group_pattern"));
}

#[test]
fn bad_regex_fails_validation() {
    let config = custom(CheckSpec::IdPattern {
        patterns: vec!["[".to_string()],
    });
    let message = validate_config_semantics(&config).unwrap_err().to_string();
    assert!(message.contains("rules[0] (id-pattern)"));
    assert!(message.contains("Invalid regex pattern: ["));
}

#[test]
fn rule_limit_of_zero_is_rejected() {
    let mut rule = RuleSpec::new(CheckSpec::UniqueIds);
    rule.limit = Some(0);
    rule.severity = Some(Severity::Info);
    assert!(validate_rule(&rule).is_err());
}
