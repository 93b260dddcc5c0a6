//! Configuration semantic validation.
//!
//! Runs after parsing: unique dataset names, known presets, field lists and
//! threshold ranges, and every rule compiles.

use std::collections::HashSet;

use crate::checker::build_rule;
use crate::config::{CheckSpec, Config, RuleSpec};
use crate::{ContentGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns the first problem found, naming the dataset and rule index.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    if config.limit == 0 {
        return Err(ContentGuardError::Config(
            "limit must be at least 1".to_string(),
        ));
    }

    let mut names = HashSet::new();
    for dataset in &config.datasets {
        if dataset.name.trim().is_empty() {
            return Err(ContentGuardError::Config(
                "dataset.name must not be empty".to_string(),
            ));
        }
        if !names.insert(dataset.name.as_str()) {
            return Err(ContentGuardError::Config(format!(
                "Duplicate dataset name '{}'",
                dataset.name
            )));
        }

        let resolved = dataset.resolve()?;
        for (i, rule) in resolved.rules.iter().enumerate() {
            validate_rule(rule).map_err(|e| {
                ContentGuardError::Config(format!(
                    "dataset '{}' rules[{i}] ({}): {e}",
                    dataset.name,
                    rule.kind()
                ))
            })?;
        }
    }
    Ok(())
}

/// Checks one rule's parameters, then compiles it.
///
/// # Errors
/// Returns an error describing the first invalid parameter.
pub fn validate_rule(rule: &RuleSpec) -> Result<()> {
    if rule.limit == Some(0) {
        return Err(ContentGuardError::Config("limit must be at least 1".to_string()));
    }
    check_parameters(&rule.check).map_err(ContentGuardError::Config)?;
    build_rule(rule).map(drop)
}

fn require_fields(fields: &[String]) -> std::result::Result<(), String> {
    if fields.is_empty() {
        return Err("fields must not be empty".to_string());
    }
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err("field names must not be empty".to_string());
    }
    Ok(())
}

fn require_non_empty<T>(values: &[T], what: &str) -> std::result::Result<(), String> {
    if values.is_empty() {
        Err(format!("{what} must not be empty"))
    } else {
        Ok(())
    }
}

fn check_parameters(check: &CheckSpec) -> std::result::Result<(), String> {
    match check {
        CheckSpec::IdPattern { patterns } => require_non_empty(patterns, "patterns"),
        CheckSpec::UniqueIds => Ok(()),
        CheckSpec::Coverage {
            field,
            categories,
            min,
            max,
            ..
        } => {
            require_fields(std::slice::from_ref(field))?;
            require_non_empty(categories, "categories")?;
            match max {
                Some(max) if max < min => Err(format!("max ({max}) must be at least min ({min})")),
                _ => Ok(()),
            }
        }
        CheckSpec::EnumValues { fields, .. }
        | CheckSpec::Punctuation { fields, .. }
        | CheckSpec::OutcomePhrases { fields, .. }
        | CheckSpec::RequiredFields { fields } => require_fields(fields),
        CheckSpec::VagueLanguage { fields, words, .. } => {
            require_fields(fields)?;
            require_non_empty(words, "words")
        }
        CheckSpec::ThinContent { fields } => {
            require_non_empty(fields, "fields")?;
            if fields.iter().any(|f| f.field.trim().is_empty() || f.min_length == 0) {
                return Err("each thin-content field needs a name and min_length >= 1".to_string());
            }
            Ok(())
        }
        CheckSpec::Sequence { expected, .. } => require_non_empty(expected, "expected"),
        CheckSpec::WeightSum {
            group_field,
            group_pattern,
            tolerance,
            ..
        } => {
            if group_field.is_some() == group_pattern.is_some() {
                return Err("exactly one of group_field or group_pattern is required".to_string());
            }
            if *tolerance < 0.0 {
                return Err(format!("tolerance must not be negative, got {tolerance}"));
            }
            Ok(())
        }
        CheckSpec::NearDuplicates { field, threshold } => {
            require_fields(std::slice::from_ref(field))?;
            if !(0.0..=1.0).contains(threshold) {
                return Err(format!("threshold must be between 0.0 and 1.0, got {threshold}"));
            }
            Ok(())
        }
        CheckSpec::Mechanism {
            fields, keywords, ..
        } => {
            require_fields(fields)?;
            require_non_empty(keywords, "keywords")
        }
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
