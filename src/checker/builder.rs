use regex::Regex;

use crate::config::{CheckSpec, RuleSpec};
use crate::error::{ContentGuardError, Result};

use super::RegisteredRule;
use super::rules::{
    CoverageRule, EnumValuesRule, GroupBy, IdPatternRule, MechanismRule, NearDuplicateRule,
    PunctuationRule, RequiredFieldsRule, SequenceRule, TermRule, ThinContentRule, UniqueIdsRule,
    WeightSumRule,
};
use super::Rule;

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| ContentGuardError::invalid_pattern(pattern, e))
}

fn require_captures(pattern: &Regex, names: &[&str]) -> Result<()> {
    for name in names {
        if !pattern.capture_names().flatten().any(|n| n == *name) {
            return Err(ContentGuardError::Config(format!(
                "pattern '{}' must define a named capture '{name}'",
                pattern.as_str()
            )));
        }
    }
    Ok(())
}

/// One case-insensitive alternation of whole words.
fn keyword_regex(keywords: &[String]) -> Result<Regex> {
    let alternatives: Vec<String> = keywords.iter().map(|k| regex::escape(k.trim())).collect();
    compile(&format!(r"(?i)\b(?:{})\b", alternatives.join("|")))
}

fn build_check(check: &CheckSpec) -> Result<Box<dyn Rule>> {
    let rule: Box<dyn Rule> = match check {
        CheckSpec::IdPattern { patterns } => Box::new(IdPatternRule::new(
            patterns.iter().map(|p| compile(p)).collect::<Result<_>>()?,
        )),
        CheckSpec::UniqueIds => Box::new(UniqueIdsRule),
        CheckSpec::Coverage {
            field,
            categories,
            min,
            max,
            list_below,
        } => Box::new(
            CoverageRule::new(field, categories.clone(), *min)
                .with_max(*max)
                .with_list_below(*list_below),
        ),
        CheckSpec::EnumValues {
            fields,
            order,
            allowed,
        } => Box::new(EnumValuesRule::new(fields.clone(), *order).with_allowed(allowed.clone())),
        CheckSpec::VagueLanguage {
            fields,
            words,
            window,
            exempt_pattern,
        } => {
            let exempt = exempt_pattern.as_deref().map(compile).transpose()?;
            Box::new(
                TermRule::vague_words(fields.clone(), words, *window)?
                    .with_sentence_exemption(exempt),
            )
        }
        CheckSpec::OutcomePhrases {
            fields,
            phrases,
            window,
        } => Box::new(TermRule::outcome_phrases(fields.clone(), phrases, *window)?),
        CheckSpec::ThinContent { fields } => Box::new(ThinContentRule::new(
            fields
                .iter()
                .map(|f| (f.field.clone(), f.min_length))
                .collect(),
        )),
        CheckSpec::Punctuation { fields, checks } => {
            Box::new(PunctuationRule::new(fields.clone(), checks))
        }
        CheckSpec::Sequence { pattern, expected } => {
            let pattern = compile(pattern)?;
            require_captures(&pattern, &["group", "seq"])?;
            Box::new(SequenceRule::new(
                pattern,
                expected.iter().map(|e| (e.group.clone(), e.count)).collect(),
            ))
        }
        CheckSpec::WeightSum {
            group_field,
            group_pattern,
            weight_field,
            target,
            tolerance,
        } => {
            let group_by = match (group_field, group_pattern) {
                (Some(field), None) => GroupBy::Field(field.clone()),
                (None, Some(pattern)) => {
                    let pattern = compile(pattern)?;
                    require_captures(&pattern, &["group"])?;
                    GroupBy::IdPattern(pattern)
                }
                _ => {
                    return Err(ContentGuardError::Config(
                        "weight-sum needs exactly one of group_field or group_pattern".to_string(),
                    ));
                }
            };
            Box::new(WeightSumRule::new(group_by, weight_field, *target, *tolerance))
        }
        CheckSpec::NearDuplicates { field, threshold } => {
            Box::new(NearDuplicateRule::new(field, *threshold))
        }
        CheckSpec::Mechanism {
            fields,
            keywords,
            vague_openers,
        } => Box::new(MechanismRule::new(
            fields.clone(),
            keyword_regex(keywords)?,
            vague_openers.iter().map(|p| compile(p)).collect::<Result<_>>()?,
        )),
        CheckSpec::RequiredFields { fields } => Box::new(RequiredFieldsRule::new(fields.clone())),
    };
    Ok(rule)
}

/// Turns one rule-table entry into a runnable rule.
///
/// # Errors
/// Returns an error if a pattern fails to compile or lacks a required capture.
pub fn build_rule(spec: &RuleSpec) -> Result<RegisteredRule> {
    let mut rule = RegisteredRule::new(build_check(&spec.check)?);
    if let Some(title) = &spec.title {
        rule = rule.with_title(title);
    }
    if let Some(severity) = spec.severity {
        rule = rule.with_severity(severity);
    }
    if let Some(limit) = spec.limit {
        rule = rule.with_limit(limit);
    }
    Ok(rule)
}
