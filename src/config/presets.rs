use std::path::Path;

use serde::Deserialize;

use crate::error::{ContentGuardError, Result};

use super::RuleSpec;

/// Available preset names.
pub const AVAILABLE_PRESETS: &[&str] = &["metrics", "observables", "rubric-anchors"];

/// A built-in rule table for one dataset kind.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Preset {
    pub description: String,
    pub id_field: String,
    pub rules: Vec<RuleSpec>,
}

/// Load a built-in preset by name.
///
/// # Errors
/// Returns an error if the preset name is unknown.
pub fn load_preset(name: &str) -> Result<Preset> {
    let content = match name {
        "metrics" => PRESET_METRICS,
        "observables" => PRESET_OBSERVABLES,
        "rubric-anchors" => PRESET_RUBRIC_ANCHORS,
        _ => {
            return Err(ContentGuardError::Config(format!(
                "Unknown preset: '{}'. Available presets: {}",
                name,
                AVAILABLE_PRESETS.join(", ")
            )));
        }
    };

    toml::from_str(content)
        .map_err(|e| ContentGuardError::Config(format!("Failed to parse preset '{name}': {e}")))
}

/// Preset whose name equals the file stem, e.g. `data/rubric-anchors.json`.
#[must_use]
pub fn preset_for_path(path: &Path) -> Option<&'static str> {
    let stem = path.file_stem()?.to_str()?;
    AVAILABLE_PRESETS.iter().copied().find(|p| *p == stem)
}

const PRESET_METRICS: &str = r#"
description = "Metric definitions: id shape, capability coverage, wording quality"
id_field = "id"

[[rules]]
kind = "id-pattern"
patterns = ['^(\d+)\.(\d+)$', '^(AI|I)-\d+$']

[[rules]]
kind = "coverage"
title = "METRICS PER CAPABILITY"
field = "capabilityIds"
categories = ["C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8", "C9", "C10", "C11", "C12", "C13", "C14"]
min = 3
list_below = 5

[[rules]]
kind = "enum-values"
fields = ["category", "tier", "type"]
order = "first-seen"

[[rules]]
kind = "vague-language"
title = "VAGUE LANGUAGE IN MEASUREMENT GUIDANCE & WHAT GOOD LOOKS LIKE"
fields = ["measurementGuidance", "whatGoodLooksLike"]
words = [
    "good", "better", "best", "strong", "weak", "effective", "efficient",
    "quality", "appropriate", "adequate", "reasonable", "properly",
    "significant", "substantial", "considerable", "various", "several",
]
window = 30
limit = 15

[[rules]]
kind = "thin-content"
fields = [
    { field = "name", min_length = 15 },
    { field = "measurementGuidance", min_length = 50 },
]

[[rules]]
kind = "punctuation"
fields = ["name", "description", "measurementGuidance"]
checks = ["double-space", "repeated-terminal", "space-before-punctuation"]
limit = 10

[[rules]]
kind = "unique-ids"
"#;

const PRESET_OBSERVABLES: &str = r#"
description = "Observable behaviors: id sequences, weights, wording, duplicates"
id_field = "id"

[[rules]]
kind = "id-pattern"
patterns = ['^C(\d+)-O(\d+)$']

[[rules]]
kind = "sequence"
pattern = '^(?P<group>C\d+)-O(?P<seq>\d+)$'
expected = [
    { group = "C1", count = 16 },
    { group = "C2", count = 6 },
    { group = "C3", count = 11 },
    { group = "C4", count = 13 },
    { group = "C5", count = 16 },
    { group = "C6", count = 13 },
    { group = "C7", count = 11 },
    { group = "C8", count = 8 },
    { group = "C9", count = 10 },
    { group = "C10", count = 8 },
    { group = "C11", count = 11 },
    { group = "C12", count = 8 },
    { group = "C13", count = 7 },
    { group = "C14", count = 9 },
]

[[rules]]
kind = "enum-values"
title = "ENUM VALUES VERIFICATION"
fields = ["emRelevance", "directorRelevance", "requiredFrequency"]
order = "sorted"

[[rules]]
kind = "weight-sum"
title = "WEIGHT SUMS PER CAPABILITY"
group_pattern = '^(?P<group>C\d+)-'
weight_field = "defaultWeight"
target = 1.0
tolerance = 0.05

[[rules]]
kind = "vague-language"
title = "VAGUE LANGUAGE DETECTION"
fields = ["why", "how", "expectedResult", "fullExample"]
words = [
    "effectively", "appropriately", "ensures", "fosters", "drives",
    "leverages", "facilitates", "optimizes", "enhances", "improves",
]
exempt_pattern = '(?i)\b(via|through|by|using|with|during|at|every|weekly|monthly|quarterly|daily|sprint|review|meeting|template|dashboard|metric|threshold|\d+%|\d+ (hours|days|weeks)|specific|concrete)\b'
limit = 30

[[rules]]
kind = "thin-content"
title = "THIN CONTENT DETECTION"
fields = [
    { field = "shortText", min_length = 30 },
    { field = "why", min_length = 40 },
    { field = "how", min_length = 50 },
    { field = "expectedResult", min_length = 30 },
    { field = "fullExample", min_length = 80 },
]
limit = 10

[[rules]]
kind = "punctuation"
fields = ["shortText", "why", "how", "expectedResult", "fullExample"]
checks = ["repeated-terminal", "missing-space-after-period", "trailing-comma", "double-space"]

[[rules]]
kind = "near-duplicates"
title = "SEMANTIC DUPLICATE DETECTION"
field = "shortText"
threshold = 0.7
limit = 20

[[rules]]
kind = "mechanism"
title = "MECHANISM SPECIFICITY IN \"HOW\" FIELD"
fields = ["how"]
keywords = [
    "via", "through", "by", "using", "with", "during", "at",
    "every", "weekly", "monthly", "quarterly", "daily", "sprint",
    "review", "meeting", "template", "dashboard", "metric", "threshold",
    "format", "structure", "process", "cadence", "role", "team",
    "system", "tool", "document", "report", "agenda", "framework",
    "checklist", "criteria", "model", "standard",
]
vague_openers = [
    '(?i)^(improve|foster|ensure|drive|enhance|optimize|leverage|facilitate|strengthen|build|develop|create|establish)\s+\w+\s*(and|to|\.|$)',
    '(?i)without\s+(specific|concrete|clear|defined|measurable)',
]
limit = 25

[[rules]]
kind = "unique-ids"
"#;

const PRESET_RUBRIC_ANCHORS: &str = r#"
description = "Rubric anchors: two per capability, behavioral top-level wording"
id_field = "anchorId"

[[rules]]
kind = "id-pattern"
patterns = ['^C(\d+)-([12])$']

[[rules]]
kind = "coverage"
title = "ANCHORS PER CAPABILITY"
field = "capabilityId"
categories = ["C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8", "C9", "C10", "C11", "C12", "C13", "C14"]
min = 2
max = 2
list_below = 100

[[rules]]
kind = "required-fields"
title = "LEVEL CONSISTENCY"
fields = ["level1Developing", "level2Emerging", "level3Competent", "level4Distinguished", "level5Advanced"]

[[rules]]
kind = "vague-language"
title = "VAGUE LANGUAGE IN ANCHOR TEXT"
fields = ["level3Competent", "level4Distinguished", "level5Advanced"]
words = [
    "good", "better", "best", "strong", "weak", "effective", "efficient",
    "quality", "appropriate", "adequate", "reasonable", "properly",
    "significant", "substantial", "considerable", "various", "several",
    "some", "many", "most", "often", "generally", "typically", "usually",
]
window = 30
limit = 10

[[rules]]
kind = "outcome-phrases"
title = "BEHAVIORAL VS OUTCOME LANGUAGE (L5 ANCHORS)"
fields = ["level5Advanced"]
phrases = [
    "recognized as", "known for", "seen as", "viewed as", "regarded as",
    "sets standard", "sets the standard", "is the standard", "becomes the standard",
    "reputation", "sought by", "sought after",
]
window = 40

[[rules]]
kind = "thin-content"
fields = [
    { field = "level3Competent", min_length = 50 },
    { field = "level4Distinguished", min_length = 50 },
    { field = "level5Advanced", min_length = 50 },
]

[[rules]]
kind = "punctuation"
fields = ["level3Competent", "level4Distinguished", "level5Advanced"]
checks = ["double-space", "repeated-terminal", "space-before-punctuation", "lowercase-after-sentence-end"]
limit = 10

[[rules]]
kind = "unique-ids"
"#;

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
