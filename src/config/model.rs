use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::checker::rules::{PunctuationCheck, ValueOrder};
use crate::checker::{RuleKind, Severity};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Listing cap for rules that set no `limit` of their own.
pub const DEFAULT_LIMIT: usize = 15;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Exit non-zero when a finding at or above this severity exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<Severity>,

    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Evaluate rules concurrently. Report order is unaffected.
    #[serde(default)]
    pub parallel: bool,

    #[serde(default, rename = "dataset", skip_serializing_if = "Vec::is_empty")]
    pub datasets: Vec<DatasetConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Some(CONFIG_VERSION.to_string()),
            fail_on: None,
            limit: DEFAULT_LIMIT,
            parallel: false,
            datasets: Vec::new(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn dataset(&self, name: &str) -> Option<&DatasetConfig> {
        self.datasets.iter().find(|d| d.name == name)
    }
}

/// One dataset file and the rule table applied to it [[dataset]].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetConfig {
    pub name: String,

    pub path: PathBuf,

    /// Built-in rule table whose rules run before `rules`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Field holding the record id. Defaults to the preset's, else `id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_field: Option<String>,

    /// Treat an empty array as a load error.
    #[serde(default = "default_true")]
    pub require_records: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleSpec>,
}

impl DatasetConfig {
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            preset: None,
            id_field: None,
            require_records: true,
            rules: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }
}

/// One row of a rule table [[dataset.rules]].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleSpec {
    /// Section heading; the rule kind's default title otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Replaces the default severity of every finding of this rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    /// Listing cap for this section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    #[serde(flatten)]
    pub check: CheckSpec,
}

impl RuleSpec {
    #[must_use]
    pub const fn new(check: CheckSpec) -> Self {
        Self {
            title: None,
            severity: None,
            limit: None,
            check,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        self.check.kind()
    }
}

/// Rule kind and its parameters, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CheckSpec {
    IdPattern {
        patterns: Vec<String>,
    },
    UniqueIds,
    Coverage {
        field: String,
        categories: Vec<String>,
        #[serde(default = "default_min")]
        min: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
        /// Categories with fewer references also list their record ids.
        #[serde(default)]
        list_below: usize,
    },
    EnumValues {
        fields: Vec<String>,
        #[serde(default)]
        order: ValueOrder,
        #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
        allowed: IndexMap<String, Vec<String>>,
    },
    VagueLanguage {
        fields: Vec<String>,
        words: Vec<String>,
        #[serde(default = "default_vague_window")]
        window: usize,
        /// Regex; a match inside a sentence that matches it is not reported.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        exempt_pattern: Option<String>,
    },
    OutcomePhrases {
        fields: Vec<String>,
        phrases: Vec<String>,
        #[serde(default = "default_outcome_window")]
        window: usize,
    },
    ThinContent {
        fields: Vec<ThinField>,
    },
    Punctuation {
        fields: Vec<String>,
        #[serde(default = "default_punctuation_checks")]
        checks: Vec<PunctuationCheck>,
    },
    Sequence {
        /// Regex with `group` and `seq` named captures.
        pattern: String,
        expected: Vec<ExpectedCount>,
    },
    WeightSum {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        group_field: Option<String>,
        /// Regex with a `group` capture applied to the record id.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        group_pattern: Option<String>,
        weight_field: String,
        #[serde(default = "default_weight_target")]
        target: f64,
        #[serde(default = "default_weight_tolerance")]
        tolerance: f64,
    },
    NearDuplicates {
        field: String,
        #[serde(default = "default_similarity_threshold")]
        threshold: f64,
    },
    Mechanism {
        fields: Vec<String>,
        keywords: Vec<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        vague_openers: Vec<String>,
    },
    RequiredFields {
        fields: Vec<String>,
    },
}

impl CheckSpec {
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::IdPattern { .. } => RuleKind::IdPattern,
            Self::UniqueIds => RuleKind::UniqueIds,
            Self::Coverage { .. } => RuleKind::Coverage,
            Self::EnumValues { .. } => RuleKind::EnumValues,
            Self::VagueLanguage { .. } => RuleKind::VagueLanguage,
            Self::OutcomePhrases { .. } => RuleKind::OutcomePhrases,
            Self::ThinContent { .. } => RuleKind::ThinContent,
            Self::Punctuation { .. } => RuleKind::Punctuation,
            Self::Sequence { .. } => RuleKind::Sequence,
            Self::WeightSum { .. } => RuleKind::WeightSum,
            Self::NearDuplicates { .. } => RuleKind::NearDuplicates,
            Self::Mechanism { .. } => RuleKind::Mechanism,
            Self::RequiredFields { .. } => RuleKind::RequiredFields,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThinField {
    pub field: String,
    /// Minimum length in characters.
    pub min_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpectedCount {
    pub group: String,
    pub count: usize,
}

const fn default_true() -> bool {
    true
}

const fn default_limit() -> usize {
    DEFAULT_LIMIT
}

const fn default_min() -> usize {
    1
}

const fn default_vague_window() -> usize {
    30
}

const fn default_outcome_window() -> usize {
    40
}

fn default_punctuation_checks() -> Vec<PunctuationCheck> {
    PunctuationCheck::ALL.to_vec()
}

const fn default_weight_target() -> f64 {
    1.0
}

const fn default_weight_tolerance() -> f64 {
    0.05
}

const fn default_similarity_threshold() -> f64 {
    0.7
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
