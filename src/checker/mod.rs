mod builder;
mod engine;
mod finding;
mod observation;
pub mod rules;
pub mod snippet;

pub use builder::build_rule;
pub use engine::{RegisteredRule, RuleEngine, RuleOutcome};
pub use finding::{Finding, FindingCategory, Severity};
pub use observation::{CategoryCount, CoverageTable, GroupSum, Observation, SequenceGroup};

use serde::{Deserialize, Serialize};

use crate::dataset::{Record, Skip};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    IdPattern,
    UniqueIds,
    Coverage,
    EnumValues,
    VagueLanguage,
    OutcomePhrases,
    ThinContent,
    Punctuation,
    Sequence,
    WeightSum,
    NearDuplicates,
    Mechanism,
    RequiredFields,
}

impl RuleKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IdPattern => "id-pattern",
            Self::UniqueIds => "unique-ids",
            Self::Coverage => "coverage",
            Self::EnumValues => "enum-values",
            Self::VagueLanguage => "vague-language",
            Self::OutcomePhrases => "outcome-phrases",
            Self::ThinContent => "thin-content",
            Self::Punctuation => "punctuation",
            Self::Sequence => "sequence",
            Self::WeightSum => "weight-sum",
            Self::NearDuplicates => "near-duplicates",
            Self::Mechanism => "mechanism",
            Self::RequiredFields => "required-fields",
        }
    }

    /// Section heading used when the rule table gives no title.
    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::IdPattern => "ID PATTERN CHECK",
            Self::UniqueIds => "ID UNIQUENESS CHECK",
            Self::Coverage => "COVERAGE PER CATEGORY",
            Self::EnumValues => "ENUM VALUES CHECK",
            Self::VagueLanguage => "VAGUE LANGUAGE",
            Self::OutcomePhrases => "OUTCOME VS BEHAVIOR LANGUAGE",
            Self::ThinContent => "THIN CONTENT CHECK",
            Self::Punctuation => "PUNCTUATION ARTIFACTS",
            Self::Sequence => "ID SEQUENCE & COUNT VERIFICATION",
            Self::WeightSum => "WEIGHT SUMS",
            Self::NearDuplicates => "NEAR-DUPLICATE DETECTION",
            Self::Mechanism => "MECHANISM SPECIFICITY",
            Self::RequiredFields => "REQUIRED FIELDS CHECK",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a single rule produced in one pass over the records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOutput {
    pub findings: Vec<Finding>,
    pub observations: Vec<Observation>,
    /// Records the rule could not evaluate (unexpected field shape).
    pub skipped: usize,
}

impl RuleOutput {
    #[must_use]
    pub fn with_findings(findings: Vec<Finding>) -> Self {
        Self {
            findings,
            ..Self::default()
        }
    }

    /// Records a skipped record and logs why.
    pub fn skip(&mut self, kind: RuleKind, skip: &Skip) {
        tracing::debug!(rule = kind.as_str(), "skipping: {skip}");
        self.skipped += 1;
    }
}

/// A pure check over the whole record collection.
///
/// Implementations must not keep state between calls; the engine may run
/// several rules concurrently over the same slice.
pub trait Rule: Send + Sync {
    fn kind(&self) -> RuleKind;

    fn evaluate(&self, records: &[Record]) -> RuleOutput;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
