use serde::{Deserialize, Serialize};

/// How much a finding matters for CI gating. Ordered `Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingCategory {
    PatternViolation,
    DuplicateId,
    CoverageGap,
    UnknownReference,
    VagueLanguage,
    OutcomeLanguage,
    ThinContent,
    PunctuationArtifact,
    EnumInconsistency,
    CountMismatch,
    WeightDeviation,
    NearDuplicate,
    MissingMechanism,
    MissingField,
}

impl FindingCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PatternViolation => "pattern-violation",
            Self::DuplicateId => "duplicate-id",
            Self::CoverageGap => "coverage-gap",
            Self::UnknownReference => "unknown-reference",
            Self::VagueLanguage => "vague-language",
            Self::OutcomeLanguage => "outcome-language",
            Self::ThinContent => "thin-content",
            Self::PunctuationArtifact => "punctuation-artifact",
            Self::EnumInconsistency => "enum-inconsistency",
            Self::CountMismatch => "count-mismatch",
            Self::WeightDeviation => "weight-deviation",
            Self::NearDuplicate => "near-duplicate",
            Self::MissingMechanism => "missing-mechanism",
            Self::MissingField => "missing-field",
        }
    }

    /// Severity used when the rule does not override it.
    #[must_use]
    pub const fn default_severity(self) -> Severity {
        match self {
            Self::PatternViolation
            | Self::DuplicateId
            | Self::UnknownReference
            | Self::MissingField => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

impl std::fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One quality issue reported by a rule.
///
/// `entity` is the record id, or the category key for coverage findings.
/// `subject` names what triggered the finding: the vague word, the phrase, the
/// punctuation check or the referenced category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub category: FindingCategory,
    pub severity: Severity,
    pub entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl Finding {
    #[must_use]
    pub fn new(category: FindingCategory, entity: impl Into<String>) -> Self {
        Self {
            category,
            severity: category.default_severity(),
            entity: entity.into(),
            field: None,
            subject: None,
            context: String::new(),
            length: None,
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}
