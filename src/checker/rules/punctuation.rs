use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::checker::{Finding, FindingCategory, Rule, RuleKind, RuleOutput};
use crate::dataset::Record;

static ABBREVIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:e\.g|i\.e|vs|etc)\.?").expect("Invalid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PunctuationCheck {
    DoubleSpace,
    RepeatedTerminal,
    SpaceBeforePunctuation,
    LowercaseAfterSentenceEnd,
    MissingSpaceAfterPeriod,
    TrailingComma,
}

impl PunctuationCheck {
    pub const ALL: [Self; 6] = [
        Self::DoubleSpace,
        Self::RepeatedTerminal,
        Self::SpaceBeforePunctuation,
        Self::LowercaseAfterSentenceEnd,
        Self::MissingSpaceAfterPeriod,
        Self::TrailingComma,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DoubleSpace => "double-space",
            Self::RepeatedTerminal => "repeated-terminal",
            Self::SpaceBeforePunctuation => "space-before-punctuation",
            Self::LowercaseAfterSentenceEnd => "lowercase-after-sentence-end",
            Self::MissingSpaceAfterPeriod => "missing-space-after-period",
            Self::TrailingComma => "trailing-comma",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::DoubleSpace => "double spaces",
            Self::RepeatedTerminal => "repeated terminal punctuation",
            Self::SpaceBeforePunctuation => "space before punctuation",
            Self::LowercaseAfterSentenceEnd => "lowercase after sentence end",
            Self::MissingSpaceAfterPeriod => "missing space after period",
            Self::TrailingComma => "trailing comma",
        }
    }

    const fn pattern(self) -> &'static str {
        match self {
            Self::DoubleSpace => r"\s{2,}",
            Self::RepeatedTerminal => r"[.!?]\s*[.!?]",
            Self::SpaceBeforePunctuation => r"\s[,;:.!?]",
            Self::LowercaseAfterSentenceEnd => r"[.!?][a-z]",
            Self::MissingSpaceAfterPeriod => r"\w\.[A-Z][a-z]",
            Self::TrailingComma => r",\s*$",
        }
    }

    /// Spans of `text` where a match of this check is not an artifact.
    fn exempt_spans(self, text: &str) -> Vec<Range<usize>> {
        let exempt = match self {
            Self::LowercaseAfterSentenceEnd => &*ABBREVIATION,
            _ => return Vec::new(),
        };
        exempt
            .find_iter(text)
            .map(|m| m.range())
            .collect()
    }
}

impl std::fmt::Display for PunctuationCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
struct CompiledCheck {
    check: PunctuationCheck,
    regex: Regex,
}

impl CompiledCheck {
    /// The first match that does not overlap an exempt span.
    fn first_artifact<'t>(&self, text: &'t str) -> Option<&'t str> {
        let exempt = self.check.exempt_spans(text);
        self.regex
            .find_iter(text)
            .find(|m| {
                !exempt
                    .iter()
                    .any(|span| m.start() < span.end && span.start < m.end())
            })
            .map(|m| m.as_str())
    }
}

/// Applies an ordered list of punctuation checks to text fields.
#[derive(Debug, Clone)]
pub struct PunctuationRule {
    fields: Vec<String>,
    checks: Vec<CompiledCheck>,
}

impl PunctuationRule {
    #[must_use]
    pub fn new(fields: Vec<String>, checks: &[PunctuationCheck]) -> Self {
        let checks = checks
            .iter()
            .map(|&check| CompiledCheck {
                check,
                regex: Regex::new(check.pattern()).expect("Invalid regex"),
            })
            .collect();
        Self { fields, checks }
    }

    /// Check kinds that fire on `text`, each with its sample.
    #[must_use]
    pub fn artifacts<'t>(&self, text: &'t str) -> Vec<(PunctuationCheck, &'t str)> {
        let text_for = |check: PunctuationCheck| {
            if check == PunctuationCheck::TrailingComma {
                text.trim_end()
            } else {
                text
            }
        };
        self.checks
            .iter()
            .filter_map(|c| c.first_artifact(text_for(c.check)).map(|s| (c.check, s)))
            .collect()
    }
}

impl Rule for PunctuationRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Punctuation
    }

    fn evaluate(&self, records: &[Record]) -> RuleOutput {
        let mut output = RuleOutput::default();
        for record in records {
            let texts = match record.texts(&self.fields) {
                Ok(texts) => texts,
                Err(skip) => {
                    output.skip(self.kind(), &skip);
                    continue;
                }
            };
            for (field, text) in texts {
                for (check, sample) in self.artifacts(text) {
                    output.findings.push(
                        Finding::new(FindingCategory::PunctuationArtifact, record.id())
                            .with_field(field)
                            .with_subject(check.description())
                            .with_context(sample),
                    );
                }
            }
        }
        output
    }
}
