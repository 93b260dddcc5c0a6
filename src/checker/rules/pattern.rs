use std::collections::HashSet;

use regex::Regex;

use crate::checker::{Finding, FindingCategory, Rule, RuleKind, RuleOutput};
use crate::dataset::Record;

/// Flags records whose id matches none of the accepted shapes.
#[derive(Debug, Clone)]
pub struct IdPatternRule {
    patterns: Vec<Regex>,
}

impl IdPatternRule {
    #[must_use]
    pub const fn new(patterns: Vec<Regex>) -> Self {
        Self { patterns }
    }

    #[must_use]
    pub fn matches(&self, id: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(id))
    }
}

impl Rule for IdPatternRule {
    fn kind(&self) -> RuleKind {
        RuleKind::IdPattern
    }

    fn evaluate(&self, records: &[Record]) -> RuleOutput {
        let findings = records
            .iter()
            .filter(|r| !self.matches(r.id()))
            .map(|r| {
                Finding::new(FindingCategory::PatternViolation, r.id())
                    .with_context(r.id())
                    .with_subject(
                        self.patterns
                            .iter()
                            .map(Regex::as_str)
                            .collect::<Vec<_>>()
                            .join(" | "),
                    )
            })
            .collect();
        RuleOutput::with_findings(findings)
    }
}

/// Flags every repeated occurrence of an id after the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueIdsRule;

impl Rule for UniqueIdsRule {
    fn kind(&self) -> RuleKind {
        RuleKind::UniqueIds
    }

    fn evaluate(&self, records: &[Record]) -> RuleOutput {
        let mut seen = HashSet::new();
        let findings = records
            .iter()
            .enumerate()
            .filter(|(_, r)| !seen.insert(r.id()))
            .map(|(index, r)| {
                Finding::new(FindingCategory::DuplicateId, r.id())
                    .with_context(format!("record #{index}"))
            })
            .collect();
        RuleOutput::with_findings(findings)
    }
}
