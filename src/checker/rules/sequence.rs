use std::fmt::Write;

use indexmap::IndexMap;
use regex::Regex;

use crate::checker::{
    Finding, FindingCategory, Observation, Rule, RuleKind, RuleOutput, SequenceGroup,
};
use crate::dataset::Record;

/// Verifies that numbered ids like `C3-O7` form a complete `1..=N` run per group.
///
/// The id pattern must define the named captures `group` and `seq`. Ids that do
/// not match are left to the `id-pattern` rule.
#[derive(Debug, Clone)]
pub struct SequenceRule {
    pattern: Regex,
    expected: Vec<(String, usize)>,
}

impl SequenceRule {
    #[must_use]
    pub const fn new(pattern: Regex, expected: Vec<(String, usize)>) -> Self {
        Self { pattern, expected }
    }

    fn numbers_by_group(&self, records: &[Record]) -> IndexMap<String, Vec<usize>> {
        let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
        for record in records {
            let Some(caps) = self.pattern.captures(record.id()) else {
                continue;
            };
            let (Some(group), Some(seq)) = (caps.name("group"), caps.name("seq")) else {
                continue;
            };
            if let Ok(n) = seq.as_str().parse::<usize>() {
                groups.entry(group.as_str().to_string()).or_default().push(n);
            }
        }
        groups
    }
}

impl Rule for SequenceRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Sequence
    }

    fn evaluate(&self, records: &[Record]) -> RuleOutput {
        let groups = self.numbers_by_group(records);
        let mut output = RuleOutput::default();
        let mut summaries = Vec::with_capacity(self.expected.len());

        for (group, expected) in &self.expected {
            let numbers = groups.get(group).map_or(&[][..], Vec::as_slice);
            let gaps: Vec<usize> = (1..=*expected).filter(|n| !numbers.contains(n)).collect();
            let summary = SequenceGroup {
                group: group.clone(),
                expected: *expected,
                found: numbers.len(),
                gaps,
            };

            if !summary.is_complete() {
                let mut context = format!("expected {}, found {}", summary.expected, summary.found);
                if !summary.gaps.is_empty() {
                    let gaps: Vec<String> = summary.gaps.iter().map(ToString::to_string).collect();
                    let _ = write!(context, " (gaps: {})", gaps.join(", "));
                }
                output.findings.push(
                    Finding::new(FindingCategory::CountMismatch, group)
                        .with_context(context)
                        .with_length(summary.found),
                );
            }
            summaries.push(summary);
        }

        output
            .observations
            .push(Observation::Sequence { groups: summaries });
        output
    }
}
