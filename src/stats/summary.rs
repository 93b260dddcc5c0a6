use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::checker::{Finding, FindingCategory, Observation, RuleKind, RuleOutcome, Severity};
use crate::dataset::Dataset;

use super::Listing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Pass,
    Warn,
    Fail,
}

impl SectionStatus {
    /// `Fail` on any error, `Warn` on any other finding, `Pass` otherwise.
    #[must_use]
    pub const fn from_max_severity(max: Option<Severity>) -> Self {
        match max {
            None => Self::Pass,
            Some(Severity::Error) => Self::Fail,
            Some(Severity::Warning | Severity::Info) => Self::Warn,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Warn => "⚠",
            Self::Fail => "✗",
        }
    }
}

/// One numbered report section: the aggregated outcome of one rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSummary {
    pub number: usize,
    pub kind: RuleKind,
    pub title: String,
    pub status: SectionStatus,
    pub total: usize,
    pub by_category: IndexMap<FindingCategory, usize>,
    pub by_field: IndexMap<String, usize>,
    pub findings: Listing<Finding>,
    pub observations: Vec<Observation>,
    pub skipped: usize,
}

impl SectionSummary {
    fn build(number: usize, outcome: RuleOutcome, default_limit: usize) -> Self {
        let mut by_category = IndexMap::new();
        let mut by_field = IndexMap::new();
        for finding in &outcome.findings {
            *by_category.entry(finding.category).or_insert(0) += 1;
            if let Some(field) = &finding.field {
                *by_field.entry(field.clone()).or_insert(0) += 1;
            }
        }
        let max = outcome.findings.iter().map(|f| f.severity).max();

        Self {
            number,
            kind: outcome.kind,
            title: outcome.title,
            status: SectionStatus::from_max_severity(max),
            total: outcome.findings.len(),
            by_category,
            by_field,
            findings: Listing::truncate(outcome.findings, outcome.limit.unwrap_or(default_limit)),
            observations: outcome.observations,
            skipped: outcome.skipped,
        }
    }
}

/// Dataset-wide finding counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub findings: usize,
    pub by_category: BTreeMap<FindingCategory, usize>,
    pub by_severity: BTreeMap<Severity, usize>,
}

/// Everything the reporters need for one dataset. Rebuilt on every run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub dataset: String,
    pub path: String,
    pub title: String,
    pub records: usize,
    pub sections: Vec<SectionSummary>,
    pub totals: Totals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_severity: Option<Severity>,
}

impl AnalysisSummary {
    /// Groups rule outcomes into numbered sections, in rule order.
    ///
    /// `default_limit` caps listings of rules that set no limit of their own.
    #[must_use]
    pub fn build(dataset: &Dataset, outcomes: Vec<RuleOutcome>, default_limit: usize) -> Self {
        let mut totals = Totals::default();
        let mut max_severity = None;
        for finding in outcomes.iter().flat_map(|o| &o.findings) {
            totals.findings += 1;
            *totals.by_category.entry(finding.category).or_insert(0) += 1;
            *totals.by_severity.entry(finding.severity).or_insert(0) += 1;
            max_severity = max_severity.max(Some(finding.severity));
        }

        let sections = outcomes
            .into_iter()
            .enumerate()
            .map(|(i, outcome)| SectionSummary::build(i + 1, outcome, default_limit))
            .collect();

        Self {
            dataset: dataset.name.clone(),
            path: dataset.path.display().to_string(),
            title: banner_title(&dataset.name),
            records: dataset.records.len(),
            sections,
            totals,
            max_severity,
        }
    }

    /// True when some finding is at or above `threshold`.
    #[must_use]
    pub fn has_findings_at(&self, threshold: Severity) -> bool {
        self.max_severity.is_some_and(|max| max >= threshold)
    }
}

fn banner_title(name: &str) -> String {
    format!("{} ANALYSIS", name.replace(['-', '_'], " ").to_uppercase())
}
