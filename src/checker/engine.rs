use std::time::Instant;

use rayon::prelude::*;

use crate::dataset::Record;

use super::{Finding, Observation, Rule, RuleKind, Severity};

/// A rule plus the presentation settings from its rule-table entry.
pub struct RegisteredRule {
    pub title: String,
    pub severity: Option<Severity>,
    pub limit: Option<usize>,
    pub rule: Box<dyn Rule>,
}

impl RegisteredRule {
    #[must_use]
    pub fn new(rule: Box<dyn Rule>) -> Self {
        Self {
            title: rule.kind().default_title().to_string(),
            severity: None,
            limit: None,
            rule,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn run(&self, records: &[Record]) -> RuleOutcome {
        let started = Instant::now();
        let output = self.rule.evaluate(records);
        tracing::debug!(
            rule = self.rule.kind().as_str(),
            findings = output.findings.len(),
            skipped = output.skipped,
            elapsed_us = started.elapsed().as_micros(),
            "rule evaluated"
        );

        let findings = match self.severity {
            Some(severity) => output
                .findings
                .into_iter()
                .map(|f| f.with_severity(severity))
                .collect(),
            None => output.findings,
        };

        RuleOutcome {
            kind: self.rule.kind(),
            title: self.title.clone(),
            limit: self.limit,
            findings,
            observations: output.observations,
            skipped: output.skipped,
        }
    }
}

impl std::fmt::Debug for RegisteredRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredRule")
            .field("kind", &self.rule.kind())
            .field("title", &self.title)
            .field("severity", &self.severity)
            .field("limit", &self.limit)
            .finish()
    }
}

/// Result of one registered rule, in registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub kind: RuleKind,
    pub title: String,
    pub limit: Option<usize>,
    pub findings: Vec<Finding>,
    pub observations: Vec<Observation>,
    pub skipped: usize,
}

/// Ordered rule table evaluated against a read-only record slice.
#[derive(Debug, Default)]
pub struct RuleEngine {
    rules: Vec<RegisteredRule>,
    parallel: bool,
}

impl RuleEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate rules on the rayon pool. Outcome order is unchanged.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn register(&mut self, rule: RegisteredRule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn with_rule(mut self, rule: RegisteredRule) -> Self {
        self.register(rule);
        self
    }

    #[must_use]
    pub fn run(&self, records: &[Record]) -> Vec<RuleOutcome> {
        if self.parallel {
            self.rules.par_iter().map(|r| r.run(records)).collect()
        } else {
            self.rules.iter().map(|r| r.run(records)).collect()
        }
    }
}
