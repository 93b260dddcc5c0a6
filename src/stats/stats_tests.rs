use std::path::PathBuf;

use crate::checker::{Finding, FindingCategory, RuleKind, RuleOutcome, Severity};
use crate::dataset::Dataset;

use super::*;

fn dataset(name: &str) -> Dataset {
    Dataset {
        name: name.to_string(),
        path: PathBuf::from("data/metrics.json"),
        records: Vec::new(),
    }
}

fn outcome(kind: RuleKind, findings: Vec<Finding>) -> RuleOutcome {
    RuleOutcome {
        kind,
        title: kind.default_title().to_string(),
        limit: None,
        findings,
        observations: Vec::new(),
        skipped: 0,
    }
}

fn thin(id: &str) -> Finding {
    Finding::new(FindingCategory::ThinContent, id).with_field("name")
}

#[test]
fn distribution_rounds_mean_to_one_decimal() {
    let d = Distribution::from_counts(&[1, 2, 5, 3]);
    assert_eq!(d.min, 1);
    assert_eq!(d.max, 5);
    assert_eq!(d.mean_display(), "2.8");
}

#[test]
fn distribution_rounds_half_away_from_zero() {
    assert_eq!(Distribution::from_counts(&[1, 2]).mean_display(), "1.5");
    assert_eq!(Distribution::from_counts(&[0, 0, 0, 1]).mean_display(), "0.3");
    assert_eq!(Distribution::from_counts(&[3, 3, 4, 4, 4, 4, 4, 4]).mean_display(), "3.8");
}

#[test]
fn distribution_of_nothing_is_zero() {
    assert_eq!(Distribution::from_counts(&[]), Distribution::default());
    assert_eq!(Distribution::default().mean_display(), "0.0");
}

#[test]
fn natural_key_orders_numbers_numerically() {
    let mut keys = vec!["C10", "C2", "C1", "AI-3", "C14"];
    keys.sort_by_key(|k| natural_key(*k));
    assert_eq!(keys, vec!["AI-3", "C1", "C2", "C10", "C14"]);
}

#[test]
fn listing_truncates_and_counts_remaining() {
    let listing = Listing::truncate((1..=20).collect::<Vec<_>>(), 15);
    assert_eq!(listing.shown.len(), 15);
    assert_eq!(listing.remaining, 5);

    let short = Listing::truncate(vec![1, 2], 15);
    assert_eq!(short.shown, vec![1, 2]);
    assert_eq!(short.remaining, 0);
}

#[test]
fn sections_are_numbered_in_rule_order() {
    let summary = AnalysisSummary::build(
        &dataset("metrics"),
        vec![
            outcome(RuleKind::IdPattern, Vec::new()),
            outcome(RuleKind::ThinContent, vec![thin("1.1")]),
        ],
        15,
    );

    assert_eq!(summary.title, "METRICS ANALYSIS");
    let numbers: Vec<(usize, RuleKind)> =
        summary.sections.iter().map(|s| (s.number, s.kind)).collect();
    assert_eq!(
        numbers,
        vec![(1, RuleKind::IdPattern), (2, RuleKind::ThinContent)]
    );
    assert_eq!(summary.sections[0].status, SectionStatus::Pass);
    assert_eq!(summary.sections[1].status, SectionStatus::Warn);
}

#[test]
fn section_counts_by_category_and_field() {
    let section_findings = vec![
        thin("1.1"),
        thin("1.2"),
        Finding::new(FindingCategory::ThinContent, "1.3").with_field("measurementGuidance"),
    ];
    let summary = AnalysisSummary::build(
        &dataset("metrics"),
        vec![outcome(RuleKind::ThinContent, section_findings)],
        15,
    );

    let section = &summary.sections[0];
    assert_eq!(section.total, 3);
    assert_eq!(section.by_category[&FindingCategory::ThinContent], 3);
    assert_eq!(section.by_field["name"], 2);
    assert_eq!(section.by_field["measurementGuidance"], 1);
}

#[test]
fn rule_limit_overrides_default_limit() {
    let findings: Vec<Finding> = (0..12).map(|i| thin(&format!("1.{i}"))).collect();
    let mut limited = outcome(RuleKind::ThinContent, findings.clone());
    limited.limit = Some(10);

    let summary = AnalysisSummary::build(
        &dataset("metrics"),
        vec![limited, outcome(RuleKind::ThinContent, findings)],
        5,
    );

    assert_eq!(summary.sections[0].findings.shown.len(), 10);
    assert_eq!(summary.sections[0].findings.remaining, 2);
    assert_eq!(summary.sections[1].findings.shown.len(), 5);
    assert_eq!(summary.sections[1].findings.remaining, 7);
    assert_eq!(summary.sections[1].total, 12);
}

#[test]
fn totals_span_all_sections() {
    let summary = AnalysisSummary::build(
        &dataset("rubric-anchors"),
        vec![
            outcome(
                RuleKind::IdPattern,
                vec![Finding::new(FindingCategory::PatternViolation, "X7")],
            ),
            outcome(RuleKind::ThinContent, vec![thin("C1-1"), thin("C1-2")]),
        ],
        15,
    );

    assert_eq!(summary.title, "RUBRIC ANCHORS ANALYSIS");
    assert_eq!(summary.totals.findings, 3);
    assert_eq!(summary.totals.by_severity[&Severity::Error], 1);
    assert_eq!(summary.totals.by_severity[&Severity::Warning], 2);
    assert_eq!(summary.max_severity, Some(Severity::Error));
    assert_eq!(summary.sections[0].status, SectionStatus::Fail);
    assert!(summary.has_findings_at(Severity::Error));
    assert!(summary.has_findings_at(Severity::Info));
}

#[test]
fn empty_run_has_no_max_severity() {
    let summary = AnalysisSummary::build(&dataset("metrics"), Vec::new(), 15);
    assert_eq!(summary.max_severity, None);
    assert!(!summary.has_findings_at(Severity::Info));
}
