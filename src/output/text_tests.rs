use std::path::PathBuf;

use serde_json::json;

use crate::checker::{
    CategoryCount, CoverageTable, Finding, FindingCategory, GroupSum, Observation, RuleKind,
    RuleOutcome, SequenceGroup,
};
use crate::dataset::{Dataset, Record};
use crate::stats::{AnalysisSummary, Distribution};

use super::*;

fn dataset(name: &str, count: usize) -> Dataset {
    let records = (0..count)
        .map(|i| {
            let serde_json::Value::Object(fields) = json!({"id": format!("1.{i}")}) else {
                unreachable!()
            };
            Record::new(format!("1.{i}"), fields)
        })
        .collect();
    Dataset {
        name: name.to_string(),
        path: PathBuf::from(format!("data/{name}.json")),
        records,
    }
}

fn outcome(kind: RuleKind, findings: Vec<Finding>, observations: Vec<Observation>) -> RuleOutcome {
    RuleOutcome {
        kind,
        title: kind.default_title().to_string(),
        limit: None,
        findings,
        observations,
        skipped: 0,
    }
}

fn render(summaries: &[AnalysisSummary]) -> String {
    TextReporter::new(ColorMode::Never).format(summaries).unwrap()
}

#[test]
fn banner_and_numbered_sections() {
    let summary = AnalysisSummary::build(
        &dataset("metrics", 2),
        vec![
            outcome(RuleKind::IdPattern, Vec::new(), Vec::new()),
            outcome(
                RuleKind::ThinContent,
                vec![Finding::new(FindingCategory::ThinContent, "1.1")
                    .with_field("name")
                    .with_context("Ten chars!")
                    .with_length(10)],
                Vec::new(),
            ),
        ],
        15,
    );

    let text = render(&[summary]);

    assert!(text.starts_with("=== METRICS ANALYSIS ===\n"));
    assert!(text.contains("Dataset: metrics (data/metrics.json, 2 records)"));
    assert!(text.contains("1. ID PATTERN CHECK\n✓ No issues found"));
    assert!(text.contains("2. THIN CONTENT CHECK\n⚠ Found 1 issue:\n  1.1 [name]: 10 chars - \"Ten chars!\""));
    assert!(text.contains("Summary: 1 findings (0 errors, 1 warnings, 0 info)"));
    assert!(text.trim_end().ends_with("=== END METRICS ANALYSIS ==="));
}

#[test]
fn long_listings_are_truncated() {
    let findings = (0..18)
        .map(|i| {
            Finding::new(FindingCategory::VagueLanguage, format!("1.{i}"))
                .with_field("measurementGuidance")
                .with_subject("good")
                .with_context("a good plan")
        })
        .collect();
    let summary = AnalysisSummary::build(
        &dataset("metrics", 0),
        vec![outcome(RuleKind::VagueLanguage, findings, Vec::new())],
        15,
    );

    let text = render(&[summary]);

    assert!(text.contains("⚠ Found 18 issues:"));
    assert!(text.contains("  1.0 [measurementGuidance]: \"good\" in \"...a good plan...\""));
    assert!(text.contains("  1.14 [measurementGuidance]"));
    assert!(!text.contains("  1.15 [measurementGuidance]"));
    assert!(text.contains("  ... and 3 more"));
}

#[test]
fn errors_use_failure_symbol() {
    let summary = AnalysisSummary::build(
        &dataset("metrics", 1),
        vec![outcome(
            RuleKind::IdPattern,
            vec![Finding::new(FindingCategory::PatternViolation, "X7").with_context("X7")],
            Vec::new(),
        )],
        15,
    );

    let text = render(&[summary]);

    assert!(text.contains("✗ Found 1 issue:\n  X7\n"));
    assert!(text.contains("(1 errors, 0 warnings, 0 info)"));
}

#[test]
fn coverage_table_lists_sparse_categories() {
    let table = CoverageTable {
        field: "capabilityIds".to_string(),
        min: 3,
        max: None,
        list_below: 5,
        categories: vec![
            CategoryCount {
                key: "C1".to_string(),
                count: 2,
                record_ids: vec!["1.1".to_string(), "1.2".to_string()],
                declared: true,
            },
            CategoryCount {
                key: "C9".to_string(),
                count: 1,
                record_ids: vec!["1.2".to_string()],
                declared: false,
            },
        ],
        distribution: Distribution::from_counts(&[2]),
    };
    let summary = AnalysisSummary::build(
        &dataset("metrics", 2),
        vec![outcome(
            RuleKind::Coverage,
            Vec::new(),
            vec![Observation::Coverage(table)],
        )],
        15,
    );

    let text = render(&[summary]);

    assert!(text.contains("Distribution by capabilityIds:\n  ✗ C1: 2 records\n      1.1, 1.2\n"));
    assert!(text.contains("  ? C9: 1 records (undeclared)"));
    assert!(text.contains("Stats: min=2, max=2, avg=2.0"));
}

#[test]
fn observations_render_values_weights_and_sequences() {
    let observations = vec![
        Observation::EnumValues {
            field: "tier".to_string(),
            values: vec!["core".to_string(), "advanced".to_string()],
        },
        Observation::Missing {
            field: "measurementGuidance".to_string(),
            missing: 2,
            total: 5,
        },
        Observation::WeightSums {
            field: "defaultWeight".to_string(),
            target: 1.0,
            tolerance: 0.05,
            groups: vec![GroupSum {
                group: "C2".to_string(),
                sum: 0.25,
                deviation: 0.75,
            }],
        },
        Observation::Sequence {
            groups: vec![SequenceGroup {
                group: "C1".to_string(),
                expected: 3,
                found: 2,
                gaps: vec![2],
            }],
        },
    ];
    let summary = AnalysisSummary::build(
        &dataset("observables", 5),
        vec![outcome(RuleKind::EnumValues, Vec::new(), observations)],
        15,
    );

    let text = render(&[summary]);

    assert!(text.contains("  tier: core, advanced"));
    assert!(text.contains("ℹ 2/5 records have no measurementGuidance"));
    assert!(text.contains("  ✗ C2: 0.2500 (deviation: 0.7500)"));
    assert!(text.contains("  ✗ C1: Expected 3, Found 2 (gaps: 2)"));
}

#[test]
fn rendering_is_deterministic() {
    let build = || {
        AnalysisSummary::build(
            &dataset("rubric-anchors", 1),
            vec![outcome(
                RuleKind::NearDuplicates,
                vec![Finding::new(FindingCategory::NearDuplicate, "C1-O1")
                    .with_subject("C1-O3")
                    .with_context("100% similar: Leads planning")],
                Vec::new(),
            )],
            15,
        )
    };

    let first = render(&[build(), build()]);
    let second = render(&[build(), build()]);

    assert_eq!(first, second);
    assert!(first.contains("  C1-O1 ↔ C1-O3: 100% similar: Leads planning"));
    assert_eq!(first.matches("=== RUBRIC ANCHORS ANALYSIS ===").count(), 2);
}

#[test]
fn colors_wrap_symbols_when_enabled() {
    let summary = AnalysisSummary::build(&dataset("metrics", 0), Vec::new(), 15);
    let text = TextReporter::new(ColorMode::Always).format(&[summary]).unwrap();
    assert!(text.contains("\x1b[1m=== METRICS ANALYSIS ===\x1b[0m"));
}
