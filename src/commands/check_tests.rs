use std::path::{Path, PathBuf};

use crate::checker::{RuleKind, Severity};
use crate::config::{CheckSpec, Config, DatasetConfig, RuleSpec, ThinField};
use crate::filesystem::mock::MockFileSystem;
use crate::{EXIT_CONFIG_ERROR, EXIT_FINDINGS, EXIT_SUCCESS};

use super::*;

const METRICS: &str = r#"[
    {"id": "3.2", "name": "Delivery predictability", "capabilityIds": ["C1"]},
    {"id": "X7", "name": "Short", "capabilityIds": ["C1", "C2"]}
]"#;

const SETTINGS: CheckSettings = CheckSettings {
    limit: 15,
    parallel: false,
};

fn notes_config() -> Config {
    let mut notes = DatasetConfig::new("notes", "data/notes.json");
    notes.rules.push(RuleSpec::new(CheckSpec::ThinContent {
        fields: vec![ThinField {
            field: "body".to_string(),
            min_length: 20,
        }],
    }));
    let mut config = Config::default();
    config.datasets.push(notes);
    config
        .datasets
        .push(DatasetConfig::new("metrics", "data/metrics.json").with_preset("metrics"));
    config
}

#[test]
fn file_presets_are_inferred_from_names() {
    let files = [
        PathBuf::from("data/metrics.json"),
        PathBuf::from("x/rubric-anchors.json"),
    ];
    let datasets = file_datasets(&files, None).unwrap();

    assert_eq!(datasets[0].name, "metrics");
    assert_eq!(datasets[0].id_field, "id");
    assert_eq!(datasets[1].name, "rubric-anchors");
    assert_eq!(datasets[1].id_field, "anchorId");
    assert_eq!(datasets[1].rules[0].kind(), RuleKind::IdPattern);
}

#[test]
fn explicit_preset_applies_to_any_file() {
    let datasets = file_datasets(&[PathBuf::from("notes.json")], Some("observables")).unwrap();
    assert_eq!(datasets[0].name, "notes");
    assert!(datasets[0].rules.iter().any(|r| r.kind() == RuleKind::Sequence));
}

#[test]
fn file_without_preset_is_an_error() {
    let err = file_datasets(&[PathBuf::from("data/notes.json")], None).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("No preset for data/notes.json"));
    assert!(message.contains("metrics, observables, rubric-anchors"));
}

#[test]
fn configured_datasets_keep_order_and_filter() {
    let config = notes_config();

    let all = configured_datasets(&config, &[], None).unwrap();
    let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["notes", "metrics"]);

    let only = configured_datasets(&config, &["metrics".to_string()], None).unwrap();
    assert_eq!(only.len(), 1);
    assert_eq!(only[0].name, "metrics");
}

#[test]
fn relative_paths_follow_the_config_file() {
    let datasets = configured_datasets(&notes_config(), &[], Some(Path::new("/repo"))).unwrap();
    assert_eq!(datasets[0].path, PathBuf::from("/repo/data/notes.json"));
}

#[test]
fn unknown_dataset_filter_is_an_error() {
    let err = configured_datasets(&notes_config(), &["glossary".to_string()], None).unwrap_err();
    assert!(err.to_string().contains("Unknown dataset 'glossary'. Configured datasets: notes, metrics"));
}

#[test]
fn nothing_to_check_is_an_error() {
    let err = configured_datasets(&Config::default(), &[], None).unwrap_err();
    assert!(err.to_string().contains("No datasets to check"));
}

#[test]
fn invalid_config_is_rejected_before_checking() {
    let mut config = notes_config();
    config.datasets[0].rules.push(RuleSpec::new(CheckSpec::IdPattern {
        patterns: vec!["(".to_string()],
    }));
    assert!(configured_datasets(&config, &[], None).is_err());
}

#[test]
fn checks_each_dataset_with_its_rule_table() {
    let fs = MockFileSystem::new()
        .with_file("data/metrics.json", METRICS)
        .with_file("data/notes.json", r#"[{"id": "n1", "body": "too short"}]"#);
    let datasets = configured_datasets(&notes_config(), &[], None).unwrap();

    let run = check_datasets(&fs, &datasets, SETTINGS);

    assert_eq!(run.failed, 0);
    assert_eq!(run.summaries.len(), 2);

    let notes = &run.summaries[0];
    assert_eq!(notes.title, "NOTES ANALYSIS");
    assert_eq!(notes.sections.len(), 1);
    assert_eq!(notes.totals.findings, 1);

    let metrics = &run.summaries[1];
    assert_eq!(metrics.records, 2);
    assert_eq!(metrics.sections.len(), datasets[1].rules.len());
    assert!(metrics.has_findings_at(Severity::Error));
}

#[test]
fn failed_dataset_does_not_stop_the_others() {
    let fs = MockFileSystem::new().with_file("data/metrics.json", METRICS);
    let datasets = configured_datasets(&notes_config(), &[], None).unwrap();

    let run = check_datasets(&fs, &datasets, SETTINGS);

    assert_eq!(run.failed, 1);
    assert_eq!(run.summaries.len(), 1);
    assert_eq!(run.summaries[0].dataset, "metrics");
    assert_eq!(run.exit_code(None), EXIT_CONFIG_ERROR);
}

#[test]
fn empty_dataset_fails_when_records_are_required() {
    let fs = MockFileSystem::new().with_file("data/metrics.json", "[]");
    let datasets = file_datasets(&[PathBuf::from("data/metrics.json")], None).unwrap();

    let run = check_datasets(&fs, &datasets, SETTINGS);

    assert_eq!(run.failed, 1);
}

#[test]
fn fail_on_is_opt_in() {
    let fs = MockFileSystem::new().with_file("data/metrics.json", METRICS);
    let datasets = file_datasets(&[PathBuf::from("data/metrics.json")], None).unwrap();

    let run = check_datasets(&fs, &datasets, SETTINGS);

    assert_eq!(run.exit_code(None), EXIT_SUCCESS);
    assert_eq!(run.exit_code(Some(Severity::Error)), EXIT_FINDINGS);
    assert_eq!(run.exit_code(Some(Severity::Info)), EXIT_FINDINGS);
}

#[test]
fn warnings_do_not_meet_error_threshold() {
    let fs = MockFileSystem::new().with_file("data/notes.json", r#"[{"id": "n1", "body": "too short"}]"#);
    let datasets = configured_datasets(&notes_config(), &["notes".to_string()], None).unwrap();

    let run = check_datasets(&fs, &datasets, SETTINGS);

    assert_eq!(run.exit_code(Some(Severity::Error)), EXIT_SUCCESS);
    assert_eq!(run.exit_code(Some(Severity::Warning)), EXIT_FINDINGS);
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let fs = MockFileSystem::new().with_file("data/metrics.json", METRICS);
    let datasets = file_datasets(&[PathBuf::from("data/metrics.json")], None).unwrap();

    let sequential = check_datasets(&fs, &datasets, SETTINGS);
    let parallel = check_datasets(
        &fs,
        &datasets,
        CheckSettings {
            limit: 15,
            parallel: true,
        },
    );

    assert_eq!(sequential.summaries, parallel.summaries);
}
