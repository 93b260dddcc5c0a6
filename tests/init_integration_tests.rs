//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    content_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = fixture.read(".content-guard.toml");
    assert!(content.contains("version = \"1\""));
    assert!(content.contains("preset = \"metrics\""));
}

#[test]
fn init_creates_config_at_custom_path() {
    let fixture = TestFixture::new();

    content_guard!()
        .current_dir(fixture.path())
        .args(["init", "--output", "guard.toml"])
        .assert()
        .success();

    assert!(fixture.path().join("guard.toml").exists());
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    content_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fixture.read(".content-guard.toml"), "# existing config\n");
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    content_guard!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    assert!(fixture.read(".content-guard.toml").contains("[[dataset]]"));
}

#[test]
fn generated_config_validates() {
    let fixture = TestFixture::new();

    content_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();

    content_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}
