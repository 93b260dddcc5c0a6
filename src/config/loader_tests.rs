use std::path::PathBuf;

use crate::filesystem::mock::MockFileSystem;

use super::*;

const SIMPLE: &str = r#"
version = "1"
limit = 7

[[dataset]]
name = "metrics"
path = "data/metrics.json"
preset = "metrics"
"#;

#[test]
fn defaults_without_any_config_file() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let result = loader.load().unwrap();
    assert_eq!(result.source, None);
    assert_eq!(result.config, Config::default());
}

#[test]
fn local_config_is_found_in_current_dir() {
    let fs = MockFileSystem::new().with_file("/project/.content-guard.toml", SIMPLE);
    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.source, Some(PathBuf::from("/project/.content-guard.toml")));
    assert_eq!(result.config.limit, 7);
    assert_eq!(result.config.datasets[0].name, "metrics");
}

#[test]
fn local_config_wins_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.content-guard.toml", "limit = 3")
        .with_file("/home/user/.config/content-guard/config.toml", "limit = 9");
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(result.config.limit, 3);
}

#[test]
fn user_config_is_the_fallback() {
    let fs = MockFileSystem::new().with_file("/home/user/.config/content-guard/config.toml", "limit = 9");
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(result.config.limit, 9);
    assert_eq!(
        result.source,
        Some(PathBuf::from("/home/user/.config/content-guard/config.toml"))
    );
}

#[test]
fn missing_config_dir_is_not_an_error() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(result.source, None);
}

#[test]
fn explicit_path_must_exist() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/elsewhere/guard.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config /elsewhere/guard.toml"));
}

#[test]
fn unsupported_version_is_rejected() {
    let err = FileConfigLoader::<RealFileSystem>::parse_config("version = \"2\"").unwrap_err();
    assert!(err.to_string().contains("Unsupported config version '2'"));
}

#[test]
fn missing_version_is_accepted() {
    let config = FileConfigLoader::<RealFileSystem>::parse_config("limit = 4").unwrap();
    assert_eq!(config.version, None);
    assert_eq!(config.limit, 4);
}

#[test]
fn invalid_toml_is_a_toml_error() {
    let err = FileConfigLoader::<RealFileSystem>::parse_config("limit = [").unwrap_err();
    assert_eq!(err.error_type(), "TOML");
}
