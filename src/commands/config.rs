use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigOutputFormat};
use crate::config::{FileConfigLoader, LoadResult, validate_config_semantics};
use crate::filesystem::RealFileSystem;
use crate::{ContentGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_config, report_error};

#[must_use]
pub fn run_config(args: &crate::cli::ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(ContentGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config = FileConfigLoader::<RealFileSystem>::parse_config(&content)?;

    validate_config_semantics(&config)?;

    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    cli: &Cli,
) -> Result<String> {
    let loaded = load_config(config_path, cli.no_config)?;
    format_config(&loaded, format)
}

pub(crate) fn format_config(loaded: &LoadResult, format: ConfigOutputFormat) -> Result<String> {
    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => {
            let source = loaded
                .source
                .as_deref()
                .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
            let body = toml::to_string_pretty(&loaded.config)?;
            Ok(format!("# Effective configuration ({source})\n{body}"))
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
