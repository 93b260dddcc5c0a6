use std::path::{Path, PathBuf};

use crate::checker::{RuleEngine, Severity, build_rule};
use crate::cli::{CheckArgs, Cli};
use crate::config::{
    AVAILABLE_PRESETS, Config, DatasetConfig, ResolvedDataset, preset_for_path,
    validate_config_semantics,
};
use crate::dataset::{LoadOptions, load_dataset};
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::output::reporter;
use crate::stats::AnalysisSummary;
use crate::{ContentGuardError, EXIT_CONFIG_ERROR, EXIT_FINDINGS, EXIT_SUCCESS, Result};

use super::context::{
    color_choice_to_mode, error_chain, load_config, report_error, write_output,
};

/// Run-wide settings shared by every dataset.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CheckSettings {
    pub limit: usize,
    pub parallel: bool,
}

/// Summaries of the datasets that loaded, plus whether any did not.
#[derive(Debug, Default)]
pub(crate) struct CheckRun {
    pub summaries: Vec<AnalysisSummary>,
    pub failed: usize,
}

impl CheckRun {
    /// `2` when a dataset failed, `1` when `fail_on` is met, `0` otherwise.
    #[must_use]
    pub fn exit_code(&self, fail_on: Option<Severity>) -> i32 {
        if self.failed > 0 {
            return EXIT_CONFIG_ERROR;
        }
        match fail_on {
            Some(threshold) if self.summaries.iter().any(|s| s.has_findings_at(threshold)) => {
                EXIT_FINDINGS
            }
            _ => EXIT_SUCCESS,
        }
    }
}

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Checks every selected dataset and writes one report.
///
/// # Errors
/// Returns an error for configuration problems. Dataset load failures are
/// reported on stderr and turn into exit code 2 after the other datasets ran.
pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    let config = loaded.config;
    let base_dir = loaded
        .source
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf);

    // 2. Settings: CLI wins over config
    let settings = CheckSettings {
        limit: args.limit.unwrap_or(config.limit),
        parallel: args.parallel || config.parallel,
    };
    if settings.limit == 0 {
        return Err(ContentGuardError::Config(
            "--limit must be at least 1".to_string(),
        ));
    }

    // 3. Pick datasets
    let datasets = if args.files.is_empty() {
        configured_datasets(&config, &args.datasets, base_dir.as_deref())?
    } else {
        file_datasets(&args.files, args.preset.as_deref())?
    };

    // 4. Check
    let run = check_datasets(&RealFileSystem, &datasets, settings);

    // 5. Report
    let output = reporter(args.format, color_choice_to_mode(cli.color)).format(&run.summaries)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(run.exit_code(args.fail_on.or(config.fail_on)))
}

/// Datasets named on the command line, each with an explicit or inferred preset.
pub(crate) fn file_datasets(files: &[PathBuf], preset: Option<&str>) -> Result<Vec<ResolvedDataset>> {
    files
        .iter()
        .map(|file| {
            let preset = preset.or_else(|| preset_for_path(file)).ok_or_else(|| {
                ContentGuardError::Config(format!(
                    "No preset for {}: pass --preset or name the file after one of: {}",
                    file.display(),
                    AVAILABLE_PRESETS.join(", ")
                ))
            })?;
            let name = file
                .file_stem()
                .map_or_else(|| preset.to_string(), |s| s.to_string_lossy().into_owned());
            DatasetConfig::new(name, file).with_preset(preset).resolve()
        })
        .collect()
}

/// `[[dataset]]` entries, optionally filtered by name.
///
/// Relative dataset paths are taken from the config file's directory.
pub(crate) fn configured_datasets(
    config: &Config,
    only: &[String],
    base_dir: Option<&Path>,
) -> Result<Vec<ResolvedDataset>> {
    validate_config_semantics(config)?;

    if config.datasets.is_empty() {
        return Err(ContentGuardError::Config(
            "No datasets to check: pass dataset files or add [[dataset]] entries to the config"
                .to_string(),
        ));
    }
    if let Some(unknown) = only.iter().find(|name| config.dataset(name).is_none()) {
        let names: Vec<&str> = config.datasets.iter().map(|d| d.name.as_str()).collect();
        return Err(ContentGuardError::Config(format!(
            "Unknown dataset '{unknown}'. Configured datasets: {}",
            names.join(", ")
        )));
    }

    config
        .datasets
        .iter()
        .filter(|d| only.is_empty() || only.contains(&d.name))
        .map(|d| {
            let mut resolved = d.resolve()?;
            if let Some(base) = base_dir
                && resolved.path.is_relative()
            {
                resolved.path = base.join(&resolved.path);
            }
            Ok(resolved)
        })
        .collect()
}

/// Runs each dataset's rule table. A dataset that fails stops only itself.
pub(crate) fn check_datasets<F: FileSystem>(
    fs: &F,
    datasets: &[ResolvedDataset],
    settings: CheckSettings,
) -> CheckRun {
    let mut run = CheckRun::default();
    for dataset in datasets {
        match check_dataset(fs, dataset, settings) {
            Ok(summary) => run.summaries.push(summary),
            Err(e) => {
                eprintln!("Error: dataset '{}': {}", dataset.name, error_chain(&e));
                tracing::warn!(
                    dataset = %dataset.name,
                    error_type = e.error_type(),
                    "dataset skipped, continuing with the rest"
                );
                run.failed += 1;
            }
        }
    }
    run
}

fn check_dataset<F: FileSystem>(
    fs: &F,
    dataset: &ResolvedDataset,
    settings: CheckSettings,
) -> Result<AnalysisSummary> {
    let engine = dataset
        .rules
        .iter()
        .map(build_rule)
        .try_fold(RuleEngine::new().with_parallel(settings.parallel), |engine, rule| {
            rule.map(|r| engine.with_rule(r))
        })?;

    let loaded = load_dataset(
        fs,
        LoadOptions {
            name: &dataset.name,
            path: &dataset.path,
            id_field: &dataset.id_field,
            require_records: dataset.require_records,
        },
    )?;

    let outcomes = engine.run(&loaded.records);
    Ok(AnalysisSummary::build(&loaded, outcomes, settings.limit))
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
