use std::fs;

use crate::{ContentGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::report_error;

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ContentGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# content-guard configuration file
version = "1"

# Exit with code 1 when a finding at or above this severity exists
# (info, warning, error). Without it findings never fail the run.
# fail_on = "error"

# Maximum findings listed per report section (rules may set their own `limit`)
limit = 15

# Evaluate the rules of a dataset in parallel
parallel = false

# Each dataset runs its preset's rules first, then its own [[dataset.rules]].
# Relative paths are resolved from the directory of this file.

[[dataset]]
name = "metrics"
path = "src/data/metrics.json"
preset = "metrics"

[[dataset]]
name = "observables"
path = "src/data/observables.json"
preset = "observables"

[[dataset]]
name = "rubric-anchors"
path = "src/data/rubric-anchors.json"
preset = "rubric-anchors"
# id_field = "anchorId"
# require_records = true

# Extra rules for the dataset above
# [[dataset.rules]]
# kind = "thin-content"
# title = "SHORT L5 ANCHORS"
# severity = "info"
# limit = 10
# fields = [{ field = "level5Advanced", min_length = 80 }]

# [[dataset.rules]]
# kind = "enum-values"
# fields = ["capabilityId"]
# order = "sorted"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
