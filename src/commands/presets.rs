use std::fmt::Write;

use crate::config::{AVAILABLE_PRESETS, load_preset};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::report_error;

#[must_use]
pub fn run_presets() -> i32 {
    match format_presets() {
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

/// One block per built-in preset listing its rules in run order.
///
/// # Errors
/// Returns an error if a built-in preset fails to parse.
pub fn format_presets() -> Result<String> {
    let mut out = String::new();
    for (i, name) in AVAILABLE_PRESETS.iter().enumerate() {
        let preset = load_preset(name)?;
        if i > 0 {
            writeln!(out).ok();
        }
        writeln!(out, "{name} - {}", preset.description).ok();
        writeln!(out, "  id field: {}", preset.id_field).ok();
        for (n, rule) in preset.rules.iter().enumerate() {
            let kind = rule.kind();
            let title = rule.title.as_deref().unwrap_or(kind.default_title());
            writeln!(out, "  {}. {title} ({kind})", n + 1).ok();
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
