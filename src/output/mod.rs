mod json;
mod text;

pub use json::JsonReporter;
pub use text::TextReporter;

use crate::error::Result;
use crate::stats::AnalysisSummary;

/// Trait for rendering analysis summaries into an output format.
pub trait ReportFormatter {
    /// Render one report covering every summary, in order.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, summaries: &[AnalysisSummary]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }
}

/// Builds the reporter for `format`.
#[must_use]
pub fn reporter(format: OutputFormat, color: ColorMode) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextReporter::new(color)),
        OutputFormat::Json => Box::new(JsonReporter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
