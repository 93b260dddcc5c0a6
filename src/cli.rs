use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::checker::Severity;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    /// TOML, as it would be written to a config file
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "content-guard")]
#[command(author, version, about = "Content-quality checks for structured competency datasets")]
#[command(long_about = "Loads JSON record collections (metrics, observables, rubric anchors),\n\
    runs an ordered table of rules over them and prints one report per dataset.\n\n\
    Exit codes:\n  \
    0 - Success (findings alone do not fail without --fail-on)\n  \
    1 - A finding at or above the --fail-on severity exists\n  \
    2 - Configuration error or a dataset failed to load")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check dataset files against their rule tables
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),

    /// List built-in presets and their rules
    Presets,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Dataset files to check; configured datasets are used when omitted
    pub files: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Preset for the given files (inferred from the file name otherwise)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Only check these configured datasets (can be repeated)
    #[arg(short, long = "dataset", value_name = "NAME")]
    pub datasets: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit 1 when a finding at or above this severity exists [possible values: info, warning, error]
    #[arg(long)]
    pub fail_on: Option<Severity>,

    /// Maximum findings listed per section (overrides config)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Evaluate rules in parallel
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".content-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and rule tables
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".content-guard.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
