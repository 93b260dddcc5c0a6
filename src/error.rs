use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a dataset file into records. Fatal for that dataset only.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read dataset: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset is not valid JSON: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Dataset {path} must be an array of objects: {reason}")]
    Shape { path: PathBuf, reason: String },

    #[error("Record #{index} in {path} has no string '{id_field}' field")]
    MissingId {
        path: PathBuf,
        index: usize,
        id_field: String,
    },

    #[error("Dataset contains no records: {path}")]
    Empty { path: PathBuf },
}

#[derive(Error, Debug)]
pub enum ContentGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid regex pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ContentGuardError {
    /// Short label used when printing the error category.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Load(_) => "Load",
            Self::Io(_) => "IO",
            Self::TomlParse(_) | Self::TomlSerialize(_) => "TOML",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Builds an [`InvalidPattern`](Self::InvalidPattern) error from a failed regex compile.
    #[must_use]
    pub fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
