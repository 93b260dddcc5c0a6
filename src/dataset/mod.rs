mod loader;
mod record;

pub use loader::{LoadOptions, load_dataset, parse_records};
pub use record::{FieldValue, Record, Skip};

use std::path::PathBuf;

/// An ordered, read-only collection of records loaded from one file.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: String,
    pub path: PathBuf,
    pub records: Vec<Record>,
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
