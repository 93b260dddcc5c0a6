#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the content-guard binary.
#[macro_export]
macro_rules! content_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("content-guard"))
    };
}

/// Metrics records: `3.2` is well-formed, `X7` breaks the id pattern and
/// `1.1` appears twice.
pub const METRICS_JSON: &str = r#"[
  {
    "id": "3.2",
    "name": "Delivery predictability",
    "capabilityIds": ["C1"],
    "measurementGuidance": "Compare committed and delivered story points for each sprint over a quarter."
  },
  {
    "id": "X7",
    "name": "Short",
    "capabilityIds": ["C1", "C2"],
    "measurementGuidance": "This is a good and effective approach."
  },
  {
    "id": "1.1",
    "name": "Review turnaround time",
    "capabilityIds": ["C2"],
    "measurementGuidance": "See metric 8.4 for details on measuring review latency per team."
  },
  {
    "id": "1.1",
    "name": "Review turnaround time again",
    "capabilityIds": ["C3"],
    "measurementGuidance": "Median hours between review request and first review, per repository."
  }
]"#;

/// Records that pass an id-pattern plus uniqueness rule table.
pub const CLEAN_NOTES_JSON: &str = r#"[
  {"id": "N-1", "body": "Quarterly planning notes for the platform team."},
  {"id": "N-2", "body": "Retrospective actions with owners and due dates."}
]"#;

pub const NOTES_CONFIG: &str = r#"
version = "1"

[[dataset]]
name = "notes"
path = "data/notes.json"

[[dataset.rules]]
kind = "id-pattern"
patterns = ['^N-\d+$']

[[dataset.rules]]
kind = "unique-ids"
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a local content-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".content-guard.toml", content);
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
