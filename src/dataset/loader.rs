use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;
use crate::filesystem::FileSystem;

use super::{Dataset, Record};

/// Where and how to read one dataset.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions<'a> {
    pub name: &'a str,
    pub path: &'a Path,
    pub id_field: &'a str,
    /// Fail with [`LoadError::Empty`] on an empty array.
    pub require_records: bool,
}

/// Reads a JSON array of record objects.
///
/// # Errors
/// Returns [`LoadError`] when the file is missing or unreadable, not JSON, not an
/// array of objects, when a record has no string id, or when it is empty and
/// records are required.
pub fn load_dataset<F: FileSystem>(fs: &F, options: LoadOptions<'_>) -> Result<Dataset, LoadError> {
    let path = options.path;
    let content = fs.read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(&content, path, options.id_field)?;

    if records.is_empty() && options.require_records {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    tracing::info!(
        dataset = options.name,
        path = %path.display(),
        records = records.len(),
        "loaded dataset"
    );

    Ok(Dataset {
        name: options.name.to_string(),
        path: path.to_path_buf(),
        records,
    })
}

/// Parses dataset content without touching the filesystem.
///
/// # Errors
/// See [`load_dataset`].
pub fn parse_records(content: &str, path: &Path, id_field: &str) -> Result<Vec<Record>, LoadError> {
    let value: Value = serde_json::from_str(content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(LoadError::Shape {
                path: path.to_path_buf(),
                reason: format!("top level is {}", json_kind(&other)),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let fields = match item {
                Value::Object(fields) => fields,
                other => {
                    return Err(LoadError::Shape {
                        path: path.to_path_buf(),
                        reason: format!("record #{index} is {}", json_kind(&other)),
                    });
                }
            };
            let Some(id) = fields
                .get(id_field)
                .and_then(Value::as_str)
                .map(str::to_string)
            else {
                return Err(LoadError::MissingId {
                    path: path.to_path_buf(),
                    index,
                    id_field: id_field.to_string(),
                });
            };
            Ok(Record::new(id, fields))
        })
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
