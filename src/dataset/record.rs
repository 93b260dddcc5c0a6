use indexmap::IndexSet;
use serde_json::{Map, Value};

/// Shape of a single named field as seen by the rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Missing key or explicit `null`.
    Absent,
    Text(&'a str),
    /// Array whose elements are all strings (enumerated tags, capability references).
    Tags(&'a [Value]),
    Number(f64),
    /// Anything a text rule cannot read (objects, booleans, mixed arrays).
    Other,
}

/// Marker returned when a rule cannot evaluate a field of a record.
///
/// Rules treat it as "skip this record", never as a run failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skip {
    pub record_id: String,
    pub field: String,
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "record {} has unexpected shape in field '{}'",
            self.record_id, self.field
        )
    }
}

/// One entry of a dataset: a metric, an observable or a rubric anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: String,
    fields: Map<String, Value>,
}

impl Record {
    #[must_use]
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn field(&self, name: &str) -> FieldValue<'_> {
        match self.fields.get(name) {
            None | Some(Value::Null) => FieldValue::Absent,
            Some(Value::String(s)) => FieldValue::Text(s),
            Some(Value::Number(n)) => n.as_f64().map_or(FieldValue::Other, FieldValue::Number),
            Some(Value::Array(items)) if items.iter().all(Value::is_string) => {
                FieldValue::Tags(items)
            }
            Some(_) => FieldValue::Other,
        }
    }

    /// Text of a field, `""` when absent.
    ///
    /// # Errors
    /// Returns [`Skip`] when the field holds something other than a string.
    pub fn text(&self, name: &str) -> Result<&str, Skip> {
        match self.field(name) {
            FieldValue::Absent => Ok(""),
            FieldValue::Text(s) => Ok(s),
            _ => Err(self.skip(name)),
        }
    }

    /// Yields each requested field's text, `""` for absent ones.
    ///
    /// # Errors
    /// Returns [`Skip`] on the first field with an unexpected shape.
    pub fn texts<'a, S: AsRef<str>>(
        &'a self,
        names: &'a [S],
    ) -> Result<Vec<(&'a str, &'a str)>, Skip> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.text(name).map(|text| (name, text))
            })
            .collect()
    }

    /// Distinct string values of a string-or-array field, in first-seen order.
    ///
    /// # Errors
    /// Returns [`Skip`] when the field is neither a string nor an array of strings.
    pub fn references(&self, name: &str) -> Result<IndexSet<&str>, Skip> {
        match self.field(name) {
            FieldValue::Absent => Ok(IndexSet::new()),
            FieldValue::Text(s) => Ok(std::iter::once(s).collect()),
            FieldValue::Tags(items) => Ok(items.iter().filter_map(Value::as_str).collect()),
            FieldValue::Number(_) | FieldValue::Other => Err(self.skip(name)),
        }
    }

    /// Numeric value of a field; `None` when absent.
    ///
    /// # Errors
    /// Returns [`Skip`] when the field is present but not a number.
    pub fn number(&self, name: &str) -> Result<Option<f64>, Skip> {
        match self.field(name) {
            FieldValue::Absent => Ok(None),
            FieldValue::Number(n) => Ok(Some(n)),
            _ => Err(self.skip(name)),
        }
    }

    /// Builds the [`Skip`] marker for one of this record's fields.
    #[must_use]
    pub fn skip(&self, field: &str) -> Skip {
        Skip {
            record_id: self.id.clone(),
            field: field.to_string(),
        }
    }
}
