//! Record builders shared by the rule tests.

use serde_json::Value;

use crate::dataset::Record;

/// Builds a record from a JSON object literal; the id is read from `"id"`.
pub fn record(value: Value) -> Record {
    let Value::Object(fields) = value else {
        panic!("fixture must be an object");
    };
    let id = fields["id"].as_str().expect("fixture needs an id").to_string();
    Record::new(id, fields)
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
