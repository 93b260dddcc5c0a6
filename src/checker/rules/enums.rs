use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::checker::{Finding, FindingCategory, Observation, Rule, RuleKind, RuleOutput};
use crate::dataset::{FieldValue, Record};

/// Order in which observed enum values are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueOrder {
    #[default]
    FirstSeen,
    Sorted,
}

/// Collects the distinct values observed for closed-set fields.
#[derive(Debug, Clone)]
pub struct EnumValuesRule {
    fields: Vec<String>,
    order: ValueOrder,
    allowed: IndexMap<String, Vec<String>>,
}

impl EnumValuesRule {
    #[must_use]
    pub fn new(fields: Vec<String>, order: ValueOrder) -> Self {
        Self {
            fields,
            order,
            allowed: IndexMap::new(),
        }
    }

    /// Values outside `allowed[field]` become `enum-inconsistency` findings.
    #[must_use]
    pub fn with_allowed(mut self, allowed: IndexMap<String, Vec<String>>) -> Self {
        self.allowed = allowed;
        self
    }

    fn observe<'a>(
        &self,
        records: &'a [Record],
        field: &str,
        output: &mut RuleOutput,
        skipped: &mut HashSet<usize>,
    ) -> IndexSet<&'a str> {
        let allowed = self.allowed.get(field);
        let mut values = IndexSet::new();

        for (index, record) in records.iter().enumerate() {
            let observed: Vec<&str> = match record.field(field) {
                FieldValue::Absent | FieldValue::Text("") => continue,
                FieldValue::Text(s) => vec![s],
                FieldValue::Tags(items) => items.iter().filter_map(serde_json::Value::as_str).collect(),
                FieldValue::Number(_) | FieldValue::Other => {
                    if skipped.insert(index) {
                        output.skip(self.kind(), &record.skip(field));
                    }
                    continue;
                }
            };

            for value in observed {
                if let Some(allowed) = allowed
                    && !allowed.iter().any(|a| a == value)
                {
                    output.findings.push(
                        Finding::new(FindingCategory::EnumInconsistency, record.id())
                            .with_field(field)
                            .with_subject(value)
                            .with_context(format!("expected one of: {}", allowed.join(", "))),
                    );
                }
                values.insert(value);
            }
        }
        values
    }
}

impl Rule for EnumValuesRule {
    fn kind(&self) -> RuleKind {
        RuleKind::EnumValues
    }

    fn evaluate(&self, records: &[Record]) -> RuleOutput {
        let mut output = RuleOutput::default();
        let mut skipped = HashSet::new();

        for field in &self.fields {
            let observed = self.observe(records, field, &mut output, &mut skipped);
            let mut values: Vec<String> = observed.into_iter().map(str::to_string).collect();
            if self.order == ValueOrder::Sorted {
                values.sort();
            }
            output.observations.push(Observation::EnumValues {
                field: field.clone(),
                values,
            });
        }
        output
    }
}
