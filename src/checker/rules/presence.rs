use crate::checker::{Finding, FindingCategory, Observation, Rule, RuleKind, RuleOutput};
use crate::dataset::Record;

/// Requires every record to carry non-blank text in each listed field.
#[derive(Debug, Clone)]
pub struct RequiredFieldsRule {
    fields: Vec<String>,
}

impl RequiredFieldsRule {
    #[must_use]
    pub const fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }
}

impl Rule for RequiredFieldsRule {
    fn kind(&self) -> RuleKind {
        RuleKind::RequiredFields
    }

    fn evaluate(&self, records: &[Record]) -> RuleOutput {
        let mut output = RuleOutput::default();
        let mut missing = vec![0; self.fields.len()];
        let mut evaluated = 0;

        for record in records {
            let texts = match record.texts(&self.fields) {
                Ok(texts) => texts,
                Err(skip) => {
                    output.skip(self.kind(), &skip);
                    continue;
                }
            };
            evaluated += 1;

            for (index, (field, text)) in texts.into_iter().enumerate() {
                if text.trim().is_empty() {
                    missing[index] += 1;
                    output.findings.push(
                        Finding::new(FindingCategory::MissingField, record.id())
                            .with_field(field)
                            .with_context("absent or empty"),
                    );
                }
            }
        }

        output.observations = self
            .fields
            .iter()
            .zip(missing)
            .map(|(field, missing)| Observation::Missing {
                field: field.clone(),
                missing,
                total: evaluated,
            })
            .collect();
        output
    }
}
