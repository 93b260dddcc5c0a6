use std::collections::HashSet;

use crate::checker::snippet::char_len;
use crate::checker::{Finding, FindingCategory, Observation, Rule, RuleKind, RuleOutput};
use crate::dataset::Record;

/// Flags non-empty text shorter than a per-field minimum.
///
/// Absent or blank values are not findings; they are tallied as "missing".
#[derive(Debug, Clone)]
pub struct ThinContentRule {
    fields: Vec<(String, usize)>,
}

impl ThinContentRule {
    /// `fields` pairs each field name with its minimum length in characters.
    #[must_use]
    pub const fn new(fields: Vec<(String, usize)>) -> Self {
        Self { fields }
    }
}

impl Rule for ThinContentRule {
    fn kind(&self) -> RuleKind {
        RuleKind::ThinContent
    }

    fn evaluate(&self, records: &[Record]) -> RuleOutput {
        let mut output = RuleOutput::default();
        // Positions, so a record failing several fields counts once.
        let mut skipped = HashSet::new();

        for (field, min_length) in &self.fields {
            let mut missing = 0;
            let mut evaluated = 0;

            for (index, record) in records.iter().enumerate() {
                let text = match record.text(field) {
                    Ok(text) => text,
                    Err(skip) => {
                        if skipped.insert(index) {
                            output.skip(self.kind(), &skip);
                        }
                        continue;
                    }
                };
                evaluated += 1;

                if text.trim().is_empty() {
                    missing += 1;
                    continue;
                }

                let length = char_len(text);
                if length < *min_length {
                    output.findings.push(
                        Finding::new(FindingCategory::ThinContent, record.id())
                            .with_field(field)
                            .with_subject(format!("< {min_length} chars"))
                            .with_context(text)
                            .with_length(length),
                    );
                }
            }

            output.observations.push(Observation::Missing {
                field: field.clone(),
                missing,
                total: evaluated,
            });
        }
        output
    }
}
