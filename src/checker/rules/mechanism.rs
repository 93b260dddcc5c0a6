use regex::Regex;

use crate::checker::snippet::context_window;
use crate::checker::{Finding, FindingCategory, Rule, RuleKind, RuleOutput};
use crate::dataset::Record;

/// Characters of the field shown in a finding.
const PREVIEW_CHARS: usize = 120;

/// Flags text that names no concrete mechanism, or opens with a generic verb phrase.
///
/// A text counts as concrete when it contains a digit or matches `concrete`.
#[derive(Debug, Clone)]
pub struct MechanismRule {
    fields: Vec<String>,
    concrete: Regex,
    vague_openers: Vec<Regex>,
}

impl MechanismRule {
    #[must_use]
    pub const fn new(fields: Vec<String>, concrete: Regex, vague_openers: Vec<Regex>) -> Self {
        Self {
            fields,
            concrete,
            vague_openers,
        }
    }

    /// Why `text` lacks a mechanism, if it does.
    #[must_use]
    pub fn problem(&self, text: &str) -> Option<&'static str> {
        let has_mechanism =
            text.chars().any(|c| c.is_ascii_digit()) || self.concrete.is_match(text);
        if !has_mechanism {
            Some("no concrete mechanism")
        } else if self.vague_openers.iter().any(|re| re.is_match(text)) {
            Some("generic phrasing")
        } else {
            None
        }
    }
}

impl Rule for MechanismRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Mechanism
    }

    fn evaluate(&self, records: &[Record]) -> RuleOutput {
        let mut output = RuleOutput::default();
        for record in records {
            let texts = match record.texts(&self.fields) {
                Ok(texts) => texts,
                Err(skip) => {
                    output.skip(self.kind(), &skip);
                    continue;
                }
            };
            for (field, text) in texts {
                if text.trim().is_empty() {
                    continue;
                }
                if let Some(problem) = self.problem(text) {
                    output.findings.push(
                        Finding::new(FindingCategory::MissingMechanism, record.id())
                            .with_field(field)
                            .with_subject(problem)
                            .with_context(context_window(text, 0, 0, PREVIEW_CHARS)),
                    );
                }
            }
        }
        output
    }
}
