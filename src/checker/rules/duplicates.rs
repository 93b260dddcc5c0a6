use std::collections::BTreeSet;

use crate::checker::{Finding, FindingCategory, Rule, RuleKind, RuleOutput};
use crate::dataset::Record;

/// Flags record pairs whose text in one field shares most of its words.
#[derive(Debug, Clone)]
pub struct NearDuplicateRule {
    field: String,
    threshold: f64,
}

impl NearDuplicateRule {
    #[must_use]
    pub fn new(field: impl Into<String>, threshold: f64) -> Self {
        Self {
            field: field.into(),
            threshold,
        }
    }
}

/// Lowercased words with punctuation removed.
fn word_set(text: &str) -> BTreeSet<String> {
    text.split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

impl Rule for NearDuplicateRule {
    fn kind(&self) -> RuleKind {
        RuleKind::NearDuplicates
    }

    fn evaluate(&self, records: &[Record]) -> RuleOutput {
        let mut output = RuleOutput::default();
        let mut texts = Vec::with_capacity(records.len());
        for record in records {
            match record.text(&self.field) {
                Ok(text) => {
                    let words = word_set(text);
                    if !words.is_empty() {
                        texts.push((record.id(), text, words));
                    }
                }
                Err(skip) => output.skip(self.kind(), &skip),
            }
        }

        for (i, (id_a, text_a, words_a)) in texts.iter().enumerate() {
            for (id_b, _, words_b) in &texts[i + 1..] {
                let score = jaccard(words_a, words_b);
                if score > self.threshold {
                    output.findings.push(
                        Finding::new(FindingCategory::NearDuplicate, *id_a)
                            .with_field(&self.field)
                            .with_subject(*id_b)
                            .with_context(format!("{:.0}% similar: {text_a}", score * 100.0)),
                    );
                }
            }
        }
        output
    }
}

/// Jaccard similarity of two word sets; identical sets score 1.0.
#[allow(clippy::cast_precision_loss)]
fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a == b {
        return 1.0;
    }
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}
