use regex::Regex;

use crate::checker::snippet::{context_window, phrase_regex, word_regex};
use crate::checker::{Finding, FindingCategory, Rule, RuleKind, RuleOutput};
use crate::dataset::Record;
use crate::error::Result;

/// Reports the first occurrence of each configured term per record field.
///
/// Backs both `vague-language` (single trigger words) and `outcome-phrases`
/// (multi-word phrases describing reputation rather than behavior).
#[derive(Debug, Clone)]
pub struct TermRule {
    kind: RuleKind,
    category: FindingCategory,
    fields: Vec<String>,
    terms: Vec<(String, Regex)>,
    window: usize,
    exempt: Option<Regex>,
}

impl TermRule {
    /// # Errors
    /// Returns an error if a word cannot be compiled into a matcher.
    pub fn vague_words(fields: Vec<String>, words: &[String], window: usize) -> Result<Self> {
        let terms = words
            .iter()
            .map(|w| word_regex(w).map(|re| (w.clone(), re)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            kind: RuleKind::VagueLanguage,
            category: FindingCategory::VagueLanguage,
            fields,
            terms,
            window,
            exempt: None,
        })
    }

    /// # Errors
    /// Returns an error if a phrase cannot be compiled into a matcher.
    pub fn outcome_phrases(fields: Vec<String>, phrases: &[String], window: usize) -> Result<Self> {
        let terms = phrases
            .iter()
            .map(|p| phrase_regex(p).map(|re| (p.clone(), re)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            kind: RuleKind::OutcomePhrases,
            category: FindingCategory::OutcomeLanguage,
            fields,
            terms,
            window,
            exempt: None,
        })
    }

    /// Matches inside a sentence that also matches `exempt` are ignored.
    #[must_use]
    pub fn with_sentence_exemption(mut self, exempt: Option<Regex>) -> Self {
        self.exempt = exempt;
        self
    }

    fn is_exempt(&self, text: &str, m: &regex::Match<'_>) -> bool {
        self.exempt
            .as_ref()
            .is_some_and(|exempt| exempt.is_match(sentence_around(text, m.start(), m.end())))
    }

    fn scan_field(&self, record: &Record, field: &str, text: &str, findings: &mut Vec<Finding>) {
        for (term, re) in &self.terms {
            if let Some(m) = re.find_iter(text).find(|m| !self.is_exempt(text, m)) {
                let context = context_window(text, m.start(), m.len(), self.window);
                findings.push(
                    Finding::new(self.category, record.id())
                        .with_field(field)
                        .with_subject(term)
                        .with_context(context),
                );
            }
        }
    }
}

impl Rule for TermRule {
    fn kind(&self) -> RuleKind {
        self.kind
    }

    fn evaluate(&self, records: &[Record]) -> RuleOutput {
        let mut output = RuleOutput::default();
        for record in records {
            match record.texts(&self.fields) {
                Ok(texts) => {
                    for (field, text) in texts {
                        self.scan_field(record, field, text, &mut output.findings);
                    }
                }
                Err(skip) => output.skip(self.kind, &skip),
            }
        }
        output
    }
}

/// The sentence containing `start..end`, split on terminal punctuation.
fn sentence_around(text: &str, start: usize, end: usize) -> &str {
    const TERMINALS: [char; 3] = ['.', '!', '?'];
    let from = text[..start].rfind(TERMINALS).map_or(0, |i| i + 1);
    let to = text[end..].find(TERMINALS).map_or(text.len(), |i| end + i);
    &text[from..to]
}
