use indexmap::IndexMap;

use crate::checker::{
    CategoryCount, CoverageTable, Finding, FindingCategory, Observation, Rule, RuleKind,
    RuleOutput,
};
use crate::dataset::Record;
use crate::stats::Distribution;

/// Counts how many distinct records reference each declared category.
#[derive(Debug, Clone)]
pub struct CoverageRule {
    field: String,
    categories: Vec<String>,
    min: usize,
    max: Option<usize>,
    list_below: usize,
}

impl CoverageRule {
    #[must_use]
    pub fn new(field: impl Into<String>, categories: Vec<String>, min: usize) -> Self {
        Self {
            field: field.into(),
            categories,
            min,
            max: None,
            list_below: 0,
        }
    }

    #[must_use]
    pub const fn with_max(mut self, max: Option<usize>) -> Self {
        self.max = max;
        self
    }

    #[must_use]
    pub const fn with_list_below(mut self, list_below: usize) -> Self {
        self.list_below = list_below;
        self
    }

    fn tally(&self, records: &[Record], output: &mut RuleOutput) -> IndexMap<String, Vec<String>> {
        let mut counts: IndexMap<String, Vec<String>> = self
            .categories
            .iter()
            .map(|c| (c.clone(), Vec::new()))
            .collect();

        for record in records {
            match record.references(&self.field) {
                Ok(refs) => {
                    for key in refs {
                        counts
                            .entry(key.to_string())
                            .or_default()
                            .push(record.id().to_string());
                    }
                }
                Err(skip) => output.skip(self.kind(), &skip),
            }
        }
        counts
    }

    fn gap_context(&self, count: usize) -> String {
        match self.max {
            Some(max) if count > max => format!("{count} records (max {max})"),
            _ => format!("{count} records (min {})", self.min),
        }
    }
}

impl Rule for CoverageRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Coverage
    }

    fn evaluate(&self, records: &[Record]) -> RuleOutput {
        let mut output = RuleOutput::default();
        let counts = self.tally(records, &mut output);

        let categories: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(key, record_ids)| CategoryCount {
                declared: self.categories.contains(&key),
                count: record_ids.len(),
                key,
                record_ids,
            })
            .collect();

        let declared_counts: Vec<usize> = categories
            .iter()
            .filter(|c| c.declared)
            .map(|c| c.count)
            .collect();

        let table = CoverageTable {
            field: self.field.clone(),
            min: self.min,
            max: self.max,
            list_below: self.list_below,
            distribution: Distribution::from_counts(&declared_counts),
            categories,
        };

        for category in table.declared() {
            if !table.is_within_bounds(category.count) {
                output.findings.push(
                    Finding::new(FindingCategory::CoverageGap, &category.key)
                        .with_field(&self.field)
                        .with_context(self.gap_context(category.count))
                        .with_length(category.count),
                );
            }
        }

        for category in table.undeclared() {
            for record_id in &category.record_ids {
                output.findings.push(
                    Finding::new(FindingCategory::UnknownReference, record_id)
                        .with_field(&self.field)
                        .with_subject(&category.key)
                        .with_context(format!("references undeclared '{}'", category.key)),
                );
            }
        }

        output.observations.push(Observation::Coverage(table));
        output
    }
}
