use indexmap::IndexMap;
use regex::Regex;

use crate::checker::{
    Finding, FindingCategory, GroupSum, Observation, Rule, RuleKind, RuleOutput,
};
use crate::dataset::{Record, Skip};
use crate::stats::natural_key;

/// Where a record's group key comes from.
#[derive(Debug, Clone)]
pub enum GroupBy {
    Field(String),
    /// The `group` capture of a pattern applied to the record id.
    IdPattern(Regex),
}

/// Sums a numeric weight per group and flags sums away from the target.
#[derive(Debug, Clone)]
pub struct WeightSumRule {
    group_by: GroupBy,
    weight_field: String,
    target: f64,
    tolerance: f64,
}

impl WeightSumRule {
    #[must_use]
    pub fn new(group_by: GroupBy, weight_field: impl Into<String>, target: f64, tolerance: f64) -> Self {
        Self {
            group_by,
            weight_field: weight_field.into(),
            target,
            tolerance,
        }
    }

    /// `Ok(None)` for records that belong to no group.
    fn group_of<'r>(&self, record: &'r Record) -> Result<Option<&'r str>, Skip> {
        match &self.group_by {
            GroupBy::Field(field) => record
                .text(field)
                .map(|group| Some(group).filter(|g| !g.is_empty())),
            GroupBy::IdPattern(pattern) => Ok(pattern
                .captures(record.id())
                .and_then(|caps| caps.name("group"))
                .map(|m| m.as_str())),
        }
    }
}

impl Rule for WeightSumRule {
    fn kind(&self) -> RuleKind {
        RuleKind::WeightSum
    }

    fn evaluate(&self, records: &[Record]) -> RuleOutput {
        let mut output = RuleOutput::default();
        let mut sums: IndexMap<String, f64> = IndexMap::new();

        for record in records {
            let group = match self.group_of(record) {
                Ok(Some(group)) => group,
                Ok(None) => continue,
                Err(skip) => {
                    output.skip(self.kind(), &skip);
                    continue;
                }
            };
            match record.number(&self.weight_field) {
                Ok(weight) => *sums.entry(group.to_string()).or_default() += weight.unwrap_or(0.0),
                Err(skip) => output.skip(self.kind(), &skip),
            }
        }

        sums.sort_by(|a, _, b, _| natural_key(a).cmp(&natural_key(b)));

        let groups: Vec<GroupSum> = sums
            .into_iter()
            .map(|(group, sum)| GroupSum {
                deviation: (sum - self.target).abs(),
                group,
                sum,
            })
            .collect();

        for g in groups.iter().filter(|g| g.deviation > self.tolerance) {
            output.findings.push(
                Finding::new(FindingCategory::WeightDeviation, &g.group)
                    .with_field(&self.weight_field)
                    .with_context(format!(
                        "sum {:.4} (deviation {:.4}, tolerance {})",
                        g.sum, g.deviation, self.tolerance
                    )),
            );
        }

        output.observations.push(Observation::WeightSums {
            field: self.weight_field.clone(),
            target: self.target,
            tolerance: self.tolerance,
            groups,
        });
        output
    }
}
