use serde::Serialize;

use crate::stats::Distribution;

/// Informational output of a rule. Never counted as a finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Observation {
    Coverage(CoverageTable),
    EnumValues { field: String, values: Vec<String> },
    Missing {
        field: String,
        missing: usize,
        total: usize,
    },
    WeightSums {
        field: String,
        target: f64,
        tolerance: f64,
        groups: Vec<GroupSum>,
    },
    Sequence { groups: Vec<SequenceGroup> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageTable {
    pub field: String,
    pub min: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    /// Categories with fewer references than this also list their record ids.
    pub list_below: usize,
    pub categories: Vec<CategoryCount>,
    /// Computed over declared categories only.
    pub distribution: Distribution,
}

impl CoverageTable {
    #[must_use]
    pub fn is_within_bounds(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }

    pub fn declared(&self) -> impl Iterator<Item = &CategoryCount> {
        self.categories.iter().filter(|c| c.declared)
    }

    pub fn undeclared(&self) -> impl Iterator<Item = &CategoryCount> {
        self.categories.iter().filter(|c| !c.declared)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub key: String,
    pub count: usize,
    pub record_ids: Vec<String>,
    /// `false` for keys referenced by records but missing from the declared set.
    pub declared: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSum {
    pub group: String,
    pub sum: f64,
    pub deviation: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceGroup {
    pub group: String,
    pub expected: usize,
    pub found: usize,
    pub gaps: Vec<usize>,
}

impl SequenceGroup {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.expected == self.found && self.gaps.is_empty()
    }
}
