mod distribution;
mod summary;

pub use distribution::{Distribution, Listing, natural_key};
pub use summary::{AnalysisSummary, SectionStatus, SectionSummary, Totals};

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
