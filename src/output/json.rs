use serde::Serialize;

use crate::checker::Severity;
use crate::error::Result;
use crate::stats::AnalysisSummary;

use super::ReportFormatter;

pub struct JsonReporter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    datasets: &'a [AnalysisSummary],
}

#[derive(Serialize)]
struct Summary {
    datasets: usize,
    records: usize,
    findings: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_severity: Option<Severity>,
}

impl ReportFormatter for JsonReporter {
    fn format(&self, summaries: &[AnalysisSummary]) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                datasets: summaries.len(),
                records: summaries.iter().map(|s| s.records).sum(),
                findings: summaries.iter().map(|s| s.totals.findings).sum(),
                max_severity: summaries.iter().filter_map(|s| s.max_severity).max(),
            },
            datasets: summaries,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
