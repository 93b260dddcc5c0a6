use std::fmt::Write;

use crate::checker::{
    CoverageTable, Finding, FindingCategory, GroupSum, Observation, SequenceGroup, Severity,
};
use crate::error::Result;
use crate::stats::{AnalysisSummary, SectionStatus, SectionSummary};

use super::{ColorMode, ReportFormatter};

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Plain-text report: a banner per dataset and one numbered section per rule.
pub struct TextReporter {
    use_colors: bool,
}

impl TextReporter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(),
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn mark(&self, ok: bool) -> String {
        if ok {
            self.paint("✓", ansi::GREEN)
        } else {
            self.paint("✗", ansi::RED)
        }
    }

    fn status_symbol(&self, status: SectionStatus) -> String {
        let color = match status {
            SectionStatus::Pass => ansi::GREEN,
            SectionStatus::Warn => ansi::YELLOW,
            SectionStatus::Fail => ansi::RED,
        };
        self.paint(status.symbol(), color)
    }

    fn format_dataset(&self, summary: &AnalysisSummary, out: &mut String) {
        let banner = format!("=== {} ===", summary.title);
        writeln!(out, "{}", self.paint(&banner, ansi::BOLD)).ok();
        writeln!(
            out,
            "Dataset: {} ({}, {} records)",
            summary.dataset, summary.path, summary.records
        )
        .ok();

        for section in &summary.sections {
            writeln!(out).ok();
            self.format_section(section, out);
        }

        writeln!(out).ok();
        writeln!(out, "{}", self.format_totals(summary)).ok();
        let end = format!("=== END {} ===", summary.title);
        writeln!(out, "{}", self.paint(&end, ansi::BOLD)).ok();
    }

    fn format_section(&self, section: &SectionSummary, out: &mut String) {
        writeln!(out, "{}. {}", section.number, section.title).ok();

        for observation in &section.observations {
            self.format_observation(observation, out);
        }

        let symbol = self.status_symbol(section.status);
        if section.total == 0 {
            writeln!(out, "{symbol} No issues found").ok();
        } else {
            let noun = if section.total == 1 { "issue" } else { "issues" };
            writeln!(out, "{symbol} Found {} {noun}:", section.total).ok();
            for finding in &section.findings.shown {
                writeln!(out, "  {}", describe(finding)).ok();
            }
            if section.findings.remaining > 0 {
                writeln!(out, "  ... and {} more", section.findings.remaining).ok();
            }
        }

        if section.skipped > 0 {
            writeln!(
                out,
                "ℹ {} records skipped (unexpected field shape)",
                section.skipped
            )
            .ok();
        }
    }

    fn format_observation(&self, observation: &Observation, out: &mut String) {
        match observation {
            Observation::Coverage(table) => self.format_coverage(table, out),
            Observation::EnumValues { field, values } => {
                let values = if values.is_empty() {
                    "(none)".to_string()
                } else {
                    values.join(", ")
                };
                writeln!(out, "  {field}: {values}").ok();
            }
            Observation::Missing {
                field,
                missing,
                total,
            } => {
                if *missing > 0 {
                    writeln!(out, "ℹ {missing}/{total} records have no {field}").ok();
                }
            }
            Observation::WeightSums {
                tolerance, groups, ..
            } => {
                for group in groups {
                    self.format_weight(group, *tolerance, out);
                }
            }
            Observation::Sequence { groups } => {
                for group in groups {
                    self.format_sequence(group, out);
                }
            }
        }
    }

    fn format_coverage(&self, table: &CoverageTable, out: &mut String) {
        writeln!(out, "Distribution by {}:", table.field).ok();
        for category in table.declared() {
            let mark = self.mark(table.is_within_bounds(category.count));
            writeln!(out, "  {mark} {}: {} records", category.key, category.count).ok();
            if category.count > 0 && category.count < table.list_below {
                writeln!(out, "      {}", category.record_ids.join(", ")).ok();
            }
        }
        for category in table.undeclared() {
            writeln!(
                out,
                "  {} {}: {} records (undeclared)",
                self.paint("?", ansi::RED),
                category.key,
                category.count
            )
            .ok();
        }
        let d = &table.distribution;
        writeln!(
            out,
            "Stats: min={}, max={}, avg={}",
            d.min,
            d.max,
            d.mean_display()
        )
        .ok();
    }

    fn format_weight(&self, group: &GroupSum, tolerance: f64, out: &mut String) {
        writeln!(
            out,
            "  {} {}: {:.4} (deviation: {:.4})",
            self.mark(group.deviation <= tolerance),
            group.group,
            group.sum,
            group.deviation
        )
        .ok();
    }

    fn format_sequence(&self, group: &SequenceGroup, out: &mut String) {
        write!(
            out,
            "  {} {}: Expected {}, Found {}",
            self.mark(group.is_complete()),
            group.group,
            group.expected,
            group.found
        )
        .ok();
        if !group.gaps.is_empty() {
            let gaps: Vec<String> = group.gaps.iter().map(ToString::to_string).collect();
            write!(out, " (gaps: {})", gaps.join(", ")).ok();
        }
        writeln!(out).ok();
    }

    fn format_totals(&self, summary: &AnalysisSummary) -> String {
        let count = |severity: Severity| {
            summary
                .totals
                .by_severity
                .get(&severity)
                .copied()
                .unwrap_or(0)
        };
        let errors = self.paint(&count(Severity::Error).to_string(), ansi::RED);
        let warnings = self.paint(&count(Severity::Warning).to_string(), ansi::YELLOW);
        format!(
            "Summary: {} findings ({errors} errors, {warnings} warnings, {} info)",
            summary.totals.findings,
            count(Severity::Info)
        )
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

/// One listing line for a finding, shaped by its category.
fn describe(finding: &Finding) -> String {
    let field = finding
        .field
        .as_deref()
        .map(|f| format!(" [{f}]"))
        .unwrap_or_default();
    let subject = finding.subject.as_deref().unwrap_or_default();
    let id = &finding.entity;
    let context = &finding.context;

    match finding.category {
        FindingCategory::PatternViolation => id.clone(),
        FindingCategory::DuplicateId => format!("{id} (duplicate at {context})"),
        FindingCategory::CoverageGap
        | FindingCategory::CountMismatch
        | FindingCategory::WeightDeviation
        | FindingCategory::UnknownReference
        | FindingCategory::MissingField => format!("{id}{field}: {context}"),
        FindingCategory::VagueLanguage | FindingCategory::OutcomeLanguage => {
            format!("{id}{field}: \"{subject}\" in \"...{context}...\"")
        }
        FindingCategory::ThinContent => format!(
            "{id}{field}: {} chars - \"{context}\"",
            finding.length.unwrap_or_default()
        ),
        FindingCategory::PunctuationArtifact | FindingCategory::MissingMechanism => {
            format!("{id}{field}: {subject} - \"{context}\"")
        }
        FindingCategory::EnumInconsistency => format!("{id}{field}: \"{subject}\" ({context})"),
        FindingCategory::NearDuplicate => format!("{id} ↔ {subject}: {context}"),
    }
}

impl ReportFormatter for TextReporter {
    fn format(&self, summaries: &[AnalysisSummary]) -> Result<String> {
        let mut out = String::new();
        for (i, summary) in summaries.iter().enumerate() {
            if i > 0 {
                writeln!(out).ok();
            }
            self.format_dataset(summary, &mut out);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
