use super::views::{breakdown_rows, AnalysisSummaryView};
use super::{format_percent, ReportError};
use crate::scoring::{PassageOutlook, ScoreOutcome};
use chrono::NaiveDateTime;
use std::fmt::Write as _;
use std::io::Write;

/// Everything needed to export one analysis, frozen at generation time.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub bill_name: String,
    pub country: String,
    pub outcome: ScoreOutcome,
    pub generated_at: NaiveDateTime,
}

impl AnalysisReport {
    pub fn new(
        bill_name: impl Into<String>,
        country: impl Into<String>,
        outcome: ScoreOutcome,
        generated_at: NaiveDateTime,
    ) -> Self {
        Self {
            bill_name: bill_name.into(),
            country: country.into(),
            outcome,
            generated_at,
        }
    }

    pub fn outlook(&self) -> PassageOutlook {
        self.outcome.outlook()
    }

    /// Key under which a session stores this analysis.
    pub fn session_key(&self) -> String {
        format!("{} ({})", self.bill_name, self.country)
    }

    pub fn summary(&self) -> AnalysisSummaryView {
        let outlook = self.outlook();
        AnalysisSummaryView {
            bill_name: self.bill_name.clone(),
            country: self.country.clone(),
            probability: self.outcome.probability,
            probability_label: format_percent(self.outcome.probability),
            outlook,
            interpretation: outlook.label(),
            gauge_color: outlook.band().color,
            breakdown: breakdown_rows(&self.outcome.breakdown),
            penalties: self
                .outcome
                .penalties
                .iter()
                .map(|penalty| penalty.summary())
                .collect(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Legislative Analysis Report");
        let _ = writeln!(out, "===========================");
        let _ = writeln!(out, "Bill: {}", self.bill_name);
        let _ = writeln!(out, "Country: {}", self.country);
        let _ = writeln!(
            out,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Probability of Passage: {}",
            format_percent(self.outcome.probability)
        );
        let _ = writeln!(out, "Interpretation: {}", self.outlook().label());
        let _ = writeln!(out);
        let _ = writeln!(out, "Factor Breakdown");
        let _ = writeln!(out, "----------------");
        for row in breakdown_rows(&self.outcome.breakdown) {
            let _ = writeln!(
                out,
                "- {}: score {}, weight {}, impact {}",
                row.factor_label, row.score, row.weight, row.impact
            );
        }
        if !self.outcome.penalties.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Adjustments");
            let _ = writeln!(out, "-----------");
            for penalty in &self.outcome.penalties {
                let _ = writeln!(out, "- {}", penalty.summary());
            }
        }
        out
    }

    pub fn write_text<W: Write>(&self, mut writer: W) -> Result<(), ReportError> {
        writer.write_all(self.render_text().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in breakdown_rows(&self.outcome.breakdown) {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
