use super::format_percent;
use crate::scoring::{Factor, FactorContribution, PassageOutlook, ScoreBreakdown};
use serde::Serialize;

/// Display row for one factor, with percentages already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    #[serde(rename = "Factor")]
    pub factor_label: &'static str,
    #[serde(rename = "Score")]
    pub score: String,
    #[serde(rename = "Weight")]
    pub weight: String,
    #[serde(rename = "Impact")]
    pub impact: String,
}

impl BreakdownRow {
    pub fn new(factor: Factor, entry: &FactorContribution) -> Self {
        Self {
            factor_label: factor.label(),
            score: format_percent(entry.raw_score),
            weight: format_percent(entry.weight),
            impact: format_percent(entry.weighted_score),
        }
    }
}

pub fn breakdown_rows(breakdown: &ScoreBreakdown) -> Vec<BreakdownRow> {
    breakdown
        .iter()
        .map(|(factor, entry)| BreakdownRow::new(factor, entry))
        .collect()
}

/// Serializable summary for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummaryView {
    pub bill_name: String,
    pub country: String,
    pub probability: f64,
    pub probability_label: String,
    pub outlook: PassageOutlook,
    pub interpretation: &'static str,
    pub gauge_color: &'static str,
    pub breakdown: Vec<BreakdownRow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub penalties: Vec<String>,
}
