//! Session-scoped store of saved analyses, owned by the presentation layer.
//!
//! The scoring engine never touches this module.

use crate::report::AnalysisReport;
use crate::scoring::FactorScores;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Saved analysis: the frozen report plus the scores that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedAnalysis {
    pub key: String,
    pub scores: FactorScores,
    pub report: AnalysisReport,
}

impl SavedAnalysis {
    pub fn new(scores: FactorScores, report: AnalysisReport) -> Self {
        Self {
            key: report.session_key(),
            scores,
            report,
        }
    }
}

/// Storage abstraction so presentation code can swap the backing store.
pub trait AnalysisStore {
    /// Saves under the analysis key; returns the entry it replaced, if any.
    fn save(&self, analysis: SavedAnalysis) -> Result<Option<SavedAnalysis>, SessionError>;
    fn fetch(&self, key: &str) -> Result<Option<SavedAnalysis>, SessionError>;
    fn list(&self) -> Result<Vec<SavedAnalysis>, SessionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Process-local store; last write wins on key collision.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAnalysisStore {
    records: Arc<Mutex<BTreeMap<String, SavedAnalysis>>>,
}

impl InMemoryAnalysisStore {
    fn with_records<T>(
        &self,
        f: impl FnOnce(&mut BTreeMap<String, SavedAnalysis>) -> T,
    ) -> Result<T, SessionError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| SessionError::Unavailable("store mutex poisoned".to_string()))?;
        Ok(f(&mut guard))
    }
}

impl AnalysisStore for InMemoryAnalysisStore {
    fn save(&self, analysis: SavedAnalysis) -> Result<Option<SavedAnalysis>, SessionError> {
        self.with_records(|records| records.insert(analysis.key.clone(), analysis))
    }

    fn fetch(&self, key: &str) -> Result<Option<SavedAnalysis>, SessionError> {
        self.with_records(|records| records.get(key).cloned())
    }

    fn list(&self) -> Result<Vec<SavedAnalysis>, SessionError> {
        self.with_records(|records| records.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{Factor, ScoreOutcome};
    use chrono::NaiveDate;

    fn analysis(bill: &str, country: &str, probability: f64) -> SavedAnalysis {
        let outcome = ScoreOutcome {
            probability,
            raw_total: probability,
            adjusted_total: probability,
            breakdown: Default::default(),
            penalties: Vec::new(),
        };
        let generated_at = NaiveDate::from_ymd_opt(2026, 1, 5)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .expect("valid timestamp");
        SavedAnalysis::new(
            FactorScores::new().with(Factor::PublicOpinion, probability),
            AnalysisReport::new(bill, country, outcome, generated_at),
        )
    }

    #[test]
    fn last_write_wins_on_key_collision() {
        let store = InMemoryAnalysisStore::default();
        assert!(store
            .save(analysis("Budget Bill", "French Republic", 0.4))
            .expect("saved")
            .is_none());

        let replaced = store
            .save(analysis("Budget Bill", "French Republic", 0.7))
            .expect("saved")
            .expect("earlier entry replaced");
        assert_eq!(replaced.report.outcome.probability, 0.4);

        let current = store
            .fetch("Budget Bill (French Republic)")
            .expect("fetch")
            .expect("entry present");
        assert_eq!(current.report.outcome.probability, 0.7);
        assert_eq!(store.list().expect("list").len(), 1);
    }

    #[test]
    fn same_bill_in_different_countries_is_kept_apart() {
        let store = InMemoryAnalysisStore::default();
        store
            .save(analysis("Budget Bill", "French Republic", 0.4))
            .expect("saved");
        store
            .save(analysis("Budget Bill", "New Zealand", 0.6))
            .expect("saved");

        let keys: Vec<String> = store
            .list()
            .expect("list")
            .into_iter()
            .map(|saved| saved.key)
            .collect();
        assert_eq!(
            keys,
            vec![
                "Budget Bill (French Republic)".to_string(),
                "Budget Bill (New Zealand)".to_string()
            ]
        );
    }
}
