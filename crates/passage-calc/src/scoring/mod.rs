//! Weight derivation, weighted scoring, penalties, and interpretation.

mod config;
mod factors;
mod outlook;
mod rules;
mod weights;

pub use config::{
    BaselineWeights, ChamberRedistribution, InputPolicy, InvalidFactorScore, PenaltyRule,
    PenaltyScope, RuleSet, RuleTable, ScoringPolicy, SystemOverride, COUNTRY_AWARE_RULES,
    FLAT_RULES,
};
pub use factors::{Factor, FactorParseError, FactorScores};
pub use outlook::{interpret, GaugeBand, PassageOutlook};
pub use weights::{WeightDeriver, WeightVector};

use crate::registry::{CountrySystemDescriptor, SystemType};
use serde::Serialize;
use std::collections::BTreeMap;

/// Stateless engine applying one rule table to factor scores.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    deriver: WeightDeriver,
    normalize_weights: bool,
}

impl ScoringEngine {
    pub fn new(policy: &ScoringPolicy) -> Self {
        Self {
            deriver: WeightDeriver::new(policy.rule_set.table()),
            normalize_weights: policy.normalize_weights,
        }
    }

    pub fn rule_set(&self) -> RuleSet {
        self.deriver.table().rule_set
    }

    /// Fresh weight vector for a descriptor; nothing is cached between calls.
    pub fn derive_weights(&self, descriptor: &CountrySystemDescriptor) -> WeightVector {
        let weights = self.deriver.derive(descriptor);
        if self.normalize_weights {
            weights.normalized()
        } else {
            weights
        }
    }

    pub fn score(
        &self,
        weights: &WeightVector,
        scores: &FactorScores,
        system: SystemType,
    ) -> ScoreOutcome {
        let (breakdown, raw_total) = rules::weighted_sum(weights, scores);
        let (adjusted_total, penalties) =
            rules::apply_penalties(self.deriver.table().penalties, scores, system, raw_total);

        ScoreOutcome {
            probability: clamp_probability(adjusted_total),
            raw_total,
            adjusted_total,
            breakdown,
            penalties,
        }
    }

    pub fn evaluate(
        &self,
        descriptor: &CountrySystemDescriptor,
        scores: &FactorScores,
    ) -> ScoreOutcome {
        let weights = self.derive_weights(descriptor);
        self.score(&weights, scores, descriptor.system_type)
    }
}

/// Clamps into [0, 1]; NaN collapses to 0.
fn clamp_probability(total: f64) -> f64 {
    total.max(0.0).min(1.0)
}

/// Discrete contribution of one factor, kept for audit and display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorContribution {
    pub raw_score: f64,
    pub weight: f64,
    pub weighted_score: f64,
}

/// Per-factor contributions for factors present in both weights and scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreBreakdown(BTreeMap<Factor, FactorContribution>);

impl ScoreBreakdown {
    pub fn get(&self, factor: Factor) -> Option<&FactorContribution> {
        self.0.get(&factor)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, &FactorContribution)> + '_ {
        self.0.iter().map(|(factor, entry)| (*factor, entry))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, factor: Factor, entry: FactorContribution) {
        self.0.insert(factor, entry);
    }
}

/// Penalty that fired while scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AppliedPenalty {
    pub factor: Factor,
    pub observed: f64,
    pub threshold: f64,
    pub multiplier: f64,
}

impl AppliedPenalty {
    pub fn summary(&self) -> String {
        format!(
            "{} {:.2} below {:.2}: total x{}",
            self.factor.label(),
            self.observed,
            self.threshold,
            self.multiplier
        )
    }
}

/// Scoring output: the clamped probability plus the trail that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreOutcome {
    pub probability: f64,
    pub raw_total: f64,
    pub adjusted_total: f64,
    pub breakdown: ScoreBreakdown,
    pub penalties: Vec<AppliedPenalty>,
}

impl ScoreOutcome {
    pub fn outlook(&self) -> PassageOutlook {
        interpret(self.probability)
    }
}
