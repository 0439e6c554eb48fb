use super::config::PenaltyRule;
use super::factors::FactorScores;
use super::weights::WeightVector;
use super::{AppliedPenalty, FactorContribution, ScoreBreakdown};
use crate::registry::SystemType;

/// Sums `score * weight` over factors present in both maps.
pub(crate) fn weighted_sum(weights: &WeightVector, scores: &FactorScores) -> (ScoreBreakdown, f64) {
    let mut breakdown = ScoreBreakdown::default();
    let mut total = 0.0;

    for (factor, weight) in weights.iter() {
        let Some(raw_score) = scores.get(factor) else {
            continue;
        };
        let weighted_score = raw_score * weight;
        total += weighted_score;
        breakdown.insert(
            factor,
            FactorContribution {
                raw_score,
                weight,
                weighted_score,
            },
        );
    }

    (breakdown, total)
}

/// Applies every matching penalty in table order. Penalties compound.
pub(crate) fn apply_penalties(
    penalties: &[PenaltyRule],
    scores: &FactorScores,
    system: SystemType,
    total: f64,
) -> (f64, Vec<AppliedPenalty>) {
    let mut adjusted = total;
    let mut applied = Vec::new();

    for rule in penalties {
        if !rule.scope.applies_to(system) {
            continue;
        }
        let Some(observed) = scores.get(rule.factor) else {
            continue;
        };
        if observed < rule.below {
            adjusted *= rule.multiplier;
            applied.push(AppliedPenalty {
                factor: rule.factor,
                observed,
                threshold: rule.below,
                multiplier: rule.multiplier,
            });
        }
    }

    (adjusted, applied)
}
