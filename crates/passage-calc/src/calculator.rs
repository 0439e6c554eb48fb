use crate::registry::{CountrySystemDescriptor, PoliticalSystemRegistry};
use crate::scoring::{
    interpret, FactorScores, InputPolicy, InvalidFactorScore, PassageOutlook, RuleSet,
    ScoreOutcome, ScoringEngine, ScoringPolicy, WeightVector,
};
use tracing::{debug, warn};

/// Scoring API consumed by presentation layers.
///
/// Owns the read-only registry; every call is a pure in-memory computation.
#[derive(Debug, Clone)]
pub struct PassageCalculator {
    registry: PoliticalSystemRegistry,
    engine: ScoringEngine,
    input_policy: InputPolicy,
}

impl PassageCalculator {
    pub fn new(registry: PoliticalSystemRegistry, policy: &ScoringPolicy) -> Self {
        Self {
            registry,
            engine: ScoringEngine::new(policy),
            input_policy: policy.input_policy,
        }
    }

    pub fn registry(&self) -> &PoliticalSystemRegistry {
        &self.registry
    }

    pub fn rule_set(&self) -> RuleSet {
        self.engine.rule_set()
    }

    pub fn list_countries(&self) -> Vec<String> {
        self.registry.list_country_names()
    }

    pub fn system_info(&self, country: &str) -> Option<&CountrySystemDescriptor> {
        self.registry.get_system(country)
    }

    pub fn weights_for(&self, country: &str) -> Option<WeightVector> {
        self.registry
            .get_system(country)
            .map(|descriptor| self.engine.derive_weights(descriptor))
    }

    /// `Ok(None)` when the country has no system data; callers render that as
    /// "no result" rather than failing.
    pub fn compute_probability(
        &self,
        country: &str,
        scores: &FactorScores,
    ) -> Result<Option<ScoreOutcome>, InvalidFactorScore> {
        let Some(descriptor) = self.registry.get_system(country) else {
            warn!(country, "no political system data for country");
            return Ok(None);
        };

        let scores = self.input_policy.apply(scores)?;
        let outcome = self.engine.evaluate(descriptor, &scores);
        debug!(
            country,
            rule_set = self.engine.rule_set().key(),
            probability = outcome.probability,
            penalties = outcome.penalties.len(),
            "scored bill"
        );
        Ok(Some(outcome))
    }

    pub fn interpret(&self, probability: f64) -> PassageOutlook {
        interpret(probability)
    }
}
