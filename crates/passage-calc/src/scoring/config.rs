use super::factors::{Factor, FactorScores};
use crate::registry::SystemType;
use serde::{Deserialize, Serialize};

/// Versioned weighting/penalty rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// v1: fixed eight-factor model, no country awareness.
    Flat,
    /// v2: weights adjusted for system type and chamber structure.
    #[default]
    CountryAware,
}

impl RuleSet {
    pub const fn version(self) -> u8 {
        match self {
            Self::Flat => 1,
            Self::CountryAware => 2,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::CountryAware => "country_aware",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "flat" | "v1" => Some(Self::Flat),
            "country_aware" | "v2" => Some(Self::CountryAware),
            _ => None,
        }
    }

    pub fn table(self) -> &'static RuleTable {
        match self {
            Self::Flat => &FLAT_RULES,
            Self::CountryAware => &COUNTRY_AWARE_RULES,
        }
    }
}

/// Immutable starting weights for the eight baseline factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineWeights {
    pub governing_party_support: f64,
    pub opposition_support: f64,
    pub public_opinion: f64,
    pub committee_approval: f64,
    pub fiscal_impact: f64,
    pub urgency_factor: f64,
    pub previous_similar_bills: f64,
    pub media_coverage: f64,
}

impl BaselineWeights {
    pub const COUNTRY_AWARE: Self = Self {
        governing_party_support: 0.30,
        opposition_support: 0.15,
        public_opinion: 0.10,
        committee_approval: 0.20,
        fiscal_impact: 0.10,
        urgency_factor: 0.05,
        previous_similar_bills: 0.05,
        media_coverage: 0.05,
    };

    pub const FLAT: Self = Self {
        governing_party_support: 0.25,
        opposition_support: 0.15,
        public_opinion: 0.15,
        committee_approval: 0.20,
        fiscal_impact: 0.10,
        urgency_factor: 0.05,
        previous_similar_bills: 0.05,
        media_coverage: 0.05,
    };

    pub fn entries(&self) -> [(Factor, f64); 8] {
        [
            (Factor::GoverningPartySupport, self.governing_party_support),
            (Factor::OppositionSupport, self.opposition_support),
            (Factor::PublicOpinion, self.public_opinion),
            (Factor::CommitteeApproval, self.committee_approval),
            (Factor::FiscalImpact, self.fiscal_impact),
            (Factor::UrgencyFactor, self.urgency_factor),
            (Factor::PreviousSimilarBills, self.previous_similar_bills),
            (Factor::MediaCoverage, self.media_coverage),
        ]
    }
}

/// Weights replaced outright for one system type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemOverride {
    pub system: SystemType,
    pub weights: &'static [(Factor, f64)],
}

/// Bicameral adjustment: scale existing weights, then add chamber weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChamberRedistribution {
    pub scale: f64,
    pub upper_house: f64,
    pub lower_house: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenaltyScope {
    AllSystems,
    System(SystemType),
}

impl PenaltyScope {
    pub fn applies_to(self, system: SystemType) -> bool {
        match self {
            Self::AllSystems => true,
            Self::System(target) => target == system,
        }
    }
}

/// Multiplies the running total when a present factor falls below a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyRule {
    pub scope: PenaltyScope,
    pub factor: Factor,
    pub below: f64,
    pub multiplier: f64,
}

/// Full rule table for one rule-set version.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleTable {
    pub rule_set: RuleSet,
    pub baseline: BaselineWeights,
    pub overrides: &'static [SystemOverride],
    pub chambers: Option<ChamberRedistribution>,
    pub penalties: &'static [PenaltyRule],
}

impl RuleTable {
    pub fn override_for(&self, system: SystemType) -> Option<&SystemOverride> {
        self.overrides.iter().find(|rule| rule.system == system)
    }
}

pub static COUNTRY_AWARE_RULES: RuleTable = RuleTable {
    rule_set: RuleSet::CountryAware,
    baseline: BaselineWeights::COUNTRY_AWARE,
    overrides: &[
        SystemOverride {
            system: SystemType::Presidential,
            weights: &[
                (Factor::GoverningPartySupport, 0.25),
                (Factor::OppositionSupport, 0.25),
            ],
        },
        SystemOverride {
            system: SystemType::Monarchy,
            weights: &[
                (Factor::GoverningPartySupport, 0.25),
                (Factor::PublicOpinion, 0.15),
            ],
        },
    ],
    chambers: Some(ChamberRedistribution {
        scale: 0.7,
        upper_house: 0.15,
        lower_house: 0.15,
    }),
    penalties: &[PenaltyRule {
        scope: PenaltyScope::System(SystemType::Monarchy),
        factor: Factor::GoverningPartySupport,
        below: 0.3,
        multiplier: 0.5,
    }],
};

pub static FLAT_RULES: RuleTable = RuleTable {
    rule_set: RuleSet::Flat,
    baseline: BaselineWeights::FLAT,
    overrides: &[],
    chambers: None,
    penalties: &[
        PenaltyRule {
            scope: PenaltyScope::AllSystems,
            factor: Factor::GoverningPartySupport,
            below: 0.3,
            multiplier: 0.5,
        },
        PenaltyRule {
            scope: PenaltyScope::AllSystems,
            factor: Factor::CommitteeApproval,
            below: 0.2,
            multiplier: 0.7,
        },
    ],
};

/// How out-of-range factor scores are treated before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    #[default]
    Reject,
    Clamp,
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("score for {factor} must be a number within [0, 1], got {value}")]
pub struct InvalidFactorScore {
    pub factor: Factor,
    pub value: f64,
}

impl InputPolicy {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Clamp => "clamp",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "clamp" => Some(Self::Clamp),
            _ => None,
        }
    }

    pub fn apply(self, scores: &FactorScores) -> Result<FactorScores, InvalidFactorScore> {
        scores
            .iter()
            .map(|(factor, value)| {
                if (0.0..=1.0).contains(&value) {
                    return Ok((factor, value));
                }
                match self {
                    Self::Reject => Err(InvalidFactorScore { factor, value }),
                    Self::Clamp if value.is_nan() => Ok((factor, 0.0)),
                    Self::Clamp => Ok((factor, value.clamp(0.0, 1.0))),
                }
            })
            .collect()
    }
}

/// Scoring behavior selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub rule_set: RuleSet,
    pub input_policy: InputPolicy,
    /// Rescale derived weights to sum to 1. Derived vectors otherwise keep
    /// their raw totals, e.g. 1.05 for a unicameral presidential system.
    pub normalize_weights: bool,
}
