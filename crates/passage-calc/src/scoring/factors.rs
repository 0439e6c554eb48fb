use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Bill characteristic that can carry a weight and a caller-supplied score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    GoverningPartySupport,
    OppositionSupport,
    PublicOpinion,
    CommitteeApproval,
    FiscalImpact,
    UrgencyFactor,
    PreviousSimilarBills,
    MediaCoverage,
    UpperHouseSupport,
    LowerHouseSupport,
}

impl Factor {
    /// Factors weighted for every legislature.
    pub const BASELINE: [Factor; 8] = [
        Factor::GoverningPartySupport,
        Factor::OppositionSupport,
        Factor::PublicOpinion,
        Factor::CommitteeApproval,
        Factor::FiscalImpact,
        Factor::UrgencyFactor,
        Factor::PreviousSimilarBills,
        Factor::MediaCoverage,
    ];

    /// Chamber-specific factors, weighted only for bicameral legislatures.
    pub const CHAMBERS: [Factor; 2] = [Factor::UpperHouseSupport, Factor::LowerHouseSupport];

    pub fn ordered() -> impl Iterator<Item = Factor> {
        Self::BASELINE.into_iter().chain(Self::CHAMBERS)
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::GoverningPartySupport => "governing_party_support",
            Self::OppositionSupport => "opposition_support",
            Self::PublicOpinion => "public_opinion",
            Self::CommitteeApproval => "committee_approval",
            Self::FiscalImpact => "fiscal_impact",
            Self::UrgencyFactor => "urgency_factor",
            Self::PreviousSimilarBills => "previous_similar_bills",
            Self::MediaCoverage => "media_coverage",
            Self::UpperHouseSupport => "upper_house_support",
            Self::LowerHouseSupport => "lower_house_support",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::GoverningPartySupport => "Governing Party Support",
            Self::OppositionSupport => "Opposition Support",
            Self::PublicOpinion => "Public Opinion",
            Self::CommitteeApproval => "Committee Approval",
            Self::FiscalImpact => "Fiscal Impact",
            Self::UrgencyFactor => "Urgency Factor",
            Self::PreviousSimilarBills => "Previous Similar Bills",
            Self::MediaCoverage => "Media Coverage",
            Self::UpperHouseSupport => "Upper House Support",
            Self::LowerHouseSupport => "Lower House Support",
        }
    }

    /// Starting value an operator sees before adjusting anything.
    pub const fn default_score(self) -> f64 {
        match self {
            Self::GoverningPartySupport => 0.8,
            Self::OppositionSupport => 0.3,
            Self::PublicOpinion => 0.7,
            Self::CommitteeApproval => 0.9,
            Self::FiscalImpact => 0.6,
            Self::UrgencyFactor => 0.8,
            Self::PreviousSimilarBills => 0.7,
            Self::MediaCoverage => 0.6,
            Self::UpperHouseSupport | Self::LowerHouseSupport => 0.5,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown factor '{0}'")]
pub struct FactorParseError(pub String);

impl FromStr for Factor {
    type Err = FactorParseError;

    /// Accepts keys and labels: `public_opinion`, `Public Opinion`, `public-opinion`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .map(|ch| match ch {
                ' ' | '-' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        Self::ordered()
            .find(|factor| factor.key() == normalized)
            .ok_or_else(|| FactorParseError(value.to_string()))
    }
}

/// Caller-supplied factor scores. Absent factors are skipped during scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorScores(BTreeMap<Factor, f64>);

impl FactorScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every factor at the operator-facing default value.
    pub fn defaults(factors: impl IntoIterator<Item = Factor>) -> Self {
        factors
            .into_iter()
            .map(|factor| (factor, factor.default_score()))
            .collect()
    }

    pub fn uniform(factors: impl IntoIterator<Item = Factor>, score: f64) -> Self {
        factors.into_iter().map(|factor| (factor, score)).collect()
    }

    /// Builds scores from free-form names, ignoring names that match no factor.
    pub fn from_named<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut scores = Self::new();
        for (name, score) in pairs {
            match name.as_ref().parse::<Factor>() {
                Ok(factor) => {
                    scores.set(factor, score);
                }
                Err(err) => warn!(error = %err, "ignoring score for unrecognised factor"),
            }
        }
        scores
    }

    pub fn with(mut self, factor: Factor, score: f64) -> Self {
        self.set(factor, score);
        self
    }

    pub fn set(&mut self, factor: Factor, score: f64) -> Option<f64> {
        self.0.insert(factor, score)
    }

    pub fn get(&self, factor: Factor) -> Option<f64> {
        self.0.get(&factor).copied()
    }

    pub fn remove(&mut self, factor: Factor) -> Option<f64> {
        self.0.remove(&factor)
    }

    pub fn merge(&mut self, other: &FactorScores) {
        self.0.extend(other.iter());
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        self.0.iter().map(|(factor, score)| (*factor, *score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Factor, f64)> for FactorScores {
    fn from_iter<T: IntoIterator<Item = (Factor, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
