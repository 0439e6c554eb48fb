use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chamber structure of a national legislature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegislatureType {
    Unicameral,
    Bicameral,
    Unknown,
}

impl LegislatureType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unicameral => "Unicameral",
            Self::Bicameral => "Bicameral",
            Self::Unknown => "Unknown",
        }
    }
}

/// Coarse executive/legislative relationship used to pick weight overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemType {
    Parliamentary,
    Presidential,
    Monarchy,
    Other,
}

impl SystemType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Parliamentary => "Parliamentary",
            Self::Presidential => "Presidential",
            Self::Monarchy => "Monarchy",
            Self::Other => "Other",
        }
    }
}

/// Classified political system of a single country. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySystemDescriptor {
    pub country_name: String,
    pub legislature_type: LegislatureType,
    pub system_type: SystemType,
}

impl CountrySystemDescriptor {
    pub fn new(
        country_name: impl Into<String>,
        legislature_type: LegislatureType,
        system_type: SystemType,
    ) -> Self {
        Self {
            country_name: country_name.into(),
            legislature_type,
            system_type,
        }
    }

    pub fn is_bicameral(&self) -> bool {
        self.legislature_type == LegislatureType::Bicameral
    }
}

/// Government details carried through from the dataset for display only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GovernmentProfile {
    pub country_code: String,
    pub government_type: String,
    pub capital: String,
    pub executive_branch: ExecutiveBranch,
    pub legislative_branch: LegislativeBranch,
    pub judicial_branch: JudicialBranch,
    pub political_parties: Value,
    pub suffrage: String,
    pub election_results: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutiveBranch {
    pub chief_of_state: String,
    pub head_of_government: String,
    pub election_process: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LegislativeBranch {
    pub structure: String,
    pub description: String,
    pub election_process: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JudicialBranch {
    pub highest_courts: String,
    pub selection_process: String,
}

/// Registry entry pairing the classification with its source profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryRecord {
    pub descriptor: CountrySystemDescriptor,
    pub profile: GovernmentProfile,
}
