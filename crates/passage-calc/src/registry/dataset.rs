use super::domain::{ExecutiveBranch, GovernmentProfile, JudicialBranch, LegislativeBranch};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Why a single dataset entry was left out of the registry.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("entry is not a JSON object")]
    NotAnObject,
    #[error("malformed government section: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("government section has no country name")]
    MissingCountryName,
}

/// Outcome of parsing one dataset entry.
#[derive(Debug)]
pub(crate) enum ParsedEntry {
    Government(GovernmentEntry),
    NoGovernment,
}

#[derive(Debug)]
pub(crate) struct GovernmentEntry {
    pub(crate) country_name: String,
    pub(crate) profile: GovernmentProfile,
}

pub(crate) fn parse_entry(country_code: &str, value: Value) -> Result<ParsedEntry, RecordError> {
    if !value.is_object() {
        return Err(RecordError::NotAnObject);
    }

    let entry: RawEntry = serde_json::from_value(value)?;
    let Some(government) = entry.government else {
        return Ok(ParsedEntry::NoGovernment);
    };

    let country_name = government
        .country_name
        .resolve()
        .ok_or(RecordError::MissingCountryName)?;

    Ok(ParsedEntry::Government(GovernmentEntry {
        country_name,
        profile: government.into_profile(country_code),
    }))
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "Government", default)]
    government: Option<RawGovernment>,
}

#[derive(Debug, Deserialize)]
struct RawGovernment {
    #[serde(default)]
    country_name: RawCountryName,
    #[serde(default)]
    government_type: FreeText,
    #[serde(default)]
    capital: RawCapital,
    #[serde(default)]
    executive_branch: RawExecutiveBranch,
    #[serde(default)]
    legislative_branch: RawLegislativeBranch,
    #[serde(default)]
    judicial_branch: RawJudicialBranch,
    #[serde(default)]
    political_parties_and_leaders: Value,
    #[serde(default)]
    suffrage: FreeText,
    #[serde(default)]
    election_results: Value,
}

impl RawGovernment {
    fn into_profile(self, country_code: &str) -> GovernmentProfile {
        GovernmentProfile {
            country_code: country_code.to_string(),
            government_type: self.government_type.0,
            capital: self.capital.name.0,
            executive_branch: ExecutiveBranch {
                chief_of_state: self.executive_branch.chief_of_state.0,
                head_of_government: self.executive_branch.head_of_government.0,
                election_process: self.executive_branch.election_process.0,
            },
            legislative_branch: LegislativeBranch {
                structure: self.legislative_branch.structure.0,
                description: self.legislative_branch.description.0,
                election_process: self.legislative_branch.election_process.0,
            },
            judicial_branch: JudicialBranch {
                highest_courts: self.judicial_branch.highest_courts.0,
                selection_process: self.judicial_branch.selection_process.0,
            },
            political_parties: self.political_parties_and_leaders,
            suffrage: self.suffrage.0,
            election_results: self.election_results,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawCountryName {
    #[serde(default)]
    conventional_long: FreeText,
    #[serde(default)]
    conventional_short: FreeText,
}

impl RawCountryName {
    /// Long form first; the Factbook writes "none" when a form does not exist.
    fn resolve(&self) -> Option<String> {
        [&self.conventional_long, &self.conventional_short]
            .into_iter()
            .map(|name| name.0.trim())
            .find(|name| !name.is_empty() && !name.eq_ignore_ascii_case("none"))
            .map(str::to_string)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawCapital {
    #[serde(default)]
    name: FreeText,
}

#[derive(Debug, Default, Deserialize)]
struct RawExecutiveBranch {
    #[serde(default)]
    chief_of_state: FreeText,
    #[serde(default)]
    head_of_government: FreeText,
    #[serde(default)]
    election_process: FreeText,
}

#[derive(Debug, Default, Deserialize)]
struct RawLegislativeBranch {
    #[serde(default)]
    structure: FreeText,
    #[serde(default)]
    description: FreeText,
    #[serde(default)]
    election_process: FreeText,
}

#[derive(Debug, Default, Deserialize)]
struct RawJudicialBranch {
    #[serde(default)]
    highest_courts: FreeText,
    #[serde(default)]
    selection_process: FreeText,
}

/// Text field that tolerates the shapes found in Factbook exports: plain
/// strings, `{"text": ...}` wrappers, nulls, and anything else rendered as JSON.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct FreeText(String);

impl FreeText {
    fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::String(text) => Self(text),
            Value::Object(mut map) => match map.remove("text") {
                Some(Value::String(text)) => Self(text),
                Some(other) => Self::from_value(other),
                None => Self(Value::Object(map).to_string()),
            },
            other => Self(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for FreeText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}
