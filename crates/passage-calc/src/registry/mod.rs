//! Country political-system registry built from a Factbook-style dataset.

mod classifier;
mod dataset;
mod domain;

pub use classifier::{classify_legislature, classify_system, SubstringClassifier, SystemClassifier};
pub use dataset::RecordError;
pub use domain::{
    CountryRecord, CountrySystemDescriptor, ExecutiveBranch, GovernmentProfile, JudicialBranch,
    LegislatureType, LegislativeBranch, SystemType,
};

use dataset::ParsedEntry;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Fatal failure to read the dataset as a whole.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset must be a JSON object keyed by country code, found {found}")]
    UnexpectedShape { found: &'static str },
}

/// Entry dropped during load, kept so callers can audit coverage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub country_code: String,
    pub reason: String,
}

/// Read-only map from country name to classified political system.
#[derive(Debug, Clone, Default)]
pub struct PoliticalSystemRegistry {
    countries: BTreeMap<String, CountryRecord>,
    skipped: Vec<SkippedRecord>,
}

impl PoliticalSystemRegistry {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataLoadError> {
        Self::load_with(path, &SubstringClassifier)
    }

    pub fn load_with<P, C>(path: P, classifier: &C) -> Result<Self, DataLoadError>
    where
        P: AsRef<Path>,
        C: SystemClassifier + ?Sized,
    {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_reader_with(std::io::BufReader::new(file), classifier)?;
        info!(
            path = %path.display(),
            countries = registry.len(),
            skipped = registry.skipped.len(),
            "political system dataset loaded"
        );
        Ok(registry)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        Self::from_reader_with(reader, &SubstringClassifier)
    }

    pub fn from_reader_with<R, C>(reader: R, classifier: &C) -> Result<Self, DataLoadError>
    where
        R: Read,
        C: SystemClassifier + ?Sized,
    {
        let document: Value = serde_json::from_reader(reader)?;
        Self::from_value_with(document, classifier)
    }

    pub fn from_value_with<C>(document: Value, classifier: &C) -> Result<Self, DataLoadError>
    where
        C: SystemClassifier + ?Sized,
    {
        let entries = match document {
            Value::Object(entries) => entries,
            other => {
                return Err(DataLoadError::UnexpectedShape {
                    found: json_kind(&other),
                })
            }
        };

        let mut registry = Self::default();
        for (country_code, value) in entries {
            match dataset::parse_entry(&country_code, value) {
                Ok(ParsedEntry::Government(entry)) => {
                    let descriptor = CountrySystemDescriptor::new(
                        entry.country_name.clone(),
                        classifier.legislature_type(&entry.profile.legislative_branch.structure),
                        classifier.system_type(&entry.profile.government_type),
                    );
                    let record = CountryRecord {
                        descriptor,
                        profile: entry.profile,
                    };
                    if let Some(previous) = registry.countries.insert(entry.country_name, record) {
                        warn!(
                            country_code = %country_code,
                            replaced = %previous.profile.country_code,
                            country = %previous.descriptor.country_name,
                            "duplicate country name, keeping later entry"
                        );
                    }
                }
                Ok(ParsedEntry::NoGovernment) => {
                    debug!(country_code = %country_code, "entry has no government section");
                }
                Err(err) => {
                    warn!(country_code = %country_code, error = %err, "skipping country record");
                    registry.skipped.push(SkippedRecord {
                        country_code,
                        reason: err.to_string(),
                    });
                }
            }
        }

        Ok(registry)
    }

    pub fn get_system(&self, country_name: &str) -> Option<&CountrySystemDescriptor> {
        self.countries
            .get(country_name)
            .map(|record| &record.descriptor)
    }

    pub fn profile(&self, country_name: &str) -> Option<&GovernmentProfile> {
        self.countries
            .get(country_name)
            .map(|record| &record.profile)
    }

    pub fn record(&self, country_name: &str) -> Option<&CountryRecord> {
        self.countries.get(country_name)
    }

    /// Country names in ascending lexicographic order.
    pub fn list_country_names(&self) -> Vec<String> {
        self.countries.keys().cloned().collect()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &CountrySystemDescriptor> {
        self.countries.values().map(|record| &record.descriptor)
    }

    pub fn skipped_records(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct KeywordFreeClassifier;

    impl SystemClassifier for KeywordFreeClassifier {
        fn legislature_type(&self, _structure: &str) -> LegislatureType {
            LegislatureType::Unicameral
        }

        fn system_type(&self, _government_type: &str) -> SystemType {
            SystemType::Parliamentary
        }
    }

    fn sample() -> Value {
        json!({
            "fr": { "Government": {
                "country_name": { "conventional_long": "French Republic" },
                "government_type": "semi-presidential republic",
                "legislative_branch": { "structure": "bicameral Parliament" }
            }},
            "nz": { "Government": {
                "country_name": { "conventional_long": "none", "conventional_short": "New Zealand" },
                "government_type": "parliamentary democracy under a constitutional monarchy",
                "legislative_branch": { "structure": "unicameral House of Representatives" }
            }},
            "xx": "corrupt"
        })
    }

    #[test]
    fn classifies_and_sorts_countries() {
        let registry =
            PoliticalSystemRegistry::from_value_with(sample(), &SubstringClassifier).expect("loads");

        assert_eq!(
            registry.list_country_names(),
            vec!["French Republic".to_string(), "New Zealand".to_string()]
        );
        let france = registry.get_system("French Republic").expect("france present");
        assert_eq!(france.system_type, SystemType::Presidential);
        assert!(france.is_bicameral());

        let nz = registry.get_system("New Zealand").expect("nz present");
        assert_eq!(nz.system_type, SystemType::Parliamentary);
        assert_eq!(nz.legislature_type, LegislatureType::Unicameral);
        assert_eq!(registry.profile("New Zealand").map(|p| p.country_code.as_str()), Some("nz"));
    }

    #[test]
    fn skips_corrupt_entries_without_failing() {
        let registry =
            PoliticalSystemRegistry::from_value_with(sample(), &SubstringClassifier).expect("loads");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.skipped_records().len(), 1);
        assert_eq!(registry.skipped_records()[0].country_code, "xx");
    }

    #[test]
    fn custom_classifier_replaces_substring_rules() {
        let registry = PoliticalSystemRegistry::from_value_with(sample(), &KeywordFreeClassifier)
            .expect("loads");

        let france = registry.get_system("French Republic").expect("france present");
        assert_eq!(france.system_type, SystemType::Parliamentary);
        assert_eq!(france.legislature_type, LegislatureType::Unicameral);
    }

    #[test]
    fn rejects_non_object_documents() {
        let err = PoliticalSystemRegistry::from_value_with(json!([1, 2]), &SubstringClassifier)
            .expect_err("array rejected");
        assert!(matches!(
            err,
            DataLoadError::UnexpectedShape { found: "an array" }
        ));
    }

    #[test]
    fn unknown_country_is_absent() {
        let registry =
            PoliticalSystemRegistry::from_value_with(sample(), &SubstringClassifier).expect("loads");
        assert!(registry.get_system("Atlantis").is_none());
        assert!(registry.profile("Atlantis").is_none());
    }

    #[test]
    fn duplicate_names_keep_the_entry_later_in_the_file() {
        let document = r#"{
            "zz": { "Government": {
                "country_name": { "conventional_long": "Dupland" },
                "government_type": "presidential republic",
                "legislative_branch": { "structure": "unicameral Assembly" }
            }},
            "aa": { "Government": {
                "country_name": { "conventional_long": "Dupland" },
                "government_type": "absolute monarchy",
                "legislative_branch": { "structure": "unicameral Council" }
            }}
        }"#;
        let registry = PoliticalSystemRegistry::from_reader(document.as_bytes()).expect("loads");

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get_system("Dupland").map(|system| system.system_type),
            Some(SystemType::Monarchy)
        );
        assert_eq!(registry.profile("Dupland").map(|p| p.country_code.as_str()), Some("aa"));
    }
}
