use chrono::{Local, NaiveDateTime};
use passage_calc::config::AppConfig;
use passage_calc::error::AppError;
use passage_calc::registry::PoliticalSystemRegistry;
use passage_calc::scoring::{Factor, FactorScores, InputPolicy, RuleSet};
use passage_calc::PassageCalculator;
use std::collections::BTreeMap;
use std::path::Path;

pub(crate) fn load_calculator(config: &AppConfig) -> Result<PassageCalculator, AppError> {
    let registry = PoliticalSystemRegistry::load(&config.dataset.path)?;
    Ok(PassageCalculator::new(registry, &config.scoring))
}

pub(crate) fn parse_rule_set(raw: &str) -> Result<RuleSet, String> {
    RuleSet::from_key(raw).ok_or_else(|| format!("unknown rule set '{raw}' (country_aware, flat)"))
}

pub(crate) fn parse_input_policy(raw: &str) -> Result<InputPolicy, String> {
    InputPolicy::from_key(raw).ok_or_else(|| format!("unknown input policy '{raw}' (reject, clamp)"))
}

/// Parses `name=value`, e.g. `public_opinion=0.7`.
pub(crate) fn parse_factor_assignment(raw: &str) -> Result<(Factor, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let factor = name.parse::<Factor>().map_err(|err| err.to_string())?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid score '{}' for {factor}: {err}", value.trim()))?;
    Ok((factor, value))
}

/// Reads a JSON object of factor name to score. Unknown names are ignored.
pub(crate) fn read_scores_file(path: &Path) -> Result<FactorScores, AppError> {
    let contents = std::fs::read_to_string(path)?;
    let named: BTreeMap<String, f64> =
        serde_json::from_str(&contents).map_err(|source| AppError::ScoresFile {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(FactorScores::from_named(named))
}

pub(crate) fn timestamp() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "passage-calc-{}-{name}",
            std::process::id()
        ));
        std::fs::write(&path, contents).expect("write scratch file");
        path
    }

    #[test]
    fn parses_factor_assignments() {
        assert_eq!(
            parse_factor_assignment("public_opinion=0.7"),
            Ok((Factor::PublicOpinion, 0.7))
        );
        assert_eq!(
            parse_factor_assignment("Upper House Support = 0.25"),
            Ok((Factor::UpperHouseSupport, 0.25))
        );
        assert!(parse_factor_assignment("public_opinion").is_err());
        assert!(parse_factor_assignment("charisma=0.5").is_err());
        assert!(parse_factor_assignment("media_coverage=lots").is_err());
    }

    #[test]
    fn parses_policy_flags() {
        assert_eq!(parse_rule_set("flat"), Ok(RuleSet::Flat));
        assert_eq!(parse_input_policy("CLAMP"), Ok(InputPolicy::Clamp));
        assert!(parse_rule_set("neural").is_err());
    }

    #[test]
    fn reads_named_scores_and_ignores_unknown_names() {
        let path = scratch_file(
            "named.json",
            r#"{"public_opinion": 0.35, "Media Coverage": 0.9, "astrology": 1.0}"#,
        );
        let scores = read_scores_file(&path).expect("scores file parses");
        std::fs::remove_file(&path).ok();

        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get(Factor::PublicOpinion), Some(0.35));
        assert_eq!(scores.get(Factor::MediaCoverage), Some(0.9));
    }

    #[test]
    fn non_object_scores_file_reports_path_and_cause() {
        let path = scratch_file("array.json", "[0.5, 0.6]");
        let err = read_scores_file(&path).expect_err("array is rejected");
        std::fs::remove_file(&path).ok();

        match &err {
            AppError::ScoresFile { path: reported, .. } => assert_eq!(reported, &path),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.source().is_some());
        assert!(err.to_string().contains("array.json"));
    }

    #[test]
    fn missing_scores_file_is_an_io_error() {
        let path = std::env::temp_dir().join("passage-calc-does-not-exist.json");
        let err = read_scores_file(&path).expect_err("missing file");
        assert!(matches!(err, AppError::Io(_)));
    }
}
