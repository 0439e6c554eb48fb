use crate::scoring::{InputPolicy, RuleSet, ScoringPolicy};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the calculator.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub dataset: DatasetConfig,
    pub scoring: ScoringPolicy,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let path = env::var("PASSAGE_DATASET")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH));

        let rule_set = match env::var("PASSAGE_RULE_SET") {
            Ok(value) => RuleSet::from_key(&value).ok_or(ConfigError::InvalidRuleSet(value))?,
            Err(_) => RuleSet::default(),
        };

        let input_policy = match env::var("PASSAGE_INPUT_POLICY") {
            Ok(value) => {
                InputPolicy::from_key(&value).ok_or(ConfigError::InvalidInputPolicy(value))?
            }
            Err(_) => InputPolicy::default(),
        };

        let normalize_weights = match env::var("PASSAGE_NORMALIZE_WEIGHTS") {
            Ok(value) => parse_flag(&value).ok_or(ConfigError::InvalidFlag {
                name: "PASSAGE_NORMALIZE_WEIGHTS",
                value,
            })?,
            Err(_) => false,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            dataset: DatasetConfig { path },
            scoring: ScoringPolicy {
                rule_set,
                input_policy,
                normalize_weights,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

pub const DEFAULT_DATASET_PATH: &str = "data/factbook.json";

/// Location of the country government dataset.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRuleSet(String),
    InvalidInputPolicy(String),
    InvalidFlag { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRuleSet(value) => write!(
                f,
                "PASSAGE_RULE_SET must be 'country_aware' or 'flat', got '{}'",
                value
            ),
            ConfigError::InvalidInputPolicy(value) => write!(
                f,
                "PASSAGE_INPUT_POLICY must be 'reject' or 'clamp', got '{}'",
                value
            ),
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{} must be a boolean flag, got '{}'", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
