use crate::config::ConfigError;
use crate::registry::DataLoadError;
use crate::report::ReportError;
use crate::scoring::InvalidFactorScore;
use crate::session::SessionError;
use crate::telemetry::TelemetryError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    DataLoad(DataLoadError),
    InvalidInput(InvalidFactorScore),
    ScoresFile {
        path: PathBuf,
        source: serde_json::Error,
    },
    UnknownCountry(String),
    Report(ReportError),
    Session(SessionError),
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::DataLoad(err) => write!(f, "dataset error: {}", err),
            AppError::InvalidInput(err) => write!(f, "invalid input: {}", err),
            AppError::ScoresFile { path, source } => write!(
                f,
                "{} is not a JSON object of factor scores: {}",
                path.display(),
                source
            ),
            AppError::UnknownCountry(name) => {
                write!(f, "no political system data available for '{}'", name)
            }
            AppError::Report(err) => write!(f, "report error: {}", err),
            AppError::Session(err) => write!(f, "session error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::DataLoad(err) => Some(err),
            AppError::InvalidInput(err) => Some(err),
            AppError::ScoresFile { source, .. } => Some(source),
            AppError::UnknownCountry(_) => None,
            AppError::Report(err) => Some(err),
            AppError::Session(err) => Some(err),
            AppError::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<DataLoadError> for AppError {
    fn from(value: DataLoadError) -> Self {
        Self::DataLoad(value)
    }
}

impl From<InvalidFactorScore> for AppError {
    fn from(value: InvalidFactorScore) -> Self {
        Self::InvalidInput(value)
    }
}

impl From<ReportError> for AppError {
    fn from(value: ReportError) -> Self {
        Self::Report(value)
    }
}

impl From<SessionError> for AppError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
