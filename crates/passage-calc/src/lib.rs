//! Heuristic passage-probability engine.
//!
//! Country government records are classified into a political-system
//! descriptor, the descriptor drives a weight vector over bill factors, and the
//! scoring engine turns caller-supplied factor scores into a clamped
//! probability with an itemized breakdown.

pub mod calculator;
pub mod config;
pub mod error;
pub mod registry;
pub mod report;
pub mod scoring;
pub mod session;
pub mod telemetry;

pub use calculator::PassageCalculator;
pub use registry::{
    CountrySystemDescriptor, DataLoadError, LegislatureType, PoliticalSystemRegistry, SystemType,
};
pub use scoring::{interpret, Factor, FactorScores, PassageOutlook, ScoreOutcome, WeightVector};
