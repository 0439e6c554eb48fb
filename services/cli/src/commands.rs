use crate::infra::{load_calculator, parse_factor_assignment, read_scores_file, timestamp};
use clap::Args;
use passage_calc::config::AppConfig;
use passage_calc::error::AppError;
use passage_calc::report::{format_percent, AnalysisReport};
use passage_calc::scoring::{Factor, FactorScores};
use passage_calc::PassageCalculator;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct CountriesArgs {
    /// Only list countries whose name contains this text (case-insensitive)
    #[arg(long)]
    pub(crate) filter: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct SystemArgs {
    /// Country name exactly as listed by `countries`
    pub(crate) country: String,
    /// Print the full record as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Country name exactly as listed by `countries`
    #[arg(long)]
    pub(crate) country: String,
    /// Bill name used in the report header
    #[arg(long, default_value = "New Bill")]
    pub(crate) bill: String,
    /// Factor score as NAME=VALUE; repeat for several factors
    #[arg(long = "factor", value_parser = parse_factor_assignment)]
    pub(crate) factors: Vec<(Factor, f64)>,
    /// JSON object of factor name to score, applied before --factor values
    #[arg(long)]
    pub(crate) scores: Option<PathBuf>,
    /// Start from an empty score set instead of the default slider values
    #[arg(long)]
    pub(crate) no_defaults: bool,
    /// Write the plain-text report to this path
    #[arg(long)]
    pub(crate) report: Option<PathBuf>,
    /// Write the factor breakdown as CSV to this path
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Print the analysis summary as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_countries(config: &AppConfig, args: CountriesArgs) -> Result<(), AppError> {
    let calculator = load_calculator(config)?;
    let filter = args.filter.map(|text| text.to_lowercase());

    let countries: Vec<String> = calculator
        .list_countries()
        .into_iter()
        .filter(|name| {
            filter
                .as_deref()
                .map_or(true, |text| name.to_lowercase().contains(text))
        })
        .collect();

    for name in &countries {
        println!("{name}");
    }
    println!("\n{} of {} countries", countries.len(), calculator.registry().len());
    Ok(())
}

pub(crate) fn run_system(config: &AppConfig, args: SystemArgs) -> Result<(), AppError> {
    let calculator = load_calculator(config)?;
    let record = calculator
        .registry()
        .record(&args.country)
        .ok_or_else(|| AppError::UnknownCountry(args.country.clone()))?;
    let weights = calculator
        .weights_for(&args.country)
        .ok_or_else(|| AppError::UnknownCountry(args.country.clone()))?;

    if args.json {
        let body = serde_json::json!({
            "descriptor": record.descriptor,
            "profile": record.profile,
            "rule_set": calculator.rule_set(),
            "weights": weights,
            "weight_total": weights.total(),
        });
        println!("{body:#}");
        return Ok(());
    }

    let descriptor = &record.descriptor;
    let profile = &record.profile;
    println!("{} ({})", descriptor.country_name, profile.country_code);
    println!("- Government type: {}", or_unknown(&profile.government_type));
    println!("- Capital: {}", or_unknown(&profile.capital));
    println!(
        "- Legislature: {} ({})",
        descriptor.legislature_type.label(),
        or_unknown(&profile.legislative_branch.structure)
    );
    println!("- System: {}", descriptor.system_type.label());
    println!(
        "\nWeights ({} rules, v{})",
        calculator.rule_set().key(),
        calculator.rule_set().version()
    );
    for (factor, weight) in weights.iter() {
        println!("  - {}: {}", factor.label(), format_percent(weight));
    }
    println!("  total: {}", format_percent(weights.total()));
    Ok(())
}

pub(crate) fn run_score(config: &AppConfig, args: ScoreArgs) -> Result<(), AppError> {
    let calculator = load_calculator(config)?;
    let scores = collect_scores(&args)?;

    let Some(report) = score_bill(&calculator, &args.bill, &args.country, &scores)? else {
        println!(
            "No political system data available for '{}'. Run `countries` to see valid names.",
            args.country
        );
        return Ok(());
    };

    if args.json {
        println!("{:#}", serde_json::to_value(report.summary()).map_err(std::io::Error::from)?);
    } else {
        print!("{}", report.render_text());
    }

    if let Some(path) = &args.report {
        report.write_text(BufWriter::new(File::create(path)?))?;
        info!(path = %path.display(), "text report written");
    }
    if let Some(path) = &args.csv {
        report.write_csv(BufWriter::new(File::create(path)?))?;
        info!(path = %path.display(), "breakdown csv written");
    }
    Ok(())
}

/// Defaults, then the scores file, then individual `--factor` values.
fn collect_scores(args: &ScoreArgs) -> Result<FactorScores, AppError> {
    let mut scores = if args.no_defaults {
        FactorScores::new()
    } else {
        FactorScores::defaults(Factor::BASELINE)
    };
    if let Some(path) = &args.scores {
        scores.merge(&read_scores_file(path)?);
    }
    for (factor, value) in &args.factors {
        scores.set(*factor, *value);
    }
    Ok(scores)
}

pub(crate) fn score_bill(
    calculator: &PassageCalculator,
    bill: &str,
    country: &str,
    scores: &FactorScores,
) -> Result<Option<AnalysisReport>, AppError> {
    let outcome = calculator.compute_probability(country, scores)?;
    Ok(outcome.map(|outcome| AnalysisReport::new(bill, country, outcome, timestamp())))
}

fn or_unknown(text: &str) -> &str {
    if text.trim().is_empty() {
        "unknown"
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_args() -> ScoreArgs {
        ScoreArgs {
            country: "Federative Republic of Brazil".to_string(),
            bill: "Budget Act".to_string(),
            factors: Vec::new(),
            scores: None,
            no_defaults: false,
            report: None,
            csv: None,
            json: false,
        }
    }

    #[test]
    fn starts_from_default_slider_values() {
        let scores = collect_scores(&score_args()).expect("scores collected");

        assert_eq!(scores, FactorScores::defaults(Factor::BASELINE));
        assert_eq!(scores.get(Factor::GoverningPartySupport), Some(0.8));
        assert_eq!(scores.get(Factor::UpperHouseSupport), None);
    }

    #[test]
    fn no_defaults_keeps_only_explicit_factors() {
        let mut args = score_args();
        args.no_defaults = true;
        args.factors = vec![(Factor::PublicOpinion, 0.45)];

        let scores = collect_scores(&args).expect("scores collected");
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get(Factor::PublicOpinion), Some(0.45));
    }

    #[test]
    fn factor_flags_override_scores_file_which_overrides_defaults() {
        let path = std::env::temp_dir().join(format!(
            "passage-calc-{}-layered.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"public_opinion": 0.2, "fiscal_impact": 0.1, "upper_house_support": 0.4}"#,
        )
        .expect("write scores file");

        let mut args = score_args();
        args.scores = Some(path.clone());
        args.factors = vec![(Factor::PublicOpinion, 0.95)];
        let scores = collect_scores(&args);
        std::fs::remove_file(&path).ok();
        let scores = scores.expect("scores collected");

        assert_eq!(scores.get(Factor::PublicOpinion), Some(0.95));
        assert_eq!(scores.get(Factor::FiscalImpact), Some(0.1));
        assert_eq!(scores.get(Factor::UpperHouseSupport), Some(0.4));
        assert_eq!(scores.get(Factor::MediaCoverage), Some(0.6));
    }

    #[test]
    fn blank_profile_fields_render_as_unknown() {
        assert_eq!(or_unknown("  "), "unknown");
        assert_eq!(or_unknown("Brasilia"), "Brasilia");
    }
}
