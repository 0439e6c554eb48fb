use crate::commands::score_bill;
use crate::infra::load_calculator;
use clap::Args;
use passage_calc::config::AppConfig;
use passage_calc::error::AppError;
use passage_calc::registry::SystemType;
use passage_calc::report::format_percent;
use passage_calc::scoring::{Factor, FactorScores};
use passage_calc::session::{AnalysisStore, InMemoryAnalysisStore, SavedAnalysis};
use passage_calc::PassageCalculator;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Countries to score; defaults to one per system type found in the dataset
    #[arg(long = "country")]
    pub(crate) countries: Vec<String>,
    /// Bill name for the sample analyses
    #[arg(long, default_value = "Infrastructure Investment Bill")]
    pub(crate) bill: String,
}

pub(crate) fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let calculator = load_calculator(config)?;
    let store = InMemoryAnalysisStore::default();
    let countries = if args.countries.is_empty() {
        sample_countries(&calculator)
    } else {
        args.countries
    };

    println!(
        "Passage calculator demo ({} rules)",
        calculator.rule_set().key()
    );

    let baseline = FactorScores::defaults(Factor::ordered());
    for country in &countries {
        save_analysis(&calculator, &store, &args.bill, country, &baseline)?;
    }

    // Re-scoring the same bill and country replaces the saved entry.
    if let Some(country) = countries.first() {
        let weakened = baseline
            .clone()
            .with(Factor::GoverningPartySupport, 0.2)
            .with(Factor::CommitteeApproval, 0.1);
        println!("\nRe-scoring for {country} after losing governing-party support");
        save_analysis(&calculator, &store, &args.bill, country, &weakened)?;
    }

    println!("\nSaved analyses");
    for saved in store.list()? {
        println!(
            "- {}: {} ({})",
            saved.key,
            format_percent(saved.report.outcome.probability),
            saved.report.outlook().label()
        );
    }
    Ok(())
}

fn save_analysis(
    calculator: &PassageCalculator,
    store: &InMemoryAnalysisStore,
    bill: &str,
    country: &str,
    scores: &FactorScores,
) -> Result<(), AppError> {
    let Some(report) = score_bill(calculator, bill, country, scores)? else {
        println!("- {country}: no political system data, skipped");
        return Ok(());
    };

    println!(
        "- {country}: {} -> {}",
        format_percent(report.outcome.probability),
        report.outlook().label()
    );
    for penalty in &report.outcome.penalties {
        println!("    adjustment: {}", penalty.summary());
    }

    if store
        .save(SavedAnalysis::new(scores.clone(), report))?
        .is_some()
    {
        println!("    replaced earlier analysis");
    }
    Ok(())
}

/// First country of each system type, in name order.
fn sample_countries(calculator: &PassageCalculator) -> Vec<String> {
    [
        SystemType::Parliamentary,
        SystemType::Presidential,
        SystemType::Monarchy,
        SystemType::Other,
    ]
    .into_iter()
    .filter_map(|system| {
        calculator
            .registry()
            .descriptors()
            .find(|descriptor| descriptor.system_type == system)
            .map(|descriptor| descriptor.country_name.clone())
    })
    .collect()
}
