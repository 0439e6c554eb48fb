use crate::commands::{run_countries, run_score, run_system, CountriesArgs, ScoreArgs, SystemArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::infra::{parse_input_policy, parse_rule_set};
use clap::{Args, Parser, Subcommand};
use passage_calc::config::AppConfig;
use passage_calc::error::AppError;
use passage_calc::scoring::{InputPolicy, RuleSet};
use passage_calc::telemetry;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "Legislative Passage Calculator",
    about = "Estimate a bill's probability of passage from country political-system data",
    version
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List countries available in the dataset
    Countries(CountriesArgs),
    /// Show the classified political system and derived weights for a country
    System(SystemArgs),
    /// Score a bill for a country and optionally export the analysis
    Score(ScoreArgs),
    /// Score sample bills and keep them in a session store
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct GlobalArgs {
    /// Override the configured dataset path
    #[arg(long, global = true)]
    pub(crate) dataset: Option<PathBuf>,
    /// Weighting rule set: country_aware or flat
    #[arg(long, global = true, value_parser = parse_rule_set)]
    pub(crate) rule_set: Option<RuleSet>,
    /// Out-of-range factor scores: reject or clamp
    #[arg(long, global = true, value_parser = parse_input_policy)]
    pub(crate) input_policy: Option<InputPolicy>,
    /// Rescale derived weights so they sum to 1
    #[arg(long, global = true)]
    pub(crate) normalize_weights: bool,
    /// Override the configured log level/filter
    #[arg(long, global = true)]
    pub(crate) log_level: Option<String>,
}

impl GlobalArgs {
    fn apply(self, config: &mut AppConfig) {
        if let Some(dataset) = self.dataset {
            config.dataset.path = dataset;
        }
        if let Some(rule_set) = self.rule_set {
            config.scoring.rule_set = rule_set;
        }
        if let Some(input_policy) = self.input_policy {
            config.scoring.input_policy = input_policy;
        }
        if self.normalize_weights {
            config.scoring.normalize_weights = true;
        }
        if let Some(log_level) = self.log_level {
            config.telemetry.log_level = log_level;
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    cli.global.apply(&mut config);

    telemetry::init(&config.telemetry)?;
    debug!(
        ?config.environment,
        dataset = %config.dataset.path.display(),
        rule_set = config.scoring.rule_set.key(),
        "configuration loaded"
    );

    match cli.command {
        Command::Countries(args) => run_countries(&config, args),
        Command::System(args) => run_system(&config, args),
        Command::Score(args) => run_score(&config, args),
        Command::Demo(args) => run_demo(&config, args),
    }
}
