use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use regsel_select::{Criterion, Direction};

/// regsel OLS regression and model-selection tool.
#[derive(Parser)]
#[command(
    name = "regsel",
    version,
    about = "OLS regression fitting with subset and stepwise model selection"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Fit one OLS model and print its summary.
    Fit(FitArgs),
    /// Score every predictor subset exhaustively.
    Search(SearchArgs),
    /// Run greedy forward/backward stepwise selection.
    Stepwise(StepwiseArgs),
}

/// Input arguments shared by every subcommand.
#[derive(clap::Args)]
pub struct DataArgs {
    /// Path to input CSV file (header row required, numeric cells).
    #[arg(short, long)]
    pub data: PathBuf,

    /// Response column name.
    #[arg(short, long)]
    pub response: String,

    /// Categorical column to expand into 0/1 indicator columns
    /// (repeatable). The first level in file order is the baseline.
    #[arg(long = "dummy", value_name = "COLUMN")]
    pub dummy: Vec<String>,
}

/// Arguments for the `fit` subcommand.
#[derive(clap::Args)]
pub struct FitArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Comma-separated predictor columns (default: all non-response columns).
    #[arg(short, long)]
    pub predictors: Option<String>,

    /// Comma-separated predictor values for an interval prediction.
    #[arg(long, value_name = "V1,V2,...")]
    pub at: Option<String>,

    /// Confidence level for intervals.
    #[arg(long, default_value_t = 0.95)]
    pub level: f64,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Largest subset size to evaluate (default: all predictors).
    #[arg(short, long)]
    pub max_vars: Option<usize>,
}

/// Arguments for the `stepwise` subcommand.
#[derive(clap::Args)]
pub struct StepwiseArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Search direction.
    #[arg(long, value_enum)]
    pub direction: DirectionArg,

    /// Information criterion driving the search.
    #[arg(long, value_enum, default_value = "bic")]
    pub criterion: CriterionArg,
}

/// CLI mirror of [`Direction`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    /// Start empty, add predictors.
    Forward,
    /// Start full, remove predictors.
    Backward,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Forward => Direction::Forward,
            DirectionArg::Backward => Direction::Backward,
        }
    }
}

/// CLI mirror of [`Criterion`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CriterionArg {
    /// Akaike information criterion.
    Aic,
    /// Bayesian information criterion.
    Bic,
}

impl From<CriterionArg> for Criterion {
    fn from(arg: CriterionArg) -> Self {
        match arg {
            CriterionArg::Aic => Criterion::Aic,
            CriterionArg::Bic => Criterion::Bic,
        }
    }
}
