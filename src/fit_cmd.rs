//! Fit command: fit one OLS model, print its summary and optional intervals.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use regsel_ols::fit;

use crate::cli::FitArgs;
use crate::ingest;
use crate::report;

/// Run a single-model fit.
pub fn run(args: FitArgs) -> Result<()> {
    let _cmd = info_span!("fit").entered();

    let data = ingest::load_dataset(&args.data.data, &args.data.dummy)?;
    info!(
        n_rows = data.n_rows(),
        n_columns = data.n_columns(),
        "dataset loaded"
    );

    let names: Vec<String> = match &args.predictors {
        Some(list) => list
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        None => data
            .predictor_names(&args.data.response)
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let model = fit(&data, &args.data.response, &refs).context("model fit failed")?;
    report::print_model(&model);

    if let Some(at) = &args.at {
        let point: Vec<f64> = at
            .split(',')
            .map(|s| {
                let s = s.trim();
                s.parse::<f64>()
                    .with_context(|| format!("--at value '{s}' is not numeric"))
            })
            .collect::<Result<_>>()?;

        let ci = model
            .mean_interval(&point, args.level)
            .context("mean-response interval failed")?;
        let pi = model
            .prediction_interval(&point, args.level)
            .context("prediction interval failed")?;

        let pct = args.level * 100.0;
        println!();
        println!("Prediction at ({at}):");
        println!("  estimate: {:.6}", ci.estimate);
        println!("  {pct:.0}% CI (mean response):   [{:.6}, {:.6}]", ci.lower, ci.upper);
        println!("  {pct:.0}% PI (new observation): [{:.6}, {:.6}]", pi.lower, pi.upper);
    }

    Ok(())
}
