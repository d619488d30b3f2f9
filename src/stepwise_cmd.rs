//! Stepwise command: greedy selection with a printed path and final summary.

use anyhow::Result;
use tracing::{info, info_span};

use regsel_select::{Criterion, Direction, StepAction, stepwise};

use crate::cli::StepwiseArgs;
use crate::ingest;
use crate::report;

/// Run stepwise selection and print the accepted moves and final model.
pub fn run(args: StepwiseArgs) -> Result<()> {
    let _cmd = info_span!("stepwise").entered();

    let data = ingest::load_dataset(&args.data.data, &args.data.dummy)?;
    let direction: Direction = args.direction.into();
    let criterion: Criterion = args.criterion.into();
    info!(
        n_rows = data.n_rows(),
        ?direction,
        %criterion,
        "starting stepwise selection"
    );

    let result = stepwise(&data, &args.data.response, direction, criterion)?;

    if result.path().is_empty() {
        println!("No move improved {criterion}; keeping the starting model.");
    }
    for (i, step) in result.path().iter().enumerate() {
        let sign = match step.action {
            StepAction::Add => '+',
            StepAction::Remove => '-',
        };
        println!(
            "step {}: {sign} {}  ({criterion} {:.4})",
            i + 1,
            step.predictor,
            step.score
        );
    }
    println!();

    if result.included().is_empty() {
        println!("Selected model: intercept only");
    } else {
        println!("Selected predictors: {}", result.included().join(" + "));
    }
    println!();
    report::print_model(result.model());

    Ok(())
}
