//! Search command: exhaustive subset scoring with per-size and overall winners.

use anyhow::Result;
use tracing::{info, info_span};

use regsel_select::{Criterion, best_by_adj_r2, best_by_criterion, exhaustive_search};

use crate::cli::SearchArgs;
use crate::ingest;

/// Run the exhaustive subset search and print the score table digest.
pub fn run(args: SearchArgs) -> Result<()> {
    let _cmd = info_span!("search").entered();

    let data = ingest::load_dataset(&args.data.data, &args.data.dummy)?;
    let n_predictors = data.predictor_names(&args.data.response).len();
    let max_vars = args.max_vars.unwrap_or(n_predictors);
    info!(
        n_rows = data.n_rows(),
        n_predictors, max_vars, "starting exhaustive search"
    );

    let rows = exhaustive_search(&data, &args.data.response, max_vars)?;
    println!("Evaluated {} subsets up to size {max_vars}", rows.len());
    println!();

    println!("Best subset per size (by adjusted R²):");
    for k in 1..=max_vars {
        let of_size: Vec<_> = rows.iter().filter(|r| r.k == k).cloned().collect();
        match best_by_adj_r2(&of_size) {
            Some(best) => println!(
                "  k={k}: adj R² {:>9.6}  BIC {:>10.4}  {}",
                best.adj_r2,
                best.bic,
                best.predictors.join(" + ")
            ),
            None => println!("  k={k}: no fittable subset"),
        }
    }
    println!();

    if let Some(best) = best_by_adj_r2(&rows) {
        println!(
            "Best by adjusted R²: {}  (adj R² {:.6})",
            best.predictors.join(" + "),
            best.adj_r2
        );
    }
    for criterion in [Criterion::Aic, Criterion::Bic] {
        if let Some(best) = best_by_criterion(&rows, criterion) {
            println!(
                "Best by {criterion}: {}  ({criterion} {:.4})",
                best.predictors.join(" + "),
                best.criterion_value(criterion)
            );
        }
    }

    Ok(())
}
