//! Variable selection for OLS regression models.
//!
//! Two search strategies over the candidate predictors of a
//! [`Dataset`], both built on the `regsel-ols` fit-and-score primitive:
//!
//! | Strategy | Function | Output |
//! |----------|----------|--------|
//! | Exhaustive | [`exhaustive_search`] | one [`SubsetScore`] per evaluated subset |
//! | Greedy stepwise | [`stepwise`] | terminal model + [`Step`] path |
//!
//! # Quick start
//!
//! ```
//! use regsel_ols::Dataset;
//! use regsel_select::{Criterion, best_by_criterion, exhaustive_search};
//!
//! let data = Dataset::from_columns(vec![
//!     ("x1".to_string(), (0..30).map(|i| i as f64).collect()),
//!     ("x2".to_string(), (0..30).map(|i| ((i * 11) % 13) as f64).collect()),
//!     ("y".to_string(), (0..30).map(|i| 2.0 + 3.0 * i as f64 + ((i % 4) as f64)).collect()),
//! ])
//! .unwrap();
//!
//! let rows = exhaustive_search(&data, "y", 2).unwrap();
//! let best = best_by_criterion(&rows, Criterion::Bic).unwrap();
//! assert!(best.predictors.contains(&"x1".to_string()));
//! ```
//!
//! # Architecture
//!
//! ```text
//! exhaustive_search()                stepwise()
//!   ├─ validate inputs                 ├─ validate inputs
//!   ├─ enumerate combinations          ├─ evaluate_round()  (per round)
//!   ├─ fit each subset  (rayon)        ├─ accept strict improvements
//!   └─ collect SubsetScore rows        └─ refit terminal set
//! ```
//!
//! Candidate fits that fail recoverably (collinear subsets, too few
//! rows) are skipped or scored +∞ — they never abort a search. Invalid
//! requests (unknown response, bad `max_vars`) fail fast with
//! [`SelectError`].

pub mod criterion;
pub mod error;
pub mod exhaustive;
pub mod stepwise;

pub use criterion::Criterion;
pub use error::SelectError;
pub use exhaustive::{SubsetScore, best_by_adj_r2, best_by_criterion, exhaustive_search};
pub use stepwise::{Direction, Step, StepAction, StepwiseFit, stepwise};

use regsel_ols::Dataset;

/// Resolves the candidate predictor names for a search: every column
/// except the response, in dataset order.
pub(crate) fn candidate_predictors(
    data: &Dataset,
    response: &str,
) -> Result<Vec<String>, SelectError> {
    if data.column(response).is_none() {
        return Err(SelectError::UnknownResponse {
            name: response.to_string(),
        });
    }
    let names: Vec<String> = data
        .predictor_names(response)
        .into_iter()
        .map(String::from)
        .collect();
    if names.is_empty() {
        return Err(SelectError::NoPredictors);
    }
    Ok(names)
}
