//! Exhaustive best-subset search over all predictor combinations.

use rayon::prelude::*;
use tracing::debug;

use regsel_ols::{Dataset, fit};

use crate::criterion::Criterion;
use crate::error::SelectError;

/// Score row for one evaluated predictor subset.
///
/// The search returns every evaluated row, not just winners, so callers
/// can reduce by any criterion afterwards or inspect per-size
/// distributions.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsetScore {
    /// Predictor names in dataset order.
    pub predictors: Vec<String>,
    /// Subset size k.
    pub k: usize,
    /// Adjusted R² of the fitted model.
    pub adj_r2: f64,
    /// Akaike information criterion.
    pub aic: f64,
    /// Bayesian information criterion.
    pub bic: f64,
}

impl SubsetScore {
    /// Value of the given criterion for this row.
    pub fn criterion_value(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Aic => self.aic,
            Criterion::Bic => self.bic,
        }
    }
}

/// Fits every predictor subset of size 1..=`max_vars` and returns one
/// [`SubsetScore`] per successful fit.
///
/// Subsets are enumerated in a fixed order — size ascending, then
/// lexicographic over dataset column positions — so the returned rows
/// are deterministic across runs. Candidate fits run in parallel;
/// collection order follows enumeration order, not completion order.
///
/// Candidates that fail recoverably (collinear subset, too few rows)
/// are skipped and contribute no row. Anything else aborts the search.
///
/// # Example
///
/// ```
/// use regsel_ols::Dataset;
/// use regsel_select::exhaustive_search;
///
/// let data = Dataset::from_columns(vec![
///     ("x1".to_string(), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]),
///     ("x2".to_string(), vec![1.0, 0.0, 2.0, 1.0, 3.0, 0.0]),
///     ("y".to_string(), vec![1.2, 3.9, 7.1, 9.8, 13.2, 15.9]),
/// ])
/// .unwrap();
///
/// let rows = exhaustive_search(&data, "y", 2).unwrap();
/// // C(2,1) + C(2,2) = 3 candidate subsets.
/// assert_eq!(rows.len(), 3);
/// ```
pub fn exhaustive_search(
    data: &Dataset,
    response: &str,
    max_vars: usize,
) -> Result<Vec<SubsetScore>, SelectError> {
    let predictors = crate::candidate_predictors(data, response)?;
    let p = predictors.len();
    if max_vars < 1 || max_vars > p {
        return Err(SelectError::InvalidMaxVars {
            max_vars,
            n_predictors: p,
        });
    }

    let mut combos: Vec<Vec<usize>> = Vec::new();
    for k in 1..=max_vars {
        combos.extend(combinations(p, k));
    }
    debug!(
        n_subsets = combos.len(),
        n_predictors = p,
        max_vars,
        "enumerated candidate subsets"
    );

    let rows: Vec<Option<SubsetScore>> = combos
        .par_iter()
        .map(|combo| -> Result<Option<SubsetScore>, SelectError> {
            let names: Vec<&str> = combo.iter().map(|&i| predictors[i].as_str()).collect();
            match fit(data, response, &names) {
                Ok(model) => Ok(Some(SubsetScore {
                    predictors: names.iter().map(|s| s.to_string()).collect(),
                    k: combo.len(),
                    adj_r2: model.adj_r_squared(),
                    aic: model.aic(),
                    bic: model.bic(),
                })),
                Err(e) if e.is_recoverable() => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .collect::<Result<_, _>>()?;

    let evaluated = rows.into_iter().flatten().collect::<Vec<_>>();
    debug!(
        n_rows = evaluated.len(),
        n_skipped = combos.len() - evaluated.len(),
        "subset search finished"
    );
    Ok(evaluated)
}

/// Row with the highest adjusted R², first-wins on ties.
pub fn best_by_adj_r2(rows: &[SubsetScore]) -> Option<&SubsetScore> {
    rows.iter()
        .reduce(|best, row| if row.adj_r2 > best.adj_r2 { row } else { best })
}

/// Row with the lowest criterion value, first-wins on ties.
pub fn best_by_criterion(rows: &[SubsetScore], criterion: Criterion) -> Option<&SubsetScore> {
    rows.iter().reduce(|best, row| {
        if row.criterion_value(criterion) < best.criterion_value(criterion) {
            row
        } else {
            best
        }
    })
}

/// All k-element index combinations of `0..p` in lexicographic order.
fn combinations(p: usize, k: usize) -> Vec<Vec<usize>> {
    debug_assert!(k >= 1 && k <= p);
    let mut out = Vec::new();
    let mut combo: Vec<usize> = (0..k).collect();
    loop {
        out.push(combo.clone());
        // Rightmost position that has not reached its final value.
        let mut i = k;
        while i > 0 && combo[i - 1] == p - k + (i - 1) {
            i -= 1;
        }
        if i == 0 {
            return out;
        }
        combo[i - 1] += 1;
        for j in i..k {
            combo[j] = combo[j - 1] + 1;
        }
    }
}
