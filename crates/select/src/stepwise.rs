//! Greedy stepwise selection: forward addition and backward elimination.

use tracing::debug;

use regsel_ols::{Dataset, FittedModel, fit};

use crate::criterion::Criterion;
use crate::error::SelectError;

/// Search direction for stepwise selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Start empty, add the best-scoring predictor per round.
    Forward,
    /// Start with all predictors, remove the most-improving one per round.
    Backward,
}

/// The move taken in one accepted stepwise round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// A predictor was added to the included set.
    Add,
    /// A predictor was removed from the included set.
    Remove,
}

/// One accepted round of the selection path.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Whether the predictor was added or removed.
    pub action: StepAction,
    /// The predictor that moved.
    pub predictor: String,
    /// Criterion value of the model after the move.
    pub score: f64,
}

/// Terminal output of a stepwise run: the final model, the included
/// predictor names, and the path of accepted moves that led there.
#[derive(Debug, Clone)]
pub struct StepwiseFit {
    model: FittedModel,
    included: Vec<String>,
    path: Vec<Step>,
}

impl StepwiseFit {
    /// The model fitted on the terminal included set.
    ///
    /// Intercept-only if backward elimination removed every predictor.
    pub fn model(&self) -> &FittedModel {
        &self.model
    }

    /// Included predictor names: addition order for forward runs,
    /// dataset order of the survivors for backward runs.
    pub fn included(&self) -> &[String] {
        &self.included
    }

    /// Accepted moves in order.
    pub fn path(&self) -> &[Step] {
        &self.path
    }

    /// Consumes the result, returning the terminal model.
    pub fn into_model(self) -> FittedModel {
        self.model
    }
}

/// Runs greedy stepwise selection until no move strictly improves the
/// criterion.
///
/// Each round evaluates every legal move (additions for
/// [`Direction::Forward`], removals for [`Direction::Backward`]), in
/// dataset column order, and accepts the single best-scoring one if it
/// strictly improves on the current score. Ties go to the
/// first candidate in enumeration order, so results are reproducible.
/// The terminal model is a local optimum, not necessarily a global one,
/// and the two directions may terminate at different models.
///
/// Candidates whose fit fails recoverably (e.g. a collinear subset)
/// score +∞ and are never selected. For backward runs the initial
/// full-model fit has no such escape: if it fails, the error
/// propagates.
///
/// # Example
///
/// ```
/// use regsel_ols::Dataset;
/// use regsel_select::{Criterion, Direction, stepwise};
///
/// let x: Vec<f64> = (0..40).map(|i| i as f64).collect();
/// let y: Vec<f64> = x.iter().map(|&v| 2.0 + 3.0 * v + (v * 0.7).sin()).collect();
/// let junk: Vec<f64> = (0..40).map(|i| ((i * 13) % 7) as f64).collect();
/// let data = Dataset::from_columns(vec![
///     ("x".to_string(), x),
///     ("junk".to_string(), junk),
///     ("y".to_string(), y),
/// ])
/// .unwrap();
///
/// let result = stepwise(&data, "y", Direction::Forward, Criterion::Bic).unwrap();
/// assert_eq!(result.included()[0], "x");
/// ```
pub fn stepwise(
    data: &Dataset,
    response: &str,
    direction: Direction,
    criterion: Criterion,
) -> Result<StepwiseFit, SelectError> {
    let predictors = crate::candidate_predictors(data, response)?;
    match direction {
        Direction::Forward => forward(data, response, &predictors, criterion),
        Direction::Backward => backward(data, response, &predictors, criterion),
    }
}

fn forward(
    data: &Dataset,
    response: &str,
    predictors: &[String],
    criterion: Criterion,
) -> Result<StepwiseFit, SelectError> {
    let mut included: Vec<usize> = Vec::new();
    let mut current = f64::INFINITY;
    let mut path = Vec::new();

    loop {
        let candidates: Vec<usize> = (0..predictors.len())
            .filter(|i| !included.contains(i))
            .collect();
        let round = evaluate_round(
            data,
            response,
            predictors,
            &included,
            &candidates,
            StepAction::Add,
            criterion,
        )?;
        // Loop invariant: `current` is the score of the model on
        // `included`, and no single addition evaluated so far beats it.
        let Some((idx, score)) = round else { break };
        if score >= current {
            break;
        }
        debug!(predictor = %predictors[idx], score, "forward step: adding");
        included.push(idx);
        path.push(Step {
            action: StepAction::Add,
            predictor: predictors[idx].clone(),
            score,
        });
        current = score;
    }

    finalize(data, response, predictors, &included, path)
}

fn backward(
    data: &Dataset,
    response: &str,
    predictors: &[String],
    criterion: Criterion,
) -> Result<StepwiseFit, SelectError> {
    let mut included: Vec<usize> = (0..predictors.len()).collect();
    let all_names: Vec<&str> = predictors.iter().map(|s| s.as_str()).collect();
    // The full model anchors the search; a singular or unfittable full
    // model is a caller problem, not a skippable candidate.
    let full = fit(data, response, &all_names)?;
    let mut current = criterion.score(&full);
    let mut path = Vec::new();

    while !included.is_empty() {
        let candidates = included.clone();
        let round = evaluate_round(
            data,
            response,
            predictors,
            &included,
            &candidates,
            StepAction::Remove,
            criterion,
        )?;
        let Some((idx, score)) = round else { break };
        if score >= current {
            break;
        }
        debug!(predictor = %predictors[idx], score, "backward step: removing");
        included.retain(|&i| i != idx);
        path.push(Step {
            action: StepAction::Remove,
            predictor: predictors[idx].clone(),
            score,
        });
        current = score;
    }

    finalize(data, response, predictors, &included, path)
}

/// Evaluates every candidate move for one round and returns the best
/// `(predictor index, score)`, first-wins on ties.
///
/// Pure with respect to the search state: the caller decides whether
/// the returned move improves on the current score. Recoverable fit
/// failures are treated as score +∞ (the candidate is simply never
/// best); non-recoverable ones propagate.
fn evaluate_round(
    data: &Dataset,
    response: &str,
    predictors: &[String],
    included: &[usize],
    candidates: &[usize],
    action: StepAction,
    criterion: Criterion,
) -> Result<Option<(usize, f64)>, SelectError> {
    let mut best: Option<(usize, f64)> = None;

    for &c in candidates {
        let subset_idx: Vec<usize> = match action {
            StepAction::Add => included.iter().copied().chain(Some(c)).collect(),
            StepAction::Remove => included.iter().copied().filter(|&i| i != c).collect(),
        };
        let names: Vec<&str> = subset_idx.iter().map(|&i| predictors[i].as_str()).collect();
        let score = match fit(data, response, &names) {
            Ok(model) => criterion.score(&model),
            Err(e) if e.is_recoverable() => {
                debug!(predictor = %predictors[c], error = %e, "candidate skipped");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if best.is_none_or(|(_, s)| score < s) {
            best = Some((c, score));
        }
    }

    Ok(best)
}

/// Refits the terminal included set and assembles the result.
fn finalize(
    data: &Dataset,
    response: &str,
    predictors: &[String],
    included: &[usize],
    path: Vec<Step>,
) -> Result<StepwiseFit, SelectError> {
    let names: Vec<&str> = included.iter().map(|&i| predictors[i].as_str()).collect();
    let model = fit(data, response, &names)?;
    Ok(StepwiseFit {
        model,
        included: names.iter().map(|s| s.to_string()).collect(),
        path,
    })
}
