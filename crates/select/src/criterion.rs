//! Information criteria used to score candidate models.

use std::fmt;

use regsel_ols::FittedModel;

/// Penalized goodness-of-fit score for comparing models of different
/// size. Lower is better for both variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Criterion {
    /// Akaike information criterion.
    Aic,
    /// Bayesian information criterion. Penalizes model size harder for
    /// n ≥ 8, so it tends to pick smaller models.
    #[default]
    Bic,
}

impl Criterion {
    /// Extracts this criterion's value from a fitted model.
    pub fn score(&self, model: &FittedModel) -> f64 {
        match self {
            Criterion::Aic => model.aic(),
            Criterion::Bic => model.bic(),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Aic => write!(f, "AIC"),
            Criterion::Bic => write!(f, "BIC"),
        }
    }
}
