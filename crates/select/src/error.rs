//! Error types for the regsel-select crate.

use regsel_ols::OlsError;

/// Error type for all fallible operations in the regsel-select crate.
///
/// Candidate fits that fail with a recoverable [`OlsError`] (singular
/// design, too few rows) never surface here; the search algorithms skip
/// or penalize those candidates. Only invalid requests and
/// non-recoverable fit failures propagate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SelectError {
    /// Returned when the response column is not in the dataset.
    #[error("response column '{name}' not found in dataset")]
    UnknownResponse {
        /// The missing name.
        name: String,
    },

    /// Returned when the dataset has no columns besides the response.
    #[error("dataset has no candidate predictors besides the response")]
    NoPredictors,

    /// Returned when `max_vars` is zero or exceeds the candidate count.
    #[error("max_vars must be in 1..={n_predictors}, got {max_vars}")]
    InvalidMaxVars {
        /// The invalid value.
        max_vars: usize,
        /// Number of candidate predictors available.
        n_predictors: usize,
    },

    /// A fit failed with a non-recoverable error, or a fit the algorithm
    /// depends on unconditionally (e.g. the backward-elimination full
    /// model) could not be computed.
    #[error(transparent)]
    Fit(#[from] OlsError),
}
