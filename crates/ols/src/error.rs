//! Error types for the regsel-ols crate.

/// Error type for all fallible operations in the regsel-ols crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OlsError {
    /// Returned when a dataset is constructed with no columns.
    #[error("dataset has no columns")]
    EmptyDataset,

    /// Returned when a dataset column has no rows.
    #[error("column '{name}' is empty")]
    EmptyColumn {
        /// Name of the offending column.
        name: String,
    },

    /// Returned when dataset columns have unequal lengths.
    #[error("column '{name}' has length {len}, expected {expected}")]
    ColumnLengthMismatch {
        /// Name of the offending column.
        name: String,
        /// Actual length of the column.
        len: usize,
        /// Length of the first column.
        expected: usize,
    },

    /// Returned when two dataset columns share a name.
    #[error("duplicate column name '{name}'")]
    DuplicateColumn {
        /// The repeated name.
        name: String,
    },

    /// Returned when a dataset column contains NaN or infinity.
    #[error("non-finite value in column '{name}' at row {row}")]
    NonFiniteValue {
        /// Name of the offending column.
        name: String,
        /// Zero-based row index of the first non-finite value.
        row: usize,
    },

    /// Returned when a requested column name is not in the dataset.
    #[error("column '{name}' not found in dataset")]
    UnknownColumn {
        /// The missing name.
        name: String,
    },

    /// Returned when the same predictor is listed more than once in a fit.
    #[error("predictor '{name}' listed more than once")]
    DuplicatePredictor {
        /// The repeated name.
        name: String,
    },

    /// Returned when residual degrees of freedom would be non-positive
    /// (n_rows <= number of estimated coefficients).
    #[error("{n_rows} rows cannot support {n_params} coefficients (residual df must be positive)")]
    InsufficientData {
        /// Number of observations.
        n_rows: usize,
        /// Number of coefficients including the intercept.
        n_params: usize,
    },

    /// Returned when the design matrix is rank-deficient, so the normal
    /// equations have no unique solution.
    #[error("design matrix is singular (collinear predictors)")]
    SingularDesign,

    /// Returned when the response has zero variance, which leaves R² and
    /// the information criteria undefined.
    #[error("response is constant; regression statistics are undefined")]
    ConstantResponse,

    /// Returned when a prediction point has the wrong number of values.
    #[error("new point has {got} values, model has {expected} predictors")]
    PointLengthMismatch {
        /// Number of predictors in the fitted model.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// Returned when an interval confidence level is outside (0, 1).
    #[error("confidence level must be in (0, 1), got {level}")]
    InvalidLevel {
        /// The invalid level.
        level: f64,
    },

    /// Returned when the Student-t distribution cannot be constructed.
    ///
    /// The `message` field is a `String` (not a statrs error type) because
    /// statrs errors do not implement `Clone`.
    #[error("t-distribution unavailable: {message}")]
    Distribution {
        /// Human-readable description from statrs.
        message: String,
    },
}

impl OlsError {
    /// Whether this error marks one candidate model as unusable rather
    /// than the whole request as invalid.
    ///
    /// Search algorithms skip candidates that fail with a recoverable
    /// error and propagate everything else.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            OlsError::SingularDesign
                | OlsError::InsufficientData { .. }
                | OlsError::ConstantResponse
        )
    }
}
