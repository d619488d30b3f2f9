//! Ordinary least squares fitting for small in-memory datasets.
//!
//! This crate is the fit-and-score primitive underneath the selection
//! algorithms in `regsel-select`: given a [`Dataset`] of named numeric
//! columns, [`fit`] solves the normal equations for one predictor subset
//! and returns an immutable [`FittedModel`] carrying coefficients,
//! residuals, R²/adjusted R², AIC/BIC, standard errors, t-statistics,
//! and confidence/prediction intervals at new points.
//!
//! # Quick start
//!
//! ```
//! use regsel_ols::{Dataset, fit};
//!
//! let data = Dataset::from_columns(vec![
//!     ("nozzle".to_string(), vec![0.0, 0.0, 1.0, 1.0, 0.0, 1.0]),
//!     ("propratio".to_string(), vec![5.0, 5.5, 6.0, 5.2, 6.1, 5.8]),
//!     ("thrust".to_string(), vec![10.1, 11.0, 13.9, 12.4, 12.2, 13.5]),
//! ])
//! .unwrap();
//!
//! let model = fit(&data, "thrust", &["nozzle", "propratio"]).unwrap();
//! let ci = model.mean_interval(&[0.0, 5.5], 0.95).unwrap();
//! assert!(ci.lower < ci.estimate && ci.estimate < ci.upper);
//! ```
//!
//! # Architecture
//!
//! ```text
//! fit()
//!   ├─ resolve response + predictor columns   (dataset.rs)
//!   ├─ design matrix, rank check, Cholesky    (fit.rs)
//!   └─ FittedModel statistics + intervals     (model.rs)
//! ```
//!
//! Failure semantics matter to callers running many candidate fits:
//! [`OlsError::is_recoverable`] distinguishes "this subset is unusable"
//! (singular design, too few rows, constant response) from genuinely
//! invalid requests (unknown columns, bad levels).

pub mod dataset;
pub mod error;
pub mod fit;
pub mod model;

pub use dataset::Dataset;
pub use error::OlsError;
pub use fit::fit;
pub use model::{FittedModel, Interval};
