//! Fitted-model value type and interval predictions.

use nalgebra::{DMatrix, DVector};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::OlsError;

/// A symmetric interval around a point estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Point estimate at the center of the interval.
    pub estimate: f64,
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl Interval {
    /// Width of the interval (`upper - lower`).
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Immutable result of one OLS fit.
///
/// Coefficient-indexed slices (`coefficients`, `std_errors`,
/// `t_statistics`) put the intercept first, followed by one entry per
/// predictor in fit order. Row-indexed slices (`fitted`, `residuals`)
/// follow dataset row order.
#[derive(Debug, Clone)]
pub struct FittedModel {
    pub(crate) response: String,
    pub(crate) predictors: Vec<String>,
    pub(crate) coefficients: Vec<f64>,
    pub(crate) std_errors: Vec<f64>,
    pub(crate) t_statistics: Vec<f64>,
    pub(crate) fitted: Vec<f64>,
    pub(crate) residuals: Vec<f64>,
    pub(crate) n_rows: usize,
    pub(crate) df_resid: usize,
    pub(crate) sigma2: f64,
    pub(crate) rse: f64,
    pub(crate) r_squared: f64,
    pub(crate) adj_r_squared: f64,
    pub(crate) aic: f64,
    pub(crate) bic: f64,
    /// (XᵗX)⁻¹, retained for interval predictions.
    pub(crate) xtx_inv: DMatrix<f64>,
}

impl FittedModel {
    /// Name of the response column this model was fitted against.
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Predictor names in fit order (excludes the intercept).
    pub fn predictors(&self) -> &[String] {
        &self.predictors
    }

    /// Number of predictors k (excludes the intercept).
    pub fn n_predictors(&self) -> usize {
        self.predictors.len()
    }

    /// Number of observations n.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Residual degrees of freedom, n - k - 1.
    pub fn df_resid(&self) -> usize {
        self.df_resid
    }

    /// Coefficient estimates, intercept first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Coefficient standard errors, intercept first.
    pub fn std_errors(&self) -> &[f64] {
        &self.std_errors
    }

    /// Per-coefficient t-statistics (β̂ⱼ / SEⱼ), intercept first.
    pub fn t_statistics(&self) -> &[f64] {
        &self.t_statistics
    }

    /// Fitted values ŷᵢ in row order.
    pub fn fitted(&self) -> &[f64] {
        &self.fitted
    }

    /// Residuals yᵢ - ŷᵢ in row order.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Residual variance estimate σ̂² = RSS / (n - k - 1).
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Residual standard error √σ̂².
    pub fn rse(&self) -> f64 {
        self.rse
    }

    /// Coefficient of determination R².
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Adjusted R² = 1 - (1 - R²)(n - 1)/(n - k - 1).
    pub fn adj_r_squared(&self) -> f64 {
        self.adj_r_squared
    }

    /// Akaike information criterion, n·ln(RSS/n) + 2(k + 2).
    pub fn aic(&self) -> f64 {
        self.aic
    }

    /// Bayesian information criterion, n·ln(RSS/n) + (k + 2)·ln(n).
    pub fn bic(&self) -> f64 {
        self.bic
    }

    /// Point prediction μ̂₀ at a new point.
    ///
    /// `x0` holds one value per predictor, in fit order; the intercept is
    /// handled internally.
    pub fn predict(&self, x0: &[f64]) -> Result<f64, OlsError> {
        let a = self.augmented(x0)?;
        Ok(a
            .iter()
            .zip(&self.coefficients)
            .map(|(&xi, &bi)| xi * bi)
            .sum())
    }

    /// Confidence interval for the mean response at a new point.
    ///
    /// μ̂₀ ± t·σ̂·√(x₀(XᵗX)⁻¹x₀ᵗ) with t from the Student-t inverse CDF at
    /// `(1 + level)/2` and `df_resid` degrees of freedom.
    pub fn mean_interval(&self, x0: &[f64], level: f64) -> Result<Interval, OlsError> {
        let a = self.augmented(x0)?;
        let se = self.rse * self.leverage(&a).sqrt();
        self.interval_around(&a, se, level)
    }

    /// Prediction interval for an individual new observation.
    ///
    /// Same form as [`mean_interval`](Self::mean_interval) with the
    /// leverage term replaced by √(1 + x₀(XᵗX)⁻¹x₀ᵗ), so it is always at
    /// least as wide.
    pub fn prediction_interval(&self, x0: &[f64], level: f64) -> Result<Interval, OlsError> {
        let a = self.augmented(x0)?;
        let se = self.rse * (1.0 + self.leverage(&a)).sqrt();
        self.interval_around(&a, se, level)
    }

    /// Builds the augmented row [1, x0...] after a length check.
    fn augmented(&self, x0: &[f64]) -> Result<DVector<f64>, OlsError> {
        if x0.len() != self.predictors.len() {
            return Err(OlsError::PointLengthMismatch {
                expected: self.predictors.len(),
                got: x0.len(),
            });
        }
        let mut a = DVector::zeros(x0.len() + 1);
        a[0] = 1.0;
        for (i, &v) in x0.iter().enumerate() {
            a[i + 1] = v;
        }
        Ok(a)
    }

    /// x₀(XᵗX)⁻¹x₀ᵗ, clamped at zero against rounding.
    fn leverage(&self, a: &DVector<f64>) -> f64 {
        a.dot(&(&self.xtx_inv * a)).max(0.0)
    }

    fn interval_around(
        &self,
        a: &DVector<f64>,
        se: f64,
        level: f64,
    ) -> Result<Interval, OlsError> {
        if !(level > 0.0 && level < 1.0) {
            return Err(OlsError::InvalidLevel { level });
        }
        let dist = StudentsT::new(0.0, 1.0, self.df_resid as f64).map_err(|e| {
            OlsError::Distribution {
                message: e.to_string(),
            }
        })?;
        let t = dist.inverse_cdf(0.5 + level / 2.0);
        let estimate: f64 = a
            .iter()
            .zip(&self.coefficients)
            .map(|(&xi, &bi)| xi * bi)
            .sum();
        Ok(Interval {
            estimate,
            lower: estimate - t * se,
            upper: estimate + t * se,
        })
    }
}
