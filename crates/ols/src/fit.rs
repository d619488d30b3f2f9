//! Normal-equations OLS fit of a response against a named predictor subset.

use nalgebra::{DMatrix, DVector};

use crate::dataset::Dataset;
use crate::error::OlsError;
use crate::model::FittedModel;

/// Fits `response ~ intercept + predictors` by ordinary least squares.
///
/// The design matrix is a column of ones followed by the predictor
/// columns in the order they are supplied. Column order affects only the
/// layout of the coefficient vector, never the fit itself.
///
/// An empty predictor list fits the intercept-only model (β̂₀ = ȳ),
/// which search algorithms use as the terminal state when backward
/// elimination removes every predictor.
///
/// # Errors
///
/// - [`OlsError::UnknownColumn`] if `response` or a predictor is absent.
/// - [`OlsError::DuplicatePredictor`] if a predictor is listed twice.
/// - [`OlsError::InsufficientData`] if `n_rows <= k + 1`.
/// - [`OlsError::ConstantResponse`] if the response has zero variance.
/// - [`OlsError::SingularDesign`] if the design matrix is rank-deficient.
///
/// # Example
///
/// ```
/// use regsel_ols::{Dataset, fit};
///
/// let data = Dataset::from_columns(vec![
///     ("x".to_string(), vec![0.0, 1.0, 2.0, 3.0]),
///     ("y".to_string(), vec![2.1, 4.9, 8.1, 10.9]),
/// ])
/// .unwrap();
///
/// let model = fit(&data, "y", &["x"]).unwrap();
/// assert!((model.coefficients()[1] - 3.0).abs() < 0.1);
/// ```
pub fn fit(data: &Dataset, response: &str, predictors: &[&str]) -> Result<FittedModel, OlsError> {
    let y_col = data.require_column(response)?;

    for (i, name) in predictors.iter().enumerate() {
        if predictors[..i].contains(name) {
            return Err(OlsError::DuplicatePredictor {
                name: name.to_string(),
            });
        }
    }
    let columns: Vec<&[f64]> = predictors
        .iter()
        .map(|name| data.require_column(name))
        .collect::<Result<_, _>>()?;

    let n = data.n_rows();
    let k = predictors.len();
    let n_params = k + 1;

    // Invariant: residual df = n - k - 1 must be positive.
    if n <= n_params {
        return Err(OlsError::InsufficientData {
            n_rows: n,
            n_params,
        });
    }

    let y_bar = y_col.iter().sum::<f64>() / n as f64;
    let ss_tot: f64 = y_col.iter().map(|&v| (v - y_bar) * (v - y_bar)).sum();
    let y_scale = y_bar.abs().max(1.0);
    if ss_tot <= f64::EPSILON * n as f64 * y_scale * y_scale {
        return Err(OlsError::ConstantResponse);
    }

    // Design matrix: ones column, then predictors in call order.
    let x = DMatrix::from_fn(n, n_params, |r, c| if c == 0 { 1.0 } else { columns[c - 1][r] });
    let y = DVector::from_column_slice(y_col);

    // Rank check via singular values before forming the normal equations.
    // Perfectly collinear columns leave XᵗX positive semi-definite, where
    // a Cholesky factorization can still scrape through numerically.
    let svd = x.clone().svd(false, false);
    let s_max = svd.singular_values.max();
    let tol = s_max * f64::EPSILON * n.max(n_params) as f64;
    if svd.rank(tol) < n_params {
        return Err(OlsError::SingularDesign);
    }

    let xtx = x.transpose() * &x;
    let xty = x.transpose() * &y;
    let chol = xtx.cholesky().ok_or(OlsError::SingularDesign)?;
    let beta = chol.solve(&xty);
    let xtx_inv = chol.inverse();

    let fitted = &x * &beta;
    let residuals = &y - &fitted;
    let rss = residuals.dot(&residuals);

    let df_resid = n - n_params;
    let sigma2 = rss / df_resid as f64;
    let rse = sigma2.sqrt();

    let r_squared = 1.0 - rss / ss_tot;
    let adj_r_squared = 1.0 - (1.0 - r_squared) * (n - 1) as f64 / df_resid as f64;

    // Gaussian log-likelihood criteria; the parameter count k + 2 covers
    // the slopes, the intercept, and the error variance.
    let nf = n as f64;
    let penalty_params = (k + 2) as f64;
    let aic = nf * (rss / nf).ln() + 2.0 * penalty_params;
    let bic = nf * (rss / nf).ln() + penalty_params * nf.ln();

    let std_errors: Vec<f64> = (0..n_params)
        .map(|j| (sigma2 * xtx_inv[(j, j)]).sqrt())
        .collect();
    let t_statistics: Vec<f64> = beta
        .iter()
        .zip(&std_errors)
        .map(|(&b, &se)| if se > 0.0 { b / se } else { f64::NAN })
        .collect();

    Ok(FittedModel {
        response: response.to_string(),
        predictors: predictors.iter().map(|s| s.to_string()).collect(),
        coefficients: beta.iter().copied().collect(),
        std_errors,
        t_statistics,
        fitted: fitted.iter().copied().collect(),
        residuals: residuals.iter().copied().collect(),
        n_rows: n,
        df_resid,
        sigma2,
        rse,
        r_squared,
        adj_r_squared,
        aic,
        bic,
        xtx_inv,
    })
}
