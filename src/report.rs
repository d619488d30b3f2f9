//! Console summaries for fitted models.

use regsel_ols::FittedModel;

/// Prints an R-style coefficient table and fit statistics.
pub fn print_model(model: &FittedModel) {
    println!("Model: {} ~ {}", model.response(), formula_rhs(model));
    println!();
    println!(
        "  {:<16} {:>12} {:>12} {:>9}",
        "term", "estimate", "std.error", "t"
    );
    let mut terms = vec!["(Intercept)".to_string()];
    terms.extend(model.predictors().iter().cloned());
    for (i, term) in terms.iter().enumerate() {
        println!(
            "  {:<16} {:>12.6} {:>12.6} {:>9.3}",
            term,
            model.coefficients()[i],
            model.std_errors()[i],
            model.t_statistics()[i]
        );
    }
    println!();
    println!(
        "Residual std. error: {:.6} on {} degrees of freedom",
        model.rse(),
        model.df_resid()
    );
    println!(
        "R²: {:.6}   Adjusted R²: {:.6}",
        model.r_squared(),
        model.adj_r_squared()
    );
    println!("AIC: {:.4}   BIC: {:.4}", model.aic(), model.bic());
}

fn formula_rhs(model: &FittedModel) -> String {
    if model.predictors().is_empty() {
        "1".to_string()
    } else {
        model.predictors().join(" + ")
    }
}
