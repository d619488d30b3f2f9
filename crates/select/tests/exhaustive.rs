//! Integration tests for the exhaustive subset search.

use regsel_ols::{Dataset, fit};
use regsel_select::{Criterion, best_by_adj_r2, best_by_criterion, exhaustive_search};

/// y = 2 + 3·x1 + a small period-4 disturbance; x2 and x3 are ±1
/// patterns exactly orthogonal to the disturbance (and to each other
/// over complete periods), so their partial coefficients are zero and
/// including them never lowers the residual sum of squares.
fn signal_plus_noise(n_periods: usize) -> Dataset {
    let n = n_periods * 4;
    let disturbance = [0.01, -0.01, -0.01, 0.01];
    let x2_pattern = [1.0, 1.0, -1.0, -1.0];
    let x3_pattern = [1.0, -1.0, 1.0, -1.0];
    let x1: Vec<f64> = (0..n).map(|i| i as f64 / 3.0).collect();
    let x2: Vec<f64> = (0..n).map(|i| x2_pattern[i % 4]).collect();
    let x3: Vec<f64> = (0..n).map(|i| x3_pattern[i % 4]).collect();
    let y: Vec<f64> = (0..n)
        .map(|i| 2.0 + 3.0 * x1[i] + disturbance[i % 4])
        .collect();
    Dataset::from_columns(vec![
        ("x1".to_string(), x1),
        ("x2".to_string(), x2),
        ("x3".to_string(), x3),
        ("y".to_string(), y),
    ])
    .unwrap()
}

#[test]
fn row_counts_follow_binomial_sums() {
    let data = signal_plus_noise(15);
    // p = 3: C(3,1) = 3, +C(3,2) = 6, +C(3,3) = 7.
    assert_eq!(exhaustive_search(&data, "y", 1).unwrap().len(), 3);
    assert_eq!(exhaustive_search(&data, "y", 2).unwrap().len(), 6);
    assert_eq!(exhaustive_search(&data, "y", 3).unwrap().len(), 7);
}

#[test]
fn rows_are_ordered_by_size_then_position() {
    let data = signal_plus_noise(15);
    let rows = exhaustive_search(&data, "y", 3).unwrap();

    let subsets: Vec<Vec<&str>> = rows
        .iter()
        .map(|r| r.predictors.iter().map(|s| s.as_str()).collect())
        .collect();
    assert_eq!(
        subsets,
        vec![
            vec!["x1"],
            vec!["x2"],
            vec!["x3"],
            vec!["x1", "x2"],
            vec!["x1", "x3"],
            vec!["x2", "x3"],
            vec!["x1", "x2", "x3"],
        ]
    );
    for row in &rows {
        assert_eq!(row.k, row.predictors.len());
    }
}

#[test]
fn rows_agree_with_direct_fits() {
    let data = signal_plus_noise(15);
    let rows = exhaustive_search(&data, "y", 3).unwrap();

    for row in &rows {
        let names: Vec<&str> = row.predictors.iter().map(|s| s.as_str()).collect();
        let model = fit(&data, "y", &names).unwrap();
        assert!((row.adj_r2 - model.adj_r_squared()).abs() < 1e-12);
        assert!((row.aic - model.aic()).abs() < 1e-12);
        assert!((row.bic - model.bic()).abs() < 1e-12);
    }
}

/// Low-noise y = 2 + 3·x1: BIC must single out {x1} against every
/// larger subset.
#[test]
fn bic_picks_the_generating_predictor() {
    let data = signal_plus_noise(15);
    let rows = exhaustive_search(&data, "y", 3).unwrap();

    let best = best_by_criterion(&rows, Criterion::Bic).unwrap();
    assert_eq!(best.predictors, vec!["x1".to_string()]);

    let best_aic = best_by_criterion(&rows, Criterion::Aic).unwrap();
    assert!(best_aic.predictors.contains(&"x1".to_string()));
    let best_adj = best_by_adj_r2(&rows).unwrap();
    assert!(best_adj.predictors.contains(&"x1".to_string()));
}

/// x3 = 2·x1: every subset containing both is singular and must be
/// skipped without aborting the search.
#[test]
fn collinear_subsets_are_skipped_silently() {
    let x1: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let x2: Vec<f64> = (0..20).map(|i| ((i * 7) % 11) as f64).collect();
    let x3: Vec<f64> = x1.iter().map(|&v| 2.0 * v).collect();
    let y: Vec<f64> = (0..20).map(|i| 1.0 + 2.0 * i as f64 + ((i % 3) as f64)).collect();
    let data = Dataset::from_columns(vec![
        ("x1".to_string(), x1),
        ("x2".to_string(), x2),
        ("x3".to_string(), x3),
        ("y".to_string(), y),
    ])
    .unwrap();

    let rows = exhaustive_search(&data, "y", 3).unwrap();
    // 7 subsets minus {x1,x3} and {x1,x2,x3}.
    assert_eq!(rows.len(), 5);
    for row in &rows {
        let both = row.predictors.contains(&"x1".to_string())
            && row.predictors.contains(&"x3".to_string());
        assert!(!both, "singular subset survived: {:?}", row.predictors);
    }
}

#[test]
fn repeated_searches_are_identical() {
    let data = signal_plus_noise(12);
    let a = exhaustive_search(&data, "y", 3).unwrap();
    let b = exhaustive_search(&data, "y", 3).unwrap();
    assert_eq!(a, b);
}

/// max_vars below the predictor count keeps larger subsets out.
#[test]
fn max_vars_caps_subset_size() {
    let data = signal_plus_noise(15);
    let rows = exhaustive_search(&data, "y", 2).unwrap();
    assert!(rows.iter().all(|r| r.k <= 2));
}
