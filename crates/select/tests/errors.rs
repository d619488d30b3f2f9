//! Integration tests for SelectError variants.

use regsel_ols::{Dataset, OlsError};
use regsel_select::{Criterion, Direction, SelectError, exhaustive_search, stepwise};

fn small_data() -> Dataset {
    Dataset::from_columns(vec![
        ("x1".to_string(), (0..10).map(|i| i as f64).collect()),
        ("x2".to_string(), (0..10).map(|i| ((i * 3) % 7) as f64).collect()),
        ("y".to_string(), (0..10).map(|i| 1.0 + 2.0 * i as f64 + ((i % 2) as f64)).collect()),
    ])
    .unwrap()
}

#[test]
fn unknown_response() {
    let data = small_data();
    let result = exhaustive_search(&data, "nope", 1);
    assert!(matches!(result, Err(SelectError::UnknownResponse { name }) if name == "nope"));

    let result = stepwise(&data, "nope", Direction::Forward, Criterion::Bic);
    assert!(matches!(result, Err(SelectError::UnknownResponse { .. })));
}

#[test]
fn no_candidate_predictors() {
    let data = Dataset::from_columns(vec![("y".to_string(), vec![1.0, 2.0, 3.0])]).unwrap();
    let result = exhaustive_search(&data, "y", 1);
    assert!(matches!(result, Err(SelectError::NoPredictors)));

    let result = stepwise(&data, "y", Direction::Backward, Criterion::Aic);
    assert!(matches!(result, Err(SelectError::NoPredictors)));
}

#[test]
fn max_vars_out_of_range() {
    let data = small_data();
    let result = exhaustive_search(&data, "y", 0);
    assert!(matches!(
        result,
        Err(SelectError::InvalidMaxVars {
            max_vars: 0,
            n_predictors: 2
        })
    ));

    let result = exhaustive_search(&data, "y", 3);
    assert!(matches!(
        result,
        Err(SelectError::InvalidMaxVars {
            max_vars: 3,
            n_predictors: 2
        })
    ));
}

/// Backward elimination cannot start from an unfittable full model; the
/// singular-design error surfaces instead of being swallowed.
#[test]
fn backward_propagates_singular_full_model() {
    let x1: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let x2: Vec<f64> = x1.iter().map(|&v| 2.0 * v).collect();
    let y: Vec<f64> = (0..10).map(|i| 1.0 + 3.0 * i as f64 + ((i % 2) as f64)).collect();
    let data = Dataset::from_columns(vec![
        ("x1".to_string(), x1),
        ("x2".to_string(), x2),
        ("y".to_string(), y),
    ])
    .unwrap();

    let result = stepwise(&data, "y", Direction::Backward, Criterion::Bic);
    assert!(matches!(
        result,
        Err(SelectError::Fit(OlsError::SingularDesign))
    ));

    // Forward selection never needs the full model and succeeds.
    let forward = stepwise(&data, "y", Direction::Forward, Criterion::Bic).unwrap();
    assert_eq!(forward.included().len(), 1);
}

/// Too few rows for even one predictor: every candidate is skipped and
/// the search returns an empty table rather than failing.
#[test]
fn exhaustive_with_too_few_rows_returns_no_rows() {
    let data = Dataset::from_columns(vec![
        ("x1".to_string(), vec![1.0, 2.0]),
        ("y".to_string(), vec![3.0, 5.0]),
    ])
    .unwrap();
    let rows = exhaustive_search(&data, "y", 1).unwrap();
    assert!(rows.is_empty());
}
