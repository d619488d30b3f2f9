//! In-memory tabular dataset of named numeric columns.

use crate::error::OlsError;

/// An ordered collection of named numeric columns of equal length.
///
/// The dataset is read-only after construction. One column is designated
/// the response by the caller at fit/search time; the remaining columns
/// are candidate predictors. Categorical variables must be encoded into
/// 0/1 indicator columns before construction.
///
/// # Example
///
/// ```
/// use regsel_ols::Dataset;
///
/// let data = Dataset::from_columns(vec![
///     ("x".to_string(), vec![1.0, 2.0, 3.0]),
///     ("y".to_string(), vec![2.0, 4.0, 6.0]),
/// ])
/// .unwrap();
///
/// assert_eq!(data.n_rows(), 3);
/// assert_eq!(data.names(), &["x".to_string(), "y".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Column names in insertion order.
    names: Vec<String>,
    /// Column values, parallel to `names`.
    columns: Vec<Vec<f64>>,
    /// Number of rows (length of every column).
    n_rows: usize,
}

impl Dataset {
    /// Builds a dataset from `(name, values)` pairs.
    ///
    /// Validates that there is at least one column, all columns are
    /// non-empty and of equal length, names are unique, and every value
    /// is finite.
    pub fn from_columns(columns: Vec<(String, Vec<f64>)>) -> Result<Self, OlsError> {
        if columns.is_empty() {
            return Err(OlsError::EmptyDataset);
        }

        let n_rows = columns[0].1.len();
        let mut names = Vec::with_capacity(columns.len());
        let mut values = Vec::with_capacity(columns.len());

        for (name, column) in columns {
            if column.is_empty() {
                return Err(OlsError::EmptyColumn { name });
            }
            if column.len() != n_rows {
                return Err(OlsError::ColumnLengthMismatch {
                    len: column.len(),
                    expected: n_rows,
                    name,
                });
            }
            if names.contains(&name) {
                return Err(OlsError::DuplicateColumn { name });
            }
            if let Some(row) = column.iter().position(|v| !v.is_finite()) {
                return Err(OlsError::NonFiniteValue { name, row });
            }
            names.push(name);
            values.push(column);
        }

        Ok(Self {
            names,
            columns: values,
            n_rows,
        })
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.names.len()
    }

    /// Column names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Values of the named column, or `None` if absent.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Values of the named column, or `OlsError::UnknownColumn`.
    pub fn require_column(&self, name: &str) -> Result<&[f64], OlsError> {
        self.column(name).ok_or_else(|| OlsError::UnknownColumn {
            name: name.to_string(),
        })
    }

    /// All column names except `response`, in dataset order.
    ///
    /// These are the candidate predictors for a search over this dataset.
    pub fn predictor_names(&self, response: &str) -> Vec<&str> {
        self.names
            .iter()
            .filter(|n| n.as_str() != response)
            .map(|n| n.as_str())
            .collect()
    }
}
