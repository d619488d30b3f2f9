//! CSV ingestion and categorical indicator encoding.
//!
//! Turns a delimited file with a header row into a [`Dataset`] of named
//! numeric columns. Columns named via `--dummy` are expanded into 0/1
//! indicator columns (one per non-baseline level) before the core ever
//! sees them; everything else must parse as `f64`.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::StringRecord;
use tracing::debug;

use regsel_ols::Dataset;

/// Loads a CSV file into a dataset, expanding `dummy` columns into
/// indicator columns.
pub fn load_dataset(path: &Path, dummy: &[String]) -> Result<Dataset> {
    let file = File::open(path)
        .with_context(|| format!("failed to open CSV file: {}", path.display()))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .context("failed to read CSV header")?
        .iter()
        .map(str::to_string)
        .collect();
    for d in dummy {
        if !headers.iter().any(|h| h == d) {
            bail!("--dummy column '{d}' not found in CSV header");
        }
    }

    let mut records: Vec<StringRecord> = Vec::new();
    for (i, record) in reader.records().enumerate() {
        // +2: one for the header line, one for 1-based numbering.
        let line = i + 2;
        let record = record.with_context(|| format!("failed to read CSV line {line}"))?;
        if record.len() != headers.len() {
            bail!(
                "CSV line {line} has {} fields, expected {}",
                record.len(),
                headers.len()
            );
        }
        records.push(record);
    }
    if records.is_empty() {
        bail!("CSV file has no data rows: {}", path.display());
    }

    let mut columns: Vec<(String, Vec<f64>)> = Vec::new();
    for (col, name) in headers.iter().enumerate() {
        if dummy.iter().any(|d| d == name) {
            let encoded = encode_indicators(name, &records, col);
            debug!(column = %name, n_indicators = encoded.len(), "expanded categorical column");
            columns.extend(encoded);
        } else {
            columns.push((name.clone(), parse_numeric(name, &records, col)?));
        }
    }

    Ok(Dataset::from_columns(columns)?)
}

fn parse_numeric(name: &str, records: &[StringRecord], col: usize) -> Result<Vec<f64>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let raw = &record[col];
            raw.parse::<f64>().with_context(|| {
                format!(
                    "column '{name}', line {}: '{raw}' is not numeric \
                     (use --dummy {name} for categorical columns)",
                    i + 2
                )
            })
        })
        .collect()
}

/// One 0/1 column per non-baseline level, named `column=level`.
///
/// The baseline is the first level in file order; rows at the baseline
/// level get 0 in every indicator column.
fn encode_indicators(name: &str, records: &[StringRecord], col: usize) -> Vec<(String, Vec<f64>)> {
    let mut levels: Vec<String> = Vec::new();
    for record in records {
        let value = record[col].to_string();
        if !levels.contains(&value) {
            levels.push(value);
        }
    }

    levels
        .iter()
        .skip(1)
        .map(|level| {
            let values = records
                .iter()
                .map(|r| if &r[col] == level.as_str() { 1.0 } else { 0.0 })
                .collect();
            (format!("{name}={level}"), values)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_numeric_columns() {
        let file = write_csv("x,y\n1,2.5\n2,3.5\n3,4.5\n");
        let data = load_dataset(file.path(), &[]).unwrap();
        assert_eq!(data.n_rows(), 3);
        assert_eq!(data.column("x"), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(data.column("y"), Some(&[2.5, 3.5, 4.5][..]));
    }

    #[test]
    fn expands_categorical_column() {
        let file = write_csv("method,score\nnatural,1\nwashed,2\nsemi,3\nwashed,4\n");
        let data = load_dataset(file.path(), &["method".to_string()]).unwrap();

        // "natural" is the baseline; one indicator per remaining level.
        assert!(data.column("method").is_none());
        assert_eq!(data.column("method=washed"), Some(&[0.0, 1.0, 0.0, 1.0][..]));
        assert_eq!(data.column("method=semi"), Some(&[0.0, 0.0, 1.0, 0.0][..]));
        assert_eq!(data.column("score"), Some(&[1.0, 2.0, 3.0, 4.0][..]));
    }

    #[test]
    fn rejects_non_numeric_without_dummy() {
        let file = write_csv("method,score\nwashed,1\nsemi,2\n");
        let err = load_dataset(file.path(), &[]).unwrap_err();
        assert!(err.to_string().contains("not numeric"));
    }

    #[test]
    fn rejects_unknown_dummy_column() {
        let file = write_csv("x,y\n1,2\n3,4\n");
        let err = load_dataset(file.path(), &["ghost".to_string()]).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn rejects_empty_file() {
        let file = write_csv("x,y\n");
        assert!(load_dataset(file.path(), &[]).is_err());
    }
}
