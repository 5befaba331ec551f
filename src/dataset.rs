//! # Dataset Loading Module
//!
//! This module reads the reference recipe dataset: a CSV file with an
//! "Ingredients" column whose values are comma-separated ingredient lists.
//! Only the raw column values are returned; splitting and normalization
//! happen in [`IngredientIndex`](crate::index::IngredientIndex).

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use log::{info, warn};

use crate::errors::ExtractionError;

/// Header of the dataset column holding each recipe's ingredient list
pub const INGREDIENTS_COLUMN: &str = "Ingredients";

/// Load the ingredient-list column from a CSV dataset
///
/// The header is matched ASCII case-insensitively. Ragged rows shorter than
/// the header are tolerated and skipped; any other row content is returned
/// as-is and treated as a plain string downstream.
///
/// # Errors
///
/// Returns [`ExtractionError::Dataset`] when the file cannot be opened or
/// the ingredients column is missing.
pub fn load_ingredient_rows<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ExtractionError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| {
        ExtractionError::Dataset(format!("cannot open '{}': {err}", path.display()))
    })?;

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = reader.headers()?.clone();
    let column = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(INGREDIENTS_COLUMN))
        .ok_or_else(|| {
            ExtractionError::Dataset(format!(
                "column '{INGREDIENTS_COLUMN}' not found in '{}'",
                path.display()
            ))
        })?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        match record.get(column) {
            Some(value) => rows.push(value.to_string()),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(
            "Skipped {} rows of '{}' without an ingredient field",
            skipped,
            path.display()
        );
    }
    info!("Loaded {} ingredient rows from '{}'", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_dataset(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_ingredient_column() {
        let file = write_dataset(
            "Name,Ingredients\nChai,\"milk, sugar, ginger\"\nDal,\"lentils, turmeric\"\n",
        );

        let rows = load_ingredient_rows(file.path()).unwrap();

        assert_eq!(rows, vec!["milk, sugar, ginger", "lentils, turmeric"]);
    }

    #[test]
    fn test_header_case_insensitive() {
        let file = write_dataset("name,ingredients\nChai,\"milk, sugar\"\n");

        let rows = load_ingredient_rows(file.path()).unwrap();

        assert_eq!(rows, vec!["milk, sugar"]);
    }

    #[test]
    fn test_ragged_rows_tolerated() {
        let file = write_dataset("Name,Ingredients\nChai,\"milk, sugar\"\nBroken\nDal,lentils\n");

        let rows = load_ingredient_rows(file.path()).unwrap();

        // The short row has no ingredient field and is skipped
        assert_eq!(rows, vec!["milk, sugar", "lentils"]);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let file = write_dataset("Name,Steps\nChai,boil\n");

        let err = load_ingredient_rows(file.path()).unwrap_err();

        assert!(matches!(err, ExtractionError::Dataset(_)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_ingredient_rows("definitely-not-here.csv").unwrap_err();

        assert!(matches!(err, ExtractionError::Dataset(_)));
    }
}
