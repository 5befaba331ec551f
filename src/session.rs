//! # Extraction Session Module
//!
//! This module holds the state a presentation layer needs between the
//! "extract" and "categorize" steps: the compiled extractor, the category
//! table, and the most recent extraction result. It also enforces the two
//! user-facing preconditions (text must be supplied, extraction must run
//! before categorization), so front-ends only decide how to word the
//! warnings.

use std::collections::HashMap;

use log::{info, warn};

use crate::categories::CategoryTable;
use crate::categorizer::categorize;
use crate::errors::ExtractionError;
use crate::extractor::IngredientExtractor;
use crate::index::IngredientIndex;

/// Single-user extraction/categorization workflow state
///
/// Each extraction replaces the stored result; categorization always works
/// on the most recent one.
pub struct ExtractionSession {
    extractor: IngredientExtractor,
    table: CategoryTable,
    last_extraction: Option<Vec<String>>,
}

impl ExtractionSession {
    /// Create a session over `index` using the built-in category table
    pub fn new(index: &IngredientIndex) -> Result<Self, ExtractionError> {
        Self::with_table(index, CategoryTable::builtin().clone())
    }

    /// Create a session with a custom category table
    pub fn with_table(
        index: &IngredientIndex,
        table: CategoryTable,
    ) -> Result<Self, ExtractionError> {
        Ok(Self {
            extractor: IngredientExtractor::new(index)?,
            table,
            last_extraction: None,
        })
    }

    /// Extract known ingredients from `text` and store the result
    ///
    /// Blank text is rejected with [`ExtractionError::EmptyInput`] before
    /// any matching runs. An extraction that finds nothing is still a
    /// successful extraction: it returns an empty slice and unlocks
    /// [`categorize`](Self::categorize).
    pub fn extract(&mut self, text: &str) -> Result<&[String], ExtractionError> {
        if text.trim().is_empty() {
            warn!("Extraction requested with blank input");
            return Err(ExtractionError::EmptyInput);
        }

        let found = self.extractor.extract(text);
        info!("Session stored extraction with {} ingredients", found.len());
        let stored = self.last_extraction.insert(found);
        Ok(stored.as_slice())
    }

    /// Categorize the most recent extraction result
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::NothingExtracted`] when no extraction has
    /// succeeded in this session yet.
    pub fn categorize(&self) -> Result<HashMap<String, Vec<String>>, ExtractionError> {
        match &self.last_extraction {
            Some(found) => Ok(categorize(found, &self.table)),
            None => {
                warn!("Categorization requested before any extraction");
                Err(ExtractionError::NothingExtracted)
            }
        }
    }

    /// The most recent extraction result, if any
    pub fn last_extraction(&self) -> Option<&[String]> {
        self.last_extraction.as_deref()
    }

    /// The category table this session categorizes against
    pub fn table(&self) -> &CategoryTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_session() -> ExtractionSession {
        let index = IngredientIndex::from_rows(["milk, sugar, turmeric, pepper"]);
        ExtractionSession::new(&index).unwrap()
    }

    #[test]
    fn test_blank_input_rejected() {
        let mut session = create_session();

        assert_eq!(session.extract(""), Err(ExtractionError::EmptyInput));
        assert_eq!(session.extract("  \n "), Err(ExtractionError::EmptyInput));
        assert!(session.last_extraction().is_none());
    }

    #[test]
    fn test_categorize_before_extract_rejected() {
        let session = create_session();

        assert_eq!(
            session.categorize().unwrap_err(),
            ExtractionError::NothingExtracted
        );
    }

    #[test]
    fn test_extract_then_categorize() {
        let mut session = create_session();

        let found = session
            .extract("Add milk, sugar and turmeric to the pan")
            .unwrap()
            .to_vec();
        assert_eq!(found, vec!["milk", "sugar", "turmeric"]);

        let categorized = session.categorize().unwrap();
        assert_eq!(categorized["Dairy"], vec!["milk"]);
        assert_eq!(categorized["Sweeteners"], vec!["sugar"]);
        assert_eq!(categorized["Spices"], vec!["turmeric"]);
    }

    #[test]
    fn test_zero_matches_is_not_an_error() {
        let mut session = create_session();

        let found = session.extract("plain water").unwrap();
        assert!(found.is_empty());

        // A successful empty extraction still unlocks categorization
        let categorized = session.categorize().unwrap();
        assert!(categorized.values().all(|v| v.is_empty()));
    }

    #[test]
    fn test_new_extraction_replaces_previous() {
        let mut session = create_session();

        session.extract("milk and sugar").unwrap();
        session.extract("just turmeric now").unwrap();

        assert_eq!(session.last_extraction(), Some(&["turmeric".to_string()][..]));
        let categorized = session.categorize().unwrap();
        assert!(categorized["Dairy"].is_empty());
        assert_eq!(categorized["Spices"], vec!["turmeric"]);
    }

    #[test]
    fn test_custom_table_session() {
        let index = IngredientIndex::from_rows(["milk, gravel"]);
        let table = CategoryTable::new(&[("Dairy", &["milk"] as &[&str]), ("Other", &[])]).unwrap();
        let mut session = ExtractionSession::with_table(&index, table).unwrap();

        session.extract("milk over gravel").unwrap();
        let categorized = session.categorize().unwrap();

        assert_eq!(categorized["Dairy"], vec!["milk"]);
        assert_eq!(categorized["Other"], vec!["gravel"]);
    }
}
