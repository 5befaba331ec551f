//! # Ingredient Index Module
//!
//! This module builds the read-only index of known ingredient phrases from a
//! reference dataset's comma-separated ingredient lists.
//!
//! ## Features
//!
//! - One-pass construction over the dataset rows
//! - Trimmed, lower-cased entries with duplicates collapsed
//! - Deterministic first-seen entry order, preserved for display

use std::collections::HashSet;

use log::{debug, info};

/// Distinct set of known ingredient phrases derived from a reference dataset
///
/// Entries keep the order in which they were first seen while scanning the
/// rows, so everything downstream (extraction results included) iterates in
/// a stable, documented order.
#[derive(Debug, Clone, Default)]
pub struct IngredientIndex {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl IngredientIndex {
    /// Build an index from dataset rows
    ///
    /// Each row is a comma-separated list of ingredient phrases. Phrases are
    /// trimmed and lower-cased; empties are dropped and duplicates collapse
    /// to their first occurrence. Malformed rows need no special handling,
    /// they are just strings with fewer (or stranger) phrases in them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ingredient_categorizer::index::IngredientIndex;
    ///
    /// let rows = ["Milk, Sugar", "sugar, turmeric"];
    /// let index = IngredientIndex::from_rows(rows);
    ///
    /// assert_eq!(index.entries(), &["milk", "sugar", "turmeric"]);
    /// ```
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();
        let mut row_count = 0usize;

        for row in rows {
            row_count += 1;
            for raw in row.as_ref().split(',') {
                let phrase = normalize_phrase(raw);
                if phrase.is_empty() {
                    continue;
                }
                if seen.insert(phrase.clone()) {
                    debug!("Indexed ingredient '{}'", phrase);
                    entries.push(phrase);
                }
            }
        }

        info!(
            "Built ingredient index with {} distinct entries from {} rows",
            entries.len(),
            row_count
        );
        Self { entries, seen }
    }

    /// Indexed phrases in first-seen order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether a phrase is in the index (compared after normalization)
    pub fn contains(&self, phrase: &str) -> bool {
        self.seen.contains(&normalize_phrase(phrase))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trim and lower-case a raw ingredient phrase
fn normalize_phrase(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_from_rows() {
        let rows = ["milk, sugar, turmeric", "salt, pepper"];
        let index = IngredientIndex::from_rows(rows);

        assert_eq!(index.len(), 5);
        assert!(index.contains("milk"));
        assert!(index.contains("pepper"));
        assert!(!index.contains("flour"));
    }

    #[test]
    fn test_duplicates_collapse_to_first_seen() {
        let rows = ["milk, sugar", "Sugar,  MILK , cream"];
        let index = IngredientIndex::from_rows(rows);

        assert_eq!(index.entries(), &["milk", "sugar", "cream"]);
    }

    #[test]
    fn test_normalization() {
        let rows = ["  Garam Masala ,RED CHILLI POWDER"];
        let index = IngredientIndex::from_rows(rows);

        assert_eq!(index.entries(), &["garam masala", "red chilli powder"]);
        assert!(index.contains("  garam masala "));
    }

    #[test]
    fn test_empty_phrases_dropped() {
        let rows = ["milk,, ,sugar,"];
        let index = IngredientIndex::from_rows(rows);

        assert_eq!(index.entries(), &["milk", "sugar"]);
    }

    #[test]
    fn test_empty_input() {
        let index = IngredientIndex::from_rows(Vec::<String>::new());

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}
