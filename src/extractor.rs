//! # Ingredient Extractor Module
//!
//! This module scans free-text recipe input for known ingredients from an
//! [`IngredientIndex`](crate::index::IngredientIndex).
//!
//! ## Features
//!
//! - Case-insensitive whole-word matching for every indexed phrase
//! - Index entries escaped before compilation, so punctuation in ingredient
//!   names is matched literally
//! - Results returned in index (first-seen) order with no duplicates
//!
//! The scan is a linear pass over the index per call; acceptable because
//! both the index and the input text stay small.

use log::{debug, info, trace};
use regex::Regex;

use crate::categories::compile_member_pattern;
use crate::errors::ExtractionError;
use crate::index::IngredientIndex;

/// Whole-word matcher over the phrases of an ingredient index
///
/// Compiles one pattern per index entry at construction so repeated
/// extraction calls reuse the compiled set.
pub struct IngredientExtractor {
    patterns: Vec<(String, Regex)>,
}

impl IngredientExtractor {
    /// Compile an extractor for the given index
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Pattern`] if an index entry fails to
    /// compile (not expected for escaped literals, but propagated rather
    /// than swallowed).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ingredient_categorizer::extractor::IngredientExtractor;
    /// use ingredient_categorizer::index::IngredientIndex;
    ///
    /// let index = IngredientIndex::from_rows(["milk, sugar, turmeric, pepper"]);
    /// let extractor = IngredientExtractor::new(&index)?;
    ///
    /// let found = extractor.extract("Add milk, sugar and turmeric to the pan");
    /// assert_eq!(found, vec!["milk", "sugar", "turmeric"]);
    /// # Ok::<(), ingredient_categorizer::errors::ExtractionError>(())
    /// ```
    pub fn new(index: &IngredientIndex) -> Result<Self, ExtractionError> {
        let mut patterns = Vec::with_capacity(index.len());
        for entry in index.entries() {
            let pattern = compile_member_pattern(entry)?;
            patterns.push((entry.clone(), pattern));
        }

        info!("Compiled {} ingredient patterns", patterns.len());
        Ok(Self { patterns })
    }

    /// Find every indexed ingredient occurring in `text` as a whole word
    ///
    /// Matching is case-insensitive and bounded by non-word characters on
    /// both sides, so "sugar" does not match inside "sugarcane". The result
    /// carries each matched phrase once, in index order. Empty or blank text
    /// yields an empty result; emptiness is a caller-level concern, not an
    /// extractor error.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            debug!("Extraction called with blank text");
            return Vec::new();
        }

        let mut found = Vec::new();
        for (phrase, pattern) in &self.patterns {
            if pattern.is_match(text) {
                trace!("Matched indexed ingredient '{}'", phrase);
                found.push(phrase.clone());
            }
        }

        info!(
            "Extracted {} of {} known ingredients",
            found.len(),
            self.patterns.len()
        );
        found
    }

    /// Check whether `text` contains at least one indexed ingredient
    pub fn has_ingredients(&self, text: &str) -> bool {
        !text.trim().is_empty() && self.patterns.iter().any(|(_, p)| p.is_match(text))
    }

    /// Number of compiled ingredient patterns
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

/// One-shot convenience wrapper: compile an extractor for `index` and run it
/// over `text`
///
/// Prefer constructing an [`IngredientExtractor`] once when extracting
/// repeatedly against the same index.
pub fn extract_ingredients(
    text: &str,
    index: &IngredientIndex,
) -> Result<Vec<String>, ExtractionError> {
    Ok(IngredientExtractor::new(index)?.extract(text))
}
