//! # Ingredient Categorizer
//!
//! Extracts known ingredient names from free-text recipe input and sorts
//! them into a fixed set of culinary categories.
//!
//! The reference dataset supplies the vocabulary: its "Ingredients" column
//! is flattened into an [`index::IngredientIndex`], an
//! [`extractor::IngredientExtractor`] finds index entries occurring in the
//! input as case-insensitive whole words, and [`categorizer::categorize`]
//! partitions the matches across the thirteen built-in categories with
//! "Other" as the fallback.
//!
//! ## Usage
//!
//! ```rust
//! use ingredient_categorizer::categories::CategoryTable;
//! use ingredient_categorizer::categorizer::categorize;
//! use ingredient_categorizer::extractor::IngredientExtractor;
//! use ingredient_categorizer::index::IngredientIndex;
//!
//! let rows = ["milk, sugar, turmeric", "pepper, milk"];
//! let index = IngredientIndex::from_rows(rows);
//! let extractor = IngredientExtractor::new(&index)?;
//!
//! let found = extractor.extract("Add milk, sugar and turmeric to the pan");
//! let categorized = categorize(&found, CategoryTable::builtin());
//!
//! assert_eq!(categorized["Dairy"], vec!["milk"]);
//! assert_eq!(categorized["Spices"], vec!["turmeric"]);
//! # Ok::<(), ingredient_categorizer::errors::ExtractionError>(())
//! ```

pub mod categories;
pub mod categorizer;
pub mod dataset;
pub mod errors;
pub mod extractor;
pub mod index;
pub mod session;
