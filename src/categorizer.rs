//! # Ingredient Categorizer Module
//!
//! This module partitions extracted ingredient strings across the categories
//! of a [`CategoryTable`](crate::categories::CategoryTable).
//!
//! ## Features
//!
//! - First-matching-category assignment in table declaration order
//! - Every declared category present in the output, empty ones included
//! - Unmatched ingredients collected under the "Other" fallback

use std::collections::HashMap;

use log::{debug, info};

use crate::categories::CategoryTable;

/// Assign each ingredient to exactly one category
///
/// For every ingredient the FIRST category (in `table` declaration order)
/// with a member matching the ingredient wins; ingredients matching nothing
/// go to the fallback category. The result maps every declared category name
/// to the ingredients assigned to it, preserving the order in which the
/// ingredients were supplied. No ingredient is dropped or duplicated: the
/// union of all values equals the input.
///
/// # Examples
///
/// ```rust
/// use ingredient_categorizer::categories::CategoryTable;
/// use ingredient_categorizer::categorizer::categorize;
///
/// let ingredients = ["milk", "sugar", "turmeric", "randomword"];
/// let categorized = categorize(&ingredients, CategoryTable::builtin());
///
/// assert_eq!(categorized["Dairy"], vec!["milk"]);
/// assert_eq!(categorized["Sweeteners"], vec!["sugar"]);
/// assert_eq!(categorized["Spices"], vec!["turmeric"]);
/// assert_eq!(categorized["Other"], vec!["randomword"]);
/// assert!(categorized["Fruits"].is_empty());
/// ```
pub fn categorize<S: AsRef<str>>(
    ingredients: &[S],
    table: &CategoryTable,
) -> HashMap<String, Vec<String>> {
    let mut categorized: HashMap<String, Vec<String>> = table
        .names()
        .map(|name| (name.to_string(), Vec::new()))
        .collect();

    for ingredient in ingredients {
        let ingredient = ingredient.as_ref();
        let category = table.category_for(ingredient);
        debug!("Assigned '{}' to category '{}'", ingredient, category);
        // Tables without a declared fallback still gain the key on demand
        categorized
            .entry(category.to_string())
            .or_default()
            .push(ingredient.to_string());
    }

    info!(
        "Categorized {} ingredients across {} categories",
        ingredients.len(),
        categorized.len()
    );
    categorized
}
