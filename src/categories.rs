//! # Category Table Module
//!
//! This module provides the fixed table of culinary categories used to sort
//! extracted ingredients, plus first-match category lookup.
//!
//! ## Features
//!
//! - Thirteen built-in categories with hand-curated member lists
//! - Case-insensitive whole-word member matching (members are escaped so
//!   punctuation in ingredient names is treated literally)
//! - Deterministic first-match tie-break in table declaration order
//! - "Other" as the universal fallback for unmatched ingredients

use std::sync::Arc;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::errors::ExtractionError;

/// Name of the universal fallback category. It has no members and collects
/// every ingredient that matches no other category.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Built-in category definitions in declaration order. Members may overlap
/// across categories ("butter" in Dairy and Oils, "beans"/"peas" in
/// Vegetables and Legumes); lookup resolves overlaps by first match.
const BUILTIN_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Dairy",
        &[
            "milk",
            "butter",
            "cheese",
            "yogurt",
            "cream",
            "paneer",
            "ghee",
            "khoya",
            "curd",
            "hung curd",
            "mozarella cheese",
            "monterey jack cheese",
            "parmigiano reggiano cheese",
        ],
    ),
    (
        "Fruits",
        &[
            "pomegranate",
            "sugarcane",
            "mango",
            "mangoes",
            "bananas",
            "orange",
            "oranges",
            "apple",
            "apples",
            "custard apple",
            "pineapple",
            "coconut",
        ],
    ),
    (
        "Vegetables",
        &[
            "onion",
            "onions",
            "tomato",
            "potato",
            "carrot",
            "cabbage",
            "cauliflower",
            "spinach",
            "tomatoes",
            "eggplant",
            "green chilies",
            "carrots",
            "potatoes",
            "mashed potatoes",
            "capsicum",
            "bell peppers",
            "okra",
            "lemon",
            "curry leaves",
            "mint leaves",
            "fenugreek leaves",
            "mushrooms",
            "mixed vegetables",
            "lemon juice",
            "beans",
            "peas",
        ],
    ),
    (
        "Grains and Seeds",
        &[
            "rice",
            "wheat",
            "flour",
            "maida",
            "rava",
            "corn",
            "barley",
            "urad dal",
            "fenugreek seeds",
            "peanuts",
            "fennel seeds",
            "poppy seeds",
        ],
    ),
    (
        "Spices",
        &[
            "turmeric",
            "cumin",
            "coriander",
            "mustard",
            "chili",
            "ginger",
            "garlic",
            "cardamom",
            "cloves",
            "spices",
            "garam masala",
            "chaat masala",
            "salt",
            "goda masala",
            "pav bhaji masala",
            "dabeli masala",
            "black pepper",
            "rasam powder",
            "saffron",
            "green cardomoms",
            "cinnamon stick",
            "bay leaf",
            "red chilli powder",
        ],
    ),
    (
        "Legumes",
        &[
            "lentils",
            "chickpeas",
            "beans",
            "peas",
            "moong",
            "masoor",
            "toor",
            "pepper",
            "baking powder",
            "baking soda",
            "sambar powder",
            "tamarind",
        ],
    ),
    ("Oils", &["oil", "butter", "mustard oil", "olive oil"]),
    ("Sweeteners", &["sugar", "jaggery", "honey"]),
    (
        "Nuts & Dry Fruits",
        &["almonds", "cashews", "raisins", "pistachios", "walnuts", "nuts"],
    ),
    (
        "Chutney and Sauces",
        &[
            "tamarind chutney",
            "soy sauce",
            "mint chutney",
            "green chutney",
            "mint water",
            "schezwan sauce",
        ],
    ),
    (
        "Packaged Items",
        &[
            "noodles",
            "yeast",
            "bread crumbs",
            "bread",
            "spring roll wrappers",
            "cornflour",
            "kokum",
            "sev",
            "semolina",
            "farsan",
        ],
    ),
    (
        "Meat and Fish",
        &["chicken", "fish", "sausage", "beef", "pork", "mutton"],
    ),
    (FALLBACK_CATEGORY, &[]),
];

// Lazy static table so the built-in member patterns compile once per process
lazy_static! {
    static ref BUILTIN_TABLE: CategoryTable = CategoryTable::new(BUILTIN_CATEGORIES)
        .expect("Built-in category definitions should be valid");
}

/// A single category: its name, normalized member phrases, and the compiled
/// whole-word pattern for each member
struct CategoryEntry {
    name: String,
    members: Vec<String>,
    patterns: Vec<Regex>,
}

/// Ordered, immutable mapping from category name to member patterns
///
/// Declaration order is significant: [`CategoryTable::category_for`] returns
/// the first category with a matching member, so overlapping memberships are
/// resolved deterministically.
#[derive(Clone)]
pub struct CategoryTable {
    entries: Vec<Arc<CategoryEntry>>,
}

impl CategoryTable {
    /// Build a table from `(name, members)` definitions
    ///
    /// Members are trimmed, lower-cased, and escaped before being compiled
    /// into case-insensitive whole-word patterns. Duplicate members within a
    /// single category are collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Table`] when two categories share a name,
    /// or [`ExtractionError::Pattern`] when a member fails to compile.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ingredient_categorizer::categories::CategoryTable;
    ///
    /// let table = CategoryTable::new(&[("Dairy", &["milk"] as &[&str]), ("Other", &[])])?;
    /// assert_eq!(table.category_for("milk"), "Dairy");
    /// # Ok::<(), ingredient_categorizer::errors::ExtractionError>(())
    /// ```
    pub fn new(definitions: &[(&str, &[&str])]) -> Result<Self, ExtractionError> {
        let mut entries: Vec<Arc<CategoryEntry>> = Vec::with_capacity(definitions.len());

        for (name, raw_members) in definitions {
            if entries.iter().any(|e| e.name == *name) {
                return Err(ExtractionError::Table(format!(
                    "duplicate category name '{name}'"
                )));
            }

            let mut members = Vec::with_capacity(raw_members.len());
            let mut patterns = Vec::with_capacity(raw_members.len());
            for raw in *raw_members {
                let member = raw.trim().to_lowercase();
                if member.is_empty() || members.contains(&member) {
                    continue;
                }
                let pattern = compile_member_pattern(&member)?;
                trace!("Compiled member pattern for '{}' in '{}'", member, name);
                members.push(member);
                patterns.push(pattern);
            }

            entries.push(Arc::new(CategoryEntry {
                name: name.to_string(),
                members,
                patterns,
            }));
        }

        debug!("Built category table with {} categories", entries.len());
        Ok(Self { entries })
    }

    /// The process-wide built-in table of thirteen categories
    pub fn builtin() -> &'static CategoryTable {
        &BUILTIN_TABLE
    }

    /// Category names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Number of declared categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalized member phrases of a category, or `None` for an unknown name
    pub fn members(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.members.as_slice())
    }

    /// Find the category an ingredient belongs to
    ///
    /// Returns the FIRST category (declaration order) with at least one
    /// member occurring inside `ingredient` as a case-insensitive whole
    /// word. The direction is member-inside-ingredient: "mashed potatoes"
    /// lands in Vegetables because the member "potatoes" occurs in it, not
    /// because the ingredient occurs in any member list. Ingredients that
    /// match nothing fall back to [`FALLBACK_CATEGORY`].
    pub fn category_for(&self, ingredient: &str) -> &str {
        for entry in &self.entries {
            if entry.patterns.iter().any(|p| p.is_match(ingredient)) {
                trace!("'{}' matched category '{}'", ingredient, entry.name);
                return &entry.name;
            }
        }
        trace!("'{}' matched no category, using fallback", ingredient);
        FALLBACK_CATEGORY
    }
}

/// Compile a member phrase into a case-insensitive whole-word pattern,
/// escaping the phrase so punctuation is matched literally
pub(crate) fn compile_member_pattern(phrase: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase)))
}
