//! # Recipe Categorization Example
//!
//! This example walks through the full pipeline: building an ingredient
//! index from dataset-style rows, extracting the index entries found in a
//! recipe text, and sorting the matches into the built-in categories.

use ingredient_categorizer::categories::CategoryTable;
use ingredient_categorizer::categorizer::categorize;
use ingredient_categorizer::extractor::IngredientExtractor;
use ingredient_categorizer::index::IngredientIndex;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🍛 Recipe Ingredient Categorizer Example");
    println!("========================================\n");

    // Example 1: build the ingredient index from dataset rows
    println!("📖 Example 1: Building the Ingredient Index");
    println!("-------------------------------------------");

    let rows = [
        "milk, sugar, ginger, cardamom, black pepper",
        "lentils, turmeric, salt, curry leaves, mustard oil",
        "paneer, butter, tomato, garam masala, cream",
        "rice, peas, cashews, saffron, ghee",
    ];
    let index = IngredientIndex::from_rows(rows);
    println!("Indexed {} distinct ingredients\n", index.len());

    // Example 2: extract the known ingredients from a recipe
    println!("🔍 Example 2: Extracting Ingredients");
    println!("------------------------------------");

    let recipe = "Simmer the lentils with turmeric and salt. \
                  Temper curry leaves in mustard oil, stir in cream, \
                  and finish with a pinch of garam masala and sugar.";

    let extractor = IngredientExtractor::new(&index)?;
    let found = extractor.extract(recipe);
    println!("Found {} ingredients: {}\n", found.len(), found.join(", "));

    // Example 3: sort the matches into categories
    println!("📊 Example 3: Categorizing the Matches");
    println!("--------------------------------------");

    let table = CategoryTable::builtin();
    let categorized = categorize(&found, table);
    for name in table.names() {
        let ingredients = &categorized[name];
        if !ingredients.is_empty() {
            println!("{name}: {}", ingredients.join(", "));
        }
    }

    Ok(())
}
