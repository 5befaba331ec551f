use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;

use ingredient_categorizer::categories::CategoryTable;
use ingredient_categorizer::dataset;
use ingredient_categorizer::errors::ExtractionError;
use ingredient_categorizer::index::IngredientIndex;
use ingredient_categorizer::session::ExtractionSession;

/// JSON report emitted with `--json`, categories in declaration order
#[derive(Serialize)]
struct Report {
    extracted: Vec<String>,
    categories: Vec<CategoryRow>,
}

#[derive(Serialize)]
struct CategoryRow {
    name: String,
    ingredients: Vec<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let mut json_output = false;
    let mut positional = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "--json" {
            json_output = true;
        } else {
            positional.push(arg);
        }
    }

    // Dataset path: first argument, then DATASET_PATH, then the default
    let dataset_path = positional
        .first()
        .cloned()
        .or_else(|| env::var("DATASET_PATH").ok())
        .unwrap_or_else(|| "IndianRecipes.csv".to_string());

    info!("Loading ingredient dataset from '{}'", dataset_path);
    let rows = dataset::load_ingredient_rows(&dataset_path)?;
    let index = IngredientIndex::from_rows(&rows);
    info!("Ingredient index holds {} distinct entries", index.len());

    // Recipe text: second argument as a file, otherwise stdin
    let text = match positional.get(1) {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("cannot read recipe text from '{path}'"))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read recipe text from stdin")?;
            buffer
        }
    };

    let mut session = ExtractionSession::new(&index)?;
    let extracted = match session.extract(&text) {
        Ok(found) => found.to_vec(),
        Err(ExtractionError::EmptyInput) => {
            warn!("No recipe text supplied");
            eprintln!("Please enter the recipe text!");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if extracted.is_empty() {
        println!("No matching ingredients found in the dataset.");
        return Ok(());
    }

    let categorized = session.categorize()?;

    if json_output {
        let report = Report {
            extracted,
            categories: session
                .table()
                .names()
                .map(|name| CategoryRow {
                    name: name.to_string(),
                    ingredients: categorized.get(name).cloned().unwrap_or_default(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Extracted ingredients: {}", extracted.join(", "));
        println!();
        print_category_table(session.table(), &categorized);
    }

    Ok(())
}

/// Plain-text rendering of the categorized result in declaration order
fn print_category_table(table: &CategoryTable, categorized: &HashMap<String, Vec<String>>) {
    for name in table.names() {
        let ingredients = categorized
            .get(name)
            .map(|v| v.as_slice())
            .unwrap_or_default();
        if ingredients.is_empty() {
            println!("{name:<20} -");
        } else {
            println!("{name:<20} {}", ingredients.join(", "));
        }
    }
}
