#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use ingredient_categorizer::categories::CategoryTable;
    use ingredient_categorizer::categorizer::categorize;
    use ingredient_categorizer::dataset::load_ingredient_rows;
    use ingredient_categorizer::errors::ExtractionError;
    use ingredient_categorizer::extractor::IngredientExtractor;
    use ingredient_categorizer::index::IngredientIndex;

    fn write_dataset(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_dataset_to_index_pipeline() {
        let file = write_dataset(
            "Name,Cuisine,Ingredients\n\
             Masala Chai,Indian,\"milk, sugar, ginger, cardamom\"\n\
             Tadka Dal,Indian,\"lentils, turmeric, salt, ginger\"\n",
        );

        let rows = load_ingredient_rows(file.path()).unwrap();
        let index = IngredientIndex::from_rows(&rows);

        // Duplicated "ginger" collapses; order is first-seen
        assert_eq!(
            index.entries(),
            &["milk", "sugar", "ginger", "cardamom", "lentils", "turmeric", "salt"]
        );
    }

    #[test]
    fn test_quoted_ingredient_lists_survive_commas() {
        let file = write_dataset("Ingredients\n\"milk, hung curd, bread crumbs\"\n");

        let rows = load_ingredient_rows(file.path()).unwrap();

        assert_eq!(rows, vec!["milk, hung curd, bread crumbs"]);
    }

    #[test]
    fn test_missing_column_reports_dataset_error() {
        let file = write_dataset("Name,Steps\nChai,boil everything\n");

        assert!(matches!(
            load_ingredient_rows(file.path()),
            Err(ExtractionError::Dataset(_))
        ));
    }

    #[test]
    fn test_end_to_end_from_csv_to_categories() {
        let file = write_dataset(
            "Name,Ingredients\n\
             Chai,\"milk, sugar, ginger\"\n\
             Dal,\"lentils, turmeric, salt\"\n",
        );

        let rows = load_ingredient_rows(file.path()).unwrap();
        let index = IngredientIndex::from_rows(&rows);
        let extractor = IngredientExtractor::new(&index).unwrap();

        let found = extractor.extract("Boil milk with ginger, add sugar and a pinch of salt");
        assert_eq!(found, vec!["milk", "sugar", "ginger", "salt"]);

        let categorized = categorize(&found, CategoryTable::builtin());
        assert_eq!(categorized["Dairy"], vec!["milk"]);
        assert_eq!(categorized["Sweeteners"], vec!["sugar"]);
        assert_eq!(categorized["Spices"], vec!["ginger", "salt"]);
    }
}
