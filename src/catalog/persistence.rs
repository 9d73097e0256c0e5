use std::collections::HashMap;
use std::fs;
use std::mem;
use std::path::Path;

use crate::catalog::store::MealCatalog;
use crate::error::{PlanError, Result};
use crate::models::FoodItem;

/// Load a catalog from a JSON file.
///
/// Fails fast on malformed or invalid records, before any generation call.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parse and validate a catalog from a JSON string.
///
/// Within a bucket, duplicate ids keep the last occurrence; relative order is
/// otherwise preserved.
pub fn parse_catalog(json: &str) -> Result<MealCatalog> {
    let mut catalog: MealCatalog = serde_json::from_str(json)?;

    catalog.breakfast = dedup_bucket(mem::take(&mut catalog.breakfast));
    catalog.lunch = dedup_bucket(mem::take(&mut catalog.lunch));
    catalog.dinner = dedup_bucket(mem::take(&mut catalog.dinner));
    catalog.snacks = dedup_bucket(mem::take(&mut catalog.snacks));

    for item in catalog.items() {
        if !item.is_valid() {
            return Err(PlanError::InvalidCatalog(format!(
                "invalid food record (id: {:?}, name: {:?})",
                item.id, item.name
            )));
        }
    }

    Ok(catalog)
}

/// Deduplicate a bucket by id, keeping the last occurrence in its position.
fn dedup_bucket(items: Vec<FoodItem>) -> Vec<FoodItem> {
    let mut last: HashMap<String, usize> = HashMap::new();
    for (i, item) in items.iter().enumerate() {
        last.insert(item.id.clone(), i);
    }

    items
        .into_iter()
        .enumerate()
        .filter(|(i, item)| last[&item.id] == *i)
        .map(|(_, item)| item)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID_JSON: &str = r#"{
        "breakfast": [
            {"id": "oatmeal", "name": "Oatmeal", "calories": 320, "protein": 12, "carbs": 55, "fat": 6, "serving": "1 bowl"}
        ],
        "lunch": [
            {"id": "chicken-bowl", "name": "Chicken Bowl", "calories": 520, "protein": 42, "carbs": 48, "fat": 16, "serving": "1 bowl"}
        ],
        "dinner": [
            {"id": "salmon-rice", "name": "Salmon with Rice", "calories": 560, "protein": 38, "carbs": 50, "fat": 20, "serving": "1 plate", "allergens": ["fish"]}
        ],
        "snacks": [
            {"id": "almonds", "name": "Almonds", "calories": 160, "protein": 6, "carbs": 6, "fat": 14, "serving": "28 g", "allergens": ["nuts"]}
        ]
    }"#;

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(VALID_JSON.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.breakfast[0].id, "oatmeal");
        assert_eq!(catalog.snacks[0].allergens, vec!["nuts"]);
    }

    #[test]
    fn test_duplicate_ids_keep_last_occurrence() {
        let json = r#"{
            "breakfast": [
                {"id": "oatmeal", "name": "Oatmeal", "calories": 320, "protein": 12, "carbs": 55, "fat": 6, "serving": "1 bowl"},
                {"id": "eggs", "name": "Eggs", "calories": 280, "protein": 19, "carbs": 2, "fat": 21, "serving": "3 eggs"},
                {"id": "oatmeal", "name": "Oatmeal (large)", "calories": 480, "protein": 18, "carbs": 82, "fat": 9, "serving": "1 large bowl"}
            ],
            "lunch": [],
            "dinner": [],
            "snacks": []
        }"#;

        let catalog = parse_catalog(json).unwrap();
        assert_eq!(catalog.breakfast.len(), 2);
        assert_eq!(catalog.breakfast[0].id, "eggs");
        assert_eq!(catalog.breakfast[1].name, "Oatmeal (large)");
    }

    #[test]
    fn test_invalid_record_rejected() {
        let json = r#"{
            "breakfast": [
                {"id": "oatmeal", "name": "Oatmeal", "calories": -5, "protein": 12, "carbs": 55, "fat": 6, "serving": "1 bowl"}
            ],
            "lunch": [],
            "dinner": [],
            "snacks": []
        }"#;

        assert!(matches!(
            parse_catalog(json),
            Err(PlanError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{
            "breakfast": [
                {"id": "oatmeal", "calories": 320, "protein": 12, "carbs": 55, "fat": 6, "serving": "1 bowl"}
            ],
            "lunch": [],
            "dinner": [],
            "snacks": []
        }"#;

        assert!(matches!(parse_catalog(json), Err(PlanError::Json(_))));
    }
}
