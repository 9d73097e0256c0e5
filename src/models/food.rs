use serde::{Deserialize, Serialize};

/// A candidate food from the catalog.
///
/// Nutrition values are per declared serving and fixed at load time; plan
/// generation never mutates an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,

    pub name: String,

    pub calories: f64,

    pub protein: f64,

    pub carbs: f64,

    pub fat: f64,

    #[serde(default)]
    pub fiber: f64,

    /// Textual serving size, e.g. "1 bowl (250 g)".
    pub serving: String,

    #[serde(default)]
    pub allergens: Vec<String>,

    #[serde(default)]
    pub diets: Vec<String>,

    #[serde(default)]
    pub categories: Vec<String>,

    /// Preparation time in minutes.
    #[serde(default)]
    pub prep_time: u32,
}

impl FoodItem {
    /// True if any of the item's allergen tags appears in `excluded`.
    pub fn has_excluded_allergen(&self, excluded: &[String]) -> bool {
        self.allergens
            .iter()
            .any(|tag| excluded.iter().any(|e| e == tag))
    }

    /// Diet filtering for `required` tags.
    ///
    /// An item with no diet tags is diet-agnostic and always passes;
    /// otherwise at least one of its tags must be among the required ones.
    pub fn matches_diets(&self, required: &[String]) -> bool {
        if required.is_empty() || self.diets.is_empty() {
            return true;
        }
        self.diets.iter().any(|tag| required.iter().any(|r| r == tag))
    }

    /// Load-time validation: identity present, nutrition finite and non-negative.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty()
            && !self.name.is_empty()
            && [self.calories, self.protein, self.carbs, self.fat, self.fiber]
                .into_iter()
                .all(|v| v.is_finite() && v >= 0.0)
    }

    /// Debug string for status output.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal, P:{} C:{} F:{} ({})",
            self.name, self.calories, self.protein, self.carbs, self.fat, self.serving
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> FoodItem {
        FoodItem {
            id: "oatmeal".to_string(),
            name: "Oatmeal with Berries".to_string(),
            calories: 320.0,
            protein: 12.0,
            carbs: 55.0,
            fat: 6.0,
            fiber: 8.0,
            serving: "1 bowl (250 g)".to_string(),
            allergens: vec!["gluten".to_string()],
            diets: vec!["vegetarian".to_string()],
            categories: vec!["grains".to_string()],
            prep_time: 10,
        }
    }

    #[test]
    fn test_has_excluded_allergen() {
        let item = sample_item();
        assert!(item.has_excluded_allergen(&["gluten".to_string()]));
        assert!(!item.has_excluded_allergen(&["nuts".to_string()]));
        assert!(!item.has_excluded_allergen(&[]));
    }

    #[test]
    fn test_matches_diets() {
        let item = sample_item();
        assert!(item.matches_diets(&[]));
        assert!(item.matches_diets(&["vegetarian".to_string()]));
        assert!(!item.matches_diets(&["vegan".to_string()]));
    }

    #[test]
    fn test_untagged_item_is_diet_agnostic() {
        let mut item = sample_item();
        item.diets.clear();
        assert!(item.matches_diets(&["vegan".to_string()]));
    }

    #[test]
    fn test_is_valid() {
        let item = sample_item();
        assert!(item.is_valid());

        let mut negative = sample_item();
        negative.calories = -1.0;
        assert!(!negative.is_valid());

        let mut anonymous = sample_item();
        anonymous.id.clear();
        assert!(!anonymous.is_valid());
    }

    #[test]
    fn test_deserializes_camel_case() {
        let json = r#"{
            "id": "eggs",
            "name": "Scrambled Eggs",
            "calories": 280,
            "protein": 19,
            "carbs": 2,
            "fat": 21,
            "serving": "3 eggs",
            "allergens": ["eggs"],
            "prepTime": 8
        }"#;

        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.prep_time, 8);
        assert!(item.diets.is_empty());
        assert_eq!(item.fiber, 0.0);
    }
}
