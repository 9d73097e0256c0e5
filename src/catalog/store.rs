use serde::Deserialize;

use crate::models::{FoodItem, MealSlotKind};

/// The static catalog of candidate foods, partitioned by meal slot.
///
/// Loaded once and read-only thereafter; plan generation never mutates it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealCatalog {
    pub breakfast: Vec<FoodItem>,
    pub lunch: Vec<FoodItem>,
    pub dinner: Vec<FoodItem>,
    pub snacks: Vec<FoodItem>,
}

impl MealCatalog {
    pub fn new(
        breakfast: Vec<FoodItem>,
        lunch: Vec<FoodItem>,
        dinner: Vec<FoodItem>,
        snacks: Vec<FoodItem>,
    ) -> Self {
        Self {
            breakfast,
            lunch,
            dinner,
            snacks,
        }
    }

    /// Candidate bucket for a slot.
    pub fn bucket(&self, slot: MealSlotKind) -> &[FoodItem] {
        match slot {
            MealSlotKind::Breakfast => &self.breakfast,
            MealSlotKind::Lunch => &self.lunch,
            MealSlotKind::Snack => &self.snacks,
            MealSlotKind::Dinner => &self.dinner,
        }
    }

    /// Every item across all four buckets.
    pub fn items(&self) -> impl Iterator<Item = &FoodItem> {
        self.breakfast
            .iter()
            .chain(&self.lunch)
            .chain(&self.dinner)
            .chain(&self.snacks)
    }

    pub fn len(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len() + self.snacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct allergen tags present anywhere in the catalog, sorted.
    pub fn known_allergens(&self) -> Vec<String> {
        Self::collect_tags(self.items().map(|f| f.allergens.as_slice()))
    }

    /// Distinct diet tags present anywhere in the catalog, sorted.
    pub fn known_diets(&self) -> Vec<String> {
        Self::collect_tags(self.items().map(|f| f.diets.as_slice()))
    }

    fn collect_tags<'a>(lists: impl Iterator<Item = &'a [String]>) -> Vec<String> {
        let mut tags: Vec<String> = lists.flatten().cloned().collect();
        tags.sort();
        tags.dedup();
        tags
    }
}
