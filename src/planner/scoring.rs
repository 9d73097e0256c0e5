use crate::models::{FoodItem, MealSlotKind, UserPreferences};
use crate::planner::constants::{CALORIE_WEIGHT, SCORE_DIVISOR, slot_fraction};

/// Macro targets for a single slot.
#[derive(Debug, Clone, Copy)]
pub struct NutrientTarget {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Derive the target for one slot from the daily targets.
pub fn slot_target(prefs: &UserPreferences, slot: MealSlotKind) -> NutrientTarget {
    let fraction = slot_fraction(slot);
    NutrientTarget {
        calories: prefs.daily_calories * fraction,
        protein: prefs.daily_protein * fraction,
        carbs: prefs.daily_carbs * fraction,
        fat: prefs.daily_fat * fraction,
    }
}

/// Closeness of one value to its target: 1.0 at an exact match, falling
/// linearly (and below zero) with relative distance.
fn dimension_score(value: f64, target: f64) -> f64 {
    // Targets are validated positive at the boundary.
    debug_assert!(target > 0.0);
    1.0 - (value - target).abs() / target
}

/// Fit score of a candidate against a slot target, in (-inf, 1].
///
/// Calories weigh double the three macro dimensions. The score is only
/// meaningful relative to other candidates; no clamping is applied.
pub fn score(item: &FoodItem, target: &NutrientTarget) -> f64 {
    let calorie_score = dimension_score(item.calories, target.calories);
    let protein_score = dimension_score(item.protein, target.protein);
    let carbs_score = dimension_score(item.carbs, target.carbs);
    let fat_score = dimension_score(item.fat, target.fat);

    (CALORIE_WEIGHT * calorie_score + protein_score + carbs_score + fat_score) / SCORE_DIVISOR
}
