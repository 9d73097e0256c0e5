use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::plan::MealSlotKind;

/// Caller-supplied generation constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub daily_calories: f64,

    pub daily_protein: f64,

    pub daily_carbs: f64,

    pub daily_fat: f64,

    /// Allergen tags to exclude outright.
    #[serde(default)]
    pub allergens: Vec<String>,

    /// Diet tags; a diet-classified item must carry at least one of them.
    #[serde(default)]
    pub diets: Vec<String>,

    /// Per-slot category preferences, reserved for future filtering. Not
    /// consulted by scoring today.
    #[serde(default)]
    pub category_preferences: HashMap<MealSlotKind, Vec<String>>,
}

impl UserPreferences {
    pub fn new(daily_calories: f64, daily_protein: f64, daily_carbs: f64, daily_fat: f64) -> Self {
        Self {
            daily_calories,
            daily_protein,
            daily_carbs,
            daily_fat,
            allergens: Vec::new(),
            diets: Vec::new(),
            category_preferences: HashMap::new(),
        }
    }

    /// Reject daily targets the scorer cannot divide by.
    ///
    /// Slot targets are these values times a positive fraction, so once this
    /// passes every per-slot target is strictly positive.
    pub fn validate(&self) -> Result<()> {
        let dims = [
            ("calorie", self.daily_calories),
            ("protein", self.daily_protein),
            ("carbs", self.daily_carbs),
            ("fat", self.daily_fat),
        ];

        for (name, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlanError::InvalidInput(format!(
                    "daily {} target must be a positive number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_positive_targets() {
        let prefs = UserPreferences::new(2000.0, 150.0, 200.0, 65.0);
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_target() {
        let prefs = UserPreferences::new(2000.0, 0.0, 200.0, 65.0);
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_target() {
        let prefs = UserPreferences::new(-100.0, 150.0, 200.0, 65.0);
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_target() {
        let prefs = UserPreferences::new(2000.0, 150.0, f64::NAN, 65.0);
        assert!(prefs.validate().is_err());
    }
}
