use serde::{Deserialize, Serialize};

use crate::models::food::FoodItem;

/// The four meal slots of a daily plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlotKind {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlotKind {
    /// Slots in the order plans list them; the snack sits between lunch and
    /// dinner because it is scheduled mid-afternoon.
    pub const ORDERED: [MealSlotKind; 4] = [
        MealSlotKind::Breakfast,
        MealSlotKind::Lunch,
        MealSlotKind::Snack,
        MealSlotKind::Dinner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealSlotKind::Breakfast => "Breakfast",
            MealSlotKind::Lunch => "Lunch",
            MealSlotKind::Snack => "Snack",
            MealSlotKind::Dinner => "Dinner",
        }
    }

    /// Scheduled time of day shown next to the slot.
    pub fn scheduled_time(self) -> &'static str {
        match self {
            MealSlotKind::Breakfast => "8:00 AM",
            MealSlotKind::Lunch => "12:30 PM",
            MealSlotKind::Snack => "3:00 PM",
            MealSlotKind::Dinner => "6:30 PM",
        }
    }
}

/// One filled slot of a plan.
///
/// The slot's realized macros are the chosen item's values; the accessors
/// delegate rather than duplicating them.
#[derive(Debug, Clone)]
pub struct MealSlot {
    pub slot: MealSlotKind,
    pub food: FoodItem,
}

impl MealSlot {
    #[inline]
    pub fn calories(&self) -> f64 {
        self.food.calories
    }

    #[inline]
    pub fn protein(&self) -> f64 {
        self.food.protein
    }

    #[inline]
    pub fn carbs(&self) -> f64 {
        self.food.carbs
    }

    #[inline]
    pub fn fat(&self) -> f64 {
        self.food.fat
    }
}

/// Aggregate macros of a plan, rounded to the nearest whole unit for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanTotals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// A complete daily plan: one chosen item per slot plus aggregate totals.
#[derive(Debug, Clone)]
pub struct MealPlan {
    pub id: String,
    pub name: String,
    pub totals: PlanTotals,
    pub slots: Vec<MealSlot>,
}

impl MealPlan {
    /// Ids of every food chosen by this plan.
    pub fn food_ids(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.food.id.as_str())
    }
}
