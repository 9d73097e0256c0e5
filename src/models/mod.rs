pub mod food;
pub mod plan;
pub mod preferences;

pub use food::FoodItem;
pub use plan::{MealPlan, MealSlot, MealSlotKind, PlanTotals};
pub use preferences::UserPreferences;
