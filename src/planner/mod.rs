pub mod assembly;
pub mod constants;
pub mod scoring;
pub mod selection;

pub use assembly::{assemble_plan, generate_meal_plans, plan_variations};
pub use constants::*;
pub use scoring::{NutrientTarget, score, slot_target};
pub use selection::{filter_eligible, select_best};
