use crate::models::MealSlotKind;

/// Fraction of the daily targets assigned to each slot.
///
/// The four fractions sum to 1.0 and are fixed constants of the design.
pub const BREAKFAST_FRACTION: f64 = 0.25;
pub const LUNCH_FRACTION: f64 = 0.35;
pub const DINNER_FRACTION: f64 = 0.35;
pub const SNACK_FRACTION: f64 = 0.05;

/// Weight of the calorie dimension in the fit score; each macro dimension
/// weighs 1.
pub const CALORIE_WEIGHT: f64 = 2.0;

/// Divisor normalizing the weighted sum of the four dimension scores.
pub const SCORE_DIVISOR: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Variation target multipliers
// ─────────────────────────────────────────────────────────────────────────────

/// High-protein variation: more protein, fewer carbs.
pub const HIGH_PROTEIN_PROTEIN_MULT: f64 = 1.1;
pub const HIGH_PROTEIN_CARBS_MULT: f64 = 0.9;

/// Low-carb variation: fewer carbs, more fat.
pub const LOW_CARB_CARBS_MULT: f64 = 0.8;
pub const LOW_CARB_FAT_MULT: f64 = 1.2;

/// Target fraction for a slot.
pub fn slot_fraction(slot: MealSlotKind) -> f64 {
    match slot {
        MealSlotKind::Breakfast => BREAKFAST_FRACTION,
        MealSlotKind::Lunch => LUNCH_FRACTION,
        MealSlotKind::Dinner => DINNER_FRACTION,
        MealSlotKind::Snack => SNACK_FRACTION,
    }
}
