use std::collections::HashSet;

use crate::catalog::MealCatalog;
use crate::error::Result;
use crate::models::{FoodItem, MealPlan, MealSlot, MealSlotKind, PlanTotals, UserPreferences};
use crate::planner::constants::{
    HIGH_PROTEIN_CARBS_MULT, HIGH_PROTEIN_PROTEIN_MULT, LOW_CARB_CARBS_MULT, LOW_CARB_FAT_MULT,
};
use crate::planner::scoring::slot_target;
use crate::planner::selection::{filter_eligible, select_best};

/// Assemble a single plan, drawing only items whose ids are not in `used`.
///
/// All four buckets are filtered and checked for emptiness before any slot is
/// filled. Returns `None` as soon as any slot cannot be satisfied; no partial
/// plan is produced and `used` is left untouched. On success the chosen ids
/// are added to `used`, so successive calls sharing the set never repeat an
/// item.
pub fn assemble_plan(
    catalog: &MealCatalog,
    prefs: &UserPreferences,
    plan_number: usize,
    used: &mut HashSet<String>,
) -> Option<MealPlan> {
    let buckets: Vec<(MealSlotKind, Vec<&FoodItem>)> = MealSlotKind::ORDERED
        .into_iter()
        .map(|slot| (slot, filter_eligible(catalog.bucket(slot), prefs)))
        .collect();

    if buckets.iter().any(|(_, eligible)| eligible.is_empty()) {
        return None;
    }

    let mut picks = Vec::with_capacity(buckets.len());
    for (slot, eligible) in &buckets {
        let target = slot_target(prefs, *slot);
        let food = select_best(eligible, &target, used)?;
        picks.push((*slot, food));
    }

    let mut slots = Vec::with_capacity(picks.len());
    let (mut calories, mut protein, mut carbs, mut fat) = (0.0, 0.0, 0.0, 0.0);
    for (slot, food) in picks {
        used.insert(food.id.clone());
        calories += food.calories;
        protein += food.protein;
        carbs += food.carbs;
        fat += food.fat;
        slots.push(MealSlot {
            slot,
            food: food.clone(),
        });
    }

    Some(MealPlan {
        id: format!("plan-{plan_number}"),
        name: format!("Meal Plan {plan_number}"),
        totals: PlanTotals {
            calories: calories.round() as u32,
            protein: protein.round() as u32,
            carbs: carbs.round() as u32,
            fat: fat.round() as u32,
        },
        slots,
    })
}

/// Generate up to `count` plans, none sharing a food item.
///
/// Stops early without error the first time a plan cannot be assembled, so
/// the result holds between 0 and `count` plans. The deduplication state
/// lives entirely within this call.
pub fn generate_meal_plans(
    catalog: &MealCatalog,
    prefs: &UserPreferences,
    count: usize,
) -> Result<Vec<MealPlan>> {
    prefs.validate()?;

    let mut used = HashSet::new();
    let mut plans = Vec::new();

    for plan_number in 1..=count {
        match assemble_plan(catalog, prefs, plan_number, &mut used) {
            Some(plan) => plans.push(plan),
            None => break,
        }
    }

    Ok(plans)
}

/// The three fixed target profiles offered as variations.
fn variation_profiles(
    prefs: &UserPreferences,
) -> [(&'static str, &'static str, UserPreferences); 3] {
    [
        ("balanced", "Balanced Plan", prefs.clone()),
        (
            "high-protein",
            "High Protein Plan",
            UserPreferences {
                daily_protein: prefs.daily_protein * HIGH_PROTEIN_PROTEIN_MULT,
                daily_carbs: prefs.daily_carbs * HIGH_PROTEIN_CARBS_MULT,
                ..prefs.clone()
            },
        ),
        (
            "low-carb",
            "Low Carb Plan",
            UserPreferences {
                daily_carbs: prefs.daily_carbs * LOW_CARB_CARBS_MULT,
                daily_fat: prefs.daily_fat * LOW_CARB_FAT_MULT,
                ..prefs.clone()
            },
        ),
    ]
}

/// Produce the named plan variations: balanced, high-protein, low-carb.
///
/// Each variation runs with its own fresh deduplication state, so an item may
/// appear in more than one variation. A variation that cannot be assembled is
/// omitted, leaving 0 to 3 plans.
pub fn plan_variations(catalog: &MealCatalog, prefs: &UserPreferences) -> Result<Vec<MealPlan>> {
    prefs.validate()?;

    let mut plans = Vec::new();
    for (id, name, profile) in variation_profiles(prefs) {
        if let Some(mut plan) = generate_meal_plans(catalog, &profile, 1)?.pop() {
            plan.id = id.to_string();
            plan.name = name.to_string();
            plans.push(plan);
        }
    }

    Ok(plans)
}
