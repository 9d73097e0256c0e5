use crate::catalog::MealCatalog;
use crate::models::{FoodItem, MealPlan};

/// Display a generated plan as a formatted table.
pub fn display_meal_plan(plan: &MealPlan) {
    println!();
    println!("=== {} ===", plan.name);
    println!();

    // Find max food name length for alignment
    let max_name_len = plan
        .slots
        .iter()
        .map(|s| s.food.name.len())
        .max()
        .unwrap_or(10);

    for slot in &plan.slots {
        println!(
            "{:>9} {:>8} | {:<width$} - {:>4.0} kcal  P:{:>5.1} C:{:>5.1} F:{:>5.1}  ({})",
            slot.slot.label(),
            slot.slot.scheduled_time(),
            slot.food.name,
            slot.calories(),
            slot.protein(),
            slot.carbs(),
            slot.fat(),
            slot.food.serving,
            width = max_name_len
        );
    }

    println!();
    println!(
        "Totals: {} kcal | protein {} g | carbs {} g | fat {} g",
        plan.totals.calories, plan.totals.protein, plan.totals.carbs, plan.totals.fat
    );
    println!();
}

/// Display every plan produced by a generation run.
pub fn display_meal_plans(plans: &[MealPlan]) {
    if plans.is_empty() {
        println!("No plans could be generated with the given constraints.");
        return;
    }

    for plan in plans {
        display_meal_plan(plan);
    }
}

/// Display the bucket contents and known tags for a loaded catalog.
pub fn display_catalog_summary(catalog: &MealCatalog) {
    println!();
    println!("=== Catalog ({} items) ===", catalog.len());

    display_bucket("Breakfast", &catalog.breakfast);
    display_bucket("Lunch", &catalog.lunch);
    display_bucket("Dinner", &catalog.dinner);
    display_bucket("Snacks", &catalog.snacks);

    println!();

    let allergens = catalog.known_allergens();
    if allergens.is_empty() {
        println!("Allergen tags: (none)");
    } else {
        println!("Allergen tags: {}", allergens.join(", "));
    }

    let diets = catalog.known_diets();
    if diets.is_empty() {
        println!("Diet tags: (none)");
    } else {
        println!("Diet tags: {}", diets.join(", "));
    }
    println!();
}

/// Display one bucket's items with their details.
fn display_bucket(title: &str, items: &[FoodItem]) {
    println!();
    println!("--- {} ({} items) ---", title, items.len());

    if items.is_empty() {
        println!("  (none)");
        return;
    }

    for item in items {
        println!("  {}", item.debug_string());
    }
}
