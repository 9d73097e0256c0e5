use std::path::Path;

use crate::error::Result;
use crate::models::MealPlan;

/// Write generated plans to a CSV file, one row per filled slot.
pub fn write_plans_csv(plans: &[MealPlan], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    // Write header
    wtr.write_record([
        "plan", "slot", "time", "food", "serving", "calories", "protein", "carbs", "fat",
    ])?;

    for plan in plans {
        for slot in &plan.slots {
            wtr.write_record([
                plan.name.clone(),
                slot.slot.label().to_string(),
                slot.slot.scheduled_time().to_string(),
                slot.food.name.clone(),
                slot.food.serving.clone(),
                format!("{:.0}", slot.calories()),
                format!("{:.1}", slot.protein()),
                format!("{:.1}", slot.carbs()),
                format!("{:.1}", slot.fat()),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
