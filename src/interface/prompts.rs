use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::MealCatalog;
use crate::error::{PlanError, Result};
use crate::models::UserPreferences;

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for the four daily macro targets.
pub fn prompt_daily_targets() -> Result<(f64, f64, f64, f64)> {
    let calories = prompt_number("Daily calorie target", "2000")?;
    let protein = prompt_number("Daily protein target (g)", "150")?;
    let carbs = prompt_number("Daily carbs target (g)", "200")?;
    let fat = prompt_number("Daily fat target (g)", "65")?;

    Ok((calories, protein, carbs, fat))
}

/// Prompt for a list of tags, fuzzy-matched against the catalog's known tags.
pub fn prompt_tags(prompt: &str, known: &[String]) -> Result<Vec<String>> {
    let mut tags: Vec<String> = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt(format!("{} (or press Enter to finish)", prompt))
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        // Try exact match first (case-insensitive)
        if let Some(tag) = known.iter().find(|t| t.eq_ignore_ascii_case(input)) {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
            println!("Added: {}", tag);
            continue;
        }

        // Try fuzzy matching
        let mut candidates: Vec<(&String, f64)> = known
            .iter()
            .map(|t| (t, jaro_winkler(&t.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No known tag matches '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let tag = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", tag))
                .default(true)
                .interact()?;

            if confirm {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
                println!("Added: {}", tag);
            }
        } else {
            // Multiple matches - let user select
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(t, _)| (*t).clone())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                let tag = options[selection].clone();
                println!("Added: {}", tag);
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }
    }

    Ok(tags)
}

/// Prompt for how many plans to generate.
pub fn prompt_plan_count() -> Result<usize> {
    let input: String = Input::new()
        .with_prompt("How many plans should be generated?")
        .default("3".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid count".to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for the CSV export path.
pub fn prompt_export_path() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Export path")
        .default("plans.csv".to_string())
        .interact_text()?;

    Ok(input)
}

/// Collect and validate the full set of generation preferences.
pub fn collect_preferences(catalog: &MealCatalog) -> Result<UserPreferences> {
    let (daily_calories, daily_protein, daily_carbs, daily_fat) = prompt_daily_targets()?;

    let allergens = prompt_tags("Exclude an allergen", &catalog.known_allergens())?;
    let diets = prompt_tags("Require a diet tag", &catalog.known_diets())?;

    let prefs = UserPreferences {
        allergens,
        diets,
        ..UserPreferences::new(daily_calories, daily_protein, daily_carbs, daily_fat)
    };

    prefs.validate()?;
    Ok(prefs)
}
