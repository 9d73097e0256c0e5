use clap::Parser;
use std::path::Path;

use daily_plate_rs::catalog::{MealCatalog, load_catalog};
use daily_plate_rs::cli::{Cli, Command};
use daily_plate_rs::error::Result;
use daily_plate_rs::interface::{
    collect_preferences, display_catalog_summary, display_meal_plans, prompt_export_path,
    prompt_plan_count, prompt_yes_no, write_plans_csv,
};
use daily_plate_rs::models::MealPlan;
use daily_plate_rs::planner::{generate_meal_plans, plan_variations};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { count, export } => cmd_plan(&cli.file, count, export.as_deref()),
        Command::Variations { export } => cmd_variations(&cli.file, export.as_deref()),
        Command::Catalog => cmd_catalog(&cli.file),
    }
}

/// Load the catalog, printing guidance instead of failing when the file is
/// missing.
fn load_checked(file_path: &str) -> Result<Option<MealCatalog>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Catalog file not found: {}", file_path);
        eprintln!("Point --file at a meal catalog JSON file.");
        return Ok(None);
    }

    Ok(Some(load_catalog(path)?))
}

/// Generate numbered plans for interactively collected preferences.
fn cmd_plan(file_path: &str, count: Option<usize>, export: Option<&str>) -> Result<()> {
    let Some(catalog) = load_checked(file_path)? else {
        return Ok(());
    };

    println!("Loaded {} foods across four buckets", catalog.len());
    if catalog.is_empty() {
        println!("The catalog has no foods; nothing to plan.");
        return Ok(());
    }
    println!();

    let prefs = collect_preferences(&catalog)?;
    let count = match count {
        Some(n) => n,
        None => prompt_plan_count()?,
    };

    println!();
    println!(
        "Planning {} day(s) at {:.0} kcal (P:{:.0} C:{:.0} F:{:.0})...",
        count, prefs.daily_calories, prefs.daily_protein, prefs.daily_carbs, prefs.daily_fat
    );

    let plans = generate_meal_plans(&catalog, &prefs, count)?;
    if plans.len() < count {
        println!(
            "Only {} of {} plans could be generated before the eligible foods ran out.",
            plans.len(),
            count
        );
    }

    display_meal_plans(&plans);
    maybe_export(&plans, export)
}

/// Generate the three named target variations.
fn cmd_variations(file_path: &str, export: Option<&str>) -> Result<()> {
    let Some(catalog) = load_checked(file_path)? else {
        return Ok(());
    };

    println!("Loaded {} foods across four buckets", catalog.len());
    if catalog.is_empty() {
        println!("The catalog has no foods; nothing to plan.");
        return Ok(());
    }
    println!();

    let prefs = collect_preferences(&catalog)?;

    let plans = plan_variations(&catalog, &prefs)?;
    if plans.len() < 3 {
        println!(
            "Only {} of 3 variations could be generated with the given constraints.",
            plans.len()
        );
    }

    display_meal_plans(&plans);
    maybe_export(&plans, export)
}

/// Show a summary of the catalog.
fn cmd_catalog(file_path: &str) -> Result<()> {
    let Some(catalog) = load_checked(file_path)? else {
        return Ok(());
    };

    display_catalog_summary(&catalog);
    Ok(())
}

fn maybe_export(plans: &[MealPlan], export: Option<&str>) -> Result<()> {
    if plans.is_empty() {
        if export.is_some() {
            println!("Nothing to export.");
        }
        return Ok(());
    }

    let path = match export {
        Some(path) => path.to_string(),
        None => {
            if !prompt_yes_no("Export plans to CSV?", false)? {
                return Ok(());
            }
            prompt_export_path()?
        }
    };

    write_plans_csv(plans, Path::new(&path))?;
    println!("Plans written to {}", path);

    Ok(())
}
