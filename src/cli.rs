use clap::{Parser, Subcommand};

/// DailyPlate — A meal planning CLI that builds daily plans from calorie and macro targets.
#[derive(Parser, Debug)]
#[command(name = "daily_plate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal catalog JSON file.
    #[arg(short, long, default_value = "catalog.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate numbered daily plans from your targets and restrictions.
    Plan {
        /// Number of plans to generate (prompts when omitted).
        #[arg(short, long)]
        count: Option<usize>,

        /// Write the generated plans to a CSV file.
        #[arg(long)]
        export: Option<String>,
    },

    /// Generate the balanced, high-protein, and low-carb plan variations.
    Variations {
        /// Write the generated plans to a CSV file.
        #[arg(long)]
        export: Option<String>,
    },

    /// Show bucket sizes and known tags for the catalog.
    Catalog,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            count: None,
            export: None,
        }
    }
}
