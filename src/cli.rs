//! Command-line arguments for the `recommend` binary.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use recommend_core::types::Pace;

#[derive(Parser, Debug)]
#[command(name = "recommend")]
#[command(about = "Suggest balanced recipes and assemble trip itineraries", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON file overriding the scoring and itinerary configuration
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank recipes by what is already in the fridge
    Recipes(RecipesArgs),
    /// Build a day-by-day plan for one destination
    Trip(TripArgs),
    /// Rank destinations by requested travel styles
    Destinations(DestinationsArgs),
}

#[derive(Args, Debug)]
pub struct RecipesArgs {
    /// Ingredients on hand (quote multi-word items or separate with commas)
    pub ingredients: Vec<String>,

    /// Recipe collection JSON file
    #[arg(long, default_value = "data/recipes.json")]
    pub recipes: PathBuf,

    /// How many suggestions to show (clamped to 1..=10)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub top: i64,

    /// List what still needs buying for each recipe
    #[arg(long)]
    pub show_missing: bool,
}

#[derive(Args, Debug)]
pub struct TripArgs {
    /// Destination id, e.g. "lisbon"
    pub destination: String,

    /// Destination collection JSON file
    #[arg(long, default_value = "data/destinations.json")]
    pub destinations: PathBuf,

    /// Trip length in days (clamped to 3..=10)
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    pub days: i64,

    /// Preferred travel style; repeat for more than one
    #[arg(long = "style")]
    pub styles: Vec<String>,

    #[arg(long, default_value = "balanced")]
    pub pace: Pace,

    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct DestinationsArgs {
    /// Destination collection JSON file
    #[arg(long, default_value = "data/destinations.json")]
    pub destinations: PathBuf,

    /// Preferred travel style; repeat for more than one
    #[arg(long = "style", required = true)]
    pub styles: Vec<String>,
}
