//! `recommend` CLI
//!
//! Thin presentation layer over `recommend-core`:
//! - `recipes` ranks balanced recipes against a pantry
//! - `trip` assembles an itinerary for one destination
//! - `destinations` ranks destinations by style

mod cli;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::debug;

use cli::{Cli, Commands, DestinationsArgs, RecipesArgs, TripArgs};
use recommend_core::catalog::{Catalog, CatalogSession, LoadError};
use recommend_core::config::{ItineraryConfig, ScoringConfig};
use recommend_core::types::{
    DaySource, DestinationSuggestion, Itinerary, Pantry, RecipeRecommendation, RecommendedRecipe,
    TripPreferences,
};

/// Optional overrides read from `--config`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct RunConfig {
    scoring: ScoringConfig,
    itinerary: ItineraryConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RunConfig::default(),
    };
    debug!(?config, "configuration");

    match cli.command {
        Commands::Recipes(args) => run_recipes(args, config, cli.json),
        Commands::Trip(args) => run_trip(args, config, cli.json),
        Commands::Destinations(args) => run_destinations(args, config, cli.json),
    }
}

fn load_config(path: &Path) -> Result<RunConfig> {
    let raw = std::fs::read(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config: RunConfig = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    config
        .scoring
        .validate()
        .and_then(|()| config.itinerary.validate())
        .with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(config)
}

fn open_session(
    config: RunConfig,
    load: impl FnOnce() -> Result<Catalog, LoadError>,
) -> CatalogSession {
    let mut session = CatalogSession::new(config.scoring, config.itinerary);
    session.finish_loading(load());
    session
}

fn run_recipes(args: RecipesArgs, config: RunConfig, json: bool) -> Result<ExitCode> {
    let session = open_session(config, || {
        Catalog::builder()
            .recipes_path(&args.recipes)
            .map(|b| b.build())
    });

    let mut pantry = Pantry::parse(&args.ingredients.join(","));
    if pantry.is_empty() {
        pantry = prompt_pantry()?;
    }

    let recommendation = session
        .recommend_pantry(&pantry, args.top)
        .with_context(|| format!("recommending from {}", args.recipes.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        print_recipes(&recommendation, args.show_missing);
    }

    if recommendation.is_empty() {
        eprintln!("No balanced recipes matched your ingredients.");
    }
    Ok(ExitCode::from(recipes_status(&recommendation)))
}

/// 1 when nothing matched, so scripts can tell an empty answer apart.
fn recipes_status(recommendation: &RecipeRecommendation) -> u8 {
    if recommendation.is_empty() {
        1
    } else {
        0
    }
}

fn prompt_pantry() -> Result<Pantry> {
    print!("List the ingredients in your fridge (comma separated): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(Pantry::parse(&line))
}

fn run_trip(args: TripArgs, config: RunConfig, json: bool) -> Result<ExitCode> {
    let preferences = TripPreferences::new(
        &config.itinerary,
        args.days,
        &args.styles,
        args.pace,
        args.start,
    );
    let session = open_session(config, || {
        Catalog::builder()
            .destinations_path(&args.destinations)
            .map(|b| b.build())
    });

    let itinerary = session.plan_trip(&args.destination, &preferences)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&itinerary)?);
    } else {
        print_itinerary(&itinerary);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_destinations(args: DestinationsArgs, config: RunConfig, json: bool) -> Result<ExitCode> {
    let preferences = TripPreferences::new(
        &config.itinerary,
        i64::try_from(config.itinerary.min_days).unwrap_or(i64::MAX),
        &args.styles,
        Default::default(),
        None,
    );
    let session = open_session(config, || {
        Catalog::builder()
            .destinations_path(&args.destinations)
            .map(|b| b.build())
    });

    let suggestions = session.suggest_destinations(&preferences)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else {
        print_destinations(&suggestions);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_recipes(recommendation: &RecipeRecommendation, show_missing: bool) {
    for recipe in &recommendation.recipes {
        println!("\n[{}] Score {:.2}", recipe.rank, recipe.score);
        println!("{}", describe_recipe(recipe, show_missing));
    }
}

fn format_macros(recipe: &RecommendedRecipe) -> String {
    let m = &recipe.macros;
    let mut parts = vec![
        format!("carbs: {:.0}g", m.carbs),
        format!("protein: {:.0}g", m.protein),
        format!("fat: {:.0}g", m.fat),
    ];
    if let Some(fiber) = m.fiber {
        parts.push(format!("fiber: {fiber:.0}g"));
    }
    parts.join(", ")
}

fn describe_recipe(recipe: &RecommendedRecipe, show_missing: bool) -> String {
    let tags = if recipe.tags.is_empty() {
        "n/a".to_string()
    } else {
        recipe.tags.join(", ")
    };

    let mut lines = vec![
        format!("{} · serves {}", recipe.name, recipe.servings),
        format!("Tags: {tags}"),
        format!("Macros: {}", format_macros(recipe)),
        "Instructions:".to_string(),
    ];
    for (idx, step) in recipe.instructions.iter().enumerate() {
        lines.push(format!("  {}. {}", idx + 1, step));
    }

    if show_missing {
        let why = &recipe.why;
        if why.is_complete() {
            lines.push("You have everything you need!".to_string());
        } else {
            lines.push("Missing ingredients:".to_string());
            if !why.missing_core.is_empty() {
                lines.push(format!("  Core: {}", why.missing_core.join(", ")));
            }
            if !why.missing_supporting.is_empty() {
                lines.push(format!("  Supporting: {}", why.missing_supporting.join(", ")));
            }
        }
    }

    if !recipe.notes.is_empty() {
        lines.push(format!("Notes: {}", recipe.notes));
    }
    lines.join("\n")
}

fn print_itinerary(itinerary: &Itinerary) {
    println!("{}, {} · {} days", itinerary.city, itinerary.country, itinerary.trip_length);
    if !itinerary.summary.is_empty() {
        println!("{}", itinerary.summary);
    }
    if let Some(note) = &itinerary.pace_note {
        println!("Pace ({}): {}", itinerary.pace.as_str(), note);
    }

    for day in &itinerary.days {
        let date = day.date.map(|d| format!(" ({d})")).unwrap_or_default();
        let marker = match day.source {
            DaySource::Primary => "",
            DaySource::Flex => " [flex]",
            DaySource::Exploration => " [open]",
        };
        println!("\nDay {}{}: {}{}", day.day, date, day.plan.title, marker);
        if !day.plan.focus.is_empty() {
            println!("  Focus: {}", day.plan.focus);
        }
        for (slot, text) in day.plan.schedule.slots() {
            println!("  {slot}: {text}");
        }
        if !day.plan.meals.is_empty() {
            println!("  Meals: {}", day.plan.meals.join(", "));
        }
        if !day.plan.notes.is_empty() {
            println!("  Notes: {}", day.plan.notes);
        }
    }

    if !itinerary.local_tips.is_empty() {
        println!("\nLocal tips:");
        for tip in &itinerary.local_tips {
            println!("  - {tip}");
        }
    }
    if !itinerary.best_seasons.is_empty() {
        println!("Best seasons: {}", itinerary.best_seasons.join(", "));
    }
}

fn print_destinations(suggestions: &[DestinationSuggestion]) {
    for s in suggestions {
        let matched = if s.matched_styles.is_empty() {
            "none".to_string()
        } else {
            s.matched_styles.join(", ")
        };
        println!("[{}] {}, {} · styles matched: {}", s.rank, s.city, s.country, matched);
        if !s.summary.is_empty() {
            println!("    {}", s.summary);
        }
    }
}
