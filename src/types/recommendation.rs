use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::destination::DayPlan;
use crate::catalog::recipe::Macros;
use crate::types::identifiers::DestinationId;
use crate::types::query::Pace;

/// Which ingredients of a recipe the pantry covers, and which it lacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub matched_core: Vec<String>,
    pub missing_core: Vec<String>,
    pub matched_supporting: Vec<String>,
    pub missing_supporting: Vec<String>,
}

impl MatchBreakdown {
    pub fn is_complete(&self) -> bool {
        self.missing_core.is_empty() && self.missing_supporting.is_empty()
    }
}

/// A ranked recipe returned in the output.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedRecipe {
    pub rank: usize,
    pub name: String,
    pub score: f64,
    pub coverage: f64,
    pub balance: f64,
    pub servings: u32,
    pub tags: Vec<String>,
    pub macros: Macros,
    pub instructions: Vec<String>,
    pub notes: String,

    pub why: MatchBreakdown,
}

/// Metadata describing how the recipe ranking went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationMetadata {
    pub pantry: Vec<String>,
    pub requested_limit: i64,
    pub limit: usize,
    pub dataset_version: String,

    pub recipes_considered: usize,
    pub recipes_balanced: usize,
    pub recipes_matched: usize,
    pub recipes_returned: usize,
    pub recipes_excluded_by_limit: usize,
}

/// The final result of a recipe query. An empty `recipes` list is a normal
/// outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecommendation {
    pub recipes: Vec<RecommendedRecipe>,
    pub selection: RecommendationMetadata,
}

impl RecipeRecommendation {
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Internal: scoring components of one recipe before presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeScoreDetails {
    pub core_ratio: f64,
    pub supporting_ratio: f64,
    pub coverage: f64,
    pub balance: f64,
    pub breakdown: MatchBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DaySource {
    Primary,
    Flex,
    Exploration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based position in the trip.
    pub day: usize,
    pub date: Option<NaiveDate>,
    pub source: DaySource,
    /// Style overlap of a flex day; `None` for primary and exploration days.
    pub style_score: Option<usize>,
    pub plan: DayPlan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub destination: DestinationId,
    pub city: String,
    pub country: String,
    pub summary: String,
    pub trip_length: usize,
    pub pace: Pace,
    pub pace_note: Option<String>,
    pub styles: Vec<String>,
    pub start_date: Option<NaiveDate>,

    pub days: Vec<ItineraryDay>,

    pub highlights: Vec<String>,
    pub local_tips: Vec<String>,
    pub best_seasons: Vec<String>,
}

impl Itinerary {
    pub fn count_from(&self, source: DaySource) -> usize {
        self.days.iter().filter(|d| d.source == source).count()
    }
}

/// A destination ranked by how many requested styles it is tagged with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationSuggestion {
    pub rank: usize,
    pub id: DestinationId,
    pub city: String,
    pub country: String,
    pub summary: String,
    pub style_score: usize,
    pub matched_styles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Catalog is still loading, try again shortly")]
    NotReady,

    #[error("Catalog failed to load: {0}")]
    LoadFailed(String),

    #[error("No usable input: provide at least one ingredient or selection")]
    EmptyInput,

    #[error("Unknown destination: {0}")]
    UnknownDestination(String),
}
