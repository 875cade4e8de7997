pub mod identifiers;
pub mod query;
pub mod recommendation;

pub use identifiers::{DatasetVersion, DestinationId};
pub use query::{Pace, Pantry, TripPreferences};
pub use recommendation::{
    DaySource, DestinationSuggestion, Itinerary, ItineraryDay, MatchBreakdown, QueryError,
    RecipeRecommendation, RecipeScoreDetails, RecommendationMetadata, RecommendedRecipe,
};
