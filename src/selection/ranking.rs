use crate::catalog::destination::{DayPlan, Destination};
use crate::catalog::recipe::Recipe;
use crate::config::ScoringConfig;
use crate::matching::OverlapMatcher;
use crate::selection::filters::{balance_score, is_balanced};
use crate::types::query::{Pantry, TripPreferences};
use crate::types::recommendation::{MatchBreakdown, RecipeScoreDetails};

/// One ranking strategy over items of type `T`.
///
/// The pipeline asks, in order: is the item eligible at all, what are its
/// score details, should it stay in the ranking, and what is its rank key.
pub trait Scorer<T> {
    type Query;
    type Details;

    /// Hard filter applied before scoring.
    fn is_eligible(&self, _item: &T) -> bool {
        true
    }

    fn score(&self, item: &T, query: &Self::Query) -> Self::Details;

    fn score_value(&self, details: &Self::Details) -> f64;

    /// Post-scoring filter; unretained items never reach the output.
    fn is_retained(&self, _details: &Self::Details) -> bool {
        true
    }
}

/// Recipe scorer: ingredient coverage weighted with macro balance.
#[derive(Debug, Clone, Default)]
pub struct CoverageBalanceScorer {
    config: ScoringConfig,
    matcher: OverlapMatcher,
}

impl CoverageBalanceScorer {
    pub fn new(config: ScoringConfig) -> Self {
        let matcher = OverlapMatcher::from_config(&config);
        Self { config, matcher }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Split phrases into (matched, missing), keeping recipe order.
    fn partition(&self, phrases: &[String], pantry: &Pantry) -> (Vec<String>, Vec<String>) {
        phrases
            .iter()
            .cloned()
            .partition(|phrase| self.matcher.matches(phrase, pantry))
    }
}

fn ratio(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    }
}

impl Scorer<Recipe> for CoverageBalanceScorer {
    type Query = Pantry;
    type Details = RecipeScoreDetails;

    fn is_eligible(&self, recipe: &Recipe) -> bool {
        is_balanced(&recipe.macros, &self.config)
    }

    fn score(&self, recipe: &Recipe, pantry: &Pantry) -> RecipeScoreDetails {
        let (matched_core, missing_core) = self.partition(&recipe.core_ingredients, pantry);
        let (matched_supporting, missing_supporting) =
            self.partition(&recipe.supporting_ingredients, pantry);

        let core_ratio = ratio(matched_core.len(), recipe.core_ingredients.len());
        let supporting_ratio = ratio(matched_supporting.len(), recipe.supporting_ingredients.len());
        let coverage =
            core_ratio * self.config.core_weight + supporting_ratio * self.config.supporting_weight;
        let balance = balance_score(&recipe.macros, &self.config);

        RecipeScoreDetails {
            core_ratio,
            supporting_ratio,
            coverage,
            balance,
            breakdown: MatchBreakdown {
                matched_core,
                missing_core,
                matched_supporting,
                missing_supporting,
            },
        }
    }

    fn score_value(&self, details: &RecipeScoreDetails) -> f64 {
        let score = details.coverage * self.config.coverage_weight
            + details.balance * self.config.balance_weight;
        debug_assert!((0.0..=1.0 + 1e-9).contains(&score), "score {score} out of range [0.0, 1.0]");
        score
    }

    fn is_retained(&self, details: &RecipeScoreDetails) -> bool {
        details.coverage > 0.0
    }
}

/// Anything carrying normalized style tags.
pub trait Styled {
    fn style_tags(&self) -> &[String];
}

impl Styled for DayPlan {
    fn style_tags(&self) -> &[String] {
        &self.style
    }
}

impl Styled for Destination {
    fn style_tags(&self) -> &[String] {
        &self.tags
    }
}

/// Counts how many of an item's style tags were requested. Not normalized;
/// it only orders items against each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleOverlapScorer;

impl StyleOverlapScorer {
    pub fn matched_styles<'a, T: Styled>(item: &'a T, preferences: &TripPreferences) -> Vec<&'a str> {
        item.style_tags()
            .iter()
            .filter(|tag| preferences.has_style(tag))
            .map(String::as_str)
            .collect()
    }
}

impl<T: Styled> Scorer<T> for StyleOverlapScorer {
    type Query = TripPreferences;
    type Details = usize;

    fn score(&self, item: &T, preferences: &TripPreferences) -> usize {
        Self::matched_styles(item, preferences).len()
    }

    fn score_value(&self, details: &usize) -> f64 {
        *details as f64
    }
}
