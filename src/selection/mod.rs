pub mod filters;
pub mod limit;
pub mod ranking;

use std::cmp::Ordering;

use tracing::debug;

use crate::catalog::Catalog;
use crate::config::ScoringConfig;
use crate::types::query::Pantry;
use crate::types::recommendation::{
	RecipeRecommendation, RecommendationMetadata, RecommendedRecipe,
};
pub use filters::{balance_score, is_balanced, MacroRatios};
pub use limit::{apply_limit, LimitResult};
pub use ranking::{CoverageBalanceScorer, Scorer, StyleOverlapScorer, Styled};

/// Internal: an item that survived filtering, with its rank key.
/// Holds a reference to the catalog entry to avoid cloning it prematurely.
#[derive(Debug, Clone)]
pub struct Scored<'a, T, D> {
	pub item: &'a T,
	/// Position in the original dataset; the tie-break.
	pub index: usize,
	pub score: f64,
	pub details: D,
}

pub struct RankOutcome<'a, T, D> {
	pub ranked: Vec<Scored<'a, T, D>>,
	pub considered: usize,
	pub eligible: usize,
	pub retained: usize,
	pub excluded_by_limit: usize,
}

/// Filter, score, order and truncate `items` with `scorer`.
///
/// Order is score descending, then dataset position ascending, so equal
/// scores keep the order the dataset gave them.
pub fn rank<'a, T, S>(
	scorer: &S,
	items: &'a [T],
	query: &S::Query,
	limit: Option<usize>,
) -> RankOutcome<'a, T, S::Details>
where
	S: Scorer<T>,
{
	// 1. Eligibility Phase
	let eligible: Vec<(usize, &T)> = items
		.iter()
		.enumerate()
		.filter(|(_, item)| scorer.is_eligible(item))
		.collect();
	let eligible_count = eligible.len();

	// 2. Scoring Phase
	let mut scored: Vec<Scored<'a, T, S::Details>> = eligible
		.into_iter()
		.map(|(index, item)| {
			let details = scorer.score(item, query);
			let score = scorer.score_value(&details);
			Scored {
				item,
				index,
				score,
				details,
			}
		})
		.filter(|candidate| scorer.is_retained(&candidate.details))
		.collect();
	let retained = scored.len();

	// 3. Ordering Phase
	// Sort globally by (score desc, index asc)
	scored.sort_by(|a, b| {
		b.score
			.partial_cmp(&a.score)
			.unwrap_or(Ordering::Equal)
			.then_with(|| a.index.cmp(&b.index))
	});

	debug_assert!(
		scored.windows(2).all(|w| {
			let a = &w[0];
			let b = &w[1];
			a.score > b.score || (a.score == b.score && a.index < b.index)
		})
	);

	// 4. Limit Phase
	let LimitResult {
		selected,
		excluded_by_limit,
	} = apply_limit(scored, limit);

	debug!(
		considered = items.len(),
		eligible = eligible_count,
		retained,
		selected = selected.len(),
		"ranked candidates"
	);

	RankOutcome {
		ranked: selected,
		considered: items.len(),
		eligible: eligible_count,
		retained,
		excluded_by_limit,
	}
}

/// Ranks recipes for a pantry.
#[derive(Debug, Clone, Default)]
pub struct RecipeSelector {
	scorer: CoverageBalanceScorer,
}

impl RecipeSelector {
	pub fn new(config: ScoringConfig) -> Self {
		Self {
			scorer: CoverageBalanceScorer::new(config),
		}
	}

	/// Rank the catalog's recipes against `pantry`.
	///
	/// `requested_limit` is clamped into the configured bounds. An empty
	/// result means nothing balanced overlapped the pantry.
	pub fn recommend(
		&self,
		catalog: &Catalog,
		pantry: &Pantry,
		requested_limit: i64,
	) -> RecipeRecommendation {
		let limit = self.scorer.config().clamp_limit(requested_limit);
		let outcome = rank(&self.scorer, catalog.recipes(), pantry, Some(limit));

		let recipes: Vec<RecommendedRecipe> = outcome
			.ranked
			.into_iter()
			.enumerate()
			.map(|(position, scored)| RecommendedRecipe {
				rank: position + 1,
				name: scored.item.name.clone(),
				score: scored.score,
				coverage: scored.details.coverage,
				balance: scored.details.balance,
				servings: scored.item.servings,
				tags: scored.item.tags.clone(),
				macros: scored.item.macros,
				instructions: scored.item.instructions.clone(),
				notes: scored.item.notes.clone(),
				why: scored.details.breakdown,
			})
			.collect();

		let metadata = RecommendationMetadata {
			pantry: pantry.iter().map(str::to_string).collect(),
			requested_limit,
			limit,
			dataset_version: catalog.version().as_str().to_string(),
			recipes_considered: outcome.considered,
			recipes_balanced: outcome.eligible,
			recipes_matched: outcome.retained,
			recipes_returned: recipes.len(),
			recipes_excluded_by_limit: outcome.excluded_by_limit,
		};

		RecipeRecommendation {
			recipes,
			selection: metadata,
		}
	}
}
