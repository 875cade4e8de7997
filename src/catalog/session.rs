use tracing::{info, warn};

use crate::catalog::catalog::{Catalog, LoadError};
use crate::config::{ItineraryConfig, ScoringConfig};
use crate::itinerary::ItineraryAssembler;
use crate::selection::{rank, RecipeSelector, StyleOverlapScorer};
use crate::types::identifiers::DestinationId;
use crate::types::query::{Pantry, TripPreferences};
use crate::types::recommendation::{
    DestinationSuggestion, Itinerary, QueryError, RecipeRecommendation,
};

/// Where the catalog is in its lifecycle.
///
/// `Loading` moves to `Ready` or `Failed` exactly once; `Failed` is terminal.
#[derive(Debug)]
pub enum SessionState {
    Loading,
    Ready(Catalog),
    Failed(LoadError),
}

/// One user session over one catalog.
///
/// Every query goes through here so the not-ready, failed and empty-input
/// conditions are answered before any scoring runs.
#[derive(Debug)]
pub struct CatalogSession {
    state: SessionState,
    selector: RecipeSelector,
    assembler: ItineraryAssembler,
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new(ScoringConfig::v0(), ItineraryConfig::v0())
    }
}

impl CatalogSession {
    /// A session whose catalog is still loading.
    pub fn new(scoring: ScoringConfig, itinerary: ItineraryConfig) -> Self {
        Self {
            state: SessionState::Loading,
            selector: RecipeSelector::new(scoring),
            assembler: ItineraryAssembler::new(itinerary),
        }
    }

    /// A session over an already loaded catalog.
    pub fn ready(catalog: Catalog) -> Self {
        let mut session = Self::default();
        session.finish_loading(Ok(catalog));
        session
    }

    /// Record the outcome of the dataset fetch. Ignored unless still loading.
    pub fn finish_loading(&mut self, outcome: Result<Catalog, LoadError>) {
        if !matches!(self.state, SessionState::Loading) {
            warn!("catalog load finished twice, keeping the first outcome");
            return;
        }

        self.state = match outcome {
            Ok(catalog) => {
                info!(version = catalog.version().as_str(), "session ready");
                SessionState::Ready(catalog)
            }
            Err(err) => {
                warn!(error = %err, "catalog load failed");
                SessionState::Failed(err)
            }
        };
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, SessionState::Ready(_))
    }

    pub fn catalog(&self) -> Result<&Catalog, QueryError> {
        match &self.state {
            SessionState::Loading => Err(QueryError::NotReady),
            SessionState::Failed(err) => Err(QueryError::LoadFailed(err.to_string())),
            SessionState::Ready(catalog) => Ok(catalog),
        }
    }

    /// Rank recipes for a free-text ingredient list.
    pub fn recommend_recipes(
        &self,
        raw_ingredients: &str,
        requested_limit: i64,
    ) -> Result<RecipeRecommendation, QueryError> {
        let catalog = self.catalog()?;
        let pantry = Pantry::parse(raw_ingredients);
        self.recommend_for_pantry(catalog, &pantry, requested_limit)
    }

    pub fn recommend_pantry(
        &self,
        pantry: &Pantry,
        requested_limit: i64,
    ) -> Result<RecipeRecommendation, QueryError> {
        let catalog = self.catalog()?;
        self.recommend_for_pantry(catalog, pantry, requested_limit)
    }

    fn recommend_for_pantry(
        &self,
        catalog: &Catalog,
        pantry: &Pantry,
        requested_limit: i64,
    ) -> Result<RecipeRecommendation, QueryError> {
        if pantry.is_empty() {
            return Err(QueryError::EmptyInput);
        }
        Ok(self.selector.recommend(catalog, pantry, requested_limit))
    }

    /// Assemble a day-by-day plan for one destination.
    pub fn plan_trip(
        &self,
        destination: &str,
        preferences: &TripPreferences,
    ) -> Result<Itinerary, QueryError> {
        let catalog = self.catalog()?;
        let id = DestinationId::new(destination);
        if id.as_str().is_empty() {
            return Err(QueryError::EmptyInput);
        }
        let destination = catalog
            .destination(&id)
            .ok_or_else(|| QueryError::UnknownDestination(id.as_str().to_string()))?;

        Ok(self.assembler.assemble(destination, preferences))
    }

    /// Rank every destination by how many requested styles it is tagged with.
    pub fn suggest_destinations(
        &self,
        preferences: &TripPreferences,
    ) -> Result<Vec<DestinationSuggestion>, QueryError> {
        let catalog = self.catalog()?;
        if preferences.styles.is_empty() {
            return Err(QueryError::EmptyInput);
        }

        let outcome = rank(&StyleOverlapScorer, catalog.destinations(), preferences, None);
        Ok(outcome
            .ranked
            .into_iter()
            .enumerate()
            .map(|(position, scored)| DestinationSuggestion {
                rank: position + 1,
                id: scored.item.id.clone(),
                city: scored.item.city.clone(),
                country: scored.item.country.clone(),
                summary: scored.item.summary.clone(),
                style_score: scored.details,
                matched_styles: StyleOverlapScorer::matched_styles(scored.item, preferences)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_session_is_not_ready() {
        let session = CatalogSession::default();
        assert!(!session.is_ready());
        assert_eq!(session.recommend_recipes("salt", 3).unwrap_err(), QueryError::NotReady);
    }

    #[test]
    fn failure_is_terminal() {
        let mut session = CatalogSession::default();
        let err = Catalog::builder().recipes_json(b"oops").unwrap_err();
        session.finish_loading(Err(err));

        let later = Catalog::builder().recipes_json(b"[]").unwrap().build();
        session.finish_loading(Ok(later));

        assert!(matches!(session.state(), SessionState::Failed(_)));
        assert!(matches!(
            session.recommend_recipes("salt", 3),
            Err(QueryError::LoadFailed(_))
        ));
    }

    #[test]
    fn blank_input_is_rejected_before_scoring() {
        let catalog = Catalog::builder().recipes_json(b"[]").unwrap().build();
        let session = CatalogSession::ready(catalog);
        assert_eq!(session.recommend_recipes(" ,; ", 3).unwrap_err(), QueryError::EmptyInput);
    }
}
