use crate::config::ScoringConfig;
use crate::matching::normalize::tokens;
use crate::types::query::Pantry;

/// Partial-containment matcher over token sets.
///
/// A candidate phrase is satisfied when some query phrase shares at least one
/// token with it and `overlap / min(|candidate|, |query|) >= threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapMatcher {
    threshold: f64,
}

impl Default for OverlapMatcher {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::v0())
    }
}

impl OverlapMatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(config.match_threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Overlap ratio between two normalized phrases, `None` when they share no token.
    pub fn overlap_ratio(candidate: &str, query: &str) -> Option<f64> {
        let candidate_tokens = tokens(candidate);
        let query_tokens = tokens(query);
        if candidate_tokens.is_empty() || query_tokens.is_empty() {
            return None;
        }

        let overlap = candidate_tokens.intersection(&query_tokens).count();
        if overlap == 0 {
            return None;
        }

        let smaller = candidate_tokens.len().min(query_tokens.len());
        Some(overlap as f64 / smaller as f64)
    }

    pub fn matches(&self, candidate: &str, query: &Pantry) -> bool {
        if candidate.split_whitespace().next().is_none() {
            return false;
        }
        query.iter().any(|phrase| {
            Self::overlap_ratio(candidate, phrase).is_some_and(|ratio| ratio >= self.threshold)
        })
    }
}

/// Match with the default threshold.
pub fn matches(candidate: &str, query: &Pantry) -> bool {
    OverlapMatcher::default().matches(candidate, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pantry(items: &[&str]) -> Pantry {
        Pantry::from_items(items.iter().copied())
    }

    #[test]
    fn single_token_query_covers_longer_phrase() {
        assert!(matches("sea salt", &pantry(&["salt"])));
    }

    #[test]
    fn half_overlap_is_not_enough() {
        assert!(!matches("olive oil", &pantry(&["vegetable oil"])));
    }

    #[test]
    fn exact_threshold_matches() {
        // 3 shared tokens out of min(5, 5)
        let candidate = "a b c d e";
        assert!(matches(candidate, &pantry(&["a b c x y"])));
        assert!(!matches(candidate, &pantry(&["a b x y z"])));
    }

    #[test]
    fn empty_candidate_never_matches() {
        assert!(!matches("", &pantry(&["salt", "pepper"])));
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert!(!matches("salt", &Pantry::default()));
    }

    #[test]
    fn any_query_phrase_suffices() {
        let query = pantry(&["vegetable oil", "olive"]);
        assert!(matches("olive oil", &query));
    }

    #[test]
    fn custom_threshold_is_respected() {
        let strict = OverlapMatcher::new(1.0);
        assert!(!strict.matches("olive oil", &pantry(&["vegetable oil"])));
        let loose = OverlapMatcher::new(0.5);
        assert!(loose.matches("olive oil", &pantry(&["vegetable oil"])));
    }
}
