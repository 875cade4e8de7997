use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ItineraryConfig;
use crate::matching::{normalize, split_phrases};

/// The normalized set of ingredient phrases a user has on hand.
///
/// Normalization rules:
/// - Input split on `,` `;` and newlines
/// - Each piece normalized, empty pieces dropped
/// - Duplicates collapse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pantry {
    phrases: BTreeSet<String>,
}

impl Pantry {
    pub fn parse(raw: &str) -> Self {
        Self {
            phrases: split_phrases(raw).collect(),
        }
    }

    /// Build from already separated items, normalizing each.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = items
            .into_iter()
            .map(|item| normalize(item.as_ref()))
            .filter(|phrase| !phrase.is_empty())
            .collect();
        Self { phrases }
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.contains(phrase)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

/// How full each planned day should feel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    #[default]
    Balanced,
    Packed,
}

impl Pace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Relaxed => "relaxed",
            Pace::Balanced => "balanced",
            Pace::Packed => "packed",
        }
    }
}

impl std::str::FromStr for Pace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "relaxed" => Ok(Pace::Relaxed),
            "balanced" => Ok(Pace::Balanced),
            "packed" => Ok(Pace::Packed),
            other => Err(format!("unknown pace: {other:?}")),
        }
    }
}

/// Structured trip preferences.
///
/// `styles` keeps the order in which they were requested; the first one is
/// used whenever a single style has to be picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripPreferences {
    pub trip_length: usize,
    pub styles: Vec<String>,
    pub pace: Pace,
    pub start_date: Option<NaiveDate>,
}

impl TripPreferences {
    /// Build preferences, clamping `trip_length` and normalizing styles.
    pub fn new<I, S>(
        config: &ItineraryConfig,
        trip_length: i64,
        styles: I,
        pace: Pace,
        start_date: Option<NaiveDate>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for style in styles {
            let style = normalize(style.as_ref());
            if !style.is_empty() && !ordered.contains(&style) {
                ordered.push(style);
            }
        }

        Self {
            trip_length: config.clamp_length(trip_length),
            styles: ordered,
            pace,
            start_date,
        }
    }

    pub fn has_style(&self, style: &str) -> bool {
        self.styles.iter().any(|s| s == style)
    }
}

impl Default for TripPreferences {
    /// Shortest allowed trip, no styles, balanced pace.
    fn default() -> Self {
        Self::new(&ItineraryConfig::v0(), 0, Vec::<String>::new(), Pace::default(), None)
    }
}
