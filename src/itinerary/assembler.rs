use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::catalog::destination::{DayPlan, Destination, Schedule};
use crate::config::ItineraryConfig;
use crate::selection::{rank, StyleOverlapScorer};
use crate::types::query::TripPreferences;
use crate::types::recommendation::{DaySource, Itinerary, ItineraryDay};

/// Fills a trip of the requested length from primary days, then the best
/// matching flex days, then synthesized exploration days.
#[derive(Debug, Clone, Default)]
pub struct ItineraryAssembler {
    config: ItineraryConfig,
}

impl ItineraryAssembler {
    pub fn new(config: ItineraryConfig) -> Self {
        Self { config }
    }

    pub fn assemble(&self, destination: &Destination, preferences: &TripPreferences) -> Itinerary {
        let requested = i64::try_from(preferences.trip_length).unwrap_or(i64::MAX);
        let length = self.config.clamp_length(requested);
        let mut plans: Vec<(DaySource, Option<usize>, DayPlan)> = Vec::with_capacity(length);

        // 1. Primary days, in dataset order
        plans.extend(
            destination
                .days
                .iter()
                .take(length)
                .map(|day| (DaySource::Primary, None, day.clone())),
        );

        // 2. Flex days, best style overlap first
        let missing = length - plans.len();
        if missing > 0 {
            let outcome = rank(
                &StyleOverlapScorer,
                destination.flex_days.as_slice(),
                preferences,
                Some(missing),
            );
            plans.extend(
                outcome
                    .ranked
                    .into_iter()
                    .map(|scored| (DaySource::Flex, Some(scored.details), scored.item.clone())),
            );
        }

        // 3. Exploration filler
        let missing = length - plans.len();
        if missing > 0 {
            let style = self.exploration_style(preferences);
            for _ in 0..missing {
                plans.push((DaySource::Exploration, None, self.exploration_day(destination, style)));
            }
        }

        debug_assert_eq!(plans.len(), length);
        debug!(
            destination = destination.id.as_str(),
            length,
            exploration = missing,
            "assembled itinerary"
        );

        let days = plans
            .into_iter()
            .enumerate()
            .map(|(position, (source, style_score, plan))| ItineraryDay {
                day: position + 1,
                date: preferences.start_date.and_then(|start| date_of(start, position)),
                source,
                style_score,
                plan,
            })
            .collect();

        Itinerary {
            destination: destination.id.clone(),
            city: destination.city.clone(),
            country: destination.country.clone(),
            summary: destination.summary.clone(),
            trip_length: length,
            pace: preferences.pace,
            pace_note: destination
                .pace_note(preferences.pace.as_str())
                .map(str::to_string),
            styles: preferences.styles.clone(),
            start_date: preferences.start_date,
            days,
            highlights: destination.highlights.clone(),
            local_tips: destination.local_tips.clone(),
            best_seasons: destination.best_seasons.clone(),
        }
    }

    /// First requested style, in request order, else the configured fallback.
    fn exploration_style<'a>(&'a self, preferences: &'a TripPreferences) -> &'a str {
        preferences
            .styles
            .first()
            .map(String::as_str)
            .unwrap_or(&self.config.fallback_style)
    }

    fn exploration_day(&self, destination: &Destination, style: &str) -> DayPlan {
        let anchor = destination.anchor();
        DayPlan {
            title: self.config.exploration_title.clone(),
            focus: format!("Unscheduled time around {anchor}"),
            style: vec![style.to_string()],
            schedule: Schedule {
                morning: Some(format!("Slow start near {anchor}")),
                afternoon: Some(format!("Follow your {style} interests wherever they lead")),
                evening: Some(format!("Dinner somewhere new in {}", destination.city)),
                late: None,
            },
            meals: Vec::new(),
            notes: String::new(),
        }
    }
}

fn date_of(start: NaiveDate, offset: usize) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(offset as u64))
}
