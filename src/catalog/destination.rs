use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::matching::normalize;
use crate::types::identifiers::DestinationId;

/// Time-of-day slots of a planned day. Absent slots are left out of output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afternoon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evening: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub late: Option<String>,
}

impl Schedule {
    /// Filled slots in day order.
    pub fn slots(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("morning", &self.morning),
            ("afternoon", &self.afternoon),
            ("evening", &self.evening),
            ("late", &self.late),
        ]
        .into_iter()
        .filter_map(|(slot, text)| text.as_deref().map(|t| (slot, t)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub title: String,
    #[serde(default)]
    pub focus: String,
    #[serde(default)]
    pub style: Vec<String>,
    #[serde(default)]
    pub schedule: Schedule,
    #[serde(default)]
    pub meals: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl DayPlan {
    fn ingest(mut self) -> Self {
        self.style = normalize_tags(&self.style);
        self
    }
}

/// A destination record exactly as it appears in the dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationRecord {
    pub id: String,
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub days: Vec<DayPlan>,
    #[serde(default)]
    pub flex_days: Vec<DayPlan>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub local_tips: Vec<String>,
    #[serde(default)]
    pub best_seasons: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pace_notes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub city: String,
    pub country: String,
    pub summary: String,
    pub days: Vec<DayPlan>,
    pub flex_days: Vec<DayPlan>,
    pub highlights: Vec<String>,
    pub local_tips: Vec<String>,
    pub best_seasons: Vec<String>,
    pub tags: Vec<String>,
    /// Pace name (normalized) to note.
    pub pace_notes: BTreeMap<String, String>,
}

impl Destination {
    /// Ingest a raw record: style tags and pace keys are normalized so they
    /// compare against normalized preferences.
    pub fn ingest(record: DestinationRecord) -> Self {
        Destination {
            id: DestinationId::new(&record.id),
            city: record.city,
            country: record.country,
            summary: record.summary,
            days: record.days.into_iter().map(DayPlan::ingest).collect(),
            flex_days: record.flex_days.into_iter().map(DayPlan::ingest).collect(),
            highlights: record.highlights,
            local_tips: record.local_tips,
            best_seasons: record.best_seasons,
            tags: normalize_tags(&record.tags),
            pace_notes: record
                .pace_notes
                .into_iter()
                .map(|(pace, note)| (normalize(&pace), note))
                .collect(),
        }
    }

    pub fn pace_note(&self, pace: &str) -> Option<&str> {
        self.pace_notes.get(pace).map(String::as_str)
    }

    /// What exploration days are anchored on: first highlight, else the city.
    pub fn anchor(&self) -> &str {
        self.highlights
            .first()
            .map(String::as_str)
            .unwrap_or(&self.city)
    }
}

fn normalize_tags(raw: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        let tag = normalize(tag);
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
