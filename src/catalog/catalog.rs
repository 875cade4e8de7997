// Read-only once built:
// no mutation
// no "update" methods
// queries borrow it

use std::collections::BTreeSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::destination::{Destination, DestinationRecord};
use crate::catalog::recipe::{Recipe, RecipeRecord};
use crate::types::identifiers::{DatasetVersion, DestinationId};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate destination ID: {0}")]
    DuplicateDestinationId(String),
}

/// The loaded, immutable dataset shared by every query.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    destinations: Vec<Destination>,
    version: DatasetVersion,
    loaded_at: DateTime<Utc>, // informational only
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn destination(&self, id: &DestinationId) -> Option<&Destination> {
        self.destinations.iter().find(|d| &d.id == id)
    }

    pub fn version(&self) -> &DatasetVersion {
        &self.version
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Collects raw datasets and ingests them into a [`Catalog`].
///
/// Each dataset is optional; a catalog with only recipes answers recipe
/// queries and finds no destinations.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    recipes: Vec<Recipe>,
    recipes_version: Option<DatasetVersion>,
    destinations: Vec<Destination>,
    destinations_version: Option<DatasetVersion>,
}

impl CatalogBuilder {
    pub fn recipes_json(mut self, raw: &[u8]) -> Result<Self, LoadError> {
        let records: Vec<RecipeRecord> = serde_json::from_slice(raw)?;
        self.recipes = records.into_iter().map(Recipe::ingest).collect();
        self.recipes_version = Some(DatasetVersion::from_content(raw));
        debug!(count = self.recipes.len(), "parsed recipe dataset");
        Ok(self)
    }

    pub fn destinations_json(mut self, raw: &[u8]) -> Result<Self, LoadError> {
        let records: Vec<DestinationRecord> = serde_json::from_slice(raw)?;
        let destinations: Vec<Destination> =
            records.into_iter().map(Destination::ingest).collect();

        let mut seen = BTreeSet::new();
        for dest in &destinations {
            if !seen.insert(dest.id.clone()) {
                return Err(LoadError::DuplicateDestinationId(dest.id.as_str().to_string()));
            }
        }

        self.destinations = destinations;
        self.destinations_version = Some(DatasetVersion::from_content(raw));
        debug!(count = self.destinations.len(), "parsed destination dataset");
        Ok(self)
    }

    pub fn recipes_path(self, path: &Path) -> Result<Self, LoadError> {
        let raw = std::fs::read(path)?;
        self.recipes_json(&raw)
    }

    pub fn destinations_path(self, path: &Path) -> Result<Self, LoadError> {
        let raw = std::fs::read(path)?;
        self.destinations_json(&raw)
    }

    pub fn build(self) -> Catalog {
        let parts = [
            ("recipes", self.recipes_version.as_ref()),
            ("destinations", self.destinations_version.as_ref()),
        ];
        let version = DatasetVersion::combine(
            parts
                .into_iter()
                .filter_map(|(label, version)| version.map(|v| (label, v))),
        );

        info!(
            recipes = self.recipes.len(),
            destinations = self.destinations.len(),
            version = version.as_str(),
            "catalog loaded"
        );

        Catalog {
            recipes: self.recipes,
            destinations: self.destinations,
            version,
            loaded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_destination_ids_are_rejected() {
        let raw = br#"[{"id": "Rome", "city": "Rome"}, {"id": "rome", "city": "Rome"}]"#;
        let err = Catalog::builder().destinations_json(raw).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateDestinationId(id) if id == "rome"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::builder().recipes_json(b"{not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn version_tracks_dataset_content() {
        let a = Catalog::builder().recipes_json(b"[]").unwrap().build();
        let b = Catalog::builder().recipes_json(b"[]").unwrap().build();
        let c = Catalog::builder()
            .recipes_json(br#"[{"name": "Soup"}]"#)
            .unwrap()
            .build();
        assert_eq!(a.version(), b.version());
        assert_ne!(a.version(), c.version());
    }

    #[test]
    fn destination_lookup_is_normalized() {
        let catalog = Catalog::builder()
            .destinations_json(br#"[{"id": "Mexico City", "city": "Mexico City"}]"#)
            .unwrap()
            .build();
        assert!(catalog.destination(&DestinationId::new("mexico-city")).is_some());
        assert!(catalog.destination(&DestinationId::new("lima")).is_none());
    }
}
