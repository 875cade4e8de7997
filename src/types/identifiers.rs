use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::matching::normalize;

/// Lookup key of a destination.
///
/// Normalized on construction so `"Kyoto"` and `"kyoto"` name the same place.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(String);

impl DestinationId {
    pub fn new(raw: &str) -> Self {
        DestinationId(normalize(raw).replace(' ', "-"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DestinationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash version of a raw dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetVersion(String);

impl DatasetVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        DatasetVersion(format!("sha256:{hex}"))
    }

    /// Combine several dataset versions into one, order-sensitive.
    pub fn combine<'a>(parts: impl IntoIterator<Item = (&'a str, &'a DatasetVersion)>) -> Self {
        let mut hasher = Sha256::new();
        for (label, version) in parts {
            let line = format!("{}:{}\n", label, version.as_str());
            hasher.update(line.as_bytes());
        }
        DatasetVersion(format!("sha256:{}", hex::encode(hasher.finalize())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_prefixed_sha256() {
        let v = DatasetVersion::from_content(b"[]");
        assert!(v.as_str().starts_with("sha256:"));
        assert_eq!(v.as_str().len(), "sha256:".len() + 64);
        assert_eq!(v, DatasetVersion::from_content(b"[]"));
        assert_ne!(v, DatasetVersion::from_content(b"[ ]"));
    }

    #[test]
    fn combined_version_depends_on_labels() {
        let a = DatasetVersion::from_content(b"a");
        let x = DatasetVersion::combine([("recipes", &a)]);
        let y = DatasetVersion::combine([("destinations", &a)]);
        assert_ne!(x, y);
    }

    #[test]
    fn destination_id_is_normalized() {
        assert_eq!(DestinationId::new(" Mexico City ").as_str(), "mexico-city");
        assert_eq!(DestinationId::new("KYOTO"), DestinationId::new("kyoto"));
    }
}
