//! Feature records and the ordered catalog the diagram is built from.
//!
//! The catalog is static input: it is supplied once when the controller is
//! created and never changes afterwards.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A product feature shown as one node on the orbit diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Unique identifier.
    pub id: String,
    /// Short label rendered on the node and in the detail card.
    pub label: String,
    /// Longer text rendered in the detail card.
    #[serde(default)]
    pub description: String,
}

impl Feature {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Ordered, immutable list of features with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeatureCatalog {
    features: Vec<Feature>,
}

impl FeatureCatalog {
    /// Builds a catalog, rejecting empty or duplicate ids.
    ///
    /// An empty list is valid and yields a diagram with no nodes.
    pub fn new(features: Vec<Feature>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(features.len());
        for (index, feature) in features.iter().enumerate() {
            if feature.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { index }.into());
            }
            if !seen.insert(feature.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: feature.id.clone(),
                }
                .into());
            }
        }
        tracing::debug!("Feature catalog built with {} entries", features.len());
        Ok(Self { features })
    }

    /// Parses a JSON array of `{id, label, description}` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let features: Vec<Feature> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse {
                reason: e.to_string(),
            })?;
        Self::new(features)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    pub fn as_slice(&self) -> &[Feature] {
        &self.features
    }

    /// Looks up a feature by id.
    pub fn get(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn first(&self) -> Option<&Feature> {
        self.features.first()
    }
}

impl<'a> IntoIterator for &'a FeatureCatalog {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample() -> Vec<Feature> {
        vec![
            Feature::new("sync", "Sync", "Keeps devices in step"),
            Feature::new("share", "Share", "Send to anyone"),
        ]
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = FeatureCatalog::new(sample()).unwrap();
        let ids: Vec<&str> = catalog.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["sync", "share"]);
        assert_eq!(catalog.first().map(|f| f.id.as_str()), Some("sync"));
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let mut features = sample();
        features.push(Feature::new("sync", "Again", ""));
        let err = FeatureCatalog::new(features).unwrap_err();
        assert_eq!(
            err,
            Error::Catalog(CatalogError::DuplicateId { id: "sync".into() })
        );
    }

    #[test]
    fn test_catalog_rejects_blank_id() {
        let err = FeatureCatalog::new(vec![Feature::new("  ", "Blank", "")]).unwrap_err();
        assert_eq!(err, Error::Catalog(CatalogError::EmptyId { index: 0 }));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = FeatureCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.first().is_none());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "a", "label": "Alpha", "description": "First"},
            {"id": "b", "label": "Beta"}
        ]"#;
        let catalog = FeatureCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("b").map(|f| f.description.as_str()), Some(""));
        assert!(catalog.contains("a"));
        assert!(!catalog.contains("c"));
    }

    #[test]
    fn test_from_json_invalid() {
        let err = FeatureCatalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::Parse { .. })));
    }
}
