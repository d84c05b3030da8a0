//! ZoneCatalog: keyword-to-zone lookup for free-text product names.
//!
//! Matching is "the item contains the keyword as a substring", evaluated
//! case-insensitively over the catalog in insertion order; the first
//! matching keyword wins. The iteration order is a documented part of the
//! contract, which is why the catalog is backed by an `IndexMap` rather
//! than a hash map with incidental ordering.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::graph::StoreGraph;
use crate::id::NodeId;

/// Ordered mapping from lowercase product keyword to zone node id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneCatalog {
    entries: IndexMap<String, NodeId>,
    /// Zone used when no keyword matches (the store entry).
    default_zone: NodeId,
}

impl ZoneCatalog {
    /// Creates an empty catalog with the given fallback zone.
    pub fn new(default_zone: NodeId) -> ZoneCatalog {
        ZoneCatalog {
            entries: IndexMap::new(),
            default_zone,
        }
    }

    /// Appends a keyword. Keywords are stored lowercased; re-inserting an
    /// existing keyword updates its zone but keeps its original position.
    pub fn insert(&mut self, keyword: &str, zone: NodeId) {
        self.entries.insert(keyword.to_lowercase(), zone);
    }

    /// The zone returned when nothing matches.
    pub fn default_zone(&self) -> NodeId {
        self.default_zone
    }

    /// Resolves a free-text item to a zone: first keyword (in insertion
    /// order) contained in the lowercased item wins, else the default
    /// zone.
    pub fn resolve(&self, item: &str) -> NodeId {
        let item = item.to_lowercase();
        let item = item.trim();
        for (keyword, &zone) in &self.entries {
            if item.contains(keyword.as_str()) {
                return zone;
            }
        }
        self.default_zone
    }

    /// Returns every catalog keyword contained in the utterance, in
    /// catalog order, at most once per zone. This is the offline product
    /// extractor used when no language-understanding collaborator is
    /// available.
    pub fn extract_keywords(&self, utterance: &str) -> Vec<String> {
        let utterance = utterance.to_lowercase();
        let mut found: Vec<String> = Vec::new();
        let mut seen_zones: Vec<NodeId> = Vec::new();
        for (keyword, &zone) in &self.entries {
            if utterance.contains(keyword.as_str()) && !seen_zones.contains(&zone) {
                found.push(keyword.clone());
                seen_zones.push(zone);
            }
        }
        found
    }

    /// Verifies that every catalog zone is a product zone present in the
    /// graph.
    pub fn validate(&self, graph: &StoreGraph) -> Result<(), CoreError> {
        for (keyword, &zone) in &self.entries {
            if !graph.exists(zone) || !zone.is_product_zone() {
                return Err(CoreError::InvalidCatalogZone {
                    keyword: keyword.clone(),
                    id: zone,
                });
            }
        }
        Ok(())
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog has no keywords.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(keyword, zone)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.entries.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> ZoneCatalog {
        let mut c = ZoneCatalog::new(NodeId::ENTRY);
        c.insert("milk", NodeId(9));
        c.insert("bread", NodeId(18));
        c.insert("orange juice", NodeId(11));
        c.insert("juice", NodeId(11));
        c
    }

    #[test]
    fn resolve_is_case_insensitive_substring() {
        let c = small_catalog();
        assert_eq!(c.resolve("Whole MILK"), NodeId(9));
        assert_eq!(c.resolve("  sourdough bread "), NodeId(18));
    }

    #[test]
    fn first_match_wins_in_insertion_order() {
        let c = small_catalog();
        // "orange juice" precedes "juice" and both match; insertion order wins.
        assert_eq!(c.resolve("orange juice"), NodeId(11));

        let mut flipped = ZoneCatalog::new(NodeId::ENTRY);
        flipped.insert("juice", NodeId(12));
        flipped.insert("orange juice", NodeId(11));
        // Now the broader keyword comes first and shadows the longer one.
        assert_eq!(flipped.resolve("orange juice"), NodeId(12));
    }

    #[test]
    fn unmatched_item_falls_back_to_default_zone() {
        let c = small_catalog();
        assert_eq!(c.resolve("xyzzy-nonexistent-item"), NodeId::ENTRY);
    }

    #[test]
    fn extract_keywords_dedupes_by_zone() {
        let mut c = ZoneCatalog::new(NodeId::ENTRY);
        c.insert("milk", NodeId(9));
        c.insert("cheese", NodeId(9));
        c.insert("bread", NodeId(18));
        let found = c.extract_keywords("I need milk, cheese and bread please");
        // milk and cheese share zone 9; only the first is reported.
        assert_eq!(found, vec!["milk".to_string(), "bread".to_string()]);
    }

    #[test]
    fn extract_keywords_empty_for_unknown_text() {
        let c = small_catalog();
        assert!(c.extract_keywords("hello there").is_empty());
    }
}
