//! Content records referenced by sidebar links

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Source of descriptions for content referenced by id
pub trait ContentLookup: Send + Sync {
    /// Description of the content record with the given id, if any
    fn lookup_description(&self, content_id: &str) -> Option<&str>;
}

/// Metadata of a single documentation page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Public URL path of the page
    pub permalink: String,
}

/// Content records indexed by id
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    records: HashMap<String, ContentRecord>,
}

impl ContentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, replacing any previous record with the same id
    pub fn insert(&mut self, record: ContentRecord) {
        if let Some(previous) = self.records.insert(record.id.clone(), record) {
            tracing::warn!("Duplicate content id '{}', keeping the last one", previous.id);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<ContentRecord> for ContentIndex {
    fn from_iter<I: IntoIterator<Item = ContentRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        for record in iter {
            index.insert(record);
        }
        index
    }
}

impl ContentLookup for ContentIndex {
    fn lookup_description(&self, content_id: &str) -> Option<&str> {
        self.records
            .get(content_id)
            .and_then(|record| record.description.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, description: Option<&str>) -> ContentRecord {
        ContentRecord {
            id: id.to_string(),
            title: id.to_string(),
            description: description.map(str::to_string),
            permalink: format!("/{}", id),
        }
    }

    #[test]
    fn test_lookup_description() {
        let index: ContentIndex = vec![
            record("intro", Some("Start here")),
            record("faq", None),
        ]
        .into_iter()
        .collect();

        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup_description("intro"), Some("Start here"));
        assert_eq!(index.lookup_description("faq"), None);
        assert_eq!(index.lookup_description("missing"), None);
    }

    #[test]
    fn test_duplicate_id_keeps_last() {
        let mut index = ContentIndex::new();
        index.insert(record("intro", Some("old")));
        index.insert(record("intro", Some("new")));
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup_description("intro"), Some("new"));
    }
}
