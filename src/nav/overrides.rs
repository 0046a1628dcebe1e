//! Fallback descriptions keyed by destination path

use std::collections::BTreeMap;

/// Source of fallback descriptions for destinations
pub trait OverrideLookup: Send + Sync {
    fn lookup_override(&self, destination: &str) -> Option<&str>;
}

/// Read-only table of fallback descriptions.
///
/// Built once from configuration; there is no way to change it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionOverrideTable {
    entries: BTreeMap<String, String>,
}

impl DescriptionOverrideTable {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for DescriptionOverrideTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl OverrideLookup for DescriptionOverrideTable {
    fn lookup_override(&self, destination: &str) -> Option<&str> {
        self.entries.get(destination).map(String::as_str)
    }
}
