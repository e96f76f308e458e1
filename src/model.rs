use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One looked-up game entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub description_short: String,
    pub description: String,
}

impl Record {
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// The document written for one entity kind: `{"entries": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lookup {
    entries: BTreeMap<String, Record>,
}

impl Lookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under the lowercased name. A colliding name replaces the
    /// earlier record.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        self.entries.insert(record.key(), record)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.entries.get(&name.to_lowercase())
    }

    pub fn entries(&self) -> &BTreeMap<String, Record> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<Record> for Lookup {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}
