use indexmap::IndexMap;
use serde::Serialize;

use super::Render;

/// Location of one operation in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// URL in `:param` form.
    pub path: String,
    /// Lowercase HTTP method.
    pub method: &'static str,
}

/// `operationId -> { path, method }` for every operation of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OperationIndex {
    entries: IndexMap<String, IndexEntry>,
}

impl OperationIndex {
    /// An empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; the first operation registered under an id wins.
    pub fn insert(&mut self, operation_id: &str, entry: IndexEntry) -> bool {
        if self.entries.contains_key(operation_id) {
            return false;
        }
        self.entries.insert(operation_id.to_string(), entry);
        true
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Render for OperationIndex {
    fn render(&self) -> String {
        let literal = serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string());
        format!("export const operations = {literal} as const;\n")
    }
}
