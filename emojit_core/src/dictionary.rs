use crate::model::DictionaryEntry;

/// Pictogram dictionary abstraction: core does not care whether entries come from a file,
/// memory or elsewhere.
///
/// Conventions:
/// - `entries()` returns entries in their stored order; matching is first-match-wins over it
/// - entries are immutable once loaded
pub trait Dictionary: Send + Sync {
    /// All entries, in stored order.
    fn entries(&self) -> &[DictionaryEntry];

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// In-memory dictionary, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryDictionary {
    entries: Vec<DictionaryEntry>,
}

impl MemoryDictionary {
    pub fn new(entries: Vec<DictionaryEntry>) -> Self {
        Self { entries }
    }
}

impl Dictionary for MemoryDictionary {
    fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }
}
