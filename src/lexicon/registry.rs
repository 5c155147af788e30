use super::types::{Gram, GramEntry, GramId};
use std::collections::HashMap;

/// Assigns stable ids to grams and accumulates their occurrence counts.
///
/// Ids come from the position in `entries`, never from map iteration,
/// so they stay dense and follow first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct GramRegistry {
    index: HashMap<Gram, GramId>,
    entries: Vec<GramEntry>,
}

impl GramRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `gram`, assigning the next id on first sight.
    pub fn register(&mut self, gram: Gram) -> GramId {
        let id = self.intern(gram);
        self.entries[id].count += 1;
        id
    }

    /// Looks up the id of `gram`, inserting it with a zero count if unseen.
    /// Never touches the count of an existing entry.
    pub fn intern(&mut self, gram: Gram) -> GramId {
        if let Some(&id) = self.index.get(&gram) {
            return id;
        }
        let id = self.entries.len();
        self.index.insert(gram.clone(), id);
        self.entries.push(GramEntry { id, gram, count: 0 });
        id
    }

    pub fn lookup(&self, gram: &Gram) -> Option<GramId> {
        self.index.get(gram).copied()
    }

    pub fn get(&self, id: GramId) -> Option<&GramEntry> {
        self.entries.get(id)
    }

    pub fn count(&self, gram: &Gram) -> u64 {
        self.lookup(gram)
            .map(|id| self.entries[id].count)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by id ascending.
    pub fn snapshot(&self) -> &[GramEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &GramEntry> {
        self.entries.iter()
    }
}
