pub mod categories;
pub mod loader;
pub mod ngrams;
pub mod registry;
pub mod skipgrams;
pub mod types;

pub use self::categories::CategoryMap;
pub use self::ngrams::{extract_ngrams, WindowCounts, WINDOW_WIDTHS};
pub use self::registry::GramRegistry;
pub use self::skipgrams::SkipGramTable;
pub use self::types::{Gram, GramEntry, GramId, SkipGramRow};

use crate::error::GfResult;
use tracing::debug;

/// Result of one run over a token sequence: the gram table and the
/// skip-gram table, sharing unigram ids.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub registry: GramRegistry,
    pub skipgrams: SkipGramTable,
    pub windows: WindowCounts,
    pub token_count: usize,
}

impl Lexicon {
    /// Runs category substitution, then n-grams, then skip-grams.
    ///
    /// `skip_max` is checked before anything is extracted. Pass an empty
    /// `CategoryMap` to count plain token tuples.
    pub fn build(tokens: &[String], categories: &CategoryMap, skip_max: usize) -> GfResult<Self> {
        // Fails fast on skip_max = 0.
        SkipGramTable::new(skip_max)?;

        let tokens = categories.substitute_tokens(tokens);
        let mut registry = GramRegistry::new();

        let windows = extract_ngrams(&tokens, categories, &mut registry);
        let skipgrams = SkipGramTable::extract(&tokens, categories, &mut registry, skip_max)?;

        debug!(
            "Lexicon: {} tokens, {} grams, {} skip-gram pairs",
            tokens.len(),
            registry.len(),
            skipgrams.len()
        );

        Ok(Self {
            registry,
            skipgrams,
            windows,
            token_count: tokens.len(),
        })
    }

    pub fn gram(&self, id: GramId) -> Option<&Gram> {
        self.registry.get(id).map(|e| &e.gram)
    }

    /// Rows ordered by count descending, ties broken by id.
    pub fn top_grams(&self, limit: usize) -> Vec<&GramEntry> {
        let mut entries: Vec<&GramEntry> = self.registry.iter().collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.id.cmp(&b.id)));
        entries.truncate(limit);
        entries
    }

    /// Pairs ordered by total frequency descending, ties keep table order.
    pub fn top_skipgrams(&self, limit: usize) -> Vec<&SkipGramRow> {
        let mut rows: Vec<&SkipGramRow> = self.skipgrams.rows().iter().collect();
        rows.sort_by(|a, b| b.total().cmp(&a.total()));
        rows.truncate(limit);
        rows
    }
}
