use super::categories::CategoryMap;
use super::registry::GramRegistry;
use super::types::{GramId, SkipGramRow};
use crate::error::{GfResult, GramForgeError};
use std::collections::HashMap;
use tracing::debug;

/// Upper bound on `skip_max`; each pair row holds one counter per gap.
pub const MAX_SKIP_MAX: usize = 256;

pub fn check_skip_max(skip_max: usize) -> GfResult<()> {
    if !(1..=MAX_SKIP_MAX).contains(&skip_max) {
        return Err(GramForgeError::Config(format!(
            "skip_max must be between 1 and {} (got {})",
            MAX_SKIP_MAX, skip_max
        )));
    }
    Ok(())
}

/// Frequencies of ordered unigram pairs separated by `1..=skip_max` tokens.
///
/// Rows appear in the order their pair was first observed while scanning.
#[derive(Debug, Clone)]
pub struct SkipGramTable {
    skip_max: usize,
    index: HashMap<(GramId, GramId), usize>,
    rows: Vec<SkipGramRow>,
}

impl SkipGramTable {
    pub fn new(skip_max: usize) -> GfResult<Self> {
        check_skip_max(skip_max)?;
        Ok(Self {
            skip_max,
            index: HashMap::new(),
            rows: Vec::new(),
        })
    }

    /// Scans every pair `(i, j)` with `1 <= j - i - 1 <= skip_max`.
    ///
    /// `tokens` is the sequence after the single-token category pass.
    /// Members are identified by the gram their unigram window resolves
    /// to, so ids line up with the n-gram table. Run the n-gram extractor
    /// first; ids are then pure lookups and counts are left untouched.
    pub fn extract(
        tokens: &[String],
        categories: &CategoryMap,
        registry: &mut GramRegistry,
        skip_max: usize,
    ) -> GfResult<Self> {
        let mut table = Self::new(skip_max)?;

        let ids: Vec<GramId> = tokens
            .iter()
            .map(|t| registry.intern(categories.resolve_window(std::slice::from_ref(t))))
            .collect();

        for i in 0..ids.len() {
            for gap in 1..=skip_max {
                let j = i + gap + 1;
                if j >= ids.len() {
                    break;
                }
                table.record(ids[i], ids[j], gap);
            }
        }

        debug!(
            "Skip-grams: {} pairs, {} observations (skip_max = {})",
            table.rows.len(),
            table.observations(),
            skip_max
        );

        Ok(table)
    }

    /// Adds one observation of `first ... second` at `gap`.
    /// Gaps outside `1..=skip_max` are ignored.
    pub fn record(&mut self, first: GramId, second: GramId, gap: usize) {
        if gap == 0 || gap > self.skip_max {
            return;
        }
        let skip_max = self.skip_max;
        let rows = &mut self.rows;
        let row = *self.index.entry((first, second)).or_insert_with(|| {
            rows.push(SkipGramRow {
                first,
                second,
                gap_freqs: vec![0; skip_max],
            });
            rows.len() - 1
        });
        self.rows[row].gap_freqs[gap - 1] += 1;
    }

    pub fn skip_max(&self) -> usize {
        self.skip_max
    }

    pub fn rows(&self) -> &[SkipGramRow] {
        &self.rows
    }

    pub fn get(&self, first: GramId, second: GramId) -> Option<&SkipGramRow> {
        self.index.get(&(first, second)).map(|&i| &self.rows[i])
    }

    pub fn frequency(&self, first: GramId, second: GramId, gap: usize) -> u64 {
        self.get(first, second)
            .map(|r| r.frequency(gap))
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all frequencies across rows and gaps.
    pub fn observations(&self) -> u64 {
        self.rows.iter().map(SkipGramRow::total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_skip_max_is_config_error() {
        assert!(matches!(
            SkipGramTable::new(0),
            Err(GramForgeError::Config(_))
        ));
    }

    #[test]
    fn test_huge_skip_max_is_config_error() {
        assert!(matches!(
            SkipGramTable::new(usize::MAX),
            Err(GramForgeError::Config(_))
        ));
        assert!(SkipGramTable::new(MAX_SKIP_MAX).is_ok());
    }

    #[test]
    fn test_record_ignores_out_of_range_gaps() {
        let mut table = SkipGramTable::new(2).unwrap();
        table.record(0, 1, 0);
        table.record(0, 1, 3);
        assert!(table.is_empty());

        table.record(0, 1, 2);
        table.record(0, 1, 2);
        assert_eq!(table.frequency(0, 1, 2), 2);
        assert_eq!(table.frequency(0, 1, 1), 0);
        assert_eq!(table.frequency(1, 0, 2), 0);
    }
}
