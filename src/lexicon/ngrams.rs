use super::categories::CategoryMap;
use super::registry::GramRegistry;
use tracing::debug;

pub const WINDOW_WIDTHS: [usize; 3] = [1, 2, 3];

/// Number of windows scanned at each width in `WINDOW_WIDTHS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowCounts {
    pub per_width: [usize; 3],
}

impl WindowCounts {
    pub fn for_width(&self, width: usize) -> usize {
        WINDOW_WIDTHS
            .iter()
            .position(|&w| w == width)
            .map(|i| self.per_width[i])
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.per_width.iter().sum()
    }
}

/// Slides windows of width 1, 2 and 3 (stride 1, no padding) over
/// `tokens` and registers each one, width by width.
///
/// `tokens` must already have been through the single-token category
/// pass; the window-level lookup happens here.
pub fn extract_ngrams(
    tokens: &[String],
    categories: &CategoryMap,
    registry: &mut GramRegistry,
) -> WindowCounts {
    let mut counts = WindowCounts::default();

    for (slot, &width) in WINDOW_WIDTHS.iter().enumerate() {
        // `windows` yields nothing when the sequence is shorter than the width.
        for window in tokens.windows(width) {
            registry.register(categories.resolve_window(window));
            counts.per_width[slot] += 1;
        }
    }

    debug!(
        "N-gram windows: {} unigrams, {} bigrams, {} trigrams -> {} distinct grams",
        counts.per_width[0],
        counts.per_width[1],
        counts.per_width[2],
        registry.len()
    );

    counts
}
