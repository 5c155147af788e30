use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense identifier handed out by the registry in first-occurrence order.
pub type GramId = usize;

/// The unit the registry counts.
///
/// A category label is kept distinct from a token tuple that happens to
/// spell the same text, so `Category("x")` and `Tokens(["x"])` are two
/// different grams.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gram {
    Tokens(Vec<String>),
    Category(String),
}

impl Gram {
    pub fn tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        Gram::Tokens(tokens.iter().map(|t| t.as_ref().to_string()).collect())
    }

    pub fn unigram(token: &str) -> Self {
        Gram::Tokens(vec![token.to_string()])
    }

    pub fn category(label: &str) -> Self {
        Gram::Category(label.to_string())
    }

    pub fn is_category(&self) -> bool {
        matches!(self, Gram::Category(_))
    }

    /// Number of tokens for a plain tuple; `None` for a category label.
    pub fn width(&self) -> Option<usize> {
        match self {
            Gram::Tokens(t) => Some(t.len()),
            Gram::Category(_) => None,
        }
    }
}

impl fmt::Display for Gram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gram::Tokens(t) => write!(f, "{}", t.join(" ")),
            Gram::Category(label) => write!(f, "{}", label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GramEntry {
    pub id: GramId,
    pub gram: Gram,
    pub count: u64,
}

/// One ordered pair of unigrams with its frequency at each gap.
/// `gap_freqs[k - 1]` holds the frequency for gap `k`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipGramRow {
    pub first: GramId,
    pub second: GramId,
    pub gap_freqs: Vec<u64>,
}

impl SkipGramRow {
    pub fn total(&self) -> u64 {
        self.gap_freqs.iter().sum()
    }

    pub fn frequency(&self, gap: usize) -> u64 {
        if gap == 0 {
            return 0;
        }
        self.gap_freqs.get(gap - 1).copied().unwrap_or(0)
    }
}
