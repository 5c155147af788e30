use super::types::Gram;
use crate::error::{GfResult, GramForgeError};
use std::collections::HashMap;
use tracing::warn;

/// Read-only phrase -> label dictionary.
///
/// Two independent substitutions are driven from it:
/// 1. `substitute_tokens` rewrites each token keyed by its 1-token phrase,
///    once, before any windowing.
/// 2. `resolve_window` maps an n-gram window to its label if that exact
///    tuple is a key. Matching is window-local: a 2-token phrase is seen by
///    the bigram window that spans it and never by an enclosing trigram.
///
/// An empty map turns both into the identity.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    phrases: HashMap<Vec<String>, String>,
    longest: usize,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from `(phrase tokens, label)` pairs.
    ///
    /// A later duplicate phrase replaces the earlier one. Empty phrases
    /// and empty labels are configuration errors.
    pub fn from_entries<I, P, S>(entries: I) -> GfResult<Self>
    where
        I: IntoIterator<Item = (P, S)>,
        P: IntoIterator,
        P::Item: Into<String>,
        S: Into<String>,
    {
        let mut map = Self::new();
        for (phrase, label) in entries {
            let phrase: Vec<String> = phrase.into_iter().map(Into::into).collect();
            map.insert(phrase, label.into())?;
        }
        map.warn_on_chains();
        Ok(map)
    }

    fn insert(&mut self, phrase: Vec<String>, label: String) -> GfResult<()> {
        if phrase.is_empty() {
            return Err(GramForgeError::Config(format!(
                "category '{}' has an empty phrase",
                label
            )));
        }
        if label.is_empty() {
            return Err(GramForgeError::Config(format!(
                "phrase '{}' has an empty category",
                phrase.join(" ")
            )));
        }
        self.longest = self.longest.max(phrase.len());
        if let Some(prev) = self.phrases.insert(phrase.clone(), label.clone()) {
            if prev != label {
                warn!(
                    "⚠️  Phrase '{}' redefined: '{}' -> '{}'",
                    phrase.join(" "),
                    prev,
                    label
                );
            }
        }
        Ok(())
    }

    /// Chained single-token rows (`cheap -> price`, `price -> cost`) are
    /// legal. The single-token pass runs once, so `cheap` ends up as `price`,
    /// but such a map is not idempotent under a second pass.
    fn warn_on_chains(&self) {
        for (phrase, label) in &self.phrases {
            if phrase.len() != 1 {
                continue;
            }
            if let Some(next) = self.phrases.get(std::slice::from_ref(label)) {
                if next != label {
                    warn!(
                        "⚠️  '{}' maps to category '{}', which is itself mapped to '{}'",
                        phrase[0], label, next
                    );
                }
            }
        }
    }

    pub fn get(&self, phrase: &[String]) -> Option<&str> {
        if phrase.len() > self.longest {
            return None;
        }
        self.phrases.get(phrase).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Longest phrase length among the keys (0 when empty).
    pub fn longest_phrase(&self) -> usize {
        self.longest
    }

    /// Single-token pass: replaces every token that is a 1-token key.
    pub fn substitute_tokens(&self, tokens: &[String]) -> Vec<String> {
        if self.is_empty() {
            return tokens.to_vec();
        }
        tokens
            .iter()
            .map(|t| match self.get(std::slice::from_ref(t)) {
                Some(label) => label.to_string(),
                None => t.clone(),
            })
            .collect()
    }

    /// Window-level pass: the gram a window is counted under.
    pub fn resolve_window(&self, window: &[String]) -> Gram {
        match self.get(window) {
            Some(label) => Gram::category(label),
            None => Gram::tokens(window),
        }
    }
}
