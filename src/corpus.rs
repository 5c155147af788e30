use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| {
        Regex::new(r"[a-z0-9]+(?:'[a-z0-9]+)*").expect("word pattern is a valid regex")
    })
}

/// Lowercases the text and blanks out anything outside ASCII.
pub fn normalize(content: &str) -> String {
    content
        .chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect()
}

/// Splits raw text into an ordered sequence of lowercase word tokens.
///
/// Punctuation is dropped; apostrophes are kept only inside a word
/// (`don't` stays one token, a trailing `'` does not).
pub fn tokenize(content: &str) -> Vec<String> {
    let clean = normalize(content);
    word_pattern()
        .find_iter(&clean)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct StopwordList {
    words: HashSet<String>,
}

impl StopwordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the list from one-word-per-line text. Blank lines are ignored.
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drops stopwords, keeping the order of the remaining tokens.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        if self.words.is_empty() {
            return tokens;
        }
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for StopwordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|s| {
                    let s: String = s.into();
                    s.to_lowercase()
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_punctuation() {
        let tokens = tokenize("Hello, World! It's fine... 'quoted'");
        assert_eq!(tokens, vec!["hello", "world", "it's", "fine", "quoted"]);
    }

    #[test]
    fn test_normalize_blanks_non_ascii() {
        assert_eq!(normalize("Café Noir"), "caf  noir");
    }

    #[test]
    fn test_stopword_filter_keeps_order() {
        let stop: StopwordList = ["the", "a"].into_iter().collect();
        let tokens = vec!["the", "cat", "a", "hat"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(stop.filter(tokens), vec!["cat", "hat"]);
    }
}
