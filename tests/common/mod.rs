#![allow(dead_code)]

use gramforge::lexicon::{CategoryMap, Gram};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Splits a space-separated string into owned tokens.
pub fn toks(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

pub fn gram(s: &str) -> Gram {
    Gram::Tokens(toks(s))
}

/// Builds a category map from `("phrase words", "label")` pairs.
pub fn categories(entries: &[(&str, &str)]) -> CategoryMap {
    CategoryMap::from_entries(entries.iter().map(|(p, l)| (toks(p), *l)))
        .expect("test category map should be valid")
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    path
}
