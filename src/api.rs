use crate::config::RunConfig;
use crate::corpus::{self, StopwordList};
use crate::error::{GfResult, GramForgeError};
use crate::lexicon::loader::{load_category_map, load_stopwords};
use crate::lexicon::{CategoryMap, Lexicon};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Read-only inputs shared by every run: stopwords and the category map.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    pub stopwords: StopwordList,
    pub categories: CategoryMap,
}

impl Resources {
    /// Validates the config and loads everything it points at.
    /// The category table is only read when categories are enabled.
    pub fn load(config: &RunConfig) -> GfResult<Self> {
        config.validate()?;

        let stopwords = load_stopwords(&config.stopword_list)?;

        let categories = if config.use_categories {
            info!("Using category file: {}", config.category_word_list);
            load_category_map(&config.category_word_list)?
        } else {
            CategoryMap::new()
        };

        Ok(Self {
            stopwords,
            categories,
        })
    }
}

/// Reads an input as bytes. Invalid UTF-8 becomes U+FFFD, which
/// `corpus::normalize` blanks along with every other non-ASCII char.
pub fn read_input<P: AsRef<Path>>(path: P) -> GfResult<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| GramForgeError::missing(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Tokenizes the inputs as one document, joined by newlines.
pub fn tokenize_files<P: AsRef<Path>>(paths: &[P]) -> GfResult<Vec<String>> {
    let mut raws = Vec::with_capacity(paths.len());
    for path in paths {
        raws.push(read_input(path)?);
    }
    Ok(corpus::tokenize(&raws.join("\n")))
}

/// One run: stopword filtering, then `Lexicon::build`.
pub fn run_tokens(
    tokens: Vec<String>,
    resources: &Resources,
    config: &RunConfig,
) -> GfResult<Lexicon> {
    let raw_len = tokens.len();
    let tokens = resources.stopwords.filter(tokens);
    debug!(
        "Stopwords removed: {} of {} tokens",
        raw_len - tokens.len(),
        raw_len
    );
    Lexicon::build(&tokens, &resources.categories, config.skip_max)
}

/// Single run over the concatenation of all inputs.
pub fn run_files<P: AsRef<Path>>(
    paths: &[P],
    resources: &Resources,
    config: &RunConfig,
) -> GfResult<Lexicon> {
    config.validate()?;
    let tokens = tokenize_files(paths)?;
    info!("📚 Tokenized {} inputs: {} tokens", paths.len(), tokens.len());
    run_tokens(tokens, resources, config)
}

/// Independent runs, one per input, in parallel. Runs share nothing but
/// the read-only resources; results come back in input order.
pub fn run_batch(
    paths: &[PathBuf],
    resources: &Resources,
    config: &RunConfig,
) -> Vec<(PathBuf, GfResult<Lexicon>)> {
    paths
        .par_iter()
        .map(|path| {
            let result = run_files(std::slice::from_ref(path), resources, config);
            (path.clone(), result)
        })
        .collect()
}
