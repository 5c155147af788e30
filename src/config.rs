use crate::error::{GfResult, GramForgeError};
use crate::lexicon::skipgrams::check_skip_max;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SKIP_MAX: usize = 3;
pub const DEFAULT_STOPWORD_LIST: &str = "data/stopwords.txt";
pub const DEFAULT_CATEGORY_WORD_LIST: &str = "data/category_words.tsv";

#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Largest number of tokens allowed between the two members of a skip-gram
    #[arg(long, default_value_t = DEFAULT_SKIP_MAX)]
    pub skip_max: usize,

    /// Collapse phrases from the category table into their labels
    #[arg(short = 'c', long, default_value_t = false)]
    pub use_categories: bool,

    /// Stopword list (one lowercase word per line)
    #[arg(short = 's', long, default_value = DEFAULT_STOPWORD_LIST)]
    pub stopword_list: String,

    /// Category table (TAB separated, 1 line header, phrase TAB category)
    #[arg(long, default_value = DEFAULT_CATEGORY_WORD_LIST)]
    pub category_word_list: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            skip_max: DEFAULT_SKIP_MAX,
            use_categories: false,
            stopword_list: DEFAULT_STOPWORD_LIST.to_string(),
            category_word_list: DEFAULT_CATEGORY_WORD_LIST.to_string(),
        }
    }
}

impl RunConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GfResult<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| GramForgeError::missing(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrites fields with values the user typed on the command line.
    /// Defaults filled in by clap never override file values.
    pub fn merge_from_cli(&mut self, cli_config: &RunConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_config.$field.clone();
                }
            };
        }

        update_if_present!(skip_max, "skip_max");
        update_if_present!(use_categories, "use_categories");
        update_if_present!(stopword_list, "stopword_list");
        update_if_present!(category_word_list, "category_word_list");
    }

    pub fn validate(&self) -> GfResult<()> {
        check_skip_max(self.skip_max)
    }
}
