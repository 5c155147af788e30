mod common;

use clap::{Args, Command, FromArgMatches};
use common::write_file;
use gramforge::config::RunConfig;
use gramforge::error::GramForgeError;
use gramforge::lexicon::skipgrams::MAX_SKIP_MAX;

fn parse(args: &[&str]) -> (RunConfig, clap::ArgMatches) {
    let cmd = RunConfig::augment_args(Command::new("test"));
    let matches = cmd.try_get_matches_from(args).unwrap();
    let config = RunConfig::from_arg_matches(&matches).unwrap();
    (config, matches)
}

#[test]
fn test_clap_defaults_match_default_impl() {
    let (config, _) = parse(&["test"]);
    assert_eq!(config, RunConfig::default());
    assert_eq!(config.skip_max, 3);
    assert!(!config.use_categories);
    assert_eq!(config.stopword_list, "data/stopwords.txt");
    assert_eq!(config.category_word_list, "data/category_words.tsv");
}

#[test]
fn test_short_flags() {
    let (config, _) = parse(&["test", "-c", "-s", "stop.txt", "--skip-max", "5"]);
    assert!(config.use_categories);
    assert_eq!(config.stopword_list, "stop.txt");
    assert_eq!(config.skip_max, 5);
}

#[test]
fn test_validate_rejects_zero_skip_max() {
    let config = RunConfig {
        skip_max: 0,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(GramForgeError::Config(_))));
    assert!(RunConfig::default().validate().is_ok());
}

#[test]
fn test_validate_rejects_oversized_skip_max() {
    let config = RunConfig {
        skip_max: usize::MAX,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(GramForgeError::Config(_))));

    let config = RunConfig {
        skip_max: MAX_SKIP_MAX,
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_from_file_fills_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "run.json", r#"{ "skip_max": 4, "use_categories": true }"#);

    let config = RunConfig::load_from_file(&path).unwrap();
    assert_eq!(config.skip_max, 4);
    assert!(config.use_categories);
    assert_eq!(config.stopword_list, "data/stopwords.txt");
}

#[test]
fn test_load_from_file_reports_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "run.json", "{ skip_max: ");
    assert!(matches!(
        RunConfig::load_from_file(&path),
        Err(GramForgeError::Json(_))
    ));
}

#[test]
fn test_cli_values_override_file_but_defaults_do_not() {
    let mut file_config = RunConfig {
        skip_max: 7,
        use_categories: true,
        stopword_list: "file_stop.txt".to_string(),
        category_word_list: "file_cats.tsv".to_string(),
    };

    let (cli_config, matches) = parse(&["test", "--skip-max", "2"]);
    file_config.merge_from_cli(&cli_config, &matches);

    assert_eq!(file_config.skip_max, 2);
    assert!(file_config.use_categories);
    assert_eq!(file_config.stopword_list, "file_stop.txt");
    assert_eq!(file_config.category_word_list, "file_cats.tsv");
}
