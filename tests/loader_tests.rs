mod common;

use common::{toks, write_file};
use gramforge::error::GramForgeError;
use gramforge::lexicon::loader::{
    load_category_map, load_category_map_from_reader, load_stopwords, load_stopwords_from_reader,
};
use std::io::Cursor;

// --- CATEGORY TABLE ---

#[test]
fn test_category_table_parses_rows() {
    let data = "words\tcategory\nGreat Service\tStaff\ncheap\tprice\n";
    let map = load_category_map_from_reader(Cursor::new(data)).unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&toks("great service")), Some("staff"));
    assert_eq!(map.get(&toks("cheap")), Some("price"));
    assert_eq!(map.longest_phrase(), 2);
}

#[test]
fn test_category_table_skips_header_only() {
    let data = "cheap\tprice\n";
    let map = load_category_map_from_reader(Cursor::new(data)).unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_category_table_collapses_inner_whitespace() {
    let data = "h\tc\n  very   good  \t good \n";
    let map = load_category_map_from_reader(Cursor::new(data)).unwrap();
    assert_eq!(map.get(&toks("very good")), Some("good"));
}

#[test]
fn test_category_table_ignores_blank_lines() {
    let data = "h\tc\ncheap\tprice\n\nslow\tspeed\n";
    let map = load_category_map_from_reader(Cursor::new(data)).unwrap();
    assert_eq!(map.len(), 2);
}

#[test]
fn test_category_table_rejects_wrong_column_count() {
    let data = "h\tc\ncheap\tprice\nbroken row without tab\n";
    let err = load_category_map_from_reader(Cursor::new(data)).unwrap_err();
    match err {
        GramForgeError::Config(msg) => assert!(msg.contains("line 3"), "{}", msg),
        other => panic!("expected config error, got {:?}", other),
    }

    let data = "h\tc\na\tb\tc\n";
    assert!(matches!(
        load_category_map_from_reader(Cursor::new(data)),
        Err(GramForgeError::Config(_))
    ));
}

#[test]
fn test_category_table_ignores_stray_edge_tabs() {
    let data = "h\tc\ncheap\tprice\t\n\tslow service\twait\n";
    let map = load_category_map_from_reader(Cursor::new(data)).unwrap();
    assert_eq!(map.get(&toks("cheap")), Some("price"));
    assert_eq!(map.get(&toks("slow service")), Some("wait"));

    let data = "h\tc\ncheap\t\tprice\n";
    assert!(matches!(
        load_category_map_from_reader(Cursor::new(data)),
        Err(GramForgeError::Config(_))
    ));
}

#[test]
fn test_category_table_rejects_empty_label() {
    let data = "h\tc\ncheap\t\n";
    assert!(matches!(
        load_category_map_from_reader(Cursor::new(data)),
        Err(GramForgeError::Config(_))
    ));
}

#[test]
fn test_category_table_last_duplicate_wins() {
    let data = "h\tc\ncheap\tprice\ncheap\tvalue\n";
    let map = load_category_map_from_reader(Cursor::new(data)).unwrap();
    assert_eq!(map.get(&toks("cheap")), Some("value"));
}

#[test]
fn test_category_table_accepts_chained_labels() {
    let data = "h\tc\ncheap\tprice\nprice\tcost\n";
    let map = load_category_map_from_reader(Cursor::new(data)).unwrap();
    assert_eq!(map.get(&toks("cheap")), Some("price"));
    assert_eq!(map.get(&toks("price")), Some("cost"));
    assert_eq!(map.substitute_tokens(&toks("cheap food")), toks("price food"));
}

#[test]
fn test_missing_category_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.tsv");
    let err = load_category_map(&path).unwrap_err();
    assert!(matches!(err, GramForgeError::MissingResource { .. }));
    assert!(err.to_string().contains("nope.tsv"));
}

#[test]
fn test_category_file_round_trip_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "cats.tsv", "words\tcategory\nfriendly staff\tservice\n");
    let map = load_category_map(&path).unwrap();
    assert_eq!(map.get(&toks("friendly staff")), Some("service"));
}

// --- STOPWORDS ---

#[test]
fn test_stopwords_trim_and_lowercase() {
    let list = load_stopwords_from_reader(Cursor::new("The\n  a \n\nAND\n")).unwrap();
    assert_eq!(list.len(), 3);
    assert!(list.contains("the"));
    assert!(list.contains("a"));
    assert!(list.contains("and"));
}

#[test]
fn test_missing_stopword_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_stopwords(dir.path().join("stop.txt")).unwrap_err();
    assert!(matches!(err, GramForgeError::MissingResource { .. }));
}

#[test]
fn test_shipped_data_files_load() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let map = load_category_map(root.join("category_words.tsv")).unwrap();
    assert_eq!(map.get(&toks("cheap")), Some("price"));
    assert_eq!(map.get(&toks("friendly staff")), Some("service"));

    let stop = load_stopwords(root.join("stopwords.txt")).unwrap();
    assert!(stop.contains("the"));
}
