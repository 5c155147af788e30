use super::categories::CategoryMap;
use crate::corpus::StopwordList;
use crate::error::{GfResult, GramForgeError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

fn open_resource(path: &Path) -> GfResult<File> {
    File::open(path).map_err(|e| GramForgeError::missing(path, e))
}

pub fn load_category_map<P: AsRef<Path>>(path: P) -> GfResult<CategoryMap> {
    let path = path.as_ref();
    info!("🏷️  Loading Category Table: {}", path.display());
    let map = load_category_map_from_reader(open_resource(path)?)?;
    info!("   {} phrases (longest: {} tokens)", map.len(), map.longest_phrase());
    Ok(map)
}

/// Parses a category table: one header line, then `phrase<TAB>label` rows.
///
/// Both columns are lowercased; the phrase is split on whitespace.
/// Blank lines are skipped and empty fields at either edge of a row are
/// dropped. Any other row without exactly two columns is a configuration
/// error carrying its line number.
pub fn load_category_map_from_reader<R: Read>(reader: R) -> GfResult<CategoryMap> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // Leading and trailing empty fields come from stray tabs at the
        // line edges and do not count as columns.
        let fields: Vec<&str> = record.iter().collect();
        let (start, end) = match (
            fields.iter().position(|f| !f.is_empty()),
            fields.iter().rposition(|f| !f.is_empty()),
        ) {
            (Some(start), Some(end)) => (start, end),
            _ => continue,
        };
        let fields = &fields[start..=end];

        if fields.len() != 2 {
            return Err(GramForgeError::Config(format!(
                "category table line {}: expected 2 columns, found {}",
                line,
                fields.len()
            )));
        }

        let phrase: Vec<String> = fields[0]
            .to_lowercase()
            .split_whitespace()
            .map(String::from)
            .collect();
        let label = fields[1].to_lowercase();

        if phrase.is_empty() || label.is_empty() {
            return Err(GramForgeError::Config(format!(
                "category table line {}: phrase and category must both be non-empty",
                line
            )));
        }
        entries.push((phrase, label));
    }

    debug!("Parsed {} category rows", entries.len());
    CategoryMap::from_entries(entries)
}

pub fn load_stopwords<P: AsRef<Path>>(path: P) -> GfResult<StopwordList> {
    let path = path.as_ref();
    info!("🛑 Loading Stopwords: {}", path.display());
    let list = load_stopwords_from_reader(open_resource(path)?)
        .map_err(|e| match e {
            GramForgeError::Io(source) => GramForgeError::missing(path, source),
            other => other,
        })?;
    debug!("{} stopwords", list.len());
    Ok(list)
}

pub fn load_stopwords_from_reader<R: Read>(mut reader: R) -> GfResult<StopwordList> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(StopwordList::parse(&content))
}

