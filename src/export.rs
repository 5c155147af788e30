use crate::error::{GfResult, GramForgeError};
use crate::lexicon::{GramRegistry, Lexicon, SkipGramTable};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const GRAM_TABLE_FILE: &str = "part1.tsv";
pub const SKIPGRAM_TABLE_FILE: &str = "part2.tsv";

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub grams: PathBuf,
    pub skipgrams: PathBuf,
}

fn tsv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

/// `label  words  count`, one row per gram in id order.
pub fn write_gram_table<W: Write>(registry: &GramRegistry, writer: W) -> GfResult<()> {
    let mut wtr = tsv_writer(writer);
    wtr.write_record(["label", "words", "count"])?;
    for entry in registry.iter() {
        wtr.write_record([
            entry.id.to_string(),
            entry.gram.to_string(),
            entry.count.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// `word 1  word 2  gap1_freq .. gapN_freq`, one row per ordered pair.
pub fn write_skipgram_table<W: Write>(table: &SkipGramTable, writer: W) -> GfResult<()> {
    let mut wtr = tsv_writer(writer);

    let mut header = vec!["word 1".to_string(), "word 2".to_string()];
    header.extend((1..=table.skip_max()).map(|k| format!("gap{}_freq", k)));
    wtr.write_record(&header)?;

    for row in table.rows() {
        let mut record = Vec::with_capacity(2 + row.gap_freqs.len());
        record.push(row.first.to_string());
        record.push(row.second.to_string());
        record.extend(row.gap_freqs.iter().map(u64::to_string));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `<prefix>part1.tsv` and `<prefix>part2.tsv` under `out_dir`.
pub fn save_lexicon<P: AsRef<Path>>(
    lexicon: &Lexicon,
    out_dir: P,
    prefix: &str,
) -> GfResult<OutputPaths> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let paths = OutputPaths {
        grams: out_dir.join(format!("{}{}", prefix, GRAM_TABLE_FILE)),
        skipgrams: out_dir.join(format!("{}{}", prefix, SKIPGRAM_TABLE_FILE)),
    };

    write_gram_table(&lexicon.registry, BufWriter::new(File::create(&paths.grams)?))?;
    write_skipgram_table(
        &lexicon.skipgrams,
        BufWriter::new(File::create(&paths.skipgrams)?),
    )?;

    info!(
        "💾 Saved {} grams -> {}, {} skip-gram pairs -> {}",
        lexicon.registry.len(),
        paths.grams.display(),
        lexicon.skipgrams.len(),
        paths.skipgrams.display()
    );

    Ok(paths)
}

/// `<stem>.` per input, in input order.
///
/// Two inputs with the same stem would write the same pair of files, so
/// that is a configuration error reported before anything runs.
pub fn batch_prefixes<P: AsRef<Path>>(inputs: &[P]) -> GfResult<Vec<String>> {
    let mut seen: HashMap<String, &Path> = HashMap::new();
    let mut prefixes = Vec::with_capacity(inputs.len());

    for input in inputs {
        let input = input.as_ref();
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "input".to_string());

        if let Some(prev) = seen.insert(stem.clone(), input) {
            return Err(GramForgeError::Config(format!(
                "inputs '{}' and '{}' would both write {}.{}",
                prev.display(),
                input.display(),
                stem,
                GRAM_TABLE_FILE
            )));
        }
        prefixes.push(format!("{}.", stem));
    }

    Ok(prefixes)
}
