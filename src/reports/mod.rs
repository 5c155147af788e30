use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gramforge::lexicon::Lexicon;
use std::path::PathBuf;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, from: usize, to: usize) {
    for i in from..=to {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_gram_report(lexicon: &Lexicon, top: usize) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Gram").add_attribute(Attribute::Bold),
        Cell::new("Kind"),
        Cell::new("Count").fg(Color::Cyan),
    ]);

    for entry in lexicon.top_grams(top) {
        let kind = match entry.gram.width() {
            Some(w) => format!("{}-gram", w),
            None => "category".to_string(),
        };
        let gram_cell = if entry.gram.is_category() {
            Cell::new(entry.gram.to_string()).fg(Color::Green)
        } else {
            Cell::new(entry.gram.to_string())
        };
        table.add_row(vec![
            Cell::new(entry.id),
            gram_cell,
            Cell::new(kind),
            Cell::new(entry.count).fg(Color::Cyan),
        ]);
    }
    align_right(&mut table, 3, 3);

    println!(
        "\n📊 === TOP GRAMS ({} tokens, {} distinct) ===",
        lexicon.token_count,
        lexicon.registry.len()
    );
    println!("{}", table);
}

pub fn print_skipgram_report(lexicon: &Lexicon, top: usize) {
    let skip_max = lexicon.skipgrams.skip_max();
    let mut table = new_table();

    let mut header = vec![
        Cell::new("Word 1").add_attribute(Attribute::Bold),
        Cell::new("Word 2").add_attribute(Attribute::Bold),
    ];
    header.extend((1..=skip_max).map(|k| Cell::new(format!("Gap {}", k))));
    header.push(Cell::new("Total").fg(Color::Cyan));
    table.add_row(header);

    for row in lexicon.top_skipgrams(top) {
        let name = |id| {
            lexicon
                .gram(id)
                .map(|g| g.to_string())
                .unwrap_or_else(|| format!("#{}", id))
        };
        let mut cells = vec![Cell::new(name(row.first)), Cell::new(name(row.second))];
        cells.extend(row.gap_freqs.iter().map(|f| Cell::new(f)));
        cells.push(Cell::new(row.total()).fg(Color::Cyan));
        table.add_row(cells);
    }
    align_right(&mut table, 2, skip_max + 2);

    println!(
        "\n🔗 === TOP SKIP-GRAMS ({} pairs, skip_max = {}) ===",
        lexicon.skipgrams.len(),
        skip_max
    );
    println!("{}", table);
}

pub struct BatchRow {
    pub input: PathBuf,
    pub tokens: usize,
    pub grams: usize,
    pub pairs: usize,
    pub error: Option<String>,
}

pub fn print_batch_report(rows: &[BatchRow]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Input").add_attribute(Attribute::Bold),
        Cell::new("Tokens"),
        Cell::new("Grams"),
        Cell::new("Pairs"),
        Cell::new("Status"),
    ]);

    for r in rows {
        let status = match &r.error {
            None => Cell::new("ok").fg(Color::Green),
            Some(e) => Cell::new(e).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(r.input.display()),
            Cell::new(r.tokens),
            Cell::new(r.grams),
            Cell::new(r.pairs),
            status,
        ]);
    }
    align_right(&mut table, 1, 3);

    println!("\n📦 === BATCH SUMMARY ===");
    println!("{}", table);
}
