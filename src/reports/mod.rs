use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tris_stalker::config::{COLUMNS, RANK_DEPTH};
use tris_stalker::generator::{Combination, GenerationOutcome, GenerationStatus};
use tris_stalker::history::DrawHistory;
use tris_stalker::ranking::{RankingTable, Symbol};

pub fn print_banner() {
    let banner = format!("tris-stalker v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", banner);
    println!("{}", "-".repeat(30));
}

pub fn ranking_matrix(table: &RankingTable) -> Table {
    let mut out = Table::new();
    out.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Rank").add_attribute(Attribute::Bold)];
    header.extend(
        (1..=COLUMNS).map(|c| Cell::new(format!("C{}", c)).add_attribute(Attribute::Bold)),
    );
    out.set_header(header);

    for row in 0..RANK_DEPTH {
        let mut cells = vec![Cell::new(row + 1)];
        cells.extend(table.row(row).iter().map(|s| {
            let cell = Cell::new(s).set_alignment(CellAlignment::Center);
            match s {
                Symbol::Digit(_) => cell,
                Symbol::Filler => cell.fg(Color::DarkGrey),
            }
        }));
        out.add_row(cells);
    }
    out
}

pub fn history_summary(history: &DrawHistory) -> String {
    format!(
        "{} draws used, {} of {} rows skipped.",
        history.rows_accepted(),
        history.rows_skipped,
        history.rows_read
    )
}

pub fn combinations(list: &[Combination]) -> Table {
    let mut out = Table::new();
    out.load_preset(ASCII_FULL);
    out.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Combination").add_attribute(Attribute::Bold),
    ]);
    if let Some(col) = out.column_mut(0) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (i, combo) in list.iter().enumerate() {
        out.add_row(vec![
            Cell::new(i + 1),
            Cell::new(combo).fg(Color::Green),
        ]);
    }
    out
}

/// Human readable outcome: the numbered list or a notice when nothing matched.
pub fn outcome_report(outcome: &GenerationOutcome) -> String {
    match outcome.status() {
        GenerationStatus::Empty => "No valid combinations found.".to_string(),
        GenerationStatus::Full => format!(
            "\n--- Suggested combinations ---\n{}",
            combinations(&outcome.combinations)
        ),
        GenerationStatus::Partial => format!(
            "\n--- Suggested combinations ---\n{}\nSearch exhausted: {} of {} requested.",
            combinations(&outcome.combinations),
            outcome.combinations.len(),
            outcome.requested
        ),
    }
}
