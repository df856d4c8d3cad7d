use crate::config::{SourceParams, COLUMNS};
use crate::error::{StalkerError, StalkerResult};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Per-column digit observations in original record order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawHistory {
    pub columns: [Vec<u8>; COLUMNS],
    pub rows_read: usize,
    pub rows_skipped: usize,
}

impl DrawHistory {
    pub fn rows_accepted(&self) -> usize {
        self.columns[0].len()
    }
}

/// Extracts the digit value of a field holding exactly one decimal digit.
/// Surrounding spaces, tabs and line breaks are ignored. Works on raw bytes
/// so fields in any ASCII-compatible encoding pass through.
pub fn parse_digit_token(field: &[u8]) -> Option<u8> {
    let is_blank = |b: &u8| matches!(b, b' ' | b'\t' | b'\r' | b'\n');
    let start = field.iter().position(|b| !is_blank(b)).unwrap_or(field.len());
    let end = field.iter().rposition(|b| !is_blank(b)).map_or(start, |i| i + 1);
    match &field[start..end] {
        [b @ b'0'..=b'9'] => Some(b - b'0'),
        _ => None,
    }
}

pub fn load_history<P: AsRef<Path>>(
    path: P,
    params: &SourceParams,
) -> StalkerResult<DrawHistory> {
    let path = path.as_ref();
    debug!("Loading draw history from: {}", path.display());

    let file = File::open(path).map_err(|e| {
        StalkerError::Io(std::io::Error::new(
            e.kind(),
            format!("could not open '{}': {}", path.display(), e),
        ))
    })?;

    load_history_from_reader(file, params, &path.display().to_string())
}

/// `label` only names the source in errors and logs.
pub fn load_history_from_reader<R: Read>(
    reader: R,
    params: &SourceParams,
    label: &str,
) -> StalkerResult<DrawHistory> {
    let delimiter = params.delimiter_byte()?;
    let mut reader = BufReader::new(reader);

    if reader.fill_buf()?.is_empty() {
        return Err(StalkerError::EmptySource(label.to_string()));
    }

    // The csv reader drops blank lines, so the header is the first physical
    // line whatever it holds or however it is encoded.
    if !params.no_header {
        let mut header = Vec::new();
        reader.read_until(b'\n', &mut header)?;
        debug!("Skipped header line of {} bytes.", header.len());
    }

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut history = DrawHistory::default();

    for result in rdr.byte_records() {
        history.rows_read += 1;
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                warn!("[Row {}] CSV Parse Error: {}", history.rows_read, e);
                history.rows_skipped += 1;
                continue;
            }
        };

        let digits: Vec<u8> = rec.iter().filter_map(parse_digit_token).collect();
        if digits.len() != COLUMNS {
            history.rows_skipped += 1;
            continue;
        }

        for (col, digit) in digits.into_iter().enumerate() {
            history.columns[col].push(digit);
        }
    }

    if history.rows_skipped > 0 {
        warn!(
            "Skipped {} rows without exactly {} digit fields in '{}'.",
            history.rows_skipped, COLUMNS, label
        );
    }
    info!(
        "Loaded {} draws from '{}' ({} rows scanned).",
        history.rows_accepted(),
        label,
        history.rows_read
    );

    Ok(history)
}
