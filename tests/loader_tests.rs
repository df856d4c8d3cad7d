use std::io::{Cursor, Write};
use tempfile::NamedTempFile;
use tris_stalker::config::SourceParams;
use tris_stalker::error::StalkerError;
use tris_stalker::history::{load_history, load_history_from_reader};

fn load_str(data: &str) -> tris_stalker::error::StalkerResult<tris_stalker::history::DrawHistory> {
    load_history_from_reader(Cursor::new(data.to_string()), &SourceParams::default(), "test")
}

#[test]
fn test_loader_parses_valid_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "n1,n2,n3,n4,n5").unwrap();
    writeln!(file, "1,2,3,4,5").unwrap();
    writeln!(file, "6,7,8,9,0").unwrap();

    let history = load_history(file.path(), &SourceParams::default()).unwrap();

    assert_eq!(history.rows_read, 2);
    assert_eq!(history.rows_skipped, 0);
    assert_eq!(history.columns[0], vec![1, 6]);
    assert_eq!(history.columns[4], vec![5, 0]);
}

#[test]
fn test_loader_ignores_non_digit_fields() {
    // Date and draw number columns are dropped, the five digits remain.
    let history = load_str("date,draw,a,b,c,d,e\n2024-03-01,117,3,1,4,1,5\n").unwrap();
    assert_eq!(history.rows_accepted(), 1);
    assert_eq!(history.columns[0], vec![3]);
    assert_eq!(history.columns[3], vec![1]);
}

#[test]
fn test_loader_handles_whitespace() {
    let history = load_str("h\n 1 , 2 ,\t3, 4 ,5 \r\n").unwrap();
    assert_eq!(history.rows_accepted(), 1);
    assert_eq!(history.columns[2], vec![3]);
}

#[test]
fn test_loader_skips_bad_rows() {
    let data = "h\n1,2,3,4,5\n1,2,3,4\n1,2,3,4,5,6\nGarbage\n9,8,7,6,5\n";
    let history = load_str(data).unwrap();
    assert_eq!(history.rows_read, 5);
    assert_eq!(history.rows_skipped, 3);
    assert_eq!(history.columns[0], vec![1, 9]);
}

#[test]
fn test_loader_header_only_is_not_an_error() {
    let history = load_str("a,b,c,d,e\n").unwrap();
    assert_eq!(history.rows_accepted(), 0);
}

#[test]
fn test_loader_empty_source_is_an_error() {
    let err = load_str("").unwrap_err();
    assert!(matches!(err, StalkerError::EmptySource(_)));
}

#[test]
fn test_loader_no_header_keeps_first_line() {
    let params = SourceParams {
        no_header: true,
        ..SourceParams::default()
    };
    let history =
        load_history_from_reader(Cursor::new("1,2,3,4,5\n"), &params, "test").unwrap();
    assert_eq!(history.rows_accepted(), 1);
}

#[test]
fn test_loader_custom_delimiter() {
    let params = SourceParams {
        delimiter: ';',
        ..SourceParams::default()
    };
    let history =
        load_history_from_reader(Cursor::new("h\n1;2;3;4;5\n"), &params, "test").unwrap();
    assert_eq!(history.columns[1], vec![2]);
}

#[test]
fn test_loader_rejects_non_ascii_delimiter() {
    let params = SourceParams {
        delimiter: 'é',
        ..SourceParams::default()
    };
    let err = load_history_from_reader(Cursor::new("h\n"), &params, "test").unwrap_err();
    assert!(matches!(err, StalkerError::Config(_)));
}

#[test]
fn test_loader_missing_file() {
    let err = load_history("definitely/not/here.csv", &SourceParams::default()).unwrap_err();
    assert!(matches!(err, StalkerError::Io(_)));
    assert!(err.to_string().contains("definitely/not/here.csv"));
}

fn load_bytes(
    data: &[u8],
) -> tris_stalker::error::StalkerResult<tris_stalker::history::DrawHistory> {
    load_history_from_reader(Cursor::new(data.to_vec()), &SourceParams::default(), "test")
}

#[test]
fn test_loader_accepts_latin1_header() {
    // "Número" encoded as Windows-1252 / Latin-1.
    let history = load_bytes(b"Sorteo,N\xfamero,a,b,c,d,e\n1,2,3,4,5\n").unwrap();
    assert_eq!(history.rows_accepted(), 1);
    assert_eq!(history.columns[4], vec![5]);
}

#[test]
fn test_loader_keeps_row_with_latin1_field() {
    // "miércoles" in Latin-1 next to five valid digits.
    let history = load_bytes(b"h\nmi\xe9rcoles,1,2,3,4,5\n").unwrap();
    assert_eq!(history.rows_accepted(), 1);
    assert_eq!(history.rows_skipped, 0);
    assert_eq!(history.columns[0], vec![1]);
}

#[test]
fn test_loader_blank_first_line_is_the_header() {
    let history = load_str("\n1,2,3,4,5\n").unwrap();
    assert_eq!(history.rows_accepted(), 1);
    assert_eq!(history.columns[2], vec![3]);
}

#[test]
fn test_loader_blank_lines_only_gives_no_draws() {
    let history = load_str("\n\n\n").unwrap();
    assert_eq!(history.rows_accepted(), 0);

    let table = tris_stalker::ranking::RankingTable::from_history(&history);
    assert!(table
        .columns()
        .iter()
        .all(|c| c.to_string() == "??????????"));
}

#[test]
fn test_loader_crlf_header() {
    let history = load_str("n1,n2,n3,n4,n5\r\n9,8,7,6,5\r\n").unwrap();
    assert_eq!(history.columns[0], vec![9]);
    assert_eq!(history.rows_skipped, 0);
}
