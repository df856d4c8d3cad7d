use rstest::rstest;
use tris_stalker::config::RANK_DEPTH;
use tris_stalker::history::DrawHistory;
use tris_stalker::ranking::{RankedColumn, RankingTable, Symbol};

#[rstest]
#[case(&[], "??????????")]
#[case(&[7], "7?????????")]
#[case(&[3, 3, 3], "3?????????")]
#[case(&[2, 0, 2, 9, 0, 1], "2091??????")]
#[case(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0], "1234567890")]
#[case(&[9, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 9], "9876543210")]
fn test_column_first_seen_order(#[case] observations: &[u8], #[case] expected: &str) {
    let col = RankedColumn::from_observations(observations);
    assert_eq!(col.to_string(), expected);
    assert_eq!(col.symbols().len(), RANK_DEPTH);
}

#[test]
fn test_filler_padding_follows_digits() {
    let col = RankedColumn::from_observations(&[4, 2]);
    assert_eq!(col.get(0), Symbol::Digit(4));
    assert_eq!(col.get(1), Symbol::Digit(2));
    assert!(col.symbols()[2..].iter().all(|s| *s == Symbol::Filler));
}

#[test]
fn test_table_built_per_column() {
    let history = DrawHistory {
        columns: [
            vec![1, 1, 2],
            vec![],
            vec![5, 4, 3, 2, 1],
            vec![0],
            vec![9, 0, 9],
        ],
        rows_read: 3,
        rows_skipped: 0,
    };
    let table = RankingTable::from_history(&history);

    assert_eq!(table.column(0).to_string(), "12????????");
    assert_eq!(table.column(1).to_string(), "??????????");
    assert_eq!(table.column(2).to_string(), "54321?????");
    assert_eq!(table.column(3).to_string(), "0?????????");
    assert_eq!(table.column(4).to_string(), "90????????");

    let first_row: String = table.row(0).iter().map(|s| s.as_char()).collect();
    assert_eq!(first_row, "1?509");
}

#[test]
fn test_table_serializes_as_symbol_chars() {
    let table = RankingTable::build(&[vec![1], vec![], vec![], vec![], vec![]]);
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["columns"][0]["symbols"][0], "1");
    assert_eq!(json["columns"][1]["symbols"][0], "?");
}
