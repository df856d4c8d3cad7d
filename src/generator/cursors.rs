use crate::config::{COLUMNS, RANK_DEPTH};

/// Per-column "highest row not yet tried" markers for one generation run.
///
/// Values only ever go down. A pick at row `i` moves the column to `i - 1`;
/// a failed attempt moves every column down by one, which can take an
/// already negative cursor further below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursors {
    rows: [i32; COLUMNS],
}

impl Cursors {
    pub const START: i32 = RANK_DEPTH as i32 - 1;

    pub fn new() -> Self {
        Self {
            rows: [Self::START; COLUMNS],
        }
    }

    pub fn get(&self, col: usize) -> i32 {
        self.rows[col]
    }

    /// Rows still available in `col`, highest first.
    pub fn candidates(&self, col: usize) -> impl Iterator<Item = usize> {
        (0..=self.rows[col]).rev().map(|r| r as usize)
    }

    /// Marks `row` as consumed so the column resumes strictly below it.
    pub fn consume(&mut self, col: usize, row: usize) {
        self.rows[col] = row as i32 - 1;
    }

    /// The uniform retreat applied after any failed attempt.
    pub fn retreat(&mut self) {
        for r in self.rows.iter_mut() {
            *r -= 1;
        }
    }

    pub fn exhausted(&self) -> bool {
        self.rows.iter().all(|&r| r < 0)
    }

    pub fn as_array(&self) -> [i32; COLUMNS] {
        self.rows
    }
}

impl Default for Cursors {
    fn default() -> Self {
        Self::new()
    }
}
