//! Per-column digit rankings built from draw history.
//!
//! Each column lists the digits in the order they were first observed,
//! padded with [`Symbol::Filler`] up to [`RANK_DEPTH`] entries.

use crate::config::{COLUMNS, RANK_DEPTH};
use crate::history::DrawHistory;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A decimal digit value, always in 0..=9.
    Digit(u8),
    /// No further observed digit at this depth. Never consumable.
    Filler,
}

impl Symbol {
    pub const FILLER_CHAR: char = '?';

    pub fn digit(&self) -> Option<u8> {
        match *self {
            Symbol::Digit(d) => Some(d),
            Symbol::Filler => None,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Symbol::Digit(d) => (b'0' + d) as char,
            Symbol::Filler => Self::FILLER_CHAR,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedColumn {
    symbols: [Symbol; RANK_DEPTH],
}

impl RankedColumn {
    /// Keeps the first occurrence of every digit, in encounter order.
    /// Values above 9 are ignored.
    pub fn from_observations(observations: &[u8]) -> Self {
        let mut symbols = [Symbol::Filler; RANK_DEPTH];
        let mut seen = [false; 10];
        let mut len = 0;

        for &digit in observations {
            if digit > 9 || seen[digit as usize] {
                continue;
            }
            seen[digit as usize] = true;
            symbols[len] = Symbol::Digit(digit);
            len += 1;
            if len == RANK_DEPTH {
                break;
            }
        }

        Self { symbols }
    }

    pub fn get(&self, row: usize) -> Symbol {
        self.symbols[row]
    }

    pub fn symbols(&self) -> &[Symbol; RANK_DEPTH] {
        &self.symbols
    }

    /// Number of real digits before the filler padding starts.
    pub fn observed_len(&self) -> usize {
        self.symbols
            .iter()
            .take_while(|s| matches!(s, Symbol::Digit(_)))
            .count()
    }
}

impl fmt::Display for RankedColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.symbols {
            write!(f, "{}", s)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingTable {
    columns: [RankedColumn; COLUMNS],
}

impl RankingTable {
    pub fn build(observations: &[Vec<u8>; COLUMNS]) -> Self {
        Self {
            columns: std::array::from_fn(|c| RankedColumn::from_observations(&observations[c])),
        }
    }

    pub fn from_history(history: &DrawHistory) -> Self {
        Self::build(&history.columns)
    }

    pub fn from_columns(columns: [RankedColumn; COLUMNS]) -> Self {
        Self { columns }
    }

    pub fn column(&self, col: usize) -> &RankedColumn {
        &self.columns[col]
    }

    pub fn columns(&self) -> &[RankedColumn; COLUMNS] {
        &self.columns
    }

    /// Symbols of one ranking depth across all columns, as printed in the matrix view.
    pub fn row(&self, row: usize) -> [Symbol; COLUMNS] {
        std::array::from_fn(|c| self.columns[c].get(row))
    }
}
