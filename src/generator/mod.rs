//! Combination search over a [`RankingTable`].
//!
//! Each attempt walks the five columns left to right, taking the first row
//! at or below the column cursor whose digit the seed still has budget for.
//! A failed attempt moves every cursor down one row before the next try, so
//! a run ends after at most [`RANK_DEPTH`] failures.

pub mod budget;
pub mod cursors;
pub mod input;

pub use budget::SeedBudget;
pub use cursors::Cursors;
pub use input::{CombinationCount, Seed};

use crate::config::{COLUMNS, RANK_DEPTH};
use crate::ranking::RankingTable;
use serde::{Serialize, Serializer};
use std::fmt;
use strum_macros::{Display, EnumString};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination([u8; COLUMNS]);

impl Combination {
    pub fn digits(&self) -> &[u8; COLUMNS] {
        &self.0
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl Serialize for Combination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    Full,
    Partial,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationOutcome {
    pub combinations: Vec<Combination>,
    pub requested: usize,
    pub attempts: usize,
    pub retreats: usize,
}

impl GenerationOutcome {
    pub fn status(&self) -> GenerationStatus {
        if self.combinations.is_empty() {
            GenerationStatus::Empty
        } else if self.combinations.len() < self.requested {
            GenerationStatus::Partial
        } else {
            GenerationStatus::Full
        }
    }
}

/// Builds one combination from the current cursors with a fresh budget.
/// Cursor advances made before a failing column are kept.
fn attempt(
    table: &RankingTable,
    seed: &Seed,
    cursors: &mut Cursors,
) -> Result<Combination, usize> {
    let mut budget = SeedBudget::new(seed);
    let mut digits = [0u8; COLUMNS];

    for (col, slot) in digits.iter_mut().enumerate() {
        let column = table.column(col);
        let pick = cursors.candidates(col).find_map(|row| {
            let symbol = column.get(row);
            if budget.take(symbol) {
                symbol.digit().map(|d| (row, d))
            } else {
                None
            }
        });

        match pick {
            Some((row, digit)) => {
                *slot = digit;
                cursors.consume(col, row);
            }
            None => return Err(col),
        }
    }

    Ok(Combination(digits))
}

pub fn generate(table: &RankingTable, seed: &Seed, count: CombinationCount) -> GenerationOutcome {
    let requested = count.get();
    let mut cursors = Cursors::new();
    let mut outcome = GenerationOutcome {
        combinations: Vec::with_capacity(requested),
        requested,
        attempts: 0,
        retreats: 0,
    };

    while outcome.combinations.len() < requested && !cursors.exhausted() {
        outcome.attempts += 1;
        match attempt(table, seed, &mut cursors) {
            Ok(combo) => {
                debug!("Attempt {}: accepted {}", outcome.attempts, combo);
                outcome.combinations.push(combo);
            }
            Err(col) => {
                cursors.retreat();
                outcome.retreats += 1;
                debug!(
                    "Attempt {}: no usable row in column {}, retreating to {:?}",
                    outcome.attempts,
                    col,
                    cursors.as_array()
                );
            }
        }
    }

    debug_assert!(outcome.retreats <= RANK_DEPTH);
    debug!(
        "Seed {}: {} of {} combinations after {} attempts ({})",
        seed,
        outcome.combinations.len(),
        requested,
        outcome.attempts,
        outcome.status()
    );

    outcome
}
