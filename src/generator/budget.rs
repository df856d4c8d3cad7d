use super::input::Seed;
use crate::ranking::Symbol;

/// Remaining uses of each digit while one combination is being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedBudget {
    remaining: [u8; 10],
}

impl SeedBudget {
    pub fn new(seed: &Seed) -> Self {
        Self {
            remaining: seed.multiplicities(),
        }
    }

    pub fn can_take(&self, symbol: Symbol) -> bool {
        symbol
            .digit()
            .is_some_and(|d| self.remaining[d as usize] > 0)
    }

    /// Consumes one use of `symbol`. Returns false for filler or a spent digit.
    pub fn take(&mut self, symbol: Symbol) -> bool {
        if !self.can_take(symbol) {
            return false;
        }
        if let Some(d) = symbol.digit() {
            self.remaining[d as usize] -= 1;
        }
        true
    }

    pub fn remaining(&self, digit: u8) -> u8 {
        self.remaining[digit as usize]
    }
}
