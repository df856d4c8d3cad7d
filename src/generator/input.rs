use crate::config::{MAX_COMBINATIONS, MIN_SEED_LEN};
use crate::error::{StalkerError, StalkerResult};
use std::fmt;
use std::str::FromStr;

/// A validated seed number: at least [`MIN_SEED_LEN`] ASCII decimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    digits: Vec<u8>,
}

impl Seed {
    pub fn parse(raw: &str) -> StalkerResult<Self> {
        let raw = raw.trim();
        if raw.len() < MIN_SEED_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(StalkerError::InvalidSeed(raw.to_string()));
        }
        Ok(Self {
            digits: raw.bytes().map(|b| b - b'0').collect(),
        })
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// How many times each digit 0..=9 occurs in the seed.
    pub fn multiplicities(&self) -> [u8; 10] {
        let mut counts = [0u8; 10];
        for &d in &self.digits {
            counts[d as usize] = counts[d as usize].saturating_add(1);
        }
        counts
    }
}

impl FromStr for Seed {
    type Err = StalkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// Number of combinations requested, in `1..=MAX_COMBINATIONS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CombinationCount(usize);

impl CombinationCount {
    pub fn new(count: i64) -> StalkerResult<Self> {
        if count < 1 || count > MAX_COMBINATIONS as i64 {
            return Err(StalkerError::CountOutOfRange {
                count,
                max: MAX_COMBINATIONS,
            });
        }
        Ok(Self(count as usize))
    }

    /// Parses user text, keeping the raw input in the error when it is not an integer.
    pub fn parse(raw: &str) -> StalkerResult<Self> {
        let raw = raw.trim();
        let count = raw
            .parse::<i64>()
            .map_err(|_| StalkerError::InvalidCount(raw.to_string()))?;
        Self::new(count)
    }

    pub fn get(self) -> usize {
        self.0
    }
}
