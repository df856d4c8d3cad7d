use thiserror::Error;

#[derive(Error, Debug)]
pub enum StalkerError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty Source: '{0}' has no lines")]
    EmptySource(String),

    #[error("Invalid Seed '{0}': expected at least 5 decimal digits")]
    InvalidSeed(String),

    #[error("Invalid Count '{0}': expected a whole number")]
    InvalidCount(String),

    #[error("Count Out Of Range: {count} (expected 1..={max})")]
    CountOutOfRange { count: i64, max: usize },

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl StalkerError {
    /// True for errors caused by user input that can simply be re-entered.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StalkerError::InvalidSeed(_)
                | StalkerError::InvalidCount(_)
                | StalkerError::CountOutOfRange { .. }
        )
    }
}

pub type StalkerResult<T> = Result<T, StalkerError>;
