use crate::error::{StalkerError, StalkerResult};
use clap::Args;

/// Number of positions in a combination (and columns in the source file).
pub const COLUMNS: usize = 5;
/// Every ranked column holds exactly this many symbols.
pub const RANK_DEPTH: usize = 10;
/// Seeds shorter than this are rejected.
pub const MIN_SEED_LEN: usize = 5;
/// Upper bound for a single generation request.
pub const MAX_COMBINATIONS: usize = 100;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub source: SourceParams,
}

#[derive(Args, Debug, Clone)]
pub struct SourceParams {
    /// Historical draws, one record per line
    #[arg(global = true, short, long, default_value = "Tris.csv")]
    pub data: String,

    /// Treat the first line as data instead of a header
    #[arg(global = true, long, default_value_t = false)]
    pub no_header: bool,

    #[arg(global = true, long, default_value_t = ',')]
    pub delimiter: char,
}

impl Default for SourceParams {
    fn default() -> Self {
        Self {
            data: "Tris.csv".to_string(),
            no_header: false,
            delimiter: ',',
        }
    }
}

impl SourceParams {
    pub fn delimiter_byte(&self) -> StalkerResult<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(StalkerError::Config(format!(
                "--delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )))
        }
    }
}
