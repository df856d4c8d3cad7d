use crate::config::SourceParams;
use crate::error::StalkerResult;
use crate::generator::{self, CombinationCount, GenerationOutcome, Seed};
use crate::history::{self, DrawHistory};
use crate::ranking::RankingTable;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// A loaded draw history that answers any number of generation requests.
pub struct Session {
    history: DrawHistory,
    table: RankingTable,
}

impl Session {
    pub fn load<P: AsRef<Path>>(path: P, params: &SourceParams) -> StalkerResult<Self> {
        let history = history::load_history(path, params)?;
        Ok(Self::from_history(history))
    }

    pub fn from_reader<R: Read>(reader: R, params: &SourceParams) -> StalkerResult<Self> {
        let history = history::load_history_from_reader(reader, params, "<reader>")?;
        Ok(Self::from_history(history))
    }

    pub fn from_history(history: DrawHistory) -> Self {
        let table = RankingTable::from_history(&history);
        info!(
            "Ranking table built: observed digits per column {:?}",
            table.columns().each_ref().map(|c| c.observed_len())
        );
        Self { history, table }
    }

    pub fn table(&self) -> &RankingTable {
        &self.table
    }

    pub fn history(&self) -> &DrawHistory {
        &self.history
    }

    /// Validates raw user input, then runs the generator.
    pub fn suggest(&self, seed: &str, count: i64) -> StalkerResult<GenerationOutcome> {
        let seed = Seed::parse(seed)?;
        let count = CombinationCount::new(count)?;
        Ok(self.suggest_validated(&seed, count))
    }

    pub fn suggest_validated(&self, seed: &Seed, count: CombinationCount) -> GenerationOutcome {
        generator::generate(&self.table, seed, count)
    }
}
