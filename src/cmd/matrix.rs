use crate::reports;
use tris_stalker::api::Session;
use tris_stalker::error::StalkerResult;

pub fn run(session: &Session) -> StalkerResult<()> {
    println!("\n--- Processed matrix (unique values per column) ---");
    println!("{}", reports::ranking_matrix(session.table()));
    println!("{}", reports::history_summary(session.history()));
    Ok(())
}
