use crate::reports;
use clap::Args;
use serde::Serialize;
use tris_stalker::api::Session;
use tris_stalker::error::StalkerResult;
use tris_stalker::generator::{GenerationOutcome, GenerationStatus};

#[derive(Args, Debug, Clone)]
pub struct SuggestArgs {
    /// Seed number with at least 5 digits
    #[arg(short, long)]
    pub seed: String,

    /// How many combinations to generate (1-100)
    #[arg(short = 'n', long, default_value_t = 10, allow_negative_numbers = true)]
    pub count: i64,

    /// Print the outcome as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    status: GenerationStatus,
    #[serde(flatten)]
    outcome: &'a GenerationOutcome,
}

pub fn run(args: SuggestArgs, session: &Session) -> StalkerResult<()> {
    let outcome = session.suggest(&args.seed, args.count)?;

    if args.json {
        let report = JsonReport {
            status: outcome.status(),
            outcome: &outcome,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", reports::outcome_report(&outcome));
    }
    Ok(())
}
