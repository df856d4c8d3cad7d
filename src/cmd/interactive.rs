use crate::reports;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::debug;
use tris_stalker::api::Session;
use tris_stalker::config::{MAX_COMBINATIONS, MIN_SEED_LEN};
use tris_stalker::error::StalkerResult;
use tris_stalker::generator::{CombinationCount, Seed};

pub fn run(session: &Session) -> StalkerResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_loop(session, stdin.lock(), stdout.lock())
}

/// Whitespace-separated words from a line-buffered input, so a seed and a
/// count may share one line.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

/// Prompts for a seed and a count until the user types `q` or input ends.
pub fn prompt_loop<R: BufRead, W: Write>(
    session: &Session,
    input: R,
    mut out: W,
) -> StalkerResult<()> {
    let mut tokens = Tokens::new(input);
    writeln!(out, "\n--- Processed matrix (unique values per column) ---")?;
    writeln!(out, "{}", reports::ranking_matrix(session.table()))?;

    loop {
        write!(
            out,
            "\nEnter a number with at least {} digits (or 'q' to quit): ",
            MIN_SEED_LEN
        )?;
        out.flush()?;

        let Some(raw_seed) = tokens.next()? else {
            break;
        };
        if raw_seed.eq_ignore_ascii_case("q") {
            break;
        }

        let seed = match Seed::parse(&raw_seed) {
            Ok(seed) => seed,
            Err(e) => {
                debug!("{}", e);
                writeln!(
                    out,
                    "Please enter a valid number with at least {} digits.",
                    MIN_SEED_LEN
                )?;
                continue;
            }
        };

        write!(out, "How many combinations do you want? ")?;
        out.flush()?;

        let Some(raw_count) = tokens.next()? else {
            break;
        };
        let count = match CombinationCount::parse(&raw_count) {
            Ok(count) => count,
            Err(e) => {
                debug!("{}", e);
                writeln!(out, "Please enter a value between 1 and {}.", MAX_COMBINATIONS)?;
                continue;
            }
        };

        let outcome = session.suggest_validated(&seed, count);
        writeln!(out, "{}", reports::outcome_report(&outcome))?;
    }

    writeln!(out, "Thanks for using tris-stalker!")?;
    Ok(())
}
