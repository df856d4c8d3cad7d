use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};
use tris_stalker::api::Session;
use tris_stalker::config::Config;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    config: Config,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prompt for seeds until 'q' (the default)
    Interactive,
    /// Print the per-column ranking matrix
    Matrix,
    /// Generate combinations for a single seed
    Suggest(cmd::suggest::SuggestArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let command = cli.command.unwrap_or(Commands::Interactive);
    let quiet = matches!(&command, Commands::Suggest(args) if args.json);
    if !quiet {
        reports::print_banner();
    }

    let session = Session::load(&cli.config.source.data, &cli.config.source).unwrap_or_else(|e| {
        error!("Could not load draw history: {}", e);
        process::exit(1);
    });

    let result = match command {
        Commands::Interactive => cmd::interactive::run(&session),
        Commands::Matrix => cmd::matrix::run(&session),
        Commands::Suggest(args) => cmd::suggest::run(args, &session),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
