//! CLI frontend for the Mystic Deck card ritual.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use md_deck::SourceOptions;

#[derive(Parser)]
#[command(
    name = "mystic",
    about = "Mystic Deck — five questions, one card, one fate",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Where the cards come from.
#[derive(Args)]
struct SourceArgs {
    /// Shuffle a deck locally instead of calling the deck API
    #[arg(long, global = true)]
    offline: bool,

    /// Seed for the offline shuffle (default: derived from the clock)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Replay a draw saved with `mystic deck --json`
    #[arg(long, global = true)]
    deck_file: Option<PathBuf>,

    /// Base URL of the shuffled-deck API
    #[arg(long, global = true)]
    api_url: Option<String>,
}

impl SourceArgs {
    fn options(&self) -> SourceOptions {
        SourceOptions {
            deck_file: self.deck_file.clone(),
            offline: self.offline,
            seed: self.seed,
            api_url: self.api_url.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Perform the ritual in this terminal, line by line
    Ritual,

    /// Draw a pool and show each card's identifier and bit pattern
    Deck {
        /// Print the pool as a saved draw (JSON) instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Launch the full-screen terminal ritual
    Tui,

    /// Launch the windowed ritual
    Gui,
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let options = cli.source.options();

    let result = match cli.command {
        Commands::Ritual => commands::ritual::run(&options),
        Commands::Deck { json } => commands::deck::run(&options, json),
        Commands::Tui => commands::launch::run("mystic-tui", "md-tui", &options),
        Commands::Gui => commands::launch::run("mystic-gui", "md-gui", &options),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
