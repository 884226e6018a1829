//! Standalone TUI binary for Mystic Deck.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use md_deck::SourceOptions;

#[derive(Parser)]
#[command(
    name = "mystic-tui",
    about = "Terminal ritual for Mystic Deck",
    version
)]
struct Args {
    /// Shuffle a deck locally instead of calling the deck API
    #[arg(long)]
    offline: bool,

    /// Seed for the offline shuffle and the backdrop
    #[arg(long)]
    seed: Option<u64>,

    /// Replay a draw saved with `mystic deck --json`
    #[arg(long)]
    deck_file: Option<PathBuf>,

    /// Base URL of the shuffled-deck API
    #[arg(long)]
    api_url: Option<String>,
}

fn main() {
    let args = Args::parse();

    let options = SourceOptions {
        deck_file: args.deck_file,
        offline: args.offline,
        seed: args.seed,
        api_url: args.api_url,
    };

    let source = match options.build() {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let app = md_tui::app::RitualApp::new(source, args.seed.unwrap_or(42));

    if let Err(e) = md_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
