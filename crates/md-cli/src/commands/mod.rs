pub mod deck;
pub mod launch;
pub mod ritual;

use md_core::{RitualConfig, RitualEngine};
use md_deck::{AnyDeckSource, Card, DeckSource, SourceOptions, blocking};

/// Build the card source selected on the command line.
fn open_source(options: &SourceOptions) -> Result<AnyDeckSource, String> {
    options.build().map_err(|e| e.to_string())
}

/// Draw a fresh pool into `engine`, replacing whatever it held.
fn acquire(engine: &mut RitualEngine<Card>, source: &AnyDeckSource) -> Result<(), String> {
    let pool_size = engine.config().effective_pool_size();
    let cards = blocking::draw_pool(source, pool_size)
        .map_err(|e| format!("could not draw cards from {}: {e}", source.describe()))?;
    engine.acquire_items(cards);
    Ok(())
}

/// A fresh engine with the standard five questions over twenty cards.
fn new_engine() -> RitualEngine<Card> {
    RitualEngine::new(RitualConfig::default())
}
