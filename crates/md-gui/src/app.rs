//! Application state shared across all screens.

use std::collections::HashSet;

use md_ambient::{AmbientConfig, ParticleField};
use md_core::fate::{AWAITING_MESSAGE, NOT_FOUND_MESSAGE};
use md_core::{Answer, Item, ItemIdentifier, Resolution, RitualEngine, SessionPhase};
use md_deck::{AnyDeckSource, Card, DeckSource, blocking};

/// Shared application state accessible by all screens.
pub struct AppState {
    /// The ritual engine.
    pub engine: RitualEngine<Card>,
    /// Where pools come from.
    pub source: AnyDeckSource,
    /// The particle backdrop, sized to the window.
    pub field: ParticleField,
    /// Cards the user turned face down.
    pub flipped: HashSet<ItemIdentifier>,
    /// Last source error, shown instead of the pool.
    pub source_error: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Create the state for a `width` x `height` window and draw the first pool.
    pub fn new(source: AnyDeckSource, seed: u64, width: f32, height: f32) -> Self {
        let mut app = Self {
            engine: RitualEngine::default(),
            source,
            field: ParticleField::new(AmbientConfig::default().with_seed(seed), width, height),
            flipped: HashSet::new(),
            source_error: None,
            should_quit: false,
        };
        app.acquire();
        app
    }

    /// Draw a fresh pool. A failed draw leaves the pool empty.
    pub fn acquire(&mut self) {
        let pool_size = self.engine.config().effective_pool_size();
        match blocking::draw_pool(&self.source, pool_size) {
            Ok(cards) => {
                self.engine.acquire_items(cards);
                self.source_error = None;
            }
            Err(e) => {
                tracing::warn!(source = %self.source.describe(), error = %e, "card draw failed");
                self.engine.acquire_items(Vec::new());
                self.source_error = Some(e.to_string());
            }
        }
        self.flipped.clear();
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.engine.phase()
    }

    /// Start button.
    pub fn start(&mut self) {
        if self.engine.begin_session().is_ok() {
            self.flipped.clear();
        }
    }

    /// Yes/no buttons. Ignored outside the questioning step.
    pub fn answer(&mut self, answer: Answer) {
        if let Err(e) = self.engine.submit_answer(answer) {
            tracing::debug!(%answer, error = %e, "answer ignored");
        }
    }

    /// Reset button: clear the session and draw a new pool.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.acquire();
    }

    /// Turn a card face down, or back up.
    pub fn toggle_flip(&mut self, identifier: ItemIdentifier) {
        if !self.flipped.remove(&identifier) {
            self.flipped.insert(identifier);
        }
    }

    /// Whether a card is face down.
    pub fn is_flipped(&self, item: &Item<Card>) -> bool {
        self.flipped.contains(&item.identifier)
    }

    /// The resolved card, once revealing.
    pub fn revealed(&self) -> Option<&Item<Card>> {
        match self.engine.resolve() {
            Ok(Resolution::Found(item)) => Some(item),
            _ => None,
        }
    }

    /// The fate line for the current state.
    pub fn fate_message(&self) -> &'static str {
        match self.engine.resolve() {
            Ok(Resolution::Found(item)) => item.payload.fate(),
            Ok(Resolution::NotFound { .. }) => NOT_FOUND_MESSAGE,
            Err(_) => AWAITING_MESSAGE,
        }
    }

    /// Follow the window size. Returns true when the bounds changed.
    pub fn sync_window(&mut self, width: f32, height: f32) -> bool {
        if self.field.bounds() == (width, height) {
            return false;
        }
        self.field.resize(width, height);
        true
    }

    /// Advance the backdrop one frame.
    pub fn tick(&mut self, now_secs: f64) {
        self.field.step(now_secs);
    }
}
