//! Application state: the ritual engine, the card source, and the backdrop.

use std::collections::HashSet;

use md_ambient::{AmbientConfig, ParticleField};
use md_core::fate::{AWAITING_MESSAGE, NOT_FOUND_MESSAGE};
use md_core::{Answer, Item, ItemIdentifier, Resolution, RitualConfig, RitualEngine, SessionPhase};
use md_deck::{AnyDeckSource, Card, DeckSource, blocking};

/// Backdrop resolution per terminal cell (braille dots).
pub const DOTS_PER_COLUMN: f32 = 2.0;
/// Backdrop resolution per terminal row (braille dots).
pub const DOTS_PER_ROW: f32 = 4.0;

/// Main application state for the terminal ritual.
pub struct RitualApp {
    /// The ritual engine.
    pub engine: RitualEngine<Card>,
    /// Where pools come from.
    pub source: AnyDeckSource,
    /// The decorative backdrop.
    pub field: ParticleField,
    /// Backdrop configuration (kept for respawning on first layout).
    ambient: AmbientConfig,
    /// Highlighted card on the selection step.
    pub highlight: usize,
    /// Cards turned face down on the selection step.
    pub flipped: HashSet<ItemIdentifier>,
    /// Last source error, shown in the status bar.
    pub source_error: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl RitualApp {
    /// Create the app and draw the first pool.
    pub fn new(source: AnyDeckSource, seed: u64) -> Self {
        let ambient = AmbientConfig::default().with_seed(seed);
        let mut app = Self {
            engine: RitualEngine::new(RitualConfig::default()),
            source,
            field: ParticleField::new(ambient, 0.0, 0.0),
            ambient,
            highlight: 0,
            flipped: HashSet::new(),
            source_error: None,
            should_quit: false,
        };
        app.acquire();
        app
    }

    /// Draw a fresh pool into the engine.
    ///
    /// On failure the pool stays empty and the error is kept for display.
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
        self.highlight = 0;
        self.flipped.clear();
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.engine.phase()
    }

    /// Start trigger.
    pub fn start(&mut self) {
        if self.engine.begin_session().is_ok() {
            self.flipped.clear();
        }
    }

    /// Yes/no trigger. Ignored outside the questioning step.
    pub fn answer(&mut self, answer: Answer) {
        if let Err(e) = self.engine.submit_answer(answer) {
            tracing::debug!(%answer, error = %e, "answer ignored");
        }
    }

    /// Reset trigger: clear everything and draw a new pool.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.acquire();
    }

    /// Move the selection highlight by `delta`, wrapping.
    pub fn move_highlight(&mut self, delta: isize) {
        let len = self.engine.items().len();
        if len == 0 {
            return;
        }
        self.highlight = (self.highlight as isize + delta).rem_euclid(len as isize) as usize;
    }

    /// Turn the highlighted card over.
    pub fn flip_highlighted(&mut self) {
        if let Some(item) = self.engine.items().get(self.highlight) {
            let id = item.identifier;
            if !self.flipped.remove(&id) {
                self.flipped.insert(id);
            }
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

    /// Respawn the backdrop for the first known terminal size (in cells).
    pub fn fit_backdrop(&mut self, columns: u16, rows: u16) {
        let (w, h) = dots(columns, rows);
        self.field = ParticleField::new(self.ambient, w, h);
    }

    /// Terminal resized: update the backdrop bounds, keep particle positions.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        let (w, h) = dots(columns, rows);
        self.field.resize(w, h);
    }

    /// Advance the backdrop one frame.
    pub fn tick(&mut self, now_secs: f64) {
        self.field.step(now_secs);
    }

    /// Context-sensitive key hints.
    pub fn status_hint(&self) -> String {
        if let Some(err) = &self.source_error {
            return format!("{err} | r:retry q:quit");
        }
        match self.phase() {
            SessionPhase::Selecting => {
                "←/→:choose f:flip Enter:begin the ritual q:quit".to_string()
            }
            SessionPhase::Questioning => format!(
                "Question {}/{} | y:yes n:no q:quit",
                self.engine.current_question() + 1,
                self.engine.max_bits()
            ),
            SessionPhase::Revealing => "r:new ritual q:quit".to_string(),
        }
    }
}

fn dots(columns: u16, rows: u16) -> (f32, f32) {
    (
        f32::from(columns) * DOTS_PER_COLUMN,
        f32::from(rows) * DOTS_PER_ROW,
    )
}
