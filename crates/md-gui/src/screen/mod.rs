//! Screen management: one screen per ritual step.

pub mod questioning;
pub mod reveal;
pub mod selection;

use macroquad::prelude::*;

use md_core::{ItemIdentifier, SessionPhase};

use crate::app::AppState;
use crate::input::DoubleClick;
use crate::widget::Rect2;

/// Height of the bottom button row.
const BUTTON_H: f32 = 40.0;
/// Width of one button.
const BUTTON_W: f32 = 140.0;

/// Identifies which screen to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// The pool, fanned out face up.
    Selection,
    /// One question and its candidate group.
    Questioning,
    /// The revealed card and its fate.
    Reveal,
}

impl ScreenId {
    /// The screen that presents `phase`.
    pub fn for_phase(phase: SessionPhase) -> Self {
        match phase {
            SessionPhase::Selecting => Self::Selection,
            SessionPhase::Questioning => Self::Questioning,
            SessionPhase::Revealing => Self::Reveal,
        }
    }
}

/// A transition between screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Replace the current screen.
    Replace(ScreenId),
    /// Close the window.
    Quit,
    /// No transition.
    None,
}

impl Transition {
    /// Move to the screen for the engine's phase if it differs from `current`.
    pub fn follow(current: ScreenId, app: &AppState) -> Self {
        let next = ScreenId::for_phase(app.phase());
        if next == current {
            Self::None
        } else {
            Self::Replace(next)
        }
    }
}

/// Trait that all screens implement.
pub trait Screen {
    /// This screen's identifier.
    fn id(&self) -> ScreenId;
    /// Update state based on input. Returns a transition if the screen should change.
    fn update(&mut self, app: &mut AppState) -> Transition;
    /// Draw the screen.
    fn draw(&self, app: &AppState);
}

/// Center of the card fan for the current window.
pub fn fan_center() -> (f32, f32) {
    (screen_width() / 2.0, screen_height() * 0.5)
}

/// `n` buttons centered along the bottom of the window.
pub fn button_row(n: usize) -> Vec<Rect2> {
    let gap = 16.0;
    let total = n as f32 * BUTTON_W + (n as f32 - 1.0).max(0.0) * gap;
    let row = Rect2::new(
        (screen_width() - total) / 2.0,
        screen_height() - BUTTON_H - 24.0,
        total,
        BUTTON_H,
    );
    row.columns(n, gap)
}

/// Feed a click on the card fan into `double_click`. A double-click on a
/// card turns it over. `hit` is the card under the pointer, if any.
pub fn flip_on_double_click(
    app: &mut AppState,
    double_click: &mut DoubleClick,
    hit: Option<ItemIdentifier>,
    now: f64,
) -> bool {
    match hit {
        Some(id) if double_click.register(id.value() as usize, now) => {
            app.toggle_flip(id);
            true
        }
        Some(_) => false,
        None => {
            double_click.cancel();
            false
        }
    }
}

/// Create a screen instance for a given screen id.
pub fn make_screen(id: ScreenId) -> Box<dyn Screen> {
    match id {
        ScreenId::Selection => Box::new(selection::SelectionScreen::new()),
        ScreenId::Questioning => Box::new(questioning::QuestioningScreen::new()),
        ScreenId::Reveal => Box::new(reveal::RevealScreen),
    }
}
