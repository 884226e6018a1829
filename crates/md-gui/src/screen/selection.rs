//! Selection screen: the pool fanned out face up.

use macroquad::prelude::*;

use crate::app::AppState;
use crate::fan::{self, card_at};
use crate::input::{DoubleClick, any_pressed, clicked};
use crate::theme::{TEXT_SIZE, TITLE_SIZE, draw_centered, palette};
use crate::widget::button::{button_clicked, draw_button};
use crate::widget::card::draw_card;

use super::{Screen, ScreenId, Transition, button_row, fan_center, flip_on_double_click};

/// Selection screen state.
#[derive(Debug, Default)]
pub struct SelectionScreen {
    double_click: DoubleClick,
}

impl SelectionScreen {
    /// Create a new selection screen.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for SelectionScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Selection
    }

    fn update(&mut self, app: &mut AppState) -> Transition {
        if is_key_pressed(KeyCode::Escape) {
            return Transition::Quit;
        }

        let (mx, my) = mouse_position();
        let buttons = button_row(1);
        let pool_is_empty = app.engine.items().is_empty();

        if button_clicked(&buttons[0], mx, my) || any_pressed(&[KeyCode::Enter, KeyCode::S]) {
            if pool_is_empty {
                app.reset();
            } else {
                app.start();
            }
        } else if clicked() {
            let (cx, cy) = fan_center();
            let layout = fan::fan(app.engine.items().len(), cx, cy);
            let hit = card_at(&layout, mx, my).map(|index| app.engine.items()[index].identifier);
            flip_on_double_click(app, &mut self.double_click, hit, get_time());
        }

        Transition::follow(self.id(), app)
    }

    fn draw(&self, app: &AppState) {
        let (mx, my) = mouse_position();
        let cx = screen_width() / 2.0;
        draw_centered("Mystic Deck", cx, 28.0, TITLE_SIZE, palette::GOLD);

        let items = app.engine.items();
        let buttons = button_row(1);

        if let Some(err) = &app.source_error {
            draw_centered("No cards could be drawn.", cx, 90.0, TEXT_SIZE, palette::RED);
            draw_centered(err, cx, 120.0, TEXT_SIZE, palette::MUTED);
            draw_button("Retry", &buttons[0], mx, my);
            return;
        }

        draw_centered(
            &format!("{} cards are laid out before you. Fix one in your mind.", items.len()),
            cx,
            76.0,
            TEXT_SIZE,
            palette::WHITE,
        );
        draw_centered(
            "Double-click a card to turn it over.",
            cx,
            102.0,
            TEXT_SIZE,
            palette::MUTED,
        );

        let (fx, fy) = fan_center();
        let layout = fan::fan(items.len(), fx, fy);
        let hovered = card_at(&layout, mx, my);
        for (index, (item, placement)) in items.iter().zip(&layout).enumerate() {
            draw_card(&item.payload, placement, app.is_flipped(item), hovered == Some(index));
        }

        if let Some(item) = hovered.and_then(|i| items.get(i))
            && !app.is_flipped(item)
        {
            draw_centered(
                &item.payload.label(),
                cx,
                fy + fan::CARD_H / 2.0 + 40.0,
                TEXT_SIZE,
                palette::GOLD,
            );
        }

        let label = if items.is_empty() { "Retry" } else { "Start" };
        draw_button(label, &buttons[0], mx, my);
    }
}
