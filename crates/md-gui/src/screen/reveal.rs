//! Reveal screen.

use macroquad::prelude::*;

use crate::app::AppState;
use crate::fan::Placement;
use crate::input::any_pressed;
use crate::theme::{TEXT_SIZE, TITLE_SIZE, draw_centered, palette};
use crate::widget::button::{button_clicked, draw_button};
use crate::widget::card::draw_card;

use super::{Screen, ScreenId, Transition, button_row, fan_center};

/// Reveal screen. All state lives in the engine.
#[derive(Debug)]
pub struct RevealScreen;

impl Screen for RevealScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Reveal
    }

    fn update(&mut self, app: &mut AppState) -> Transition {
        if is_key_pressed(KeyCode::Escape) {
            return Transition::Quit;
        }

        let (mx, my) = mouse_position();
        let buttons = button_row(1);
        if button_clicked(&buttons[0], mx, my) || any_pressed(&[KeyCode::R, KeyCode::Enter]) {
            app.reset();
        }

        Transition::follow(self.id(), app)
    }

    fn draw(&self, app: &AppState) {
        let (mx, my) = mouse_position();
        let cx = screen_width() / 2.0;
        let (_, cy) = fan_center();

        match app.revealed() {
            Some(item) => {
                draw_centered("Your card", cx, 28.0, TITLE_SIZE, palette::GOLD);
                let placement = Placement {
                    x: cx,
                    y: cy - 20.0,
                    tilt_deg: 0.0,
                };
                draw_card(&item.payload, &placement, false, true);
                draw_centered(
                    &item.payload.label(),
                    cx,
                    cy + 50.0,
                    TITLE_SIZE,
                    palette::WHITE,
                );
                draw_centered(app.fate_message(), cx, cy + 96.0, TEXT_SIZE, palette::GOLD);
            }
            None => {
                draw_centered("The ritual is over", cx, 28.0, TITLE_SIZE, palette::GOLD);
                draw_centered(app.fate_message(), cx, cy, TEXT_SIZE, palette::RED);
            }
        }

        draw_button("Reset", &button_row(1)[0], mx, my);
    }
}
