//! Questioning screen: one candidate group per question.

use macroquad::prelude::*;

use md_core::Answer;

use crate::app::AppState;
use crate::fan::{self, card_at};
use crate::input::{DoubleClick, any_pressed, clicked};
use crate::theme::{TEXT_SIZE, TITLE_SIZE, draw_centered, palette};
use crate::widget::Rect2;
use crate::widget::button::{button_clicked, draw_button};
use crate::widget::card::draw_card;

use super::{Screen, ScreenId, Transition, button_row, fan_center, flip_on_double_click};

/// Questioning screen state.
#[derive(Debug, Default)]
pub struct QuestioningScreen {
    double_click: DoubleClick,
}

impl QuestioningScreen {
    /// Create a new questioning screen.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for QuestioningScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Questioning
    }

    fn update(&mut self, app: &mut AppState) -> Transition {
        if is_key_pressed(KeyCode::Escape) {
            return Transition::Quit;
        }

        let (mx, my) = mouse_position();
        let buttons = button_row(3);

        if button_clicked(&buttons[0], mx, my) || any_pressed(&[KeyCode::Y]) {
            app.answer(Answer::Yes);
        } else if button_clicked(&buttons[1], mx, my) || any_pressed(&[KeyCode::N]) {
            app.answer(Answer::No);
        } else if button_clicked(&buttons[2], mx, my) || any_pressed(&[KeyCode::R]) {
            app.reset();
        } else if clicked() {
            let (cx, cy) = fan_center();
            let candidates = app.engine.candidates_for_current_question();
            let layout = fan::fan(candidates.len(), cx, cy);
            let hit = card_at(&layout, mx, my).map(|index| candidates[index].identifier);
            flip_on_double_click(app, &mut self.double_click, hit, get_time());
        }

        Transition::follow(self.id(), app)
    }

    fn draw(&self, app: &AppState) {
        let (mx, my) = mouse_position();
        let engine = &app.engine;
        let cx = screen_width() / 2.0;

        draw_centered(
            &format!("Question {} of {}", engine.current_question() + 1, engine.max_bits()),
            cx,
            28.0,
            TITLE_SIZE,
            palette::GOLD,
        );

        // Progress pips
        let pips = Rect2::centered(cx, 76.0, engine.max_bits() as f32 * 24.0, 10.0);
        for (i, pip) in pips.columns(engine.max_bits() as usize, 8.0).iter().enumerate() {
            let color = if (i as u32) < engine.current_question() {
                palette::GOLD
            } else {
                palette::MUTED
            };
            draw_rectangle(pip.x, pip.y, pip.w, pip.h, color);
        }

        let candidates = engine.candidates_for_current_question();
        draw_centered(
            &format!("Is your card among these {}?", candidates.len()),
            cx,
            100.0,
            TEXT_SIZE,
            palette::WHITE,
        );

        let (fx, fy) = fan_center();
        let layout = fan::fan(candidates.len(), fx, fy);
        for (item, placement) in candidates.iter().zip(&layout) {
            draw_card(&item.payload, placement, app.is_flipped(item), false);
        }

        let buttons = button_row(3);
        draw_button("Yes", &buttons[0], mx, my);
        draw_button("No", &buttons[1], mx, my);
        draw_button("Reset", &buttons[2], mx, my);
    }
}
