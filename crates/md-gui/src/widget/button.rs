//! Clickable button widget with hover state.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::{TEXT_SIZE, draw_centered, palette};

/// Whether the button at `area` was clicked this frame.
pub fn button_clicked(area: &Rect2, mouse_x: f32, mouse_y: f32) -> bool {
    area.contains(mouse_x, mouse_y) && is_mouse_button_pressed(MouseButton::Left)
}

/// Draw a button, highlighted while hovered.
pub fn draw_button(label: &str, area: &Rect2, mouse_x: f32, mouse_y: f32) {
    let (fill, border, text_color) = if area.contains(mouse_x, mouse_y) {
        (palette::INDIGO, palette::GOLD, palette::GOLD)
    } else {
        (palette::PANEL, palette::MUTED, palette::WHITE)
    };

    super::bordered_rect(area, fill, border);
    let text_y = area.y + (area.h - f32::from(TEXT_SIZE) * 0.7) / 2.0;
    draw_centered(label, area.center_x(), text_y, TEXT_SIZE, text_color);
}
