//! A playing card drawn as a tilted rectangle.

use macroquad::prelude::*;

use md_deck::Card;

use crate::fan::{CARD_H, CARD_W, Placement, rotate};
use crate::theme::palette;

/// Draw `card` at `placement`, face up unless `face_down`.
pub fn draw_card(card: &Card, placement: &Placement, face_down: bool, highlighted: bool) {
    let rotation = placement.tilt_rad();
    let rect = |w: f32, h: f32, color: Color| {
        draw_rectangle_ex(
            placement.x,
            placement.y,
            w,
            h,
            DrawRectangleParams {
                offset: vec2(0.5, 0.5),
                rotation,
                color,
            },
        );
    };

    let border = if highlighted {
        palette::GOLD
    } else {
        palette::MUTED
    };
    rect(CARD_W, CARD_H, border);

    if face_down {
        rect(CARD_W - 4.0, CARD_H - 4.0, palette::INDIGO);
        rect(CARD_W - 16.0, CARD_H - 16.0, palette::NIGHT);
        rect(CARD_W - 20.0, CARD_H - 20.0, palette::INDIGO);
        return;
    }

    rect(CARD_W - 4.0, CARD_H - 4.0, palette::IVORY);
    let ink = suit_color(card);
    corner_text(&card.short_rank(), placement, -CARD_W / 2.0 + 6.0, -CARD_H / 2.0 + 20.0, 22, ink);
    let suit = card.suit.chars().next().map(String::from).unwrap_or_default();
    corner_text(&suit, placement, -6.0, 8.0, 30, ink);
}

/// Text color for the card's suit.
pub fn suit_color(card: &Card) -> Color {
    match card.parsed_suit() {
        Some(suit) if suit.is_red() => palette::RED,
        _ => palette::INK,
    }
}

/// Draw text at an offset from the card center, rotated with the card.
fn corner_text(text: &str, placement: &Placement, dx: f32, dy: f32, size: u16, color: Color) {
    let rotation = placement.tilt_rad();
    let (ox, oy) = rotate(dx, dy, rotation);
    draw_text_ex(
        text,
        placement.x + ox,
        placement.y + oy,
        TextParams {
            font_size: size,
            rotation,
            color,
            ..Default::default()
        },
    );
}
