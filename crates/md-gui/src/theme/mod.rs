//! Visual theme: color palette and text helpers.

use macroquad::prelude::*;

use md_ambient::Tint;

/// Default text size.
pub const TEXT_SIZE: u16 = 22;
/// Heading text size.
pub const TITLE_SIZE: u16 = 34;

/// Night-sky palette around the backdrop's gold, indigo, and white.
pub mod palette {
    use macroquad::prelude::Color;

    /// Window background.
    pub const NIGHT: Color = Color::new(0.039, 0.024, 0.102, 1.0);
    /// Panel fill, slightly translucent over the backdrop.
    pub const PANEL: Color = Color::new(0.090, 0.047, 0.180, 0.85);
    /// Gold for borders and highlights.
    pub const GOLD: Color = Color::new(1.0, 0.843, 0.0, 1.0);
    /// Indigo for card backs.
    pub const INDIGO: Color = Color::new(0.294, 0.0, 0.510, 1.0);
    /// White for card faces and primary text.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Ivory card face.
    pub const IVORY: Color = Color::new(0.992, 0.976, 0.933, 1.0);
    /// Red suits and errors.
    pub const RED: Color = Color::new(0.800, 0.063, 0.141, 1.0);
    /// Black suits.
    pub const INK: Color = Color::new(0.067, 0.067, 0.090, 1.0);
    /// Secondary text.
    pub const MUTED: Color = Color::new(0.620, 0.580, 0.720, 1.0);
}

/// Backdrop color for `tint` at `opacity`.
pub fn tint_color(tint: Tint, opacity: f32) -> Color {
    let (r, g, b) = tint.rgb();
    Color::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        opacity.clamp(0.0, 1.0),
    )
}

/// Draw `text` with its top edge at `y`, horizontally centered on `cx`.
pub fn draw_centered(text: &str, cx: f32, y: f32, size: u16, color: Color) {
    let dims = measure_text(text, None, size, 1.0);
    draw_text(text, cx - dims.width / 2.0, y + dims.offset_y, f32::from(size), color);
}
