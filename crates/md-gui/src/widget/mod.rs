//! Widgets: layout rectangles, buttons, and cards.

pub mod button;
pub mod card;

use macroquad::prelude::*;

/// Draw a 2-pixel bordered rectangle (border inside bounds).
pub fn bordered_rect(area: &Rect2, fill: Color, border: Color) {
    draw_rectangle(area.x, area.y, area.w, area.h, fill);
    draw_rectangle_lines(area.x, area.y, area.w, area.h, 2.0, border);
}

/// A simple rectangular area for layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect2 {
    /// Create a new rect.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A `w` x `h` rect centered on `(cx, cy)`.
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    /// Check if a point is inside this rect.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Split into `n` equal columns separated by `gap`.
    pub fn columns(&self, n: usize, gap: f32) -> Vec<Self> {
        if n == 0 {
            return Vec::new();
        }
        let w = ((self.w - gap * (n as f32 - 1.0)) / n as f32).max(0.0);
        (0..n)
            .map(|i| Self::new(self.x + i as f32 * (w + gap), self.y, w, self.h))
            .collect()
    }
}
