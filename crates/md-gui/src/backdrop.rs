//! Particle backdrop drawn straight to the window.

use macroquad::prelude::*;

use md_ambient::{Surface, Tint};

use crate::theme::{palette, tint_color};

/// Draws particles with macroquad's immediate-mode shapes.
pub struct WindowSurface;

impl Surface for WindowSurface {
    fn clear(&mut self) {
        clear_background(palette::NIGHT);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, tint: Tint, opacity: f32) {
        draw_circle(x, y, radius, tint_color(tint, opacity));
    }
}
