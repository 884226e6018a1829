//! Particle backdrop drawn on a braille canvas.

use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Context};

use md_ambient::{ParticleField, Surface, Tint};

/// Adapts a canvas paint context to the particle [`Surface`].
///
/// The field measures y downwards; the canvas measures it upwards.
pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    height: f32,
}

impl<'a, 'b> CanvasSurface<'a, 'b> {
    /// Wrap `ctx` for a field of the given height.
    pub fn new(ctx: &'a mut Context<'b>, height: f32) -> Self {
        Self { ctx, height }
    }
}

impl Surface for CanvasSurface<'_, '_> {
    // The canvas starts blank every frame.
    fn clear(&mut self) {}

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, tint: Tint, opacity: f32) {
        self.ctx.draw(&Circle {
            x: f64::from(x),
            y: f64::from(self.height - y),
            radius: f64::from(radius),
            color: shade(tint, opacity),
        });
    }
}

/// Terminal color for `tint` dimmed towards black by `opacity`.
pub fn shade(tint: Tint, opacity: f32) -> Color {
    let (r, g, b) = tint.rgb();
    let scale = |c: u8| (f32::from(c) * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::Rgb(scale(r), scale(g), scale(b))
}

/// Draw the whole field across `area`.
pub fn draw(frame: &mut Frame, field: &ParticleField, area: Rect) {
    let (width, height) = field.bounds();
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, f64::from(width)])
        .y_bounds([0.0, f64::from(height)])
        .paint(|ctx| field.render(&mut CanvasSurface::new(ctx, height)));
    frame.render_widget(canvas, area);
}
