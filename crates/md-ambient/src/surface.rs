//! The drawing seam between the animator and a graphics backend.

use crate::particle::Tint;

/// A 2D target the particle field can paint onto.
///
/// Coordinates are in the same units as the field's width and height.
pub trait Surface {
    /// Erase the previous frame.
    fn clear(&mut self);

    /// Fill a circle centered at `(x, y)`.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, tint: Tint, opacity: f32);
}
