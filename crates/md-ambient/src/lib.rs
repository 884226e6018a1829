//! Decorative particle backdrop for Mystic Deck.
//!
//! A fixed pool of softly pulsing motes drifts across the drawing surface and
//! bounces off its edges. The animator knows nothing about the ritual; front
//! ends step it once per frame and render it through the [`Surface`] trait.

pub mod config;
pub mod field;
pub mod particle;
pub mod surface;

pub use config::AmbientConfig;
pub use field::ParticleField;
pub use particle::{Particle, Tint};
pub use surface::Surface;
