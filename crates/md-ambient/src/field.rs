//! The particle pool and its per-frame update.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::AmbientConfig;
use crate::particle::Particle;
use crate::surface::Surface;

/// A fixed-size pool of particles bouncing inside a resizable surface.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    /// Spawn `config.particle_count` particles inside `width` x `height`.
    pub fn new(config: AmbientConfig, width: f32, height: f32) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(&mut rng, width, height))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    /// The particles in spawn order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current bounds as `(width, height)`.
    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Change the bounds. Particles keep their positions; any left outside
    /// head back inwards from their next step on.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance every particle one frame at wall-clock time `now_secs`.
    pub fn step(&mut self, now_secs: f64) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height, now_secs);
        }
    }

    /// Clear `surface` and draw every particle.
    pub fn render(&self, surface: &mut impl Surface) {
        surface.clear();
        for p in &self.particles {
            surface.fill_circle(p.x, p.y, p.radius, p.tint, p.opacity);
        }
    }
}
