//! Configuration for the particle field.

/// Configuration for a [`crate::ParticleField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbientConfig {
    /// Number of particles in the pool.
    pub particle_count: usize,
    /// RNG seed for particle placement.
    pub seed: u64,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            seed: 42,
        }
    }
}

impl AmbientConfig {
    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = AmbientConfig::default();
        assert_eq!(cfg.particle_count, 100);
        assert_eq!(cfg.seed, 42);
    }

    #[test]
    fn builder_methods() {
        let cfg = AmbientConfig::default().with_particle_count(5).with_seed(9);
        assert_eq!(cfg.particle_count, 5);
        assert_eq!(cfg.seed, 9);
    }
}
