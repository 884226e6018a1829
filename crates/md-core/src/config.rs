//! Configuration for a ritual session.

/// Default number of yes/no questions per ritual.
pub const DEFAULT_MAX_BITS: u32 = 5;

/// Default number of cards in the working pool.
pub const DEFAULT_POOL_SIZE: usize = 20;

/// Largest supported question count.
const MAX_SUPPORTED_BITS: u32 = 8;

/// Configuration for a ritual session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RitualConfig {
    max_bits: u32,
    pool_size: usize,
}

impl Default for RitualConfig {
    fn default() -> Self {
        Self {
            max_bits: DEFAULT_MAX_BITS,
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

impl RitualConfig {
    /// Number of questions asked, one per identifier bit (1-8).
    pub fn max_bits(&self) -> u32 {
        self.max_bits
    }

    /// Number of items taken from the acquired pool.
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Set the number of questions (clamped to 1-8).
    pub fn with_max_bits(mut self, bits: u32) -> Self {
        self.max_bits = bits.clamp(1, MAX_SUPPORTED_BITS);
        self
    }

    /// Set the working pool size.
    pub fn with_pool_size(mut self, size: usize) -> Self {
        self.pool_size = size;
        self
    }

    /// Number of distinct identifiers the questions can spell (`2^max_bits - 1`).
    pub fn identifier_capacity(&self) -> usize {
        (1usize << self.max_bits) - 1
    }

    /// Pool size actually used: identifiers never exceed the capacity.
    pub fn effective_pool_size(&self) -> usize {
        self.pool_size.min(self.identifier_capacity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = RitualConfig::default();
        assert_eq!(cfg.max_bits(), 5);
        assert_eq!(cfg.pool_size(), 20);
        assert_eq!(cfg.identifier_capacity(), 31);
        assert_eq!(cfg.effective_pool_size(), 20);
    }

    #[test]
    fn max_bits_clamped() {
        assert_eq!(RitualConfig::default().with_max_bits(0).max_bits(), 1);
        assert_eq!(RitualConfig::default().with_max_bits(40).max_bits(), 8);
    }

    #[test]
    fn pool_capped_by_capacity() {
        let cfg = RitualConfig::default().with_max_bits(3).with_pool_size(20);
        assert_eq!(cfg.identifier_capacity(), 7);
        assert_eq!(cfg.effective_pool_size(), 7);
    }
}
