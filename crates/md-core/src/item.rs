//! Item identifiers and the items they tag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bit-pattern identifier assigned to an item when the pool is acquired.
///
/// Identifiers are 1-based and dense: the n-th acquired item gets `n`. Bit `i`
/// of the identifier answers question `i`. Zero is never assigned, so an
/// all-"no" answer sequence never matches an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemIdentifier(u32);

impl ItemIdentifier {
    /// Wrap a raw value. Returns `None` for zero.
    pub fn new(value: u32) -> Option<Self> {
        (value != 0).then_some(Self(value))
    }

    /// Identifier for the item at a 0-based acquisition index.
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// The raw integer value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether question `bit` is answered "yes" for this identifier.
    pub fn has_bit(self, bit: u32) -> bool {
        bit < u32::BITS && self.0 & (1 << bit) != 0
    }

    /// Number of set bits, i.e. how many question groups contain this item.
    pub fn set_bits(self) -> u32 {
        self.0.count_ones()
    }

    /// Binary rendering padded to `width` digits, most significant bit first.
    pub fn pattern(self, width: u32) -> String {
        format!("{:0width$b}", self.0, width = width as usize)
    }
}

impl fmt::Display for ItemIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One selectable outcome: an identifier plus an opaque display payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<P> {
    /// Identifier assigned at acquisition time.
    pub identifier: ItemIdentifier,
    /// Presentation data the engine never inspects.
    pub payload: P,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_an_identifier() {
        assert!(ItemIdentifier::new(0).is_none());
        assert_eq!(ItemIdentifier::new(7).map(ItemIdentifier::value), Some(7));
    }

    #[test]
    fn from_index_is_one_based() {
        assert_eq!(ItemIdentifier::from_index(0).value(), 1);
        assert_eq!(ItemIdentifier::from_index(19).value(), 20);
    }

    #[test]
    fn bits() {
        let id = ItemIdentifier::from_index(4); // 5 = 0b101
        assert!(id.has_bit(0));
        assert!(!id.has_bit(1));
        assert!(id.has_bit(2));
        assert!(!id.has_bit(40));
        assert_eq!(id.set_bits(), 2);
        assert_eq!(id.pattern(5), "00101");
    }

    #[test]
    fn display() {
        assert_eq!(ItemIdentifier::from_index(11).to_string(), "#12");
    }
}
