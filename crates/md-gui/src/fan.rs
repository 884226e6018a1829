//! Fanned card layout and hit testing.
//!
//! Cards are spread 20 px apart around a center point and tilted evenly from
//! -10° on the left to +10° on the right. Later cards are drawn on top.

/// Horizontal distance between neighbouring cards.
pub const CARD_SPACING: f32 = 20.0;
/// Tilt of the outermost cards, in degrees.
pub const MAX_TILT_DEG: f32 = 10.0;
/// Card width in pixels.
pub const CARD_W: f32 = 64.0;
/// Card height in pixels.
pub const CARD_H: f32 = 92.0;

/// Where and how one card sits in the fan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Center x.
    pub x: f32,
    /// Center y.
    pub y: f32,
    /// Clockwise tilt in degrees.
    pub tilt_deg: f32,
}

impl Placement {
    /// Tilt in radians.
    pub fn tilt_rad(&self) -> f32 {
        self.tilt_deg.to_radians()
    }

    /// Whether the point lies on this card.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        let (lx, ly) = rotate(px - self.x, py - self.y, -self.tilt_rad());
        lx.abs() <= CARD_W / 2.0 && ly.abs() <= CARD_H / 2.0
    }
}

/// Lay out `count` cards centered on `(center_x, center_y)`.
pub fn fan(count: usize, center_x: f32, center_y: f32) -> Vec<Placement> {
    let mid = (count as f32 - 1.0) / 2.0;
    (0..count)
        .map(|i| {
            let offset = i as f32 - mid;
            let tilt_deg = if count > 1 {
                offset / mid * MAX_TILT_DEG
            } else {
                0.0
            };
            Placement {
                x: center_x + offset * CARD_SPACING,
                y: center_y,
                tilt_deg,
            }
        })
        .collect()
}

/// Index of the topmost card under the point.
pub fn card_at(placements: &[Placement], px: f32, py: f32) -> Option<usize> {
    placements.iter().rposition(|p| p.contains(px, py))
}

/// Rotate a vector by `angle` radians.
pub fn rotate(x: f32, y: f32, angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_card_is_centered_and_upright() {
        let layout = fan(1, 400.0, 300.0);
        assert_eq!(
            layout,
            vec![Placement {
                x: 400.0,
                y: 300.0,
                tilt_deg: 0.0
            }]
        );
    }

    #[test]
    fn empty_fan() {
        assert!(fan(0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn spacing_and_tilt_are_symmetric() {
        let layout = fan(20, 400.0, 300.0);
        assert_eq!(layout.len(), 20);
        assert!((layout[0].x - (400.0 - 9.5 * 20.0)).abs() < 1e-4);
        assert!((layout[19].x - (400.0 + 9.5 * 20.0)).abs() < 1e-4);
        assert!((layout[0].tilt_deg + 10.0).abs() < 1e-4);
        assert!((layout[19].tilt_deg - 10.0).abs() < 1e-4);
        for pair in layout.windows(2) {
            assert!((pair[1].x - pair[0].x - CARD_SPACING).abs() < 1e-4);
            assert!(pair[1].tilt_deg > pair[0].tilt_deg);
        }
    }

    #[test]
    fn topmost_card_wins() {
        let layout = fan(3, 100.0, 100.0);
        // Center of the middle card is also covered by the right card.
        assert_eq!(card_at(&layout, 100.0, 100.0), Some(2));
        // Far left edge belongs to the first card only.
        assert_eq!(card_at(&layout, 100.0 - 20.0 - 30.0, 100.0), Some(0));
        assert_eq!(card_at(&layout, 500.0, 100.0), None);
    }

    #[test]
    fn hit_test_respects_tilt() {
        let upright = Placement {
            x: 0.0,
            y: 0.0,
            tilt_deg: 0.0,
        };
        let tilted = Placement {
            tilt_deg: 90.0,
            ..upright
        };
        assert!(upright.contains(0.0, 45.0));
        assert!(!tilted.contains(0.0, 45.0));
        assert!(tilted.contains(45.0, 0.0));
    }
}
