//! Input helpers for keyboard and mouse events.

use macroquad::prelude::*;

/// Maximum gap between the two clicks of a double-click, in seconds.
pub const DOUBLE_CLICK_SECS: f64 = 0.35;

/// Whether the left mouse button went down this frame.
pub fn clicked() -> bool {
    is_mouse_button_pressed(MouseButton::Left)
}

/// Whether any of `keys` was pressed this frame.
pub fn any_pressed(keys: &[KeyCode]) -> bool {
    keys.iter().any(|&key| is_key_pressed(key))
}

/// Recognises two clicks on the same target in quick succession.
#[derive(Debug, Default)]
pub struct DoubleClick {
    last: Option<(usize, f64)>,
}

impl DoubleClick {
    /// Record a click on `target` at `now` seconds. Returns true when it
    /// completes a double-click.
    pub fn register(&mut self, target: usize, now: f64) -> bool {
        match self.last {
            Some((prev, at)) if prev == target && now - at <= DOUBLE_CLICK_SECS => {
                self.last = None;
                true
            }
            _ => {
                self.last = Some((target, now));
                false
            }
        }
    }

    /// Forget a pending first click.
    pub fn cancel(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_second_click_on_same_card() {
        let mut dc = DoubleClick::default();
        assert!(!dc.register(3, 1.0));
        assert!(dc.register(3, 1.2));
        // A third click starts over.
        assert!(!dc.register(3, 1.3));
    }

    #[test]
    fn slow_or_different_clicks() {
        let mut dc = DoubleClick::default();
        assert!(!dc.register(3, 1.0));
        assert!(!dc.register(3, 2.0));
        assert!(!dc.register(4, 2.1));
        dc.cancel();
        assert!(!dc.register(4, 2.2));
    }
}
