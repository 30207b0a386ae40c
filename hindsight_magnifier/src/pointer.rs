// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer state: the last viewport position the magnifier accepted.

use kurbo::Point;

/// Tracks the last valid pointer position over the primary view.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct PointerState {
    /// Last accepted position in viewport pixels.
    pub last_pos: Option<Point>,
}

impl PointerState {
    /// Records `pos` as the last accepted position.
    pub fn update(&mut self, pos: Point) {
        self.last_pos = Some(pos);
    }

    /// Forgets the position.
    pub fn clear(&mut self) {
        self.last_pos = None;
    }

    /// Returns `true` while a position is recorded.
    pub fn is_tracking(&self) -> bool {
        self.last_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_replaces_position() {
        let mut pointer = PointerState::default();
        assert!(!pointer.is_tracking());
        pointer.update(Point::new(10.0, 20.0));
        pointer.update(Point::new(5.0, 3.0));
        assert!(pointer.is_tracking());
        assert_eq!(pointer.last_pos, Some(Point::new(5.0, 3.0)));
    }

    #[test]
    fn clear_forgets_position() {
        let mut pointer = PointerState::default();
        pointer.update(Point::new(1.0, 1.0));
        pointer.clear();
        assert!(!pointer.is_tracking());
        assert_eq!(pointer.last_pos, None);
    }
}
