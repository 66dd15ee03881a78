//! Pointer input.
//!
//! One writer (the pointer-move handler), one reader (the frame step).
//! Both run on the host's event loop, so last write wins.

use neonfolio_shared::Vec2;

/// Last known pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    position: Option<Vec2>,
}

impl PointerState {
    /// Creates a state with no pointer seen yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer move.
    pub fn set(&mut self, position: Vec2) {
        self.position = Some(position);
    }

    /// Current position, if the pointer has been seen.
    #[must_use]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut pointer = PointerState::new();
        assert_eq!(pointer.position(), None);

        pointer.set(Vec2::new(10.0, 10.0));
        pointer.set(Vec2::new(15.0, 12.0));

        assert_eq!(pointer.position(), Some(Vec2::new(15.0, 12.0)));
    }
}
