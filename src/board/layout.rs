use std::collections::BTreeMap;

use super::key::SlotKey;
use super::topology::Board;

/// Smallest bounding edge the layout accepts; smaller requests are clamped.
pub const MIN_BOUND: f32 = 16.0;

/// Largest bounding edge the layout accepts; larger requests are clamped.
pub const MAX_BOUND: f32 = 16_384.0;

/// A slot's layout position, in the same frame as
/// [`Centered`](super::Centered): origin at the board center, +x right,
/// +y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Board {
    /// Project every valid slot into a bounding rectangle.
    ///
    /// Spacing between neighboring grid lines is
    /// `min(width, height) / (size + 1)`, leaving a half-step margin on each
    /// side; each slot sits offset from the center by its centered
    /// coordinate times the spacing. A pure geometric projection with no
    /// effect on the topology.
    pub fn layout(&self, bound_width: f32, bound_height: f32) -> BTreeMap<SlotKey, Position> {
        let width = bound_width.clamp(MIN_BOUND, MAX_BOUND);
        let height = bound_height.clamp(MIN_BOUND, MAX_BOUND);
        let spacing = width.min(height) / (self.size() as f32 + 1.0);
        self.slots()
            .map(|key| {
                let centered = key.to_centered(self.size());
                (
                    key,
                    Position {
                        x: centered.x as f32 * spacing,
                        y: centered.y as f32 * spacing,
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_every_slot() {
        let board = Board::new(3).unwrap();
        let layout = board.layout(480.0, 480.0);
        assert_eq!(layout.len(), board.slot_count());
        for key in board.slots() {
            assert!(layout.contains_key(&key));
        }
    }

    #[test]
    fn test_layout_positions_for_single_ring() {
        // size 3, bounds 400x400: spacing = 400 / 4 = 100
        let board = Board::new(1).unwrap();
        let layout = board.layout(400.0, 400.0);

        let corner = layout[&SlotKey::new(0, 0)];
        assert_eq!((corner.x, corner.y), (-100.0, -100.0));

        let bottom_middle = layout[&SlotKey::new(0, 1)];
        assert_eq!((bottom_middle.x, bottom_middle.y), (0.0, -100.0));

        let top_right = layout[&SlotKey::new(2, 2)];
        assert_eq!((top_right.x, top_right.y), (100.0, 100.0));
    }

    #[test]
    fn test_layout_uses_smaller_bound() {
        let board = Board::new(1).unwrap();
        let wide = board.layout(800.0, 400.0);
        let square = board.layout(400.0, 400.0);
        assert_eq!(wide[&SlotKey::new(0, 0)], square[&SlotKey::new(0, 0)]);
    }

    #[test]
    fn test_layout_clamps_bounds() {
        let board = Board::new(1).unwrap();
        let tiny = board.layout(0.0, -5.0);
        let floor = board.layout(MIN_BOUND, MIN_BOUND);
        assert_eq!(tiny[&SlotKey::new(2, 2)], floor[&SlotKey::new(2, 2)]);

        let huge = board.layout(1e9, 1e9);
        let ceil = board.layout(MAX_BOUND, MAX_BOUND);
        assert_eq!(huge[&SlotKey::new(2, 2)], ceil[&SlotKey::new(2, 2)]);
    }

    #[test]
    fn test_layout_is_symmetric_about_center() {
        let board = Board::new(2).unwrap();
        let layout = board.layout(500.0, 500.0);
        let size = board.size();
        for key in board.slots() {
            let mirrored = SlotKey::new(size - 1 - key.row, size - 1 - key.col);
            let a = layout[&key];
            let b = layout[&mirrored];
            assert!((a.x + b.x).abs() < 1e-6);
            assert!((a.y + b.y).abs() < 1e-6);
        }
    }
}
