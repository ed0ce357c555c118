//! Mill-line neighbor computation.
//!
//! For a valid slot this resolves the up-to-four other slots directly
//! reachable along a mill line (the same ring perimeter or the same cross
//! arm). Game logic tests three-in-a-row formation by pairing the output:
//! the first two entries are the vertical line through the slot, the last
//! two the horizontal line.

use crate::board::{Board, Centered, SlotKey};
use crate::error::AdjacencyError;
use crate::traversal::Direction;

/// Direction order of the [`neighbors`] output. Fixed and stable: the
/// vertical pair first, then the horizontal pair, so mill detection can
/// check the two lines of two without re-deriving geometry.
pub const NEIGHBOR_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Geometric class of a valid slot, computed once from its centered
/// coordinates. The center cell is excluded from the topology, so a slot
/// never has both coordinates zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotClass {
    /// On a cross arm: exactly one centered coordinate is zero.
    Arm,
    /// A ring corner: both centered coordinates are nonzero, with
    /// `|x| == |y|` equal to the ring index.
    Corner,
}

impl SlotClass {
    pub fn of(centered: Centered) -> SlotClass {
        if centered.x == 0 || centered.y == 0 {
            SlotClass::Arm
        } else {
            SlotClass::Corner
        }
    }
}

/// Resolve the mill-line neighbors of `key`, ordered by
/// [`NEIGHBOR_DIRECTIONS`].
///
/// Step magnitudes depend on the slot class. An arm slot's inward/outward
/// neighbor (the previous/next ring on the same arm) is always one cell
/// away, while its two same-ring neighbors sit a full ring index away
/// around the perimeter. A corner steps a ring index in every direction,
/// reaching the two mid-edge slots of its own ring. Directions whose
/// candidate lands outside the grid or on an invalid cell produce `None`:
/// the outermost ring has no outward neighbor and the innermost ring no
/// inward one.
///
/// Pure and deterministic; fails with `InvalidSlot` when `key` is not a
/// member of the board's valid-slot set.
pub fn neighbors(board: &Board, key: SlotKey) -> Result<[Option<SlotKey>; 4], AdjacencyError> {
    if !board.contains(key) {
        return Err(AdjacencyError::InvalidSlot(key));
    }
    let size = board.size();
    let centered = key.to_centered(size);
    let ring = centered.ring();
    let class = SlotClass::of(centered);

    let mut out = [None; 4];
    for (slot, direction) in out.iter_mut().zip(NEIGHBOR_DIRECTIONS) {
        let step = match class {
            SlotClass::Corner => ring,
            SlotClass::Arm => {
                let along_arm = if centered.x == 0 {
                    direction.is_vertical()
                } else {
                    direction.is_horizontal()
                };
                if along_arm {
                    1
                } else {
                    ring
                }
            }
        };
        let (dx, dy) = direction.offset();
        *slot = centered
            .translate(dx * step, dy * step)
            .to_offset(size)
            .filter(|candidate| board.contains(*candidate));
    }
    Ok(out)
}
