use std::collections::BTreeSet;

use crate::config::BoardConfig;
use crate::error::TopologyError;

use super::key::SlotKey;

/// Tests whether a cell belongs to the playable topology of a `size`×`size`
/// board.
///
/// The single center cell is excluded. Every other cell is valid iff it lies
/// on the main diagonal, the anti-diagonal, the horizontal mid-line, or the
/// vertical mid-line, which produces the nested-square-plus-cross pattern:
/// 4 corners and 4 mid-edge points per ring.
pub fn is_valid_slot(row: usize, col: usize, size: usize) -> Result<bool, TopologyError> {
    if row >= size || col >= size {
        return Err(TopologyError::OutOfRange { row, col, size });
    }
    let mid = (size - 1) / 2;
    if row == mid && col == mid {
        return Ok(false);
    }
    Ok(row == col || row + col == size - 1 || row == mid || col == mid)
}

/// The playing surface of a concentric-square morris board.
///
/// Immutable once constructed: the valid-slot set is derived entirely from
/// the ring count, and a board is discarded and rebuilt when the ring count
/// changes. Holds both an ordered set of valid keys (row-major scan order)
/// and a flat boolean grid; the two views always agree with
/// [`is_valid_slot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    ring_count: usize,
    size: usize,
    slots: BTreeSet<SlotKey>,
    grid: Vec<bool>,
}

impl Board {
    /// Build the board for `ring_count` nested rings.
    ///
    /// The grid dimension is `2 * ring_count + 1`, always odd, so the center
    /// cell is unique. Construction scans the grid once in row-major order;
    /// O(size²) time and space, fully deterministic.
    pub fn new(ring_count: usize) -> Result<Self, TopologyError> {
        if ring_count < 1 {
            return Err(TopologyError::InvalidConfiguration(ring_count));
        }
        let size = 2 * ring_count + 1;
        let mut slots = BTreeSet::new();
        let mut grid = vec![false; size * size];
        for row in 0..size {
            for col in 0..size {
                if is_valid_slot(row, col, size)? {
                    slots.insert(SlotKey::new(row, col));
                    grid[row * size + col] = true;
                }
            }
        }
        tracing::debug!(
            "constructed board: {} rings, {}x{} grid, {} slots",
            ring_count,
            size,
            size,
            slots.len()
        );
        Ok(Board {
            ring_count,
            size,
            slots,
            grid,
        })
    }

    /// Build the board described by a [`BoardConfig`].
    pub fn from_config(config: &BoardConfig) -> Result<Self, TopologyError> {
        Self::new(config.ring_count)
    }

    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    /// Grid dimension, `2 * ring_count + 1`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row (and column) index of the center cell.
    pub fn mid(&self) -> usize {
        (self.size - 1) / 2
    }

    /// O(1) membership test against the valid-slot set.
    pub fn contains(&self, key: SlotKey) -> bool {
        key.row < self.size && key.col < self.size && self.grid[key.row * self.size + key.col]
    }

    /// All valid slots in row-major scan order.
    pub fn slots(&self) -> impl Iterator<Item = SlotKey> + '_ {
        self.slots.iter().copied()
    }

    /// Number of valid slots; always `8 * ring_count`.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
