use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;

/// A board position in offset coordinates: 0-indexed row and column into the
/// backing grid. The canonical string form `"row,col"` is the sole identity
/// of a slot throughout the crate; there is no separate numeric ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    pub row: usize,
    pub col: usize,
}

impl SlotKey {
    pub fn new(row: usize, col: usize) -> Self {
        SlotKey { row, col }
    }

    /// Translate into the centered frame, where the board's center cell is
    /// the origin. Row 0 is the bottom row, so +y points visually up and
    /// +x visually right.
    pub fn to_centered(self, size: usize) -> Centered {
        let mid = (size as i64 - 1) / 2;
        Centered {
            x: self.col as i64 - mid,
            y: self.row as i64 - mid,
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for SlotKey {
    type Err = KeyError;

    /// Parses the canonical `"row,col"` form. Round-trip exact with
    /// [`Display`](fmt::Display): `parse(format(k)) == k`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| KeyError::InvalidKey(s.to_string()))?;
        let row = row.parse().map_err(|_| KeyError::InvalidKey(s.to_string()))?;
        let col = col.parse().map_err(|_| KeyError::InvalidKey(s.to_string()))?;
        Ok(SlotKey { row, col })
    }
}

/// A slot position translated so the board's center cell is the origin.
/// Purely a computed projection of a [`SlotKey`]; never stored on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Centered {
    pub x: i64,
    pub y: i64,
}

impl Centered {
    pub fn new(x: i64, y: i64) -> Self {
        Centered { x, y }
    }

    /// Inverse of [`SlotKey::to_centered`]. Returns `None` when the point
    /// falls outside the `size`×`size` grid.
    pub fn to_offset(self, size: usize) -> Option<SlotKey> {
        let mid = (size as i64 - 1) / 2;
        let row = self.y + mid;
        let col = self.x + mid;
        if row < 0 || col < 0 || row >= size as i64 || col >= size as i64 {
            return None;
        }
        Some(SlotKey::new(row as usize, col as usize))
    }

    /// Chebyshev distance from the center: the index of the ring this point
    /// sits on.
    pub fn ring(self) -> i64 {
        self.x.abs().max(self.y.abs())
    }

    pub fn translate(self, dx: i64, dy: i64) -> Centered {
        Centered {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_key() {
        assert_eq!(SlotKey::new(0, 1).to_string(), "0,1");
        assert_eq!(SlotKey::new(12, 4).to_string(), "12,4");
    }

    #[test]
    fn test_parse_key() {
        let key: SlotKey = "3,1".parse().unwrap();
        assert_eq!(key, SlotKey::new(3, 1));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let bad = ["", "3", "a,b", "1,2,3", "1,", ",2", "1, 2", "-1,0"];
        for s in bad {
            assert!(
                s.parse::<SlotKey>().is_err(),
                "'{s}' should fail to parse"
            );
        }
    }

    #[test]
    fn test_parse_format_roundtrip() {
        for row in 0..13 {
            for col in 0..13 {
                let key = SlotKey::new(row, col);
                let parsed: SlotKey = key.to_string().parse().unwrap();
                assert_eq!(key, parsed);
            }
        }
    }

    #[test]
    fn test_to_centered() {
        // size 5: mid cell is (2, 2)
        assert_eq!(SlotKey::new(2, 2).to_centered(5), Centered::new(0, 0));
        assert_eq!(SlotKey::new(0, 2).to_centered(5), Centered::new(0, -2));
        assert_eq!(SlotKey::new(4, 4).to_centered(5), Centered::new(2, 2));
        assert_eq!(SlotKey::new(1, 3).to_centered(5), Centered::new(1, -1));
    }

    #[test]
    fn test_centered_roundtrip_all_ring_counts() {
        for ring_count in 1..=6usize {
            let size = 2 * ring_count + 1;
            for row in 0..size {
                for col in 0..size {
                    let key = SlotKey::new(row, col);
                    assert_eq!(key.to_centered(size).to_offset(size), Some(key));
                }
            }
        }
    }

    #[test]
    fn test_to_offset_rejects_out_of_grid() {
        assert_eq!(Centered::new(3, 0).to_offset(5), None);
        assert_eq!(Centered::new(0, -3).to_offset(5), None);
        assert_eq!(Centered::new(-3, -3).to_offset(5), None);
        assert_eq!(Centered::new(2, 2).to_offset(5), Some(SlotKey::new(4, 4)));
    }

    #[test]
    fn test_ring_index() {
        assert_eq!(Centered::new(0, 0).ring(), 0);
        assert_eq!(Centered::new(0, -1).ring(), 1);
        assert_eq!(Centered::new(-2, 2).ring(), 2);
        assert_eq!(Centered::new(1, -3).ring(), 3);
    }

    #[test]
    fn test_key_order_is_row_major() {
        let a = SlotKey::new(0, 4);
        let b = SlotKey::new(1, 0);
        assert!(a < b);
    }
}
