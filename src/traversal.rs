//! Edge-traversal planning: the ordered sequence of pen moves that draws
//! every ring perimeter and the connecting cross arms as one continuous
//! path. Consumers replay the plan as a polyline; tests use it to assert
//! edge coverage.

use std::fmt;

use crate::board::{Board, SlotKey};
use crate::error::TraversalError;

/// A pen-movement direction along the offset coordinate axes. Up and Down
/// move the row index, Left and Right the column index; row 0 is the bottom
/// row, so Up is visually up and Right visually right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (column delta, row delta) of a single-cell step.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Quarter turn counter-clockwise; rotates the cross-connector shape
    /// from one arm to the next.
    pub fn rotated(self) -> Direction {
        match self {
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{name}")
    }
}

/// One pen movement: a direction and a cell count. Produced lazily by the
/// planner and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub direction: Direction,
    pub distance: usize,
}

impl Move {
    pub fn new(direction: Direction, distance: usize) -> Self {
        Move { direction, distance }
    }
}

/// The eight perimeter moves of one ring, each scaled by the ring distance.
/// Starting from the ring's bottom-middle slot this traces the full square
/// and returns to the start.
const RING_PERIMETER: [Direction; 8] = [
    Direction::Right,
    Direction::Up,
    Direction::Up,
    Direction::Left,
    Direction::Left,
    Direction::Down,
    Direction::Down,
    Direction::Right,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pen {
    Idle,
    Drawing(SlotKey),
}

/// Plans the continuous pen path over a board's edges.
///
/// A planner is either Idle (no cursor) or Drawing (the cursor is fixed at a
/// slot key and accepts steps). The cursor is tracked as a slot key, never a
/// geometric position; consumers derive positions through
/// [`Board::layout`](crate::board::Board::layout) when they need them.
///
/// Not reentrant: interleaving `start`/`step`/`finish` from multiple logical
/// threads requires external serialization.
pub struct TraversalPlanner<'a> {
    board: &'a Board,
    pen: Pen,
}

impl<'a> TraversalPlanner<'a> {
    pub fn new(board: &'a Board) -> Self {
        TraversalPlanner {
            board,
            pen: Pen::Idle,
        }
    }

    /// Current cursor key, or `None` while idle.
    pub fn position(&self) -> Option<SlotKey> {
        match self.pen {
            Pen::Drawing(key) => Some(key),
            Pen::Idle => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.pen, Pen::Drawing(_))
    }

    /// Fix the cursor at `at` and enter the Drawing state.
    pub fn start(&mut self, at: SlotKey) -> Result<(), TraversalError> {
        if !self.board.contains(at) {
            return Err(TraversalError::InvalidSlot(at));
        }
        self.pen = Pen::Drawing(at);
        Ok(())
    }

    /// Leave the Drawing state.
    pub fn finish(&mut self) {
        self.pen = Pen::Idle;
    }

    /// Move the cursor `distance` cells in `direction`, returning the slot
    /// it lands on.
    ///
    /// Fails with `NoActiveTraversal` while idle and with `UnknownSlot` when
    /// the destination is not a valid slot; in the latter case the cursor
    /// does not move and the planner stays Drawing, so the caller decides
    /// whether to abort or `finish`.
    pub fn step(&mut self, direction: Direction, distance: usize) -> Result<SlotKey, TraversalError> {
        let from = match self.pen {
            Pen::Idle => return Err(TraversalError::NoActiveTraversal),
            Pen::Drawing(key) => key,
        };
        let (dx, dy) = direction.offset();
        let row = from.row as i64 + dy * distance as i64;
        let col = from.col as i64 + dx * distance as i64;
        let size = self.board.size() as i64;
        if row < 0 || col < 0 || row >= size || col >= size {
            tracing::warn!("step {direction} by {distance} from {from} leaves the grid");
            return Err(TraversalError::UnknownSlot {
                from,
                direction,
                distance,
            });
        }
        let dest = SlotKey::new(row as usize, col as usize);
        if !self.board.contains(dest) {
            tracing::warn!("step {direction} by {distance} from {from} lands on invalid cell {dest}");
            return Err(TraversalError::UnknownSlot {
                from,
                direction,
                distance,
            });
        }
        self.pen = Pen::Drawing(dest);
        Ok(dest)
    }

    /// Emit one full ring perimeter of radius `ring_distance`, starting and
    /// ending at the ring's bottom-middle slot.
    pub fn draw_ring(
        &mut self,
        ring_distance: usize,
        out: &mut Vec<Move>,
    ) -> Result<(), TraversalError> {
        for direction in RING_PERIMETER {
            self.apply(Move::new(direction, ring_distance), out)?;
        }
        Ok(())
    }

    /// Generate the whole-board pen path.
    ///
    /// Starts at the outer ring's bottom-middle slot and draws each ring
    /// from outermost to innermost, stepping Up one cell between rings so
    /// the bridges cover the bottom cross arm. Boards with more than one
    /// ring then get the twelve-move cross connector for the remaining
    /// three arms. Plan length is `8n + (n - 1)` plus 12 when `n > 1`.
    ///
    /// Leaves the planner Idle on success and Drawing on failure.
    pub fn plan(&mut self) -> Result<Vec<Move>, TraversalError> {
        let n = self.board.ring_count();
        let mut moves = Vec::with_capacity(9 * n + 11);
        self.start(SlotKey::new(0, self.board.mid()))?;
        for i in 0..n {
            self.draw_ring(n - i, &mut moves)?;
            if i + 1 < n {
                self.apply(Move::new(Direction::Up, 1), &mut moves)?;
            }
        }
        if n > 1 {
            self.draw_cross_connector(&mut moves)?;
        }
        self.finish();
        Ok(moves)
    }

    /// Walk the right, top, and left cross arms out and back, rotating the
    /// same four-move shape a quarter turn per arm: one step along the inner
    /// ring to its corner, one step onto the next arm, out to the rim, and
    /// back. Always twelve moves; only emitted when the board has somewhere
    /// for the arms to go (`ring_count > 1`).
    fn draw_cross_connector(&mut self, out: &mut Vec<Move>) -> Result<(), TraversalError> {
        let reach = self.board.ring_count() - 1;
        let mut toward = Direction::Right;
        for _ in 0..3 {
            let turn = toward.rotated();
            self.apply(Move::new(toward, 1), out)?;
            self.apply(Move::new(turn, 1), out)?;
            self.apply(Move::new(toward, reach), out)?;
            self.apply(Move::new(toward.opposite(), reach), out)?;
            toward = turn;
        }
        Ok(())
    }

    /// Step and record the move only if the step lands on a valid slot.
    fn apply(&mut self, mv: Move, out: &mut Vec<Move>) -> Result<(), TraversalError> {
        self.step(mv.direction, mv.distance)?;
        out.push(mv);
        Ok(())
    }
}

/// One-shot convenience over [`TraversalPlanner`] for consumers that only
/// want the move sequence.
pub fn plan_traversal(board: &Board) -> Result<Vec<Move>, TraversalError> {
    TraversalPlanner::new(board).plan()
}
