//! # Morris Board
//!
//! Board-topology engine for a concentric-square morris board (a generalized
//! Nine-Men's-Morris with a configurable number of nested rings). Given a
//! ring count, the crate derives the complete set of valid slot positions,
//! the coordinate transforms between representations, the mill-line
//! adjacency used for three-in-a-row detection, and a continuous pen path
//! that covers every topological edge of the board.
//!
//! Rendering, hit-testing, and game flow are left to consumers: they read
//! slot keys, layout positions, adjacency lists, and traversal plans from
//! this crate and own everything on-screen.
//!
//! ## Modules
//!
//! - [`board`] — Slot keys, coordinate transforms, topology construction, layout
//! - [`adjacency`] — Mill-line neighbor computation
//! - [`traversal`] — Edge-traversal planning with an Idle/Drawing pen state
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod adjacency;
pub mod board;
pub mod config;
pub mod error;
pub mod traversal;

pub use adjacency::{neighbors, SlotClass, NEIGHBOR_DIRECTIONS};
pub use board::{Board, Centered, Position, SlotKey};
pub use config::{BoardConfig, LayoutConfig};
pub use traversal::{plan_traversal, Direction, Move, TraversalPlanner};
