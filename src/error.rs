use std::path::PathBuf;

use crate::board::SlotKey;
use crate::traversal::Direction;

/// Errors that can occur while constructing a board or testing cell validity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("ring count must be at least 1, got {0}")]
    InvalidConfiguration(usize),

    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        size: usize,
    },
}

/// Errors from parsing the canonical `"row,col"` slot key form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("malformed slot key '{0}' (expected 'row,col')")]
    InvalidKey(String),
}

/// Errors from mill-line neighbor lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdjacencyError {
    #[error("slot {0} is not a valid board position")]
    InvalidSlot(SlotKey),
}

/// Errors from the traversal planner's cursor operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraversalError {
    #[error("no traversal in progress")]
    NoActiveTraversal,

    #[error("cannot start a traversal at {0}: not a valid board position")]
    InvalidSlot(SlotKey),

    #[error("stepping {direction} by {distance} from {from} leaves the board")]
    UnknownSlot {
        from: SlotKey,
        direction: Direction,
        distance: usize,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
