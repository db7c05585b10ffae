//! Error types for the eight_puzzle crate

use crate::engine::Action;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PuzzleError {
    #[error("expected 9 tiles, found {found}")]
    InvalidTileCount { found: usize },

    #[error("expected 3 rows, found {found}")]
    InvalidRowCount { found: usize },

    #[error("row {row} has {found} cells (expected 3)")]
    InvalidRowLength { row: usize, found: usize },

    #[error("tile {tile} is out of range (must be 0-8)")]
    TileOutOfRange { tile: u8 },

    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u8 },

    #[error("unrecognized character '{character}' at position {position}")]
    UnrecognizedCharacter { character: char, position: usize },

    #[error("illegal move: cannot move gap {action} from index {gap}")]
    IllegalMove { action: Action, gap: usize },

    #[error("epsilon {value} must be non-negative and finite")]
    InvalidEpsilon { value: f64 },
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
