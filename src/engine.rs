//! Core state space for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Board`: an immutable 3x3 grid of tile labels `0..=8`, `0` being the gap.
//! - `Action`: the four directions the gap can move in.
//! - `Transition`: the outcome of applying an action, distinguishing applied
//!   moves from rejected ones.
//! - `generate_actions`, `apply_action` and `step_cost`: the move generator,
//!   transition function and edge-weight function a search algorithm consumes.
use crate::error::PuzzleError;
use log::trace;
use std::fmt;
use std::str::FromStr;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Tile label used for the gap.
pub const GAP: u8 = 0;

/// The reference goal configuration.
///
/// The gap sits in the center cell, tiles run clockwise from the top-left corner:
///
/// ```text
/// 1 2 3
/// 8 . 4
/// 7 6 5
/// ```
pub const GOAL_STATE: Board = Board {
    tiles: [1, 2, 3, 8, 0, 4, 7, 6, 5],
};

/// A (row, column) position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    fn from_index(index: usize) -> Self {
        Location {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    /// Sum of the absolute row and column differences to `other`.
    pub fn manhattan_to(&self, other: &Location) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }
}

/// A move of the gap by one cell.
///
/// `Up` means the gap moves up, i.e. the tile above it slides down into the gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// All actions in the order `generate_actions` evaluates them.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// The action that undoes this one.
    ///
    /// ```
    /// use eight_puzzle::engine::Action;
    /// assert_eq!(Action::Up.inverse(), Action::Down);
    /// assert_eq!(Action::Left.inverse(), Action::Right);
    /// ```
    pub fn inverse(self) -> Action {
        match self {
            Action::Up => Action::Down,
            Action::Down => Action::Up,
            Action::Left => Action::Right,
            Action::Right => Action::Left,
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Up => "Up",
            Action::Down => "Down",
            Action::Left => "Left",
            Action::Right => "Right",
        };
        f.write_str(name)
    }
}

/// Represents a puzzle configuration as a row-major array of tile labels.
///
/// A well-formed board holds each label `0..=8` exactly once. `Board` is `Copy` and
/// exposes no mutating methods: every transformation yields a new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; CELL_COUNT],
}

impl Board {
    /// Creates a board from row-major tile labels, checking that they form a
    /// permutation of `0..=8`.
    ///
    /// # Errors
    /// * `PuzzleError::TileOutOfRange` if any label is greater than 8.
    /// * `PuzzleError::DuplicateTile` if a label appears more than once.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::{Board, GOAL_STATE};
    /// let board = Board::new([1, 2, 3, 8, 0, 4, 7, 6, 5]).unwrap();
    /// assert_eq!(board, GOAL_STATE);
    /// assert!(Board::new([1, 1, 3, 8, 0, 4, 7, 6, 5]).is_err());
    /// ```
    pub fn new(tiles: [u8; CELL_COUNT]) -> Result<Self, PuzzleError> {
        let mut seen = [false; CELL_COUNT];
        for &tile in &tiles {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(PuzzleError::TileOutOfRange { tile })?;
            if *slot {
                return Err(PuzzleError::DuplicateTile { tile });
            }
            *slot = true;
        }
        Ok(Board { tiles })
    }

    /// Creates a board without validating the labels.
    ///
    /// Heuristics and transitions on a board that is not a permutation of `0..=8`
    /// produce meaningless results; the caller is responsible for well-formedness.
    pub const fn from_tiles_unchecked(tiles: [u8; CELL_COUNT]) -> Self {
        Board { tiles }
    }

    /// Returns the row-major tile labels.
    pub fn tiles(&self) -> &[u8; CELL_COUNT] {
        &self.tiles
    }

    /// Returns the label at linear index `index` (row-major, `0..9`).
    ///
    /// # Panics
    /// Panics if `index >= 9`.
    pub fn tile_at(&self, index: usize) -> u8 {
        self.tiles[index]
    }

    /// Returns the label at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if either coordinate is outside the board.
    pub fn tile_at_xy(&self, row: usize, col: usize) -> u8 {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "({row}, {col}) is off the board");
        self.tiles[row * BOARD_SIZE + col]
    }

    /// Linear index of `value`, or `None` if the board does not hold it.
    pub fn position_of(&self, value: u8) -> Option<usize> {
        self.tiles.iter().position(|&t| t == value)
    }

    /// Returns the (row, column) of tile `value`.
    ///
    /// # Panics
    /// Panics if the board does not contain `value`, which cannot happen on a
    /// well-formed board for labels `0..=8`.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::{Location, GOAL_STATE};
    /// assert_eq!(GOAL_STATE.location_of(4), Location { row: 1, col: 2 });
    /// ```
    pub fn location_of(&self, value: u8) -> Location {
        match self.position_of(value) {
            Some(index) => Location::from_index(index),
            None => panic!("tile {value} is not on the board {:?}", self.tiles),
        }
    }

    /// Linear index of the gap.
    pub fn gap_index(&self) -> usize {
        self.position_of(GAP)
            .unwrap_or_else(|| panic!("board {:?} has no gap", self.tiles))
    }

    /// Returns the linear index the gap would move to under `action`, if it
    /// stays on the board.
    fn target_index(&self, action: Action) -> Option<usize> {
        let gap = Location::from_index(self.gap_index());
        let (dr, dc) = action.delta();
        let row = gap.row.checked_add_signed(dr)?;
        let col = gap.col.checked_add_signed(dc)?;
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(row * BOARD_SIZE + col)
        } else {
            None
        }
    }

    /// Whether the gap can move one step in the direction of `action` without
    /// leaving the grid.
    pub fn can_move_gap(&self, action: Action) -> bool {
        self.target_index(action).is_some()
    }

    /// Returns a copy of this board with the gap swapped into `target`.
    fn with_gap_at(&self, target: usize) -> Board {
        let mut tiles = self.tiles;
        tiles.swap(self.gap_index(), target);
        Board { tiles }
    }
}

impl Default for Board {
    fn default() -> Self {
        GOAL_STATE
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.tiles.chunks(BOARD_SIZE).enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|&t| {
                    if t == GAP {
                        ".".to_string()
                    } else {
                        t.to_string()
                    }
                })
                .collect();
            write!(f, "{}", cells.join(" "))?;
            if r < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = PuzzleError;

    /// Parses nine digits, ignoring whitespace, commas and `/` row separators.
    /// `.` and `_` are accepted for the gap.
    ///
    /// ```
    /// use eight_puzzle::engine::{Board, GOAL_STATE};
    /// let board: Board = "123/8.4/765".parse().unwrap();
    /// assert_eq!(board, GOAL_STATE);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tiles = Vec::with_capacity(CELL_COUNT);
        for (position, c) in s.chars().enumerate() {
            match c {
                '.' | '_' => tiles.push(GAP),
                '0'..='9' => tiles.push(c as u8 - b'0'),
                ',' | '/' => {}
                c if c.is_whitespace() => {}
                character => {
                    return Err(PuzzleError::UnrecognizedCharacter {
                        character,
                        position,
                    })
                }
            }
        }
        let tiles: [u8; CELL_COUNT] = tiles
            .as_slice()
            .try_into()
            .map_err(|_| PuzzleError::InvalidTileCount { found: tiles.len() })?;
        Board::new(tiles)
    }
}

/// Outcome of applying an `Action` to a `Board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The move was legal; holds the successor board.
    Applied(Board),
    /// The move would take the gap off the grid; holds an unchanged copy of the input.
    Rejected { board: Board, action: Action },
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }

    /// The resulting board, whether or not the move was applied.
    pub fn board(&self) -> Board {
        match *self {
            Transition::Applied(board) | Transition::Rejected { board, .. } => board,
        }
    }

    /// Converts a rejected move into `PuzzleError::IllegalMove`.
    pub fn into_result(self) -> Result<Board, PuzzleError> {
        match self {
            Transition::Applied(board) => Ok(board),
            Transition::Rejected { board, action } => Err(PuzzleError::IllegalMove {
                action,
                gap: board.gap_index(),
            }),
        }
    }
}

/// Returns the legal actions for `state`, in the fixed order Up, Down, Left, Right.
///
/// # Examples
/// ```
/// use eight_puzzle::engine::{generate_actions, Action, GOAL_STATE};
/// assert_eq!(
///     generate_actions(&GOAL_STATE),
///     vec![Action::Up, Action::Down, Action::Left, Action::Right]
/// );
/// ```
pub fn generate_actions(state: &Board) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|&action| state.can_move_gap(action))
        .collect()
}

/// Applies `action` to `state`, reporting whether the move was legal.
///
/// The input board is never modified.
pub fn try_apply_action(state: &Board, action: Action) -> Transition {
    match state.target_index(action) {
        Some(target) => Transition::Applied(state.with_gap_at(target)),
        None => {
            trace!("rejected {action} with gap at index {}", state.gap_index());
            Transition::Rejected {
                board: *state,
                action,
            }
        }
    }
}

/// Returns the successor of `state` under `action`.
///
/// An illegal action yields an unchanged copy of `state` rather than an error.
/// Use `try_apply_action` to tell the two cases apart.
///
/// # Examples
/// ```
/// use eight_puzzle::engine::{apply_action, Action, Board};
/// let top_gap: Board = "1 0 3 8 2 4 7 6 5".parse().unwrap();
/// assert_eq!(apply_action(&top_gap, Action::Up), top_gap);
/// ```
pub fn apply_action(state: &Board, action: Action) -> Board {
    try_apply_action(state, action).board()
}

/// Cost of moving from `s1` to `s2`: `2` raised to the label of the tile that
/// slid into the gap.
///
/// The moved tile is read from `s1` at the index where `s2` holds its gap.
/// Only indices `0..8` of `s2` are scanned; when none of them holds the gap the
/// lookup falls back to index 8. `_action` is not used by the formula.
///
/// # Examples
/// ```
/// use eight_puzzle::engine::{step_cost, Action, Board, GOAL_STATE};
/// let s2: Board = "1 2 3 0 8 4 7 6 5".parse().unwrap();
/// assert_eq!(step_cost(&GOAL_STATE, Action::Left, &s2), 256);
/// ```
pub fn step_cost(s1: &Board, _action: Action, s2: &Board) -> u64 {
    let mut i = 0;
    while i < CELL_COUNT - 1 && s2.tiles[i] != GAP {
        i += 1;
    }
    let k = s1.tiles[i];
    1u64 << k
}
