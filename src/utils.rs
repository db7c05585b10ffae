use crate::engine::{apply_action, generate_actions, Action, Board, BOARD_SIZE, CELL_COUNT, GAP};
use crate::error::{PuzzleError, Result};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Parses an array of row strings into a `Board`.
///
/// Each string slice holds one row, top row first. Cells are separated by
/// whitespace or written back to back; `0`, `.` and `_` all denote the gap.
///
/// # Arguments
/// * `s`: The rows of the board, exactly `BOARD_SIZE` of them.
///
/// # Returns
/// * `Ok(Board)` if the rows hold a permutation of `0..=8`.
/// * `Err(PuzzleError)` if a character is not recognized, there are not exactly
///   three rows of three cells, or a tile repeats.
///
/// # Examples
/// ```
/// use eight_puzzle::utils::board_from_str_array;
/// use eight_puzzle::engine::GOAL_STATE;
///
/// let board = board_from_str_array(&["1 2 3", "8 . 4", "7 6 5"]).unwrap();
/// assert_eq!(board, GOAL_STATE);
///
/// assert!(board_from_str_array(&["123", "804"]).is_err());
/// assert!(board_from_str_array(&["12X", "804", "765"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board> {
    if s.len() != BOARD_SIZE {
        return Err(PuzzleError::InvalidRowCount { found: s.len() });
    }

    let mut tiles = [GAP; CELL_COUNT];
    let mut position = 0;

    for (r, row_str) in s.iter().enumerate() {
        let mut row = Vec::with_capacity(BOARD_SIZE);
        for c in row_str.chars() {
            match c {
                '0'..='9' => row.push(c as u8 - b'0'),
                '.' | '_' => row.push(GAP),
                c if c.is_whitespace() => {}
                character => {
                    return Err(PuzzleError::UnrecognizedCharacter {
                        character,
                        position,
                    })
                }
            }
            position += 1;
        }
        if row.len() != BOARD_SIZE {
            return Err(PuzzleError::InvalidRowLength {
                row: r,
                found: row.len(),
            });
        }
        tiles[r * BOARD_SIZE..(r + 1) * BOARD_SIZE].copy_from_slice(&row);
    }
    Board::new(tiles)
}

/// Walks `moves` random gap moves away from `start`.
///
/// The walk never immediately undoes its previous move. Because every step is a
/// legal move, the result is always reachable from (and can be solved back to)
/// `start`. The same seed always produces the same board.
pub fn scramble(start: &Board, moves: usize, seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = *start;
    let mut last: Option<Action> = None;

    for _ in 0..moves {
        let candidates: Vec<Action> = generate_actions(&board)
            .into_iter()
            .filter(|&a| Some(a.inverse()) != last)
            .collect();
        // Every cell has at least two neighbours, so one candidate always remains.
        let Some(&action) = candidates.choose(&mut rng) else {
            break;
        };
        board = apply_action(&board, action);
        last = Some(action);
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GOAL_STATE;
    use crate::solver::distances_from;

    #[test]
    fn test_board_from_str_array_valid() {
        let board = board_from_str_array(&["283", "164", "705"]).unwrap();
        assert_eq!(board.tiles(), &[2, 8, 3, 1, 6, 4, 7, 0, 5]);
    }

    #[test]
    fn test_board_from_str_array_invalid_char() {
        let result = board_from_str_array(&["123", "8x4", "765"]);
        assert_eq!(
            result,
            Err(PuzzleError::UnrecognizedCharacter {
                character: 'x',
                position: 4
            })
        );
    }

    #[test]
    fn test_board_from_str_array_wrong_shape() {
        assert_eq!(
            board_from_str_array(&["1238", "04", "765"]),
            Err(PuzzleError::InvalidRowLength { row: 0, found: 4 })
        );
        assert_eq!(
            board_from_str_array(&["123", "804", "765", ""]),
            Err(PuzzleError::InvalidRowCount { found: 4 })
        );
        assert!(board_from_str_array(&["123", "884", "765"]).is_err());
    }

    #[test]
    fn test_scramble_is_deterministic() {
        assert_eq!(scramble(&GOAL_STATE, 25, 42), scramble(&GOAL_STATE, 25, 42));
        assert_eq!(scramble(&GOAL_STATE, 0, 42), GOAL_STATE);
    }

    #[test]
    fn test_scramble_stays_within_walk_length() {
        let distances = distances_from(&GOAL_STATE, 6);
        for seed in 0..50 {
            let board = scramble(&GOAL_STATE, 6, seed);
            assert!(distances.contains_key(&board), "seed {seed}: {board}");
        }
    }

    #[test]
    fn test_scramble_single_step_is_a_neighbour() {
        let board = scramble(&GOAL_STATE, 1, 5);
        assert_eq!(distances_from(&GOAL_STATE, 1).get(&board), Some(&1));
    }
}
