//! # 8-Puzzle Library
//!
//! This library provides the state space of the sliding 8-puzzle and a family of
//! heuristic functions for informed search (A*, weighted A*, IDA* and PEA*).
//!
//! It is used by two binaries:
//! - `solver`: Takes a board (or scrambles one from a seed) and solves it with a
//!   chosen heuristic, algorithm and cost model.
//! - `heuristic_evaluator`: Compares all heuristics over a batch of seeded
//!   scrambles, reporting expansions and solution cost.
//!
//! ## Modules
//! - `engine`: The board (`Board`), the gap moves (`Action`), the move generator,
//!   transition function and tile-weighted step cost, and the `GOAL_STATE` constant.
//! - `heuristics`: Six heuristic evaluators over a `Node`, some deliberately
//!   inadmissible or inconsistent, and the `Heuristic` selector.
//! - `node`: The search-tree `Node` the heuristics read their board from.
//! - `config`: `PuzzleConfig`, carrying the goal, epsilon, heuristic and cost model.
//! - `solver`: A* and IDA* drivers, plus breadth-first exact distances.
//! - `utils`: Board parsing from row strings and seeded scrambling.
//! - `error`: The crate's `PuzzleError`.
//!
//! Every operation is a pure function over `Copy` boards, so all of them may be
//! called from any number of threads at once.

pub mod config;
pub mod engine;
pub mod error;
pub mod heuristics;
pub mod node;
pub mod solver;
pub mod utils;

pub use config::{CostModel, PuzzleConfig};
pub use engine::{apply_action, generate_actions, step_cost, Action, Board, Transition, GOAL_STATE};
pub use error::PuzzleError;
pub use heuristics::Heuristic;
pub use node::Node;
