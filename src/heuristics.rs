use crate::config::PuzzleConfig;
use crate::engine::Board;
use crate::node::Node;
use clap::ValueEnum;
use std::fmt;

/// Inflation factor used by `epsilon_weighted_manhattan_distance`.
pub const EPSILON: f64 = 0.1;

/// Yields `(label, orthogonal distance)` for every tile `1..=8` of `state`
/// relative to its position in `goal`.
fn tile_distances<'a>(state: &'a Board, goal: &'a Board) -> impl Iterator<Item = (u8, u64)> + 'a {
    (1..=8u8).map(move |val| {
        let curr = state.location_of(val);
        let target = goal.location_of(val);
        (val, curr.manhattan_to(&target) as u64)
    })
}

/// `2^val`, the per-tile weight used by the weighted variants.
fn label_weight(val: u8) -> u64 {
    1u64 << val
}

/// Sum over tiles `1..=8` of the row and column distance to the goal position.
///
/// Admissible and consistent for unit-cost moves.
pub fn manhattan_distance(node: &Node, goal: &Board) -> f64 {
    tile_distances(node.state(), goal)
        .map(|(_, d)| d)
        .sum::<u64>() as f64
}

/// Manhattan distance with each tile's contribution scaled by `2^label`.
///
/// The weight depends on the tile's face value, not on how far it is from home,
/// so tile 8 dominates every other tile.
pub fn weighted_manhattan_distance(node: &Node, goal: &Board) -> f64 {
    tile_distances(node.state(), goal)
        .map(|(val, d)| d * label_weight(val))
        .sum::<u64>() as f64
}

/// `(1 + EPSILON) * weighted_manhattan_distance`, the inflated estimate for PEA*.
pub fn epsilon_weighted_manhattan_distance(node: &Node, goal: &Board) -> f64 {
    inflate(weighted_manhattan_distance(node, goal), EPSILON)
}

fn inflate(h: f64, epsilon: f64) -> f64 {
    (1.0 + epsilon) * h
}

/// Number of tiles `1..=8` not on their goal cell. The gap is never counted.
pub fn misplaced_tiles(node: &Node, goal: &Board) -> f64 {
    tile_distances(node.state(), goal)
        .filter(|&(_, d)| d != 0)
        .count() as f64
}

/// Sum of `2^label` over the misplaced tiles.
pub fn weighted_misplaced_tiles(node: &Node, goal: &Board) -> f64 {
    tile_distances(node.state(), goal)
        .filter(|&(_, d)| d != 0)
        .map(|(val, _)| label_weight(val))
        .sum::<u64>() as f64
}

/// Weighted distance counting only tiles exactly two moves from home.
///
/// A tile at distance 2 contributes `2 * 2^label`; at any other distance it
/// contributes nothing. The estimate can therefore drop by more than the cost
/// of a single move, so it is not consistent.
pub fn weighted_non_consistent(node: &Node, goal: &Board) -> f64 {
    tile_distances(node.state(), goal)
        .map(|(val, d)| if d == 2 { d * label_weight(val) } else { 0 })
        .sum::<u64>() as f64
}

/// Selects one of the heuristic functions at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Heuristic {
    Manhattan,
    WeightedManhattan,
    EpsilonWeightedManhattan,
    MisplacedTiles,
    WeightedMisplacedTiles,
    WeightedNonConsistent,
}

impl Heuristic {
    pub const ALL: [Heuristic; 6] = [
        Heuristic::Manhattan,
        Heuristic::WeightedManhattan,
        Heuristic::EpsilonWeightedManhattan,
        Heuristic::MisplacedTiles,
        Heuristic::WeightedMisplacedTiles,
        Heuristic::WeightedNonConsistent,
    ];

    /// Scores `node` against `config.goal`.
    ///
    /// `EpsilonWeightedManhattan` uses `config.epsilon` as its inflation factor.
    pub fn evaluate(&self, node: &Node, config: &PuzzleConfig) -> f64 {
        let goal = &config.goal;
        match self {
            Heuristic::Manhattan => manhattan_distance(node, goal),
            Heuristic::WeightedManhattan => weighted_manhattan_distance(node, goal),
            Heuristic::EpsilonWeightedManhattan => {
                inflate(weighted_manhattan_distance(node, goal), config.epsilon)
            }
            Heuristic::MisplacedTiles => misplaced_tiles(node, goal),
            Heuristic::WeightedMisplacedTiles => weighted_misplaced_tiles(node, goal),
            Heuristic::WeightedNonConsistent => weighted_non_consistent(node, goal),
        }
    }

    /// Whether the estimate never exceeds the number of unit-cost moves to the goal.
    pub fn is_admissible(&self) -> bool {
        matches!(self, Heuristic::Manhattan | Heuristic::MisplacedTiles)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::WeightedManhattan => "weighted-manhattan",
            Heuristic::EpsilonWeightedManhattan => "epsilon-weighted-manhattan",
            Heuristic::MisplacedTiles => "misplaced-tiles",
            Heuristic::WeightedMisplacedTiles => "weighted-misplaced-tiles",
            Heuristic::WeightedNonConsistent => "weighted-non-consistent",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{apply_action, Action, GOAL_STATE};
    use crate::solver::distances_from;
    use crate::utils::scramble;

    fn node(s: &str) -> Node {
        Node::root(s.parse().unwrap())
    }

    #[test]
    fn test_goal_scores_zero() {
        let config = PuzzleConfig::default();
        let goal = Node::root(GOAL_STATE);
        for heuristic in Heuristic::ALL {
            assert_eq!(heuristic.evaluate(&goal, &config), 0.0, "{heuristic}");
        }
        assert_eq!(epsilon_weighted_manhattan_distance(&goal, &GOAL_STATE), 0.0);
    }

    #[test]
    fn test_single_move_scores() {
        // Gap moves left: tile 8 slides one cell right.
        let n = Node::root(apply_action(&GOAL_STATE, Action::Left));
        assert_eq!(manhattan_distance(&n, &GOAL_STATE), 1.0);
        assert_eq!(weighted_manhattan_distance(&n, &GOAL_STATE), 256.0);
        assert_eq!(misplaced_tiles(&n, &GOAL_STATE), 1.0);
        assert_eq!(weighted_misplaced_tiles(&n, &GOAL_STATE), 256.0);
        assert_eq!(weighted_non_consistent(&n, &GOAL_STATE), 0.0);
    }

    #[test]
    fn test_scrambled_board_scores() {
        // 5 is four moves from home, 1 and 3 are two moves from home.
        let n = node("5 2 1 8 0 4 7 6 3");
        assert_eq!(manhattan_distance(&n, &GOAL_STATE), 8.0);
        assert_eq!(weighted_manhattan_distance(&n, &GOAL_STATE), 148.0);
        assert_eq!(misplaced_tiles(&n, &GOAL_STATE), 3.0);
        assert_eq!(weighted_misplaced_tiles(&n, &GOAL_STATE), 42.0);
        assert_eq!(
            epsilon_weighted_manhattan_distance(&n, &GOAL_STATE),
            (1.0 + 0.1) * 148.0
        );
    }

    #[test]
    fn test_non_consistent_ignores_other_distances() {
        let far = node("5 2 3 8 0 4 7 6 1");
        assert_eq!(manhattan_distance(&far, &GOAL_STATE), 8.0);
        assert_eq!(weighted_non_consistent(&far, &GOAL_STATE), 0.0);

        let mixed = node("5 2 1 8 0 4 7 6 3");
        assert_eq!(weighted_non_consistent(&mixed, &GOAL_STATE), 2.0 * 2.0 + 2.0 * 8.0);
    }

    #[test]
    fn test_non_consistent_breaks_triangle_inequality() {
        let parent = node("2 3 4 8 1 0 7 6 5");
        let child = Node::root(apply_action(parent.state(), Action::Left));
        let h_parent = weighted_non_consistent(&parent, &GOAL_STATE);
        let h_child = weighted_non_consistent(&child, &GOAL_STATE);
        assert_eq!(h_parent, 4.0);
        assert_eq!(h_child, 0.0);
        assert!(h_parent > 1.0 + h_child);
    }

    #[test]
    fn test_epsilon_inflates_weighted() {
        for seed in 0..20 {
            let n = Node::root(scramble(&GOAL_STATE, 30, seed));
            let weighted = weighted_manhattan_distance(&n, &GOAL_STATE);
            let inflated = epsilon_weighted_manhattan_distance(&n, &GOAL_STATE);
            assert_eq!(inflated, (1.0 + EPSILON) * weighted);
            if weighted > 0.0 {
                assert!(inflated > weighted);
            }
        }
    }

    #[test]
    fn test_evaluate_uses_config_epsilon() {
        let n = node("5 2 1 8 0 4 7 6 3");
        let config = PuzzleConfig::default()
            .with_heuristic(Heuristic::EpsilonWeightedManhattan)
            .with_epsilon(0.5)
            .unwrap();
        assert_eq!(
            Heuristic::EpsilonWeightedManhattan.evaluate(&n, &config),
            1.5 * 148.0
        );
    }

    #[test]
    fn test_alternate_goal() {
        let goal: Board = "1 2 3 4 5 6 7 8 0".parse().unwrap();
        let config = PuzzleConfig::default().with_goal(goal);
        let at_goal = Node::root(goal);
        let at_default_goal = Node::root(GOAL_STATE);
        for heuristic in Heuristic::ALL {
            assert_eq!(heuristic.evaluate(&at_goal, &config), 0.0);
        }
        assert!(Heuristic::Manhattan.evaluate(&at_default_goal, &config) > 0.0);
    }

    #[test]
    fn test_misplaced_never_exceeds_manhattan() {
        for seed in 0..200 {
            let n = Node::root(scramble(&GOAL_STATE, 40, seed));
            assert!(misplaced_tiles(&n, &GOAL_STATE) <= manhattan_distance(&n, &GOAL_STATE));
            assert!(
                weighted_misplaced_tiles(&n, &GOAL_STATE)
                    <= weighted_manhattan_distance(&n, &GOAL_STATE)
            );
        }
    }

    #[test]
    fn test_admissible_within_five_moves() {
        let distances = distances_from(&GOAL_STATE, 5);
        assert!(distances.len() > 1);
        for (board, moves) in &distances {
            let n = Node::root(*board);
            let moves = *moves as f64;
            assert!(manhattan_distance(&n, &GOAL_STATE) <= moves, "{board}");
            assert!(misplaced_tiles(&n, &GOAL_STATE) <= moves, "{board}");
        }
    }

    #[test]
    fn test_admissibility_flags() {
        let one_move = Node::root(apply_action(&GOAL_STATE, Action::Up));
        let config = PuzzleConfig::default();
        for heuristic in Heuristic::ALL {
            let h = heuristic.evaluate(&one_move, &config);
            if heuristic.is_admissible() {
                assert!(h <= 1.0, "{heuristic}");
            }
        }
        // Tile 2 slid down: weight 4 overestimates the single move.
        assert_eq!(Heuristic::WeightedManhattan.evaluate(&one_move, &config), 4.0);
        assert!(!Heuristic::WeightedManhattan.is_admissible());
    }
}
