//! Puzzle configuration shared by heuristics and solvers.
use crate::engine::{step_cost, Action, Board, GOAL_STATE};
use crate::error::{PuzzleError, Result};
use crate::heuristics::{Heuristic, EPSILON};
use clap::ValueEnum;

/// How edges are weighted during search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum CostModel {
    /// Every move costs 1.
    Unit,
    /// A move costs `2^label` of the tile that slid, see `engine::step_cost`.
    #[default]
    TileWeighted,
}

impl CostModel {
    pub fn cost(&self, s1: &Board, action: Action, s2: &Board) -> u64 {
        match self {
            CostModel::Unit => 1,
            CostModel::TileWeighted => step_cost(s1, action, s2),
        }
    }
}

/// The goal, heuristic and cost model a search runs with.
#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleConfig {
    pub goal: Board,
    /// Inflation factor for `Heuristic::EpsilonWeightedManhattan`.
    pub epsilon: f64,
    pub heuristic: Heuristic,
    pub cost_model: CostModel,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfig {
            goal: GOAL_STATE,
            epsilon: EPSILON,
            heuristic: Heuristic::Manhattan,
            cost_model: CostModel::default(),
        }
    }
}

impl PuzzleConfig {
    pub fn with_goal(mut self, goal: Board) -> Self {
        self.goal = goal;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    /// Sets the PEA* inflation factor.
    ///
    /// # Errors
    /// `PuzzleError::InvalidEpsilon` if `epsilon` is negative, NaN or infinite.
    pub fn with_epsilon(mut self, epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(PuzzleError::InvalidEpsilon { value: epsilon });
        }
        self.epsilon = epsilon;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::apply_action;

    #[test]
    fn test_defaults() {
        let config = PuzzleConfig::default();
        assert_eq!(config.goal, GOAL_STATE);
        assert_eq!(config.epsilon, 0.1);
        assert_eq!(config.heuristic, Heuristic::Manhattan);
        assert_eq!(config.cost_model, CostModel::TileWeighted);
    }

    #[test]
    fn test_with_epsilon_validation() {
        assert!(PuzzleConfig::default().with_epsilon(0.0).is_ok());
        assert_eq!(
            PuzzleConfig::default().with_epsilon(-0.5),
            Err(PuzzleError::InvalidEpsilon { value: -0.5 })
        );
        assert!(PuzzleConfig::default().with_epsilon(f64::NAN).is_err());
        assert!(PuzzleConfig::default().with_epsilon(f64::INFINITY).is_err());
    }

    #[test]
    fn test_cost_models() {
        let s2 = apply_action(&GOAL_STATE, Action::Left);
        assert_eq!(CostModel::Unit.cost(&GOAL_STATE, Action::Left, &s2), 1);
        assert_eq!(CostModel::TileWeighted.cost(&GOAL_STATE, Action::Left, &s2), 256);
    }
}
