use crate::config::PuzzleConfig;
use crate::engine::{apply_action, generate_actions, Action, Board};
use crate::node::Node;
use log::{debug, info};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::sync::Arc;

/// Represents a solution found by the solver.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Gap moves leading from the start board to the goal.
    pub actions: Vec<Action>,
    /// Sum of the step costs along `actions` under the configured cost model.
    pub cost: u64,
    /// Number of nodes expanded before the goal was reached.
    pub expanded: usize,
}

impl Solution {
    fn from_node(node: &Node, expanded: usize) -> Self {
        Solution {
            actions: node.actions(),
            cost: node.path_cost(),
            expanded,
        }
    }

    pub fn steps(&self) -> usize {
        self.actions.len()
    }
}

struct FrontierEntry {
    f: f64,
    seq: u64,
    node: Arc<Node>,
}

// BinaryHeap is a max-heap: lowest f first, then oldest entry.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Best-first search on `f = g + h` using `config.heuristic` and `config.cost_model`.
///
/// With `Heuristic::Manhattan` and unit costs this is plain A*; the weighted
/// heuristics turn it into weighted A*, and `EpsilonWeightedManhattan` into PEA*.
/// Boards are reopened whenever a cheaper path to them is found, so inconsistent
/// heuristics still terminate with a valid (if not optimal) path.
///
/// Returns `None` if the goal is unreachable from `start`.
pub fn solve_astar(start: &Board, config: &PuzzleConfig) -> Option<Solution> {
    let root = Arc::new(Node::root(*start));
    let mut frontier = BinaryHeap::new();
    let mut best_g: HashMap<Board, u64> = HashMap::new();
    let mut seq = 0u64;
    let mut expanded = 0usize;

    best_g.insert(*start, 0);
    frontier.push(FrontierEntry {
        f: config.heuristic.evaluate(&root, config),
        seq,
        node: root,
    });

    while let Some(FrontierEntry { node, .. }) = frontier.pop() {
        if best_g
            .get(node.state())
            .is_some_and(|&best| node.path_cost() > best)
        {
            continue;
        }

        if *node.state() == config.goal {
            let solution = Solution::from_node(&node, expanded);
            info!(
                "{} found a {}-move solution with cost {} after {} expansions",
                config.heuristic,
                solution.steps(),
                solution.cost,
                expanded
            );
            return Some(solution);
        }

        expanded += 1;
        for action in generate_actions(node.state()) {
            let next = apply_action(node.state(), action);
            let cost = config.cost_model.cost(node.state(), action, &next);
            let g = node.path_cost() + cost;
            if best_g.get(&next).is_some_and(|&best| best <= g) {
                continue;
            }
            best_g.insert(next, g);

            let child = Arc::new(Node::child(Arc::clone(&node), action, next, cost));
            seq += 1;
            frontier.push(FrontierEntry {
                f: g as f64 + config.heuristic.evaluate(&child, config),
                seq,
                node: child,
            });
        }
    }

    info!("{} exhausted the search space after {} expansions", config.heuristic, expanded);
    None
}

enum Probe {
    Found(Arc<Node>),
    /// Smallest f that exceeded the threshold, `None` if nothing did.
    Exceeded(Option<f64>),
}

/// Iterative-deepening A* on `f = g + h`.
///
/// Each iteration is a depth-first search bounded by the current threshold; the
/// next threshold is the smallest f that exceeded it. Gives up after
/// `max_iterations` thresholds.
pub fn solve_ida(start: &Board, config: &PuzzleConfig, max_iterations: u32) -> Option<Solution> {
    let root = Arc::new(Node::root(*start));
    let mut threshold = config.heuristic.evaluate(&root, config);
    let mut expanded = 0usize;

    for iteration in 0..max_iterations {
        debug!("IDA* iteration {} with threshold {}", iteration, threshold);
        let mut on_path = HashSet::from([*start]);
        match probe(Arc::clone(&root), threshold, config, &mut on_path, &mut expanded) {
            Probe::Found(node) => {
                let solution = Solution::from_node(&node, expanded);
                info!(
                    "IDA* with {} found a {}-move solution with cost {} after {} expansions",
                    config.heuristic,
                    solution.steps(),
                    solution.cost,
                    expanded
                );
                return Some(solution);
            }
            Probe::Exceeded(Some(next)) => threshold = next,
            Probe::Exceeded(None) => return None,
        }
    }

    info!("IDA* gave up after {} iterations", max_iterations);
    None
}

fn probe(
    node: Arc<Node>,
    threshold: f64,
    config: &PuzzleConfig,
    on_path: &mut HashSet<Board>,
    expanded: &mut usize,
) -> Probe {
    let f = node.path_cost() as f64 + config.heuristic.evaluate(&node, config);
    if f > threshold {
        return Probe::Exceeded(Some(f));
    }
    if *node.state() == config.goal {
        return Probe::Found(node);
    }

    *expanded += 1;
    let mut min_exceeded: Option<f64> = None;
    for action in generate_actions(node.state()) {
        let next = apply_action(node.state(), action);
        if !on_path.insert(next) {
            continue;
        }
        let cost = config.cost_model.cost(node.state(), action, &next);
        let child = Arc::new(Node::child(Arc::clone(&node), action, next, cost));
        let result = probe(child, threshold, config, on_path, expanded);
        on_path.remove(&next);

        match result {
            Probe::Found(goal) => return Probe::Found(goal),
            Probe::Exceeded(Some(f)) => {
                min_exceeded = Some(min_exceeded.map_or(f, |m| m.min(f)));
            }
            Probe::Exceeded(None) => {}
        }
    }
    Probe::Exceeded(min_exceeded)
}

/// Breadth-first move counts from `goal` to every board within `max_depth` moves.
///
/// Moves are reversible, so these are also the true unit-cost distances from
/// each board back to `goal`.
pub fn distances_from(goal: &Board, max_depth: u32) -> HashMap<Board, u32> {
    let mut distances = HashMap::from([(*goal, 0)]);
    let mut queue = VecDeque::from([*goal]);

    while let Some(board) = queue.pop_front() {
        let depth = distances[&board];
        if depth == max_depth {
            continue;
        }
        for action in generate_actions(&board) {
            let next = apply_action(&board, action);
            if !distances.contains_key(&next) {
                distances.insert(next, depth + 1);
                queue.push_back(next);
            }
        }
    }
    distances
}
