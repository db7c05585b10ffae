//! Search-tree nodes.
//!
//! A `Node` wraps a `Board` together with the bookkeeping a search algorithm needs
//! to rebuild its path. Heuristics only ever look at `Node::state`.
use crate::engine::{Action, Board};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Node {
    state: Board,
    action: Option<Action>,
    parent: Option<Arc<Node>>,
    depth: u32,
    path_cost: u64,
}

impl Node {
    /// A root node with no parent and zero path cost.
    pub fn root(state: Board) -> Self {
        Node {
            state,
            action: None,
            parent: None,
            depth: 0,
            path_cost: 0,
        }
    }

    /// A child of `parent` reached by `action`, adding `step_cost` to the path cost.
    pub fn child(parent: Arc<Node>, action: Action, state: Board, step_cost: u64) -> Self {
        Node {
            state,
            action: Some(action),
            depth: parent.depth + 1,
            path_cost: parent.path_cost + step_cost,
            parent: Some(parent),
        }
    }

    pub fn state(&self) -> &Board {
        &self.state
    }

    /// The action that produced this node, `None` for the root.
    pub fn action(&self) -> Option<Action> {
        self.action
    }

    pub fn parent(&self) -> Option<&Arc<Node>> {
        self.parent.as_ref()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn path_cost(&self) -> u64 {
        self.path_cost
    }

    /// Actions from the root to this node, in order.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(self.depth as usize);
        let mut current = Some(self);
        while let Some(node) = current {
            if let Some(action) = node.action {
                actions.push(action);
            }
            current = node.parent.as_deref();
        }
        actions.reverse();
        actions
    }
}

impl From<Board> for Node {
    fn from(state: Board) -> Self {
        Node::root(state)
    }
}
