//! An explicit game tree implementing the search contracts.
//!
//! Every node carries a static score from the perspective of its side to
//! move and an in-check flag; every edge is a [`TreeMove`]. Trees are built
//! programmatically with [`GameTree::with_root`]/[`GameTree::add_child`] or
//! parsed from a compact notation:
//!
//! ```text
//! node := score ['+'] ['(' edge (whitespace edge)* ')']
//! edge := ['x'] node
//! ```
//!
//! `+` marks the side to move as in check and `x` marks the edge leading to
//! a node as a capture, so `0(3 x-2(1 4) 5)` is a root scored 0 with three
//! moves, the second of which is a capture into a node with two replies.

mod evaluator;
mod notation;
mod position;

use std::fmt;

use crate::position::{GameMove, Score};

pub use evaluator::TreeEvaluator;
pub use position::TreePosition;

/// Index of a node inside a [`GameTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node of every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Arena index of this node.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An edge of the tree: the node it leads to and whether it is a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeMove {
    target: NodeId,
    capture: bool,
}

impl TreeMove {
    /// Create an edge into `target`.
    pub const fn new(target: NodeId, capture: bool) -> Self {
        Self { target, capture }
    }

    /// The node this move leads to.
    #[inline]
    pub const fn target(self) -> NodeId {
        self.target
    }
}

impl GameMove for TreeMove {
    #[inline]
    fn is_capture(&self) -> bool {
        self.capture
    }
}

impl fmt::Display for TreeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.capture {
            write!(f, "x{}", self.target)
        } else {
            write!(f, "{}", self.target)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    score: Score,
    in_check: bool,
    edges: Vec<TreeMove>,
}

impl Node {
    fn new(score: Score, in_check: bool) -> Self {
        Self {
            score,
            in_check,
            edges: Vec::new(),
        }
    }
}

/// Arena of nodes rooted at [`NodeId::ROOT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTree {
    nodes: Vec<Node>,
}

impl GameTree {
    /// Create a tree containing only a root node.
    pub fn with_root(score: Score, in_check: bool) -> Self {
        Self {
            nodes: vec![Node::new(score, in_check)],
        }
    }

    /// Append a child under `parent` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn add_child(&mut self, parent: NodeId, score: Score, in_check: bool, capture: bool) -> NodeId {
        assert!(parent.index() < self.nodes.len(), "unknown parent {parent}");
        let id = self.push(Node::new(score, in_check));
        self.nodes[parent.index()].edges.push(TreeMove::new(id, capture));
        id
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Static score of `id` from its mover's perspective.
    #[inline]
    pub fn score(&self, id: NodeId) -> Score {
        self.nodes[id.index()].score
    }

    /// Whether the side to move at `id` is in check.
    #[inline]
    pub fn is_in_check(&self, id: NodeId) -> bool {
        self.nodes[id.index()].in_check
    }

    /// Outgoing moves of `id`, in generation order.
    #[inline]
    pub fn edges(&self, id: NodeId) -> &[TreeMove] {
        &self.nodes[id.index()].edges
    }

    /// Whether `id` has no outgoing moves.
    #[inline]
    pub fn is_terminal(&self, id: NodeId) -> bool {
        self.nodes[id.index()].edges.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }
}
