//! A cursor into a shared [`GameTree`].

use std::str::FromStr;
use std::sync::Arc;

use crate::error::TreeError;
use crate::position::Position;
use crate::tree::{GameTree, NodeId, TreeMove};

/// The current node of a walk through a [`GameTree`].
///
/// The tree itself is shared; each position owns only its path from the
/// root and a log of every node it entered, so duplicates are cheap and
/// fully independent.
#[derive(Debug, Clone)]
pub struct TreePosition {
    tree: Arc<GameTree>,
    path: Vec<NodeId>,
    visited: Vec<NodeId>,
}

impl TreePosition {
    /// Start a walk at the root of `tree`.
    pub fn new(tree: Arc<GameTree>) -> Self {
        Self {
            tree,
            path: vec![NodeId::ROOT],
            visited: Vec::new(),
        }
    }

    /// The node the walk is currently at.
    #[inline]
    pub fn current(&self) -> NodeId {
        self.path[self.path.len() - 1]
    }

    /// Number of moves applied since the root.
    #[inline]
    pub fn ply(&self) -> usize {
        self.path.len() - 1
    }

    /// The underlying tree.
    pub fn tree(&self) -> &GameTree {
        &self.tree
    }

    /// Every node entered through [`Position::apply_move`], in order.
    pub fn visited(&self) -> &[NodeId] {
        &self.visited
    }

    /// Forget the visit log.
    pub fn clear_visited(&mut self) {
        self.visited.clear();
    }
}

impl From<GameTree> for TreePosition {
    fn from(tree: GameTree) -> Self {
        Self::new(Arc::new(tree))
    }
}

impl FromStr for TreePosition {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, TreeError> {
        s.parse::<GameTree>().map(TreePosition::from)
    }
}

impl Position for TreePosition {
    type Move = TreeMove;

    fn legal_moves(&self) -> Vec<TreeMove> {
        self.tree.edges(self.current()).to_vec()
    }

    fn apply_move(&mut self, mv: &TreeMove) {
        debug_assert!(
            self.tree.edges(self.current()).contains(mv),
            "{mv} is not a move from {}",
            self.current()
        );
        self.path.push(mv.target());
        self.visited.push(mv.target());
    }

    fn undo_move(&mut self) {
        debug_assert!(self.path.len() > 1, "undo at the root");
        if self.path.len() > 1 {
            self.path.pop();
        }
    }

    fn duplicate(&self) -> Self {
        self.clone()
    }

    fn is_in_check(&self) -> bool {
        self.tree.is_in_check(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE: &str = "0(3+(1 x2) x-2(1 4(0+)) 5)";

    #[test]
    fn apply_then_undo_restores_every_move() {
        let mut pos: TreePosition = TREE.parse().unwrap();

        fn check_all(pos: &mut TreePosition) {
            let before_moves = pos.legal_moves();
            let before_check = pos.is_in_check();
            let before_node = pos.current();
            for mv in &before_moves {
                pos.apply_move(mv);
                check_all(pos);
                pos.undo_move();
                assert_eq!(pos.legal_moves(), before_moves);
                assert_eq!(pos.is_in_check(), before_check);
                assert_eq!(pos.current(), before_node);
            }
        }

        check_all(&mut pos);
        assert_eq!(pos.ply(), 0);
    }

    #[test]
    fn duplicate_is_independent() {
        let mut pos: TreePosition = TREE.parse().unwrap();
        let mv = pos.legal_moves()[1];
        let mut copy = pos.duplicate();
        copy.apply_move(&mv);

        assert_eq!(pos.current(), NodeId::ROOT);
        assert_eq!(copy.current(), mv.target());
        assert!(pos.visited().is_empty());
        assert_eq!(copy.visited(), &[mv.target()]);

        let other = pos.legal_moves()[0];
        pos.apply_move(&other);
        assert_eq!(copy.current(), mv.target());
        assert_eq!(copy.ply(), 1);
    }

    #[test]
    fn check_flag_follows_current_node() {
        let mut pos: TreePosition = TREE.parse().unwrap();
        assert!(!pos.is_in_check());
        let first = pos.legal_moves()[0];
        pos.apply_move(&first);
        assert!(pos.is_in_check());
        pos.undo_move();
        assert!(!pos.is_in_check());
    }

    #[test]
    fn visit_log_records_entries() {
        let mut pos: TreePosition = TREE.parse().unwrap();
        let first = pos.legal_moves()[0];
        pos.apply_move(&first);
        let reply = pos.legal_moves()[1];
        pos.apply_move(&reply);
        pos.undo_move();
        pos.undo_move();
        assert_eq!(pos.visited(), &[first.target(), reply.target()]);
        pos.clear_visited();
        assert!(pos.visited().is_empty());
    }
}
