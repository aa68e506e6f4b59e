//! Static evaluator for [`TreePosition`].

use crate::position::{Evaluator, Score};
use crate::tree::TreePosition;

/// Scores a tree node by its static score.
///
/// Terminal detection is left to the search: a node reached with depth to
/// spare and no moves is scored as mate or stalemate there, while a node
/// reached at the horizon is scored statically like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeEvaluator {
    infinity: Score,
    mate: Score,
    stalemate: Score,
}

impl TreeEvaluator {
    /// Default bound for the search window.
    pub const INFINITY: Score = 1_000_000;
    /// Default checkmate penalty base.
    pub const MATE: Score = 100_000;

    /// Create an evaluator with explicit sentinel values.
    pub const fn new(infinity: Score, mate: Score, stalemate: Score) -> Self {
        Self {
            infinity,
            mate,
            stalemate,
        }
    }
}

impl Default for TreeEvaluator {
    fn default() -> Self {
        Self::new(Self::INFINITY, Self::MATE, 0)
    }
}

impl Evaluator<TreePosition> for TreeEvaluator {
    fn score_leaf(&self, position: &TreePosition) -> Score {
        position.tree().score(position.current())
    }

    fn infinity(&self) -> Score {
        self.infinity
    }

    fn mate_penalty(&self) -> Score {
        self.mate
    }

    fn stalemate_penalty(&self) -> Score {
        self.stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_uses_static_score() {
        let eval = TreeEvaluator::default();
        let interior: TreePosition = "17(1 2)".parse().unwrap();
        let leaf: TreePosition = "-4".parse().unwrap();
        assert_eq!(eval.score_leaf(&interior), 17);
        assert_eq!(eval.score_leaf(&leaf), -4);
    }

    #[test]
    fn sentinels_are_configurable() {
        let eval = TreeEvaluator::new(1_000, 500, 25);
        assert_eq!(eval.infinity(), 1_000);
        assert_eq!(eval.mate_penalty(), 500);
        assert_eq!(eval.stalemate_penalty(), 25);
    }

    #[test]
    fn terminal_score_scales_mate_with_depth() {
        let eval = TreeEvaluator::default();
        let mated: TreePosition = "0+".parse().unwrap();
        let stalemated: TreePosition = "0".parse().unwrap();

        assert_eq!(eval.terminal_score(&mated, 0), -TreeEvaluator::MATE);
        assert_eq!(eval.terminal_score(&mated, 3), -TreeEvaluator::MATE - 3);
        assert!(eval.terminal_score(&mated, 0) > eval.terminal_score(&mated, 3));
        for depth in 0..6 {
            assert_eq!(eval.terminal_score(&stalemated, depth), 0);
        }
    }
}
