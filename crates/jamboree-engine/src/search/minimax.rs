//! Plain negamax without pruning.

use jamboree_core::{Depth, Evaluator, MoveGuard, Position, ScoredMove};

use crate::error::SearchError;
use crate::search::Searcher;
use crate::search::config::SearchConfig;

/// Exhaustive negamax search.
///
/// Returns the best score for the side to move and the first move that
/// achieves it in generation order. The position is restored on return.
pub fn minimax<P, E>(position: &mut P, depth: Depth, evaluator: &E) -> ScoredMove<P::Move>
where
    P: Position,
    E: Evaluator<P>,
{
    if depth == 0 {
        return ScoredMove::bound(evaluator.score_leaf(position));
    }

    let moves = position.legal_moves();

    // No legal moves: checkmate or stalemate
    if moves.is_empty() {
        return ScoredMove::bound(evaluator.terminal_score(position, depth));
    }

    let mut best = ScoredMove::bound(-evaluator.infinity());

    for mv in moves {
        let score = {
            let mut child = MoveGuard::new(position, &mv);
            -minimax(&mut *child, depth - 1, evaluator).score
        };

        if score > best.score {
            best = ScoredMove::new(score, mv);
        }
    }

    best
}

/// Single-threaded searcher running [`minimax`].
#[derive(Debug, Clone)]
pub struct MinimaxSearcher<E> {
    evaluator: E,
    config: SearchConfig,
}

impl<E> MinimaxSearcher<E> {
    /// Create a searcher with the given evaluator and configuration.
    pub fn new(evaluator: E, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self { evaluator, config })
    }

    /// The evaluator scoring leaves.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

impl<P, E> Searcher<P> for MinimaxSearcher<E>
where
    P: Position,
    E: Evaluator<P>,
{
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn search(&self, position: &mut P, depth: Depth) -> ScoredMove<P::Move> {
        minimax(position, depth, &self.evaluator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jamboree_core::tree::{NodeId, TreeEvaluator, TreePosition};

    fn run(notation: &str, depth: Depth) -> (ScoredMove<usize>, TreePosition) {
        let mut pos: TreePosition = notation.parse().unwrap();
        let result = minimax(&mut pos, depth, &TreeEvaluator::default());
        let result = ScoredMove {
            score: result.score,
            mv: result.mv.map(|mv| mv.target().index()),
        };
        (result, pos)
    }

    #[test]
    fn depth_zero_scores_statically() {
        let (result, _) = run("42(1 2)", 0);
        assert_eq!(result, ScoredMove::bound(42));
    }

    #[test]
    fn picks_max_of_negated_children() {
        // Child scores are from the opponent's side: -3, 2, -5 for us.
        let (result, _) = run("0(3 -2 5)", 1);
        assert_eq!(result, ScoredMove::new(2, 2));
    }

    #[test]
    fn two_ply_minimax() {
        // Mins over the grandchildren: 3, 2, 2.
        let (result, _) = run("0(0(3 12 8) 0(2 4 6) 0(14 5 2))", 2);
        assert_eq!(result, ScoredMove::new(3, 1));
    }

    #[test]
    fn first_move_wins_ties() {
        let (result, _) = run("0(1 -4 -4 2)", 1);
        assert_eq!(result, ScoredMove::new(4, 2));
    }

    #[test]
    fn checkmate_scores_by_depth() {
        for depth in 1..5 {
            let (result, _) = run("0+", depth);
            assert_eq!(result, ScoredMove::bound(-TreeEvaluator::MATE - depth as i32));
        }
    }

    #[test]
    fn stalemate_ignores_depth() {
        let eval = TreeEvaluator::new(1_000_000, 100_000, 7);
        for depth in 1..5 {
            let mut pos: TreePosition = "0".parse().unwrap();
            assert_eq!(minimax(&mut pos, depth, &eval), ScoredMove::bound(-7));
        }
    }

    #[test]
    fn prefers_faster_mate() {
        // Move 1 mates immediately, move 2 mates one move later.
        let (result, _) = run("0(0+ 0(0(0+)))", 4);
        assert_eq!(result.mv, Some(1));
        assert_eq!(result.score, TreeEvaluator::MATE + 3);
    }

    #[test]
    fn visits_every_node_and_restores_position() {
        let (_, pos) = run("0(0(3 12 8) 0(2 4 6) 0(14 5 2))", 2);
        assert_eq!(pos.current(), NodeId::ROOT);
        assert_eq!(pos.visited().len(), 12);
    }
}
