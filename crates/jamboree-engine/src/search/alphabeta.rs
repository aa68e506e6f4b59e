//! Negamax alpha-beta search with move ranking.

use jamboree_core::{Depth, Evaluator, MoveGuard, Position, Score, ScoredMove};

use crate::error::SearchError;
use crate::search::Searcher;
use crate::search::config::SearchConfig;
use crate::search::ordering::{CaptureFirst, MoveRanker};

/// Negamax alpha-beta search.
///
/// Returns the best score for the side to move within `(alpha, beta)`.
/// If no move raises the score above `alpha`, the result carries no move
/// and its score is `alpha`. Moves are searched in the order produced by
/// `ranker`; among equal scores the earliest move is kept.
///
/// `alpha < beta` is a precondition. The position is restored on return,
/// including after a cutoff.
pub fn alphabeta<P, E, R>(
    position: &mut P,
    depth: Depth,
    mut alpha: Score,
    beta: Score,
    evaluator: &E,
    ranker: &R,
) -> ScoredMove<P::Move>
where
    P: Position,
    E: Evaluator<P>,
    R: MoveRanker<P, E>,
{
    debug_assert!(alpha < beta, "empty search window ({alpha}, {beta})");

    // Leaf node
    if depth == 0 {
        return ScoredMove::bound(evaluator.score_leaf(position));
    }

    let moves = ranker.rank(position.legal_moves(), position, evaluator);

    // No legal moves: checkmate or stalemate
    if moves.is_empty() {
        return ScoredMove::bound(evaluator.terminal_score(position, depth));
    }

    let mut best = ScoredMove::bound(alpha);

    for mv in moves {
        let score = {
            let mut child = MoveGuard::new(position, &mv);
            -alphabeta(&mut *child, depth - 1, -beta, -alpha, evaluator, ranker).score
        };

        if score > best.score {
            best = ScoredMove::new(score, mv);
            if score > alpha {
                alpha = score;
            }
        }

        if beta <= alpha {
            break;
        }
    }

    best
}

/// Single-threaded searcher running [`alphabeta`] over the full window.
#[derive(Debug, Clone)]
pub struct AlphaBetaSearcher<E, R = CaptureFirst> {
    evaluator: E,
    ranker: R,
    config: SearchConfig,
}

impl<E, R: Default> AlphaBetaSearcher<E, R> {
    /// Create a searcher with the default ranker.
    pub fn new(evaluator: E, config: SearchConfig) -> Result<Self, SearchError> {
        Self::with_ranker(evaluator, R::default(), config)
    }
}

impl<E, R> AlphaBetaSearcher<E, R> {
    /// Create a searcher with an explicit ranker.
    pub fn with_ranker(evaluator: E, ranker: R, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            evaluator,
            ranker,
            config,
        })
    }

    /// The evaluator scoring leaves.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

impl<P, E, R> Searcher<P> for AlphaBetaSearcher<E, R>
where
    P: Position,
    E: Evaluator<P>,
    R: MoveRanker<P, E>,
{
    fn name(&self) -> &'static str {
        "alphabeta"
    }

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn search(&self, position: &mut P, depth: Depth) -> ScoredMove<P::Move> {
        let infinity = self.evaluator.infinity();
        alphabeta(position, depth, -infinity, infinity, &self.evaluator, &self.ranker)
    }
}
