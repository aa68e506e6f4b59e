//! Hybrid ordered-parallel negamax ("jamboree").
//!
//! Each node above the sequential cutoff first searches the leading share
//! of its ranked moves one at a time, raising alpha after every move and
//! stopping at the first cutoff. Only then is the rest of the list handed
//! to the fork-join range search, with the tightened window. With a decent
//! ranking the best move usually sits in that prefix, so the forked
//! siblings mostly fail low quickly.

use jamboree_core::{Depth, Evaluator, MoveGuard, Position, Score, ScoredMove};
use tracing::trace;

use crate::error::SearchError;
use crate::search::Searcher;
use crate::search::config::SearchConfig;
use crate::search::ordering::{CaptureFirst, MoveRanker};
use crate::search::parallel::ForkJoin;
use crate::search::pool::SearchPool;

impl<E, R> ForkJoin<'_, E, R> {
    /// Sequential prefix of `moves`, then a fork-join search of the rest.
    ///
    /// The prefix runs on `position` itself: the node owns it exclusively
    /// until it forks, and every move is undone by its guard before the
    /// remainder shares the position with forked tasks.
    pub(super) fn principal_first<P>(
        &self,
        position: &mut P,
        moves: &[P::Move],
        depth: Depth,
        mut alpha: Score,
        beta: Score,
    ) -> ScoredMove<P::Move>
    where
        P: Position + Send + Sync,
        E: Evaluator<P> + Sync,
        R: MoveRanker<P, E>,
    {
        let split = self.config.principal_split(moves.len());
        let mut best = ScoredMove::bound(alpha);

        for mv in &moves[..split] {
            let score = {
                let mut child = MoveGuard::new(position, mv);
                -self.node(&mut *child, depth - 1, -beta, -alpha).score
            };

            if score > alpha {
                alpha = score;
                best = ScoredMove::new(score, mv.clone());
            }

            if alpha >= beta {
                return best;
            }
        }

        if split == moves.len() {
            return best;
        }

        let rest = self.range(&*position, moves, split, moves.len(), depth, alpha, beta);
        best.max_earliest(rest)
    }
}

/// Fork-join negamax with a sequential principal portion at every node.
#[derive(Debug)]
pub struct JamboreeSearcher<E, R = CaptureFirst> {
    evaluator: E,
    ranker: R,
    config: SearchConfig,
    pool: SearchPool,
}

impl<E, R: Default> JamboreeSearcher<E, R> {
    /// Create a searcher with the default ranker, starting its worker pool.
    pub fn new(evaluator: E, config: SearchConfig) -> Result<Self, SearchError> {
        Self::with_ranker(evaluator, R::default(), config)
    }
}

impl<E, R> JamboreeSearcher<E, R> {
    /// Create a searcher with an explicit ranker, starting its worker pool.
    pub fn with_ranker(evaluator: E, ranker: R, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let pool = SearchPool::new(config.threads)?;
        Ok(Self {
            evaluator,
            ranker,
            config,
            pool,
        })
    }

    /// The worker pool searches run on.
    pub fn pool(&self) -> &SearchPool {
        &self.pool
    }
}

impl<P, E, R> Searcher<P> for JamboreeSearcher<E, R>
where
    P: Position + Send + Sync,
    E: Evaluator<P> + Sync,
    R: MoveRanker<P, E>,
{
    fn name(&self) -> &'static str {
        "jamboree"
    }

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn search(&self, position: &mut P, depth: Depth) -> ScoredMove<P::Move> {
        let infinity = self.evaluator.infinity();
        let tasks = ForkJoin {
            evaluator: &self.evaluator,
            ranker: &self.ranker,
            config: &self.config,
            principal: true,
        };
        trace!(
            engine = "jamboree",
            depth,
            forks = depth > self.config.sequential_cutoff,
            threads = self.pool.num_threads(),
            "root search"
        );
        self.pool.install(|| tasks.node(position, depth, -infinity, infinity))
    }
}
