//! Fork-join parallel negamax.
//!
//! A node's ranked move list is split into index ranges. Wide ranges are
//! halved, the left half forked while the current worker searches the
//! right half; narrow ranges fan out one task per move. Both halves of a
//! split search with the same window: narrowing one half's alpha with the
//! other's result would need the halves to share a bound while running.
//!
//! Ownership follows the fork structure. Range tasks only read the node's
//! position, so concurrent halves share it by reference. Each fan-out task
//! takes a private duplicate, applies its move, and owns that copy for
//! its whole subtree, mutating it freely in the sequential base case.

use jamboree_core::{Depth, Evaluator, Position, Score, ScoredMove};
use tracing::trace;

use crate::error::SearchError;
use crate::search::Searcher;
use crate::search::alphabeta::alphabeta;
use crate::search::config::{SearchConfig, SequentialFallback};
use crate::search::minimax::minimax;
use crate::search::ordering::{CaptureFirst, MoveRanker};
use crate::search::pool::SearchPool;

/// State shared by every task of one parallel search.
///
/// With `principal` set, each node searches the leading share of its
/// ranked moves sequentially before forking the rest (see
/// [`JamboreeSearcher`](crate::JamboreeSearcher)).
pub(super) struct ForkJoin<'a, E, R> {
    pub evaluator: &'a E,
    pub ranker: &'a R,
    pub config: &'a SearchConfig,
    pub principal: bool,
}

impl<E, R> ForkJoin<'_, E, R> {
    /// Search the node `position` is at, `depth` plies deep.
    ///
    /// The caller keeps ownership of `position`; it is left as it was
    /// found.
    pub(super) fn node<P>(&self, position: &mut P, depth: Depth, alpha: Score, beta: Score) -> ScoredMove<P::Move>
    where
        P: Position + Send + Sync,
        E: Evaluator<P> + Sync,
        R: MoveRanker<P, E>,
    {
        if depth <= self.config.sequential_cutoff {
            return self.sequential(position, depth, alpha, beta);
        }

        let moves = self.ranker.rank(position.legal_moves(), position, self.evaluator);

        // No legal moves: checkmate or stalemate
        if moves.is_empty() {
            return ScoredMove::bound(self.evaluator.terminal_score(position, depth));
        }

        if self.principal {
            self.principal_first(position, &moves, depth, alpha, beta)
        } else {
            self.range(&*position, &moves, 0, moves.len(), depth, alpha, beta)
        }
    }

    /// Best of `moves[lo..hi]` from `position`, which stays untouched.
    #[allow(clippy::too_many_arguments)]
    pub(super) fn range<P>(
        &self,
        position: &P,
        moves: &[P::Move],
        lo: usize,
        hi: usize,
        depth: Depth,
        alpha: Score,
        beta: Score,
    ) -> ScoredMove<P::Move>
    where
        P: Position + Send + Sync,
        E: Evaluator<P> + Sync,
        R: MoveRanker<P, E>,
    {
        debug_assert!(lo < hi, "empty move range {lo}..{hi}");

        if hi - lo <= self.config.divide_cutoff {
            return self.fan_out(position, moves, lo, hi, depth, alpha, beta);
        }

        let mid = lo + (hi - lo) / 2;
        // rayon::join runs its first closure inline and offers the second
        // for stealing, so the right half stays on this worker.
        let (right, left) = rayon::join(
            || self.range(position, moves, mid, hi, depth, alpha, beta),
            || self.range(position, moves, lo, mid, depth, alpha, beta),
        );
        left.max_earliest(right)
    }

    /// One task per move in `lo..hi`; all but the last are forked.
    #[allow(clippy::too_many_arguments)]
    fn fan_out<P>(
        &self,
        position: &P,
        moves: &[P::Move],
        lo: usize,
        hi: usize,
        depth: Depth,
        alpha: Score,
        beta: Score,
    ) -> ScoredMove<P::Move>
    where
        P: Position + Send + Sync,
        E: Evaluator<P> + Sync,
        R: MoveRanker<P, E>,
    {
        let targets = &moves[lo..hi];
        let mut results: Vec<Option<ScoredMove<P::Move>>> = targets.iter().map(|_| None).collect();

        rayon::scope(|s| {
            if let (Some((last_slot, forked_slots)), Some((last_move, forked_moves))) =
                (results.split_last_mut(), targets.split_last())
            {
                for (slot, mv) in forked_slots.iter_mut().zip(forked_moves) {
                    s.spawn(move |_| *slot = Some(self.child(position, mv, depth, alpha, beta)));
                }
                *last_slot = Some(self.child(position, last_move, depth, alpha, beta));
            }
        });

        // Index order with strict improvement: the lowest index wins ties.
        results
            .into_iter()
            .flatten()
            .reduce(ScoredMove::max_earliest)
            .unwrap_or(ScoredMove::bound(alpha))
    }

    /// Search the child reached by `mv` on a private copy of `position`.
    fn child<P>(&self, position: &P, mv: &P::Move, depth: Depth, alpha: Score, beta: Score) -> ScoredMove<P::Move>
    where
        P: Position + Send + Sync,
        E: Evaluator<P> + Sync,
        R: MoveRanker<P, E>,
    {
        let mut owned = position.duplicate();
        owned.apply_move(mv);
        let reply = self.node(&mut owned, depth - 1, -beta, -alpha);
        ScoredMove::new(-reply.score, mv.clone())
    }

    fn sequential<P>(&self, position: &mut P, depth: Depth, alpha: Score, beta: Score) -> ScoredMove<P::Move>
    where
        P: Position,
        E: Evaluator<P>,
        R: MoveRanker<P, E>,
    {
        match self.config.fallback {
            SequentialFallback::AlphaBeta => alphabeta(position, depth, alpha, beta, self.evaluator, self.ranker),
            SequentialFallback::Minimax => minimax(position, depth, self.evaluator),
        }
    }
}

/// Fork-join parallel negamax over an engine-owned worker pool.
#[derive(Debug)]
pub struct ParallelSearcher<E, R = CaptureFirst> {
    evaluator: E,
    ranker: R,
    config: SearchConfig,
    pool: SearchPool,
}

impl<E, R: Default> ParallelSearcher<E, R> {
    /// Create a searcher with the default ranker, starting its worker pool.
    pub fn new(evaluator: E, config: SearchConfig) -> Result<Self, SearchError> {
        Self::with_ranker(evaluator, R::default(), config)
    }
}

impl<E, R> ParallelSearcher<E, R> {
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

impl<P, E, R> Searcher<P> for ParallelSearcher<E, R>
where
    P: Position + Send + Sync,
    E: Evaluator<P> + Sync,
    R: MoveRanker<P, E>,
{
    fn name(&self) -> &'static str {
        "parallel"
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
            principal: false,
        };
        trace!(
            engine = "parallel",
            depth,
            forks = depth > self.config.sequential_cutoff,
            threads = self.pool.num_threads(),
            "root search"
        );
        self.pool.install(|| tasks.node(position, depth, -infinity, infinity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::alphabeta::AlphaBetaSearcher;
    use jamboree_core::tree::{NodeId, TreeEvaluator, TreePosition};

    fn searcher(config: SearchConfig) -> ParallelSearcher<TreeEvaluator> {
        ParallelSearcher::new(TreeEvaluator::default(), config).unwrap()
    }

    fn target(result: &ScoredMove<jamboree_core::tree::TreeMove>) -> Option<usize> {
        result.mv.map(|mv| mv.target().index())
    }

    // Eight root moves so ranges both divide and fan out.
    const WIDE: &str = "0(0(3 12) 0(2 4) 0(14 5) 0(-1 9) 0(6 8) 0(7 11) 0(1 13) 0(10 15))";

    #[test]
    fn matches_alphabeta_when_forking() {
        let sequential: AlphaBetaSearcher<TreeEvaluator> =
            AlphaBetaSearcher::new(TreeEvaluator::default(), SearchConfig::default()).unwrap();
        let parallel = searcher(SearchConfig::default().with_sequential_cutoff(0).with_threads(4));

        let mut pos: TreePosition = WIDE.parse().unwrap();
        let expected = sequential.search(&mut pos, 2);
        let actual = parallel.search(&mut pos, 2);
        assert_eq!(actual, expected);
        // Best is 0(10 15): min 10.
        assert_eq!(actual.score, 10);
        assert_eq!(target(&actual), Some(22));
    }

    #[test]
    fn root_position_is_left_untouched() {
        let parallel = searcher(SearchConfig::default().with_sequential_cutoff(0).with_threads(2));
        let mut pos: TreePosition = WIDE.parse().unwrap();
        parallel.search(&mut pos, 2);
        assert_eq!(pos.current(), NodeId::ROOT);
        assert!(pos.visited().is_empty(), "forked tasks must work on duplicates");
    }

    #[test]
    fn below_cutoff_delegates_to_sequential() {
        let parallel = searcher(SearchConfig::default().with_sequential_cutoff(3).with_threads(2));
        let mut pos: TreePosition = WIDE.parse().unwrap();
        let result = parallel.search(&mut pos, 2);
        assert_eq!(result.score, 10);
        // The sequential engine mutates the caller's position in place and
        // restores it.
        assert_eq!(pos.current(), NodeId::ROOT);
        assert!(!pos.visited().is_empty());
    }

    #[test]
    fn fan_out_ties_go_to_lowest_index() {
        let parallel = searcher(SearchConfig::default().with_sequential_cutoff(0).with_threads(4));
        // Three moves fan out directly; the last one is searched inline first.
        let mut pos: TreePosition = "0(5 -3 -3)".parse().unwrap();
        let result = parallel.search(&mut pos, 1);
        assert_eq!(result.score, 3);
        assert_eq!(target(&result), Some(2));
    }

    #[test]
    fn divide_ties_go_to_left_half() {
        let config = SearchConfig::default()
            .with_sequential_cutoff(0)
            .with_divide_cutoff(1)
            .with_threads(4);
        let parallel = searcher(config);
        let mut pos: TreePosition = "0(5 -3 1 -3 -3 2)".parse().unwrap();
        let result = parallel.search(&mut pos, 1);
        assert_eq!(result.score, 3);
        assert_eq!(target(&result), Some(2));
    }

    #[test]
    fn terminal_root() {
        let parallel = searcher(SearchConfig::default().with_sequential_cutoff(0).with_threads(2));
        let mut mated: TreePosition = "9+".parse().unwrap();
        let mut stalemated: TreePosition = "9".parse().unwrap();
        assert_eq!(parallel.search(&mut mated, 3), ScoredMove::bound(-TreeEvaluator::MATE - 3));
        assert_eq!(parallel.search(&mut stalemated, 3), ScoredMove::bound(0));
    }

    #[test]
    fn minimax_fallback() {
        let config = SearchConfig::default()
            .with_sequential_cutoff(1)
            .with_fallback(SequentialFallback::Minimax)
            .with_threads(2);
        let parallel = searcher(config);
        let mut pos: TreePosition = WIDE.parse().unwrap();
        let result = parallel.search(&mut pos, 2);
        assert_eq!(result.score, 10);
        assert_eq!(target(&result), Some(22));
    }

    #[test]
    fn rejects_invalid_config() {
        let result: Result<ParallelSearcher<TreeEvaluator>, _> = ParallelSearcher::new(
            TreeEvaluator::default(),
            SearchConfig::default().with_divide_cutoff(0),
        );
        assert!(matches!(result, Err(SearchError::Config { .. })));
    }
}
