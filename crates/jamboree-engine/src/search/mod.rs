//! Search algorithms and move ordering.

pub mod alphabeta;
pub mod config;
pub mod jamboree;
pub mod minimax;
pub mod ordering;
pub mod parallel;
pub mod pool;

use std::time::{Duration, Instant};

use jamboree_core::{Depth, Position, ScoredMove};
use tracing::{debug, trace};

use config::SearchConfig;

pub use alphabeta::AlphaBetaSearcher;
pub use jamboree::JamboreeSearcher;
pub use minimax::MinimaxSearcher;
pub use parallel::ParallelSearcher;

/// A depth-bounded game-tree searcher.
pub trait Searcher<P: Position> {
    /// Short engine name used in logs.
    fn name(&self) -> &'static str;

    /// The configuration the searcher was built with.
    fn config(&self) -> &SearchConfig;

    /// Search `depth` plies from `position` over the full window.
    ///
    /// The score is from the perspective of the side to move. The result
    /// carries no move when `depth` is 0 or the position has no legal
    /// moves. `position` is restored before returning.
    fn search(&self, position: &mut P, depth: Depth) -> ScoredMove<P::Move>;

    /// [`search`](Searcher::search) at the configured depth.
    fn search_default(&self, position: &mut P) -> ScoredMove<P::Move> {
        self.search(position, self.config().depth)
    }

    /// Best move for the side to move, or `None` if there is nothing to
    /// choose from.
    ///
    /// The clock arguments are accepted for callers that track time but
    /// are not consulted: the search is bounded by `depth` alone.
    fn find_best_move(
        &self,
        position: &mut P,
        depth: Depth,
        my_time: Duration,
        opponent_time: Duration,
    ) -> Option<P::Move> {
        trace!(
            engine = self.name(),
            my_time_ms = my_time.as_millis() as u64,
            opponent_time_ms = opponent_time.as_millis() as u64,
            "clock budgets ignored by depth-bounded search"
        );

        let start = Instant::now();
        let result = self.search(position, depth);
        debug!(
            engine = self.name(),
            depth,
            score = result.score,
            best_move = ?result.mv,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search complete"
        );

        result.mv
    }
}
