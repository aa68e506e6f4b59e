//! Search engines for jamboree: minimax, alpha-beta negamax, and fork-join
//! parallel negamax with and without a sequential principal portion.

pub mod error;
pub mod search;

pub use error::{ConfigError, SearchError};
pub use search::config::{SearchConfig, SequentialFallback};
pub use search::ordering::{CaptureFirst, MoveRanker, Unordered};
pub use search::pool::SearchPool;
pub use search::{
    AlphaBetaSearcher, JamboreeSearcher, MinimaxSearcher, ParallelSearcher, Searcher,
};
