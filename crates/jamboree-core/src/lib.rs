//! Core contracts for two-player game-tree search: positions, moves,
//! evaluators, and the scored-move value type.

mod error;
mod guard;
mod position;
mod scored_move;
pub mod tree;

pub use error::TreeError;
pub use guard::MoveGuard;
pub use position::{Depth, Evaluator, GameMove, Position, Score};
pub use scored_move::ScoredMove;
