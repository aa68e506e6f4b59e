//! Move ranking ahead of expansion.

use jamboree_core::{GameMove, Position};

/// Orders a move list so that likely-strong moves are searched first.
///
/// Ranking consumes the list and returns a new ordering, so a subtree that
/// ranks its own moves never disturbs the list its parent is iterating.
pub trait MoveRanker<P: Position, E>: Sync {
    /// Return `moves` reordered for search.
    fn rank(&self, moves: Vec<P::Move>, position: &P, evaluator: &E) -> Vec<P::Move>;
}

/// Captures before quiet moves, generation order otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureFirst;

impl<P: Position, E> MoveRanker<P, E> for CaptureFirst {
    fn rank(&self, mut moves: Vec<P::Move>, _position: &P, _evaluator: &E) -> Vec<P::Move> {
        // Stable: `false < true`, so captures (key `false`) lead.
        moves.sort_by_key(|mv| !mv.is_capture());
        moves
    }
}

/// Keeps generation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unordered;

impl<P: Position, E> MoveRanker<P, E> for Unordered {
    #[inline]
    fn rank(&self, moves: Vec<P::Move>, _position: &P, _evaluator: &E) -> Vec<P::Move> {
        moves
    }
}
