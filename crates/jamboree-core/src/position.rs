//! Capability contracts consumed by the search engines.

use std::fmt::Debug;

/// Signed search score, always from the perspective of the side to move.
pub type Score = i32;

/// Remaining search depth in plies.
pub type Depth = u8;

/// A unit of state transition produced by a [`Position`].
///
/// Moves are opaque to the search apart from the capture flag, which is
/// only used to order them.
pub trait GameMove: Clone + Eq + Debug + Send + Sync {
    /// Whether this move captures material.
    fn is_capture(&self) -> bool;
}

/// A mutable game state.
///
/// The search never constructs positions. It mutates them in place with
/// [`apply_move`](Position::apply_move)/[`undo_move`](Position::undo_move)
/// and takes a [`duplicate`](Position::duplicate) whenever a subtree will be
/// explored concurrently with its siblings.
pub trait Position: Sized {
    /// Move type generated by this position.
    type Move: GameMove;

    /// All legal moves for the side to move, in generation order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply `mv` in place. `mv` must be legal in the current state.
    fn apply_move(&mut self, mv: &Self::Move);

    /// Undo the most recently applied move.
    fn undo_move(&mut self);

    /// Produce an independently mutable copy of this position.
    fn duplicate(&self) -> Self;

    /// Whether the side to move is in check.
    fn is_in_check(&self) -> bool;
}

/// Static evaluation plus the sentinel magnitudes used by the search.
///
/// Implementations must keep `mate_penalty() + max_depth < infinity()` so
/// that every terminal score lies strictly inside the root window.
pub trait Evaluator<P: Position> {
    /// Score `position` from the perspective of its side to move.
    fn score_leaf(&self, position: &P) -> Score;

    /// Bound larger in magnitude than any reachable score.
    fn infinity(&self) -> Score;

    /// Base penalty for being checkmated. The search subtracts the
    /// remaining depth so that faster mates are preferred.
    fn mate_penalty(&self) -> Score;

    /// Penalty for being stalemated.
    fn stalemate_penalty(&self) -> Score;

    /// Score of a node with no legal moves.
    ///
    /// Checkmate is `-mate_penalty - depth`; stalemate is `-stalemate_penalty`
    /// regardless of depth.
    fn terminal_score(&self, position: &P, depth: Depth) -> Score {
        if position.is_in_check() {
            -self.mate_penalty() - Score::from(depth)
        } else {
            -self.stalemate_penalty()
        }
    }
}
