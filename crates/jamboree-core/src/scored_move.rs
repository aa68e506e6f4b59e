//! Score/move pair returned by every search node.

use std::ops::Neg;

use crate::position::Score;

/// A score paired with the move that produced it.
///
/// The score is from the perspective of the side to move at the node that
/// returned it. A value with no move is a pure score: a leaf value, a
/// terminal value, or a bound that no move improved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove<M> {
    /// Score from the mover's perspective.
    pub score: Score,
    /// The move achieving `score`, if any.
    pub mv: Option<M>,
}

impl<M> ScoredMove<M> {
    /// A score with a chosen move.
    pub const fn new(score: Score, mv: M) -> Self {
        Self {
            score,
            mv: Some(mv),
        }
    }

    /// A pure score with no move attached.
    pub const fn bound(score: Score) -> Self {
        Self { score, mv: None }
    }

    /// Flip the score into the opponent's perspective, keeping the move.
    #[inline]
    pub fn negate(self) -> Self {
        Self {
            score: -self.score,
            mv: self.mv,
        }
    }

    /// Replace the attached move.
    #[inline]
    pub fn with_move(self, mv: M) -> Self {
        Self {
            score: self.score,
            mv: Some(mv),
        }
    }

    /// Keep `self` unless `other` scores strictly higher.
    ///
    /// Callers pass candidates in move order, so ties resolve to the
    /// earlier move.
    #[inline]
    pub fn max_earliest(self, other: Self) -> Self {
        if other.score > self.score { other } else { self }
    }
}

impl<M> Neg for ScoredMove<M> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}
