//! Scoped apply/undo of a single move.

use std::ops::{Deref, DerefMut};

use crate::position::Position;

/// Applies a move on construction and undoes it when dropped.
///
/// Every engine explores children through a guard, so an early return
/// (a pruning cutoff) still restores the position for the caller.
pub struct MoveGuard<'a, P: Position> {
    position: &'a mut P,
}

impl<'a, P: Position> MoveGuard<'a, P> {
    /// Apply `mv` to `position` until the guard is dropped.
    #[inline]
    pub fn new(position: &'a mut P, mv: &P::Move) -> Self {
        position.apply_move(mv);
        Self { position }
    }
}

impl<P: Position> Deref for MoveGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.position
    }
}

impl<P: Position> DerefMut for MoveGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.position
    }
}

impl<P: Position> Drop for MoveGuard<'_, P> {
    fn drop(&mut self) {
        self.position.undo_move();
    }
}
