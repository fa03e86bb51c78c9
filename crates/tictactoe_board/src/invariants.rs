//! Invariants over board transitions.

use super::{Board, Position};

/// A property relating a state to the state produced from it.
pub trait TransitionInvariant<S> {
    /// Checks if the invariant holds for the transition `before -> after`.
    fn holds(before: &S, after: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: cells are write-once and a move fills at most one cell.
pub struct MonotonicBoard;

impl TransitionInvariant<Board> for MonotonicBoard {
    fn holds(before: &Board, after: &Board) -> bool {
        let mut changed = 0;
        for pos in Position::ALL {
            let (old, new) = (before.cell(pos), after.cell(pos));
            if old == new {
                continue;
            }
            if !old.is_empty() {
                return false;
            }
            changed += 1;
        }
        changed <= 1
    }

    fn description() -> &'static str {
        "Board cells are write-once and each move fills at most one cell"
    }
}
