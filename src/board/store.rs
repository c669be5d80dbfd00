//! View-model state holder for the board.

use crate::board::domain::{Board, BoardLayout, Column};

/// Authoritative in-memory snapshot of the board.
///
/// [`BoardStore::replace`] is the only way the snapshot changes. Callers
/// compute the next [`Board`] and swap it in whole once the remote store has
/// confirmed the corresponding write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStore {
    board: Board,
    revision: u64,
}

impl BoardStore {
    /// Creates a store holding three empty columns.
    #[must_use]
    pub fn new(layout: &BoardLayout) -> Self {
        Self {
            board: Board::empty(layout),
            revision: 0,
        }
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn snapshot(&self) -> &[Column] {
        self.board.columns()
    }

    /// Returns the whole board value.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Number of replacements applied so far.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the snapshot atomically.
    pub fn replace(&mut self, board: Board) {
        self.board = board;
        self.revision = self.revision.saturating_add(1);
    }
}
