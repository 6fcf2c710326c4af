//! Single-queen relocation move.

use rand::Rng;

/// Moves the queen in column `col` to row `row`.
///
/// `row` may equal the queen's current row. Such a self-move leaves the
/// board unchanged and simply spends one iteration of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelocateMove {
    /// Column whose queen moves.
    pub col: usize,
    /// Destination row.
    pub row: usize,
}

impl RelocateMove {
    /// Draws a uniform column, then a uniform row, both in `[0, n)`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let col = rng.random_range(0..n);
        let row = rng.random_range(0..n);
        Self { col, row }
    }

    /// Applies the move in place and returns the row it replaced, so the
    /// caller can undo it with [`undo`](Self::undo).
    #[inline]
    pub fn apply(&self, board: &mut [usize]) -> usize {
        std::mem::replace(&mut board[self.col], self.row)
    }

    /// Restores the row returned by [`apply`](Self::apply).
    #[inline]
    pub fn undo(&self, board: &mut [usize], previous_row: usize) {
        board[self.col] = previous_row;
    }
}
