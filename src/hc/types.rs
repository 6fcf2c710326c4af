//! Swap neighborhood for permutation boards.

/// Exchange of the rows held by columns `i` and `j` (`i < j`).
///
/// Swapping keeps a permutation a permutation, so hill climbing never
/// introduces row conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapMove {
    /// Lower column index.
    pub i: usize,
    /// Higher column index.
    pub j: usize,
}

impl SwapMove {
    /// Applies the swap in place. Applying it twice restores the board.
    #[inline]
    pub fn apply(&self, board: &mut [usize]) {
        board.swap(self.i, self.j);
    }
}

/// Lazy enumeration of every [`SwapMove`] on a board of `n` columns.
///
/// Yields `n(n-1)/2` moves ordered by `i` ascending, then `j` ascending.
/// No neighbor board is materialized; callers apply and undo each move on
/// a scratch board.
///
/// # Examples
///
/// ```
/// use u_nqueens::hc::{SwapMove, SwapMoves};
///
/// let moves: Vec<SwapMove> = SwapMoves::new(3).collect();
/// assert_eq!(
///     moves,
///     vec![
///         SwapMove { i: 0, j: 1 },
///         SwapMove { i: 0, j: 2 },
///         SwapMove { i: 1, j: 2 },
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SwapMoves {
    n: usize,
    i: usize,
    j: usize,
}

impl SwapMoves {
    /// Enumerates the swap neighborhood of an `n`-column board.
    pub fn new(n: usize) -> Self {
        Self { n, i: 0, j: 1 }
    }

    /// Total neighborhood size, `n(n-1)/2`.
    pub fn neighborhood_size(n: usize) -> usize {
        n * n.saturating_sub(1) / 2
    }
}

impl Iterator for SwapMoves {
    type Item = SwapMove;

    fn next(&mut self) -> Option<SwapMove> {
        if self.j >= self.n {
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= self.n {
                return None;
            }
        }
        let mv = SwapMove {
            i: self.i,
            j: self.j,
        };
        self.j += 1;
        Some(mv)
    }
}
