//! Conflict counting (the search objective).

use super::Cost;

/// Counts attacking queen pairs on a board. Lower is better.
///
/// Both engines minimize through this trait, so any rule that is a pure
/// function of the board can be plugged in.
pub trait ConflictEvaluator {
    /// Returns the number of unordered column pairs `(i, j)`, `i < j`,
    /// whose queens attack each other.
    fn conflicts(&self, board: &[usize]) -> Cost;
}

/// Counts diagonal attacks only.
///
/// Intended for permutation boards, where no two queens can share a row
/// or a column.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagonalConflicts;

impl ConflictEvaluator for DiagonalConflicts {
    fn conflicts(&self, board: &[usize]) -> Cost {
        diagonal_conflicts(board)
    }
}

/// Counts row and diagonal attacks.
///
/// Intended for arbitrary assignments where several queens may share a row.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullConflicts;

impl ConflictEvaluator for FullConflicts {
    fn conflicts(&self, board: &[usize]) -> Cost {
        full_conflicts(board)
    }
}

/// Number of pairs `i < j` with `|board[i] - board[j]| == j - i`.
///
/// # Examples
///
/// ```
/// use u_nqueens::board::diagonal_conflicts;
///
/// assert_eq!(diagonal_conflicts(&[1, 3, 0, 2]), 0);
/// assert_eq!(diagonal_conflicts(&[0, 1, 2, 3]), 6);
/// ```
pub fn diagonal_conflicts(board: &[usize]) -> Cost {
    count_pairs(board, on_diagonal)
}

/// Number of pairs `i < j` sharing a row or a diagonal.
///
/// A pair that satisfies both conditions is counted once.
///
/// # Examples
///
/// ```
/// use u_nqueens::board::full_conflicts;
///
/// assert_eq!(full_conflicts(&[1, 3, 0, 2]), 0);
/// assert_eq!(full_conflicts(&[0, 0, 0, 0]), 6);
/// ```
pub fn full_conflicts(board: &[usize]) -> Cost {
    count_pairs(board, |ri, rj, dist| ri == rj || on_diagonal(ri, rj, dist))
}

/// Upper bound of any cost on a board of `n` columns: `n(n-1)/2`.
pub fn max_conflicts(n: usize) -> Cost {
    n * n.saturating_sub(1) / 2
}

#[inline]
fn on_diagonal(ri: usize, rj: usize, dist: usize) -> bool {
    ri.abs_diff(rj) == dist
}

#[inline]
fn count_pairs<F>(board: &[usize], attacks: F) -> Cost
where
    F: Fn(usize, usize, usize) -> bool,
{
    let n = board.len();
    let mut count = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if attacks(board[i], board[j], j - i) {
                count += 1;
            }
        }
    }
    count
}
