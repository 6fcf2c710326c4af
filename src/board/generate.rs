//! Random starting boards.

use rand::seq::SliceRandom;
use rand::Rng;

use super::Board;

/// Uniformly shuffled permutation of `0..n`.
///
/// One queen per row and per column, so only diagonal attacks remain.
/// This is the starting point hill climbing expects.
///
/// # Examples
///
/// ```
/// use u_nqueens::board::{random_permutation, validate_permutation};
/// use u_nqueens::random::create_rng;
///
/// let board = random_permutation(8, &mut create_rng(42));
/// assert!(validate_permutation(&board).is_ok());
/// ```
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Board {
    let mut board: Board = (0..n).collect();
    board.shuffle(rng);
    board
}

/// `n` independent uniform rows in `[0, n)`.
///
/// Rows may repeat. This is the starting point annealing expects.
pub fn random_assignment<R: Rng>(n: usize, rng: &mut R) -> Board {
    (0..n).map(|_| rng.random_range(0..n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{validate_assignment, validate_permutation};
    use crate::random::create_rng;

    #[test]
    fn test_permutation_is_valid() {
        let mut rng = create_rng(42);
        for n in 0..20 {
            let board = random_permutation(n, &mut rng);
            assert_eq!(board.len(), n);
            assert!(validate_permutation(&board).is_ok());
        }
    }

    #[test]
    fn test_assignment_is_in_range() {
        let mut rng = create_rng(7);
        for n in 0..20 {
            let board = random_assignment(n, &mut rng);
            assert_eq!(board.len(), n);
            assert!(validate_assignment(&board).is_ok());
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = random_permutation(16, &mut create_rng(3));
        let b = random_permutation(16, &mut create_rng(3));
        assert_eq!(a, b);
    }
}
