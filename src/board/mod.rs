//! Board model and the conflict heuristic.
//!
//! A board is one row index per column: `board[c]` is the row of the queen
//! standing in column `c`. Boards used by hill climbing are permutations of
//! `0..N` (one queen per row); boards used by annealing may repeat rows.
//!
//! Random generation and text rendering live here too, but the engines in
//! [`crate::hc`] and [`crate::sa`] never call them.

mod conflicts;
mod generate;
mod render;
mod validate;

pub use conflicts::{
    diagonal_conflicts, full_conflicts, max_conflicts, ConflictEvaluator, DiagonalConflicts,
    FullConflicts,
};
pub use generate::{random_assignment, random_permutation};
pub use render::{render, BoardDisplay, EMPTY, QUEEN};
pub use validate::{validate_assignment, validate_permutation};

/// Row index of the queen in each column.
pub type Board = Vec<usize>;

/// Number of attacking queen pairs. Zero means solved.
pub type Cost = usize;
