//! Local search for the N-Queens problem.
//!
//! Place `N` queens on an `N x N` board so that no two attack each other.
//! A board is stored as one row index per column, and its cost is the
//! number of attacking pairs. Two engines minimize that cost:
//!
//! - **Hill Climbing (HC)**: deterministic steepest descent over the swap
//!   neighborhood of a permutation board. Stops at the first local optimum.
//! - **Simulated Annealing (SA)**: random single-queen relocations accepted
//!   by the Metropolis criterion under geometric cooling. Returns the best
//!   board seen.
//!
//! Neither engine guarantees a solution; a nonzero final cost is a normal
//! outcome.
//!
//! # Example
//!
//! ```
//! use u_nqueens::board::{random_assignment, random_permutation, render};
//! use u_nqueens::hc::{HcConfig, HcRunner};
//! use u_nqueens::random::create_rng;
//! use u_nqueens::sa::{SaConfig, SaRunner};
//!
//! let mut rng = create_rng(42);
//!
//! let start = random_permutation(8, &mut rng);
//! let climbed = HcRunner::run(&start, &HcConfig::default());
//! println!("{}", render(&climbed.board));
//!
//! let start = random_assignment(8, &mut rng);
//! let annealed = SaRunner::run_with_rng(&start, &SaConfig::default(), &mut rng);
//! assert!(annealed.cost <= 28);
//! ```

pub mod board;
pub mod hc;
pub mod random;
pub mod sa;
