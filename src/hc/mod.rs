//! Steepest-descent Hill Climbing (HC).
//!
//! Starts from a permutation board and repeatedly moves to the best
//! neighbor obtained by swapping the rows of two columns, as long as that
//! neighbor strictly lowers the number of attacking pairs. Fully
//! deterministic: the same start always reaches the same local optimum.
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, §4.1.1

mod config;
mod runner;
mod types;

pub use config::HcConfig;
pub use runner::{HcResult, HcRunner};
pub use types::{SwapMove, SwapMoves};
