//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Each iteration relocates one random queen to a random
//! row and accepts the result by the Metropolis criterion under a
//! geometrically decaying temperature, allowing the search to escape
//! local optima. The best board seen is returned.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;
mod types;

pub use config::SaConfig;
pub use runner::{acceptance_probability, SaResult, SaRunner};
pub use types::RelocateMove;
