//! Hill climbing execution engine.
//!
//! # Algorithm (steepest descent)
//!
//! 1. Evaluate the starting board
//! 2. At each step:
//!    a. Evaluate every swap neighbor (lazily, in place)
//!    b. Keep the first neighbor with the lowest cost
//!    c. If it is strictly better than the current board, move there;
//!    otherwise stop at the local optimum
//!
//! Each accepted step lowers the cost by at least one, so the search ends
//! after at most `n(n-1)/2` steps.

use log::{debug, trace};

use super::config::HcConfig;
use super::types::{SwapMove, SwapMoves};
use crate::board::{Board, ConflictEvaluator, Cost, DiagonalConflicts};

/// Result of a hill climbing run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcResult {
    /// Final board.
    pub board: Board,
    /// Cost of the final board.
    pub cost: Cost,
    /// Number of accepted improving steps.
    pub steps: usize,
    /// Number of neighbor evaluations.
    pub evaluations: usize,
    /// `true` when the search stopped because no neighbor improves;
    /// `false` when the step budget ran out first, in which case the final
    /// board's neighborhood was not scanned.
    pub local_optimum: bool,
    /// Cost after each accepted step, starting with the initial cost.
    pub cost_history: Vec<Cost>,
}

impl HcResult {
    /// Whether the final board has no attacking pairs.
    pub fn is_solution(&self) -> bool {
        self.cost == 0
    }
}

/// Steepest-descent hill climbing over the swap neighborhood.
pub struct HcRunner;

impl HcRunner {
    /// Runs hill climbing from a permutation board, scoring diagonal
    /// conflicts only.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_nqueens::hc::{HcConfig, HcRunner};
    ///
    /// let result = HcRunner::run(&[0, 1, 2, 3, 4, 5, 6, 7], &HcConfig::default());
    /// assert!(result.cost < 28);
    /// assert!(result.local_optimum);
    /// ```
    pub fn run(initial: &[usize], config: &HcConfig) -> HcResult {
        debug_assert!(
            crate::board::validate_permutation(initial).is_ok(),
            "hill climbing requires a permutation board"
        );
        Self::run_with_evaluator(initial, config, &DiagonalConflicts)
    }

    /// Runs hill climbing with a caller-chosen conflict rule.
    pub fn run_with_evaluator<E: ConflictEvaluator>(
        initial: &[usize],
        config: &HcConfig,
        evaluator: &E,
    ) -> HcResult {
        debug_assert!(crate::board::validate_assignment(initial).is_ok());

        let n = initial.len();
        let mut current: Board = initial.to_vec();
        let mut current_cost = evaluator.conflicts(&current);
        let mut cost_history = vec![current_cost];
        let mut steps = 0usize;
        let mut evaluations = 0usize;
        let mut local_optimum = true;

        debug!("hill climbing: n={n}, initial cost={current_cost}");

        loop {
            if config.max_steps > 0 && steps >= config.max_steps {
                local_optimum = false;
                break;
            }

            let Some((mv, best_cost)) = best_swap(&mut current, evaluator, &mut evaluations) else {
                break;
            };

            if best_cost >= current_cost {
                break;
            }

            mv.apply(&mut current);
            current_cost = best_cost;
            steps += 1;
            cost_history.push(current_cost);

            trace!("step {steps}: swap ({}, {}) -> cost {current_cost}", mv.i, mv.j);
        }

        debug!(
            "hill climbing finished: cost={current_cost}, steps={steps}, evaluations={evaluations}, local_optimum={local_optimum}"
        );

        HcResult {
            board: current,
            cost: current_cost,
            steps,
            evaluations,
            local_optimum,
            cost_history,
        }
    }
}

/// Finds the first lowest-cost swap neighbor of `board`.
///
/// Each swap is applied, scored, and undone, so `board` is unchanged on
/// return. Returns `None` when the neighborhood is empty (`n <= 1`).
fn best_swap<E: ConflictEvaluator>(
    board: &mut [usize],
    evaluator: &E,
    evaluations: &mut usize,
) -> Option<(SwapMove, Cost)> {
    let mut best: Option<(SwapMove, Cost)> = None;

    for mv in SwapMoves::new(board.len()) {
        mv.apply(board);
        let cost = evaluator.conflicts(board);
        mv.apply(board);
        *evaluations += 1;

        // Strict comparison keeps the earliest move among ties.
        if best.is_none_or(|(_, best_cost)| cost < best_cost) {
            best = Some((mv, cost));
        }
    }

    best
}
