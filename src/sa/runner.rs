//! SA execution loop.

use log::{debug, trace};
use rand::Rng;

use super::config::SaConfig;
use super::types::RelocateMove;
use crate::board::{Board, ConflictEvaluator, Cost, FullConflicts};
use crate::random::rng_from_seed;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The best board seen during the run.
    pub board: Board,

    /// Cost of the best board.
    pub cost: Cost,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements and self-moves).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best cost sampled every `history_interval` iterations, starting with
    /// the initial cost and ending with the final one.
    pub cost_history: Vec<Cost>,
}

impl SaResult {
    /// Whether the best board has no attacking pairs.
    pub fn is_solution(&self) -> bool {
        self.cost == 0
    }
}

/// Executes Simulated Annealing on N-Queens boards.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from `initial`, counting row and diagonal conflicts.
    ///
    /// The RNG is seeded from `config.seed`; a fixed seed gives a fixed
    /// result.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`SaConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_nqueens::sa::{SaConfig, SaRunner};
    ///
    /// let config = SaConfig::default().with_seed(42);
    /// let result = SaRunner::run(&[0, 0, 0, 0, 0, 0, 0, 0], &config);
    /// assert_eq!(result.iterations, config.expected_iterations());
    /// assert!(result.cost < 28);
    /// ```
    pub fn run(initial: &[usize], config: &SaConfig) -> SaResult {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(initial, config, &mut rng)
    }

    /// Runs SA drawing from a caller-owned RNG. `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(initial: &[usize], config: &SaConfig, rng: &mut R) -> SaResult {
        Self::run_with_evaluator(initial, config, &FullConflicts, rng)
    }

    /// Runs SA with a caller-chosen conflict rule and RNG.
    pub fn run_with_evaluator<E: ConflictEvaluator, R: Rng>(
        initial: &[usize],
        config: &SaConfig,
        evaluator: &E,
        rng: &mut R,
    ) -> SaResult {
        if let Err(e) = config.validate() {
            panic!("invalid SaConfig: {e}");
        }
        debug_assert!(crate::board::validate_assignment(initial).is_ok());

        let n = initial.len();
        let mut current: Board = initial.to_vec();
        let mut current_cost = evaluator.conflicts(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cost_history = vec![best_cost];

        debug!(
            "annealing: n={n}, initial cost={current_cost}, T0={}, Tmin={}, alpha={}",
            config.initial_temperature, config.min_temperature, config.alpha
        );

        // With at most one column every move is a self-move.
        if n <= 1 {
            return SaResult {
                board: best,
                cost: best_cost,
                iterations,
                final_temperature: temperature,
                accepted_moves,
                improving_moves,
                cost_history,
            };
        }

        while temperature > config.min_temperature {
            let mv = RelocateMove::random(n, rng);
            let previous_row = mv.apply(&mut current);
            let neighbor_cost = evaluator.conflicts(&current);
            let delta = neighbor_cost as i64 - current_cost as i64;

            if metropolis_accept(delta, temperature, rng) {
                current_cost = neighbor_cost;
                accepted_moves += 1;

                if delta < 0 {
                    improving_moves += 1;
                    if current_cost < best_cost {
                        best.copy_from_slice(&current);
                        best_cost = current_cost;
                        trace!("iteration {iterations}: new best {best_cost} at T={temperature:.6}");
                    }
                }
            } else {
                mv.undo(&mut current, previous_row);
            }

            temperature = config.cool(temperature);
            iterations += 1;

            if iterations.is_multiple_of(config.history_interval) {
                cost_history.push(best_cost);
            }
        }

        if cost_history.last() != Some(&best_cost) {
            cost_history.push(best_cost);
        }

        debug!(
            "annealing finished: best cost={best_cost}, iterations={iterations}, accepted={accepted_moves}, improving={improving_moves}"
        );

        SaResult {
            board: best,
            cost: best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        }
    }
}

/// Probability of accepting a move that changes the cost by `delta` at
/// `temperature`: 1 for `delta <= 0`, `exp(-delta / T)` otherwise.
///
/// # Examples
///
/// ```
/// use u_nqueens::sa::acceptance_probability;
///
/// assert_eq!(acceptance_probability(0, 5.0), 1.0);
/// assert!((acceptance_probability(1, 1.0) - (-1.0f64).exp()).abs() < 1e-12);
/// ```
pub fn acceptance_probability(delta: i64, temperature: f64) -> f64 {
    if delta <= 0 {
        1.0
    } else {
        (-(delta as f64) / temperature).exp()
    }
}

/// Metropolis criterion.
///
/// Improvements are taken without consuming randomness. Anything else
/// draws one uniform number in `[0, 1)` and is accepted iff it falls below
/// [`acceptance_probability`], so equal-cost moves are always accepted.
fn metropolis_accept<R: Rng>(delta: i64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0 {
        return true;
    }
    rng.random_range(0.0..1.0) < acceptance_probability(delta, temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{full_conflicts, random_assignment, DiagonalConflicts};
    use crate::random::create_rng;

    fn short_schedule() -> SaConfig {
        SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(0.1)
            .with_alpha(0.9)
            .with_history_interval(5)
    }

    #[test]
    fn test_single_queen_returns_immediately() {
        let result = SaRunner::run(&[0], &SaConfig::default().with_seed(1));
        assert_eq!(result.board, vec![0]);
        assert_eq!(result.cost, 0);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.cost_history, vec![0]);
    }

    #[test]
    fn test_empty_board() {
        let result = SaRunner::run(&[], &SaConfig::default().with_seed(1));
        assert!(result.board.is_empty());
        assert_eq!(result.cost, 0);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_iteration_count_default_schedule() {
        let config = SaConfig::default().with_seed(42);
        let result = SaRunner::run(&[0, 0, 0, 0, 0, 0, 0, 0], &config);
        assert_eq!(result.iterations, 13_809);
        assert_eq!(result.iterations, config.expected_iterations());
        assert!(result.final_temperature <= config.min_temperature);
    }

    #[test]
    fn test_iteration_count_independent_of_board() {
        let config = short_schedule().with_seed(3);
        let mut rng = create_rng(9);
        for n in 2..10 {
            let board = random_assignment(n, &mut rng);
            let result = SaRunner::run(&board, &config);
            assert_eq!(result.iterations, 44);
        }
    }

    #[test]
    fn test_best_cost_matches_board() {
        let config = SaConfig::default().with_seed(7);
        let result = SaRunner::run(&[0, 0, 0, 0, 0, 0, 0, 0], &config);
        assert_eq!(result.cost, full_conflicts(&result.board));
        assert!(result.cost < 28, "expected improvement, got {}", result.cost);
        assert!(crate::board::validate_assignment(&result.board).is_ok());
    }

    #[test]
    fn test_seed_reproducibility() {
        let board = [3, 3, 0, 1, 7, 2, 2, 5];
        let config = SaConfig::default().with_seed(99);
        let a = SaRunner::run(&board, &config);
        let b = SaRunner::run(&board, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_with_rng_matches_seeded_run() {
        let board = [1, 1, 1, 1, 1, 1];
        let config = short_schedule().with_seed(5);
        let a = SaRunner::run(&board, &config);
        let b = SaRunner::run_with_rng(&board, &config, &mut create_rng(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_cost_history_non_increasing() {
        let config = SaConfig::default().with_seed(42);
        let result = SaRunner::run(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0], &config);

        assert_eq!(result.cost_history[0], 45);
        assert_eq!(*result.cost_history.last().unwrap(), result.cost);
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_iteration_count_when_rounding_leaves_temperature_above_min() {
        for (t0, t_min, alpha, expected) in [(1.0, 1e-3, 0.1, 4), (100.0, 1e-2, 0.1, 5)] {
            let config = SaConfig::default()
                .with_initial_temperature(t0)
                .with_min_temperature(t_min)
                .with_alpha(alpha)
                .with_seed(1);
            let result = SaRunner::run(&[0, 0, 0], &config);
            assert_eq!(result.iterations, expected);
            assert_eq!(result.iterations, config.expected_iterations());
        }
    }

    #[test]
    fn test_best_cost_running_minimum_every_iteration() {
        let config = short_schedule().with_history_interval(1).with_seed(42);
        let result = SaRunner::run(&[0, 0, 0, 0, 0, 0, 0, 0], &config);

        assert_eq!(result.cost_history.len(), result.iterations + 1);
        assert_eq!(result.cost_history[0], 28);
        assert_eq!(*result.cost_history.last().unwrap(), result.cost);
        for (k, window) in result.cost_history.windows(2).enumerate() {
            assert!(
                window[1] <= window[0],
                "best cost rose at iteration {}: {} > {}",
                k + 1,
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_solved_board_stays_solved() {
        let solved = [0, 4, 7, 5, 2, 6, 1, 3];
        let result = SaRunner::run(&solved, &short_schedule().with_seed(1));
        assert_eq!(result.cost, 0);
        assert_eq!(result.board, solved.to_vec());
        assert_eq!(result.improving_moves, 0);
    }

    #[test]
    fn test_high_temperature_accepts_uphill() {
        let config = SaConfig::default()
            .with_initial_temperature(1e8)
            .with_min_temperature(1e7)
            .with_alpha(0.999)
            .with_seed(42);

        let result = SaRunner::run(&[1, 3, 0, 2, 1, 3, 0, 2], &config);

        let acceptance_ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(
            acceptance_ratio > 0.99,
            "expected near-total acceptance at high temp, got {acceptance_ratio}"
        );
    }

    #[test]
    fn test_accepted_counts_are_consistent() {
        let result = SaRunner::run(&[0, 0, 0, 0, 0, 0], &short_schedule().with_seed(11));
        assert!(result.improving_moves <= result.accepted_moves);
        assert!(result.accepted_moves <= result.iterations);
    }

    #[test]
    fn test_custom_evaluator() {
        // Diagonal-only scoring ignores shared rows, so an all-same-row
        // board is already optimal.
        let board = [2, 2, 2, 2, 2];
        let result = SaRunner::run_with_evaluator(
            &board,
            &short_schedule(),
            &DiagonalConflicts,
            &mut create_rng(4),
        );
        assert_eq!(result.cost, 0);
        assert_eq!(result.board, board.to_vec());
    }

    #[test]
    #[should_panic(expected = "invalid SaConfig")]
    fn test_invalid_config_panics() {
        let config = SaConfig::default().with_alpha(2.0);
        SaRunner::run(&[0, 1], &config);
    }

    #[test]
    fn test_acceptance_probability() {
        assert_eq!(acceptance_probability(-3, 1.0), 1.0);
        assert_eq!(acceptance_probability(0, 1e-9), 1.0);
        assert!((acceptance_probability(2, 4.0) - (-0.5f64).exp()).abs() < 1e-12);
        assert!(acceptance_probability(1, 1e-4) < 1e-100);
    }

    #[test]
    fn test_metropolis_equal_cost_always_accepted() {
        let mut rng = create_rng(0);
        for _ in 0..1000 {
            assert!(metropolis_accept(0, 1e-6, &mut rng));
        }
    }

    #[test]
    fn test_metropolis_improvement_draws_nothing() {
        let mut a = create_rng(17);
        let mut b = create_rng(17);
        assert!(metropolis_accept(-1, 1.0, &mut a));
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn test_metropolis_acceptance_rate() {
        let mut rng = create_rng(23);
        let trials = 10_000;
        let accepted = (0..trials)
            .filter(|_| metropolis_accept(1, 1.0, &mut rng))
            .count();
        let rate = accepted as f64 / trials as f64;
        let expected = (-1.0f64).exp();
        assert!(
            (rate - expected).abs() < 0.03,
            "acceptance rate {rate} too far from {expected}"
        );
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn prop_iterations_follow_schedule(
                board in (2usize..9).prop_flat_map(|n| proptest::collection::vec(0..n, n)),
                seed in any::<u64>(),
                initial_temperature in 0.5f64..200.0,
                ratio in 1e-4f64..0.9,
                alpha in 0.05f64..0.98,
            ) {
                let config = SaConfig::default()
                    .with_initial_temperature(initial_temperature)
                    .with_min_temperature(initial_temperature * ratio)
                    .with_alpha(alpha)
                    .with_seed(seed);
                prop_assert!(config.validate().is_ok());
                let result = SaRunner::run(&board, &config);
                prop_assert_eq!(result.iterations, config.expected_iterations());
                prop_assert!(result.cost <= full_conflicts(&board));
                prop_assert_eq!(result.cost, full_conflicts(&result.board));
            }
        }
    }
}
