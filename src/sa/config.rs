//! SA configuration and the geometric cooling schedule.

/// Configuration for the Simulated Annealing engine.
///
/// Temperature starts at `initial_temperature` and is multiplied by `alpha`
/// after every iteration. The run ends once it is no longer above
/// `min_temperature`. The iteration count therefore depends only on these
/// three values, never on the board.
///
/// # Examples
///
/// ```
/// use u_nqueens::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(10.0)
///     .with_min_temperature(0.1)
///     .with_alpha(0.9)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.expected_iterations(), 44);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values accept more uphill moves early on.
    pub initial_temperature: f64,

    /// Stopping temperature. The loop runs while `T > min_temperature`.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1): `T_{k+1} = alpha * T_k`.
    pub alpha: f64,

    /// Random seed for reproducibility. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Sample the best cost into the history every this many iterations.
    /// 0 = keep only the initial and final values.
    pub history_interval: usize,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 1e-4,
            alpha: 0.999,
            seed: None,
            history_interval: 100,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    /// Number of iterations the schedule runs.
    ///
    /// Mathematically `ceil(ln(T_min / T_0) / ln(alpha))`, but counted by
    /// cooling step by step with the same floating-point products as the
    /// annealing loop, so rounding can never make the two disagree.
    ///
    /// Only meaningful for a configuration that passes [`validate`](Self::validate).
    pub fn expected_iterations(&self) -> usize {
        let mut temperature = self.initial_temperature;
        let mut iterations = 0;
        while temperature > self.min_temperature {
            temperature = self.cool(temperature);
            iterations += 1;
        }
        iterations
    }

    /// One geometric cooling step.
    #[inline]
    pub(crate) fn cool(&self, temperature: f64) -> f64 {
        temperature * self.alpha
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err("initial_temperature must be positive and finite".into());
        }
        if self.min_temperature.is_nan() || self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(format!("alpha must be in (0, 1), got {}", self.alpha));
        }
        Ok(())
    }
}
