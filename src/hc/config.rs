//! Hill climbing configuration.

/// Configuration for steepest-descent hill climbing.
///
/// The search is deterministic and stops on its own at a local optimum, so
/// the only knob is an optional step budget.
///
/// # Examples
///
/// ```
/// use u_nqueens::hc::HcConfig;
///
/// let config = HcConfig::default().with_max_steps(50);
/// assert_eq!(config.max_steps, 50);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Maximum number of accepted improving steps. 0 = no limit.
    pub max_steps: usize,
}

impl HcConfig {
    /// Sets the step budget (0 disables it).
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(HcConfig::default().max_steps, 0);
    }
}
