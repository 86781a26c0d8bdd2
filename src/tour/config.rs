//! Local search configuration.

/// Configuration for the 2-opt / 3-opt local search.
///
/// The defaults run the full search to a local optimum with no round cap
/// and no distance validation.
///
/// # Examples
///
/// ```
/// use u_tour::tour::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default()
///     .with_max_rounds(50)
///     .with_validate_distances(true);
/// assert_eq!(config.max_rounds, 50);
/// assert!(config.three_opt);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Run the 3-opt pass when a 2-opt pass finds nothing.
    ///
    /// Disabling it stops the search at a 2-opt local optimum.
    pub three_opt: bool,

    /// Maximum number of rounds (one 2-opt pass, plus a 3-opt pass when
    /// the 2-opt pass found nothing). 0 = no limit.
    pub max_rounds: usize,

    /// Reject distance matrices that break the provider contract
    /// (NaN, infinite, negative, non-zero diagonal, asymmetric) instead of
    /// searching over them. Only honoured by the checked solver entry point.
    pub validate_distances: bool,

    /// Record the tour length after every round.
    pub record_history: bool,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            three_opt: true,
            max_rounds: 0,
            validate_distances: false,
            record_history: true,
        }
    }
}

impl LocalSearchConfig {
    /// Enables or disables the 3-opt pass.
    pub fn with_three_opt(mut self, enabled: bool) -> Self {
        self.three_opt = enabled;
        self
    }

    /// Sets the round cap (0 = run to a local optimum).
    pub fn with_max_rounds(mut self, n: usize) -> Self {
        self.max_rounds = n;
        self
    }

    pub fn with_validate_distances(mut self, validate: bool) -> Self {
        self.validate_distances = validate;
        self
    }

    pub fn with_record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// 2-opt only, for callers that want the cheaper O(n³) neighbourhood.
    pub fn two_opt_only() -> Self {
        Self::default().with_three_opt(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LocalSearchConfig::default();
        assert!(config.three_opt);
        assert_eq!(config.max_rounds, 0);
        assert!(!config.validate_distances);
        assert!(config.record_history);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LocalSearchConfig::default()
            .with_three_opt(false)
            .with_max_rounds(3)
            .with_validate_distances(true)
            .with_record_history(false);

        assert!(!config.three_opt);
        assert_eq!(config.max_rounds, 3);
        assert!(config.validate_distances);
        assert!(!config.record_history);
    }

    #[test]
    fn test_two_opt_only_preset() {
        let config = LocalSearchConfig::two_opt_only();
        assert!(!config.three_opt);
        assert_eq!(config.max_rounds, 0);
    }
}
