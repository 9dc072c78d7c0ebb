use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Upper bound on the number of states popped from the work stack.
    /// `None` searches until the state space is exhausted.
    pub max_expansions: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    pub search: SearchConfig,
    /// Reject inputs whose length is not `n(n-1)/2` before searching.
    pub validate_shape: bool,
    /// Recompute the pairwise distances of a found solution and compare them to the input.
    pub verify_solution: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig {
                max_expansions: None,
            },
            validate_shape: true,
            verify_solution: true,
        }
    }
}

#[derive(Default)]
pub struct SolveConfigBuilder {
    max_expansions: Option<u64>,
    validate_shape: Option<bool>,
    verify_solution: Option<bool>,
}

impl SolveConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_expansions(mut self, limit: Option<u64>) -> Self {
        self.max_expansions = limit;
        self
    }
    pub fn validate_shape(mut self, enabled: bool) -> Self {
        self.validate_shape = Some(enabled);
        self
    }
    pub fn verify_solution(mut self, enabled: bool) -> Self {
        self.verify_solution = Some(enabled);
        self
    }

    pub fn build(self) -> Result<SolveConfig, ConfigError> {
        let defaults = SolveConfig::default();

        if self.max_expansions == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "max_expansions",
                reason: "must be at least 1 when set".to_string(),
            });
        }

        Ok(SolveConfig {
            search: SearchConfig {
                max_expansions: self.max_expansions,
            },
            validate_shape: self.validate_shape.unwrap_or(defaults.validate_shape),
            verify_solution: self.verify_solution.unwrap_or(defaults.verify_solution),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_without_overrides_yields_defaults() {
        let config = SolveConfigBuilder::new().build().unwrap();
        assert_eq!(config, SolveConfig::default());
        assert_eq!(config.search.max_expansions, None);
        assert!(config.validate_shape);
        assert!(config.verify_solution);
    }

    #[test]
    fn builder_applies_every_setter() {
        let config = SolveConfigBuilder::new()
            .max_expansions(Some(500))
            .validate_shape(false)
            .verify_solution(false)
            .build()
            .unwrap();
        assert_eq!(config.search.max_expansions, Some(500));
        assert!(!config.validate_shape);
        assert!(!config.verify_solution);
    }

    #[test]
    fn builder_rejects_zero_budget() {
        let result = SolveConfigBuilder::new().max_expansions(Some(0)).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "max_expansions",
                ..
            })
        ));
    }
}
