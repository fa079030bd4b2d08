use std::env;

use crate::error::HublineError;

/// Query-side configuration. Built once and passed into the query facades
/// at construction time; never read from the environment at call time.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Page size when the caller passes none (or an invalid one).
    pub default_per_page: u32,
    /// Upper clamp on caller-supplied page sizes.
    pub max_per_page: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_per_page: 20,
            max_per_page: 200,
        }
    }
}

impl QueryConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, HublineError> {
        let mut config = Self::default();
        if let Ok(value) = env::var("HUBLINE_DEFAULT_PER_PAGE") {
            config.default_per_page = parse_env("HUBLINE_DEFAULT_PER_PAGE", &value)?;
        }
        if let Ok(value) = env::var("HUBLINE_MAX_PER_PAGE") {
            config.max_per_page = parse_env("HUBLINE_MAX_PER_PAGE", &value)?;
        }
        if config.default_per_page == 0 || config.max_per_page == 0 {
            return Err(HublineError::Config(
                "page sizes must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}

fn parse_env(key: &str, value: &str) -> Result<u32, HublineError> {
    value
        .parse()
        .map_err(|_| HublineError::Config(format!("{key} must be a number, got {value:?}")))
}
