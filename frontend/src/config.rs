//! Build-time configuration.

use leptos::prelude::*;

/// Deployed API used when `CRICKBOARD_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "https://cricket-score-api-q1rd.onrender.com";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// API base URL without a trailing slash.
    pub api_base: String,
}

impl AppConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `CRICKBOARD_API_BASE` as baked in by the build (e.g. under Trunk).
    pub fn from_build_env() -> Self {
        match option_env!("CRICKBOARD_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::new(base),
            _ => Self::new(DEFAULT_API_BASE),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_trimmed() {
        assert_eq!(
            AppConfig::new(" http://localhost:5000// ").api_base,
            "http://localhost:5000"
        );
    }

    #[test]
    fn test_build_env_has_a_base() {
        assert!(!AppConfig::from_build_env().api_base.is_empty());
    }
}
