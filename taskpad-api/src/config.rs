//! API Configuration Module
//!
//! CORS and other server-level settings, loaded from environment
//! variables with permissive defaults for development.

// ============================================================================
// API CONFIGURATION
// ============================================================================

/// API configuration for CORS and production hardening.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,

    /// Max age for CORS preflight cache in seconds.
    pub cors_max_age_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            cors_max_age_secs: 86400,
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `TASKPAD_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    /// - `TASKPAD_CORS_MAX_AGE_SECS`: Preflight cache duration (default: 86400)
    pub fn from_env() -> Self {
        let cors_origins = std::env::var("TASKPAD_CORS_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let cors_max_age_secs = std::env::var("TASKPAD_CORS_MAX_AGE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(86400);

        Self {
            cors_origins,
            cors_max_age_secs,
        }
    }

    /// Check if running with strict CORS (at least one origin configured).
    pub fn is_production(&self) -> bool {
        !self.cors_origins.is_empty()
    }
}
