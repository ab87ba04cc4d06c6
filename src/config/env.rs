// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use anyhow::ensure;
use dotenv::dotenv;
use std::env;
use std::time::Duration;

/// Default Nominatim search endpoint
pub const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Default MediaWiki API endpoint used for geosearch
pub const DEFAULT_GEOSEARCH_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Identifying client header sent with every upstream request
pub const DEFAULT_USER_AGENT: &str = "TripAnalyzerApp/1.0 (educational project)";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 5000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Geocoding search endpoint (place name -> coordinates)
    pub geocode_url: String,

    /// Geosearch endpoint (coordinates -> nearby points of interest)
    pub geosearch_url: String,

    /// User-Agent header for upstream calls
    pub user_agent: String,

    /// Per-call upstream timeout in seconds
    pub upstream_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 5000,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            geosearch_url: DEFAULT_GEOSEARCH_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            upstream_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Config::default();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or(defaults.server_address),

            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.server_port),

            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),

            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),

            geocode_url: env::var("GEOCODE_URL").unwrap_or(defaults.geocode_url),

            geosearch_url: env::var("GEOSEARCH_URL").unwrap_or(defaults.geosearch_url),

            user_agent: env::var("UPSTREAM_USER_AGENT").unwrap_or(defaults.user_agent),

            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.upstream_timeout_secs),
        }
    }

    /// Timeout applied to each outbound call
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.geocode_url.is_empty(), "GEOCODE_URL must not be empty");
        ensure!(!self.geosearch_url.is_empty(), "GEOSEARCH_URL must not be empty");
        ensure!(
            !self.user_agent.is_empty(),
            "UPSTREAM_USER_AGENT must not be empty"
        );
        ensure!(
            self.upstream_timeout_secs > 0,
            "UPSTREAM_TIMEOUT_SECS must be greater than zero"
        );

        if self.environment == "production" && self.log_level == "debug" {
            log::warn!("Debug logging enabled in production");
        }

        Ok(())
    }
}
