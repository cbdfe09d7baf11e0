//! Configuration management for the Procurement Admin Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with PAP_ prefix

use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Product matching configuration
    pub matching: MatchingConfig,

    /// List pagination configuration
    pub pagination: PaginationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatchingConfig {
    /// Relative price tolerance for the price similarity term, in percent
    pub price_tolerance_percent: u32,

    /// Scores strictly above this are labelled "High Match"
    pub high_match_threshold: i32,

    /// Scores strictly above this (up to the high threshold) are labelled
    /// "Possible Match"
    pub possible_match_threshold: i32,

    /// Maximum candidates returned per search
    pub max_results: usize,
}

impl MatchingConfig {
    /// Tolerance as a ratio (20 percent -> 0.20)
    pub fn price_tolerance(&self) -> Decimal {
        Decimal::new(self.price_tolerance_percent as i64, 2)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaginationConfig {
    /// Default page size for list views
    pub default_page_size: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("PAP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("matching.price_tolerance_percent", 20)?
            .set_default("matching.high_match_threshold", 50)?
            .set_default("matching.possible_match_threshold", 20)?
            .set_default("matching.max_results", 50)?
            .set_default("pagination.default_page_size", 20)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (PAP_ prefix)
            .add_source(
                Environment::with_prefix("PAP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            price_tolerance_percent: 20,
            high_match_threshold: 50,
            possible_match_threshold: 20,
            max_results: 50,
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            matching: MatchingConfig::default(),
            pagination: PaginationConfig::default(),
        }
    }
}
