use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub scraper: ScraperConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// The one catalog page this deployment acquires. Not request-parameterized.
    pub target_url: String,
    pub user_agent: String,
    /// Bound on the static GET, in seconds.
    pub request_timeout: u64,
    /// Bound on browser navigation plus network idle, in seconds.
    pub navigation_timeout: u64,
    /// Shorter bound on the content container appearing after navigation, in
    /// seconds. Distinguishes "page loaded but content never materialized"
    /// from "network never responded".
    pub selector_timeout: u64,
    pub chrome_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Add environment-specific config
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add local config (ignored by git)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix "CATALOG_"
            .add_source(Environment::with_prefix("CATALOG").separator("__"))
            .build()?;

        let mut config: AppConfig = s.try_deserialize()?;

        // Add Chrome path from environment if not set
        if config.scraper.chrome_path.is_none() {
            config.scraper.chrome_path = env::var("CHROME_PATH").ok();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message(
                "Server port must be greater than 0".into(),
            ));
        }

        if Url::parse(&self.scraper.target_url).is_err() {
            return Err(ConfigError::Message("Invalid target URL format".into()));
        }

        if self.scraper.user_agent.trim().is_empty() {
            return Err(ConfigError::Message("User agent must not be empty".into()));
        }

        if self.scraper.request_timeout == 0 || self.scraper.navigation_timeout == 0 {
            return Err(ConfigError::Message(
                "Request and navigation timeouts must be greater than 0".into(),
            ));
        }

        if self.scraper.selector_timeout == 0
            || self.scraper.selector_timeout > self.scraper.navigation_timeout
        {
            return Err(ConfigError::Message(
                "Selector timeout must be between 1 and the navigation timeout".into(),
            ));
        }

        Ok(())
    }
}
