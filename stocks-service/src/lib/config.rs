use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Service configuration, loaded and validated once at startup.
///
/// Nothing re-reads the environment after this point; the struct is passed
/// explicitly to the components that need it.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Signing secret for access tokens. Required; startup fails without it.
    pub jwt_secret: String,

    /// Access token lifetime in seconds.
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration: i64,

    /// Postgres connection string for the user store.
    pub database_url: String,

    /// Redis host for the quote cache. Caching is skipped when unset.
    #[serde(default)]
    pub redis_host: Option<String>,

    #[serde(default = "default_redis_port")]
    pub redis_port: u16,

    /// Upstream market-data API credential.
    pub polygon_io_api_key: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_jwt_expiration() -> i64 {
    3600
}

fn default_redis_port() -> u16 {
    6379
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from an optional config file with environment
    /// variable overrides.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT_SECRET, DATABASE_URL, ...)
    /// 2. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            // JWT_SECRET overrides jwt_secret, etc.
            .add_source(Environment::default())
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject configurations that must abort startup.
    ///
    /// An absent secret must be caught here, not on the first request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "jwt_secret must not be empty".to_string(),
            ));
        }
        if self.polygon_io_api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "polygon_io_api_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
