use std::{env, str::FromStr};

use log::LevelFilter;
use portal::ServerTlsConfig;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_TLS_CERT: &str = "cert.pem";
pub const DEFAULT_TLS_KEY: &str = "key.pem";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log level `{0}` in MIS_LOG_LEVEL")]
    InvalidLogLevel(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub bind_address: String,
    pub tls_cert: String,
    pub tls_key: String,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            tls_cert: DEFAULT_TLS_CERT.to_string(),
            tls_key: DEFAULT_TLS_KEY.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Config {
    /// Reads `MIS_*` variables, loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let log_level = match lookup("MIS_LOG_LEVEL") {
            Some(level) => LevelFilter::from_str(level.trim())
                .map_err(|_| ConfigError::InvalidLogLevel(level))?,
            None => defaults.log_level,
        };

        Ok(Config {
            bind_address: lookup("MIS_BIND_ADDRESS").unwrap_or(defaults.bind_address),
            tls_cert: lookup("MIS_TLS_CERT").unwrap_or(defaults.tls_cert),
            tls_key: lookup("MIS_TLS_KEY").unwrap_or(defaults.tls_key),
            log_level,
        })
    }

    pub fn tls_config(&self) -> ServerTlsConfig {
        ServerTlsConfig::new(&self.tls_cert, &self.tls_key)
    }
}
