use crate::resolver::Language;
use std::env;
use std::path::PathBuf;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
    /// Language used when a request does not name one.
    pub default_language: Language,
    /// Optional path to a JSON catalog of tool records served under `/catalog`.
    pub catalog_path: Option<PathBuf>,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout_secs: 30,
            default_language: Language::En,
            catalog_path: None,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// - `HOST`, `PORT`: listen address (default `0.0.0.0:8080`)
    /// - `SHUTDOWN_TIMEOUT`: seconds to drain connections after a signal (default 30)
    /// - `DEFAULT_LANGUAGE`: `en` or `ka` (anything else is `en`)
    /// - `CATALOG_PATH`: JSON catalog file, unset for no catalog
    /// - `MAX_BODY_BYTES`: request body limit (default 1 MiB)
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse()?,
            shutdown_timeout_secs: env::var("SHUTDOWN_TIMEOUT")
                .unwrap_or_else(|_| defaults.shutdown_timeout_secs.to_string())
                .parse()?,
            default_language: env::var("DEFAULT_LANGUAGE")
                .map(|tag| Language::from_tag(&tag))
                .unwrap_or(defaults.default_language),
            catalog_path: env::var("CATALOG_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| defaults.max_body_bytes.to_string())
                .parse()?,
        })
    }
}
