//! Server configuration: an optional TOML file overridden by CLI flags

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use campus_nav_core::{CampusModelConfig, Coordinates};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;

/// Campus navigation HTTP API
#[derive(Debug, Default, Parser)]
#[command(name = "campus-nav", version, about)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to listen on, e.g. 0.0.0.0:8080
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// JSON campus dataset used instead of the built-in one
    #[arg(long)]
    pub dataset: Option<PathBuf>,
    /// Shortest query the search endpoint answers
    #[arg(long)]
    pub min_query_len: Option<usize>,
    /// Per-request timeout in seconds
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,
    /// Maximum number of requests served at once
    #[arg(long)]
    pub concurrency_limit: Option<usize>,
    /// Tracing filter used when RUST_LOG is not set
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub dataset: Option<PathBuf>,
    /// Directions origin when the client has no location; campus center if unset
    pub default_origin: Option<Coordinates>,
    pub min_query_len: usize,
    pub request_timeout_secs: u64,
    pub concurrency_limit: usize,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            dataset: None,
            default_origin: None,
            min_query_len: 2,
            request_timeout_secs: 10,
            concurrency_limit: 64,
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns an error on malformed TOML or out-of-range values
    pub fn from_toml_str(text: &str) -> Result<Self, ServerError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid config
    pub fn from_file(path: &Path) -> Result<Self, ServerError> {
        let text = std::fs::read_to_string(path).map_err(|source| ServerError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Config file (if any) with command-line flags applied on top
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is unreadable or invalid
    pub fn load(cli: &Cli) -> Result<Self, ServerError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(bind) = cli.bind {
            config.bind = bind;
        }
        if let Some(dataset) = &cli.dataset {
            config.dataset = Some(dataset.clone());
        }
        if let Some(min_query_len) = cli.min_query_len {
            config.min_query_len = min_query_len;
        }
        if let Some(secs) = cli.request_timeout_secs {
            config.request_timeout_secs = secs;
        }
        if let Some(limit) = cli.concurrency_limit {
            config.concurrency_limit = limit;
        }
        if let Some(filter) = &cli.log_filter {
            config.log_filter.clone_from(filter);
        }

        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ServerError::InvalidConfig` describing the first bad value
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.request_timeout_secs == 0 {
            return Err(ServerError::InvalidConfig(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.concurrency_limit == 0 {
            return Err(ServerError::InvalidConfig(
                "concurrency_limit must be at least 1".to_string(),
            ));
        }
        if let Some(origin) = self.default_origin
            && !origin.is_valid()
        {
            return Err(ServerError::InvalidConfig(format!(
                "default_origin ({}, {}) is not a valid coordinate",
                origin.lat, origin.lon
            )));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn campus_model_config(&self) -> CampusModelConfig {
        CampusModelConfig {
            dataset_path: self.dataset.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = ServerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn example_config_is_valid() {
        let config = ServerConfig::from_toml_str(include_str!("../campus-nav.example.toml")).unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.min_query_len, 2);
    }

    #[test]
    fn parses_all_fields() {
        let config = ServerConfig::from_toml_str(
            r#"
            bind = "0.0.0.0:9000"
            dataset = "campus.json"
            default_origin = [32.4525, -93.7268]
            min_query_len = 3
            request_timeout_secs = 5
            concurrency_limit = 8
            log_filter = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.dataset, Some(PathBuf::from("campus.json")));
        assert_eq!(config.default_origin, Some(Coordinates::new(32.4525, -93.7268)));
        assert_eq!(config.min_query_len, 3);
        assert_eq!(config.concurrency_limit, 8);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        assert!(matches!(
            ServerConfig::from_toml_str("port = 80"),
            Err(ServerError::ConfigParse(_))
        ));
        assert!(matches!(
            ServerConfig::from_toml_str("request_timeout_secs = 0"),
            Err(ServerError::InvalidConfig(_))
        ));
        assert!(matches!(
            ServerConfig::from_toml_str("default_origin = [95.0, 0.0]"),
            Err(ServerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn cli_flags_override_defaults() {
        let cli = Cli::parse_from([
            "campus-nav",
            "--bind",
            "127.0.0.1:3000",
            "--min-query-len",
            "1",
        ]);
        let config = ServerConfig::load(&cli).unwrap();
        assert_eq!(config.bind.port(), 3000);
        assert_eq!(config.min_query_len, 1);
        assert!(config.dataset.is_none());
    }

    #[test]
    fn cli_flags_are_validated() {
        let cli = Cli::parse_from(["campus-nav", "--concurrency-limit", "0"]);
        assert!(matches!(
            ServerConfig::load(&cli),
            Err(ServerError::InvalidConfig(_))
        ));
    }
}
