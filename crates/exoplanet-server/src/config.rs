//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_model_path() -> PathBuf {
    PathBuf::from("exoplanet_model.json")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Server configuration
///
/// Every field carries a default so the server can start from environment
/// variables alone, with no config file present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port (HTTP)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the serialized model artifact
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Shared secret expected in the X-API-Key header
    #[serde(default)]
    pub api_token: String,

    /// Allowed cross-origin host, or "*" for any
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_allowed_origins() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            model_path: default_model_path(),
            api_token: String::new(),
            allowed_origins: default_allowed_origins(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file.
    ///
    /// The config file is optional; every field has a default, so an
    /// env-only deployment (or no configuration at all) still starts.
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(config::Environment::with_prefix("EXOPLANET"))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config sources: {}", e))?;

        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.model_path, PathBuf::from("exoplanet_model.json"));
        assert!(config.api_token.is_empty());
        assert_eq!(config.allowed_origins, "*");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_deserializes_partial_document() {
        let json = r#"{
            "host": "0.0.0.0",
            "port": 3000,
            "api_token": "secret",
            "log_level": "debug"
        }"#;

        let config: ServerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.api_token, "secret");
        // Defaults for the fields left out
        assert_eq!(config.model_path, PathBuf::from("exoplanet_model.json"));
        assert_eq!(config.allowed_origins, "*");
    }

    #[test]
    fn test_config_deserializes_empty_document() {
        // Every field must default so the server starts with no file at all.
        let config: ServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_load_without_config_file() {
        // No config/server file exists here; a single test owns the env
        // prefix so the two load() calls cannot race each other.
        let config = ServerConfig::load().unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");

        // Env-only deployment: just the API token set.
        std::env::set_var("EXOPLANET_API_TOKEN", "token-from-env");
        let config = ServerConfig::load().unwrap();
        std::env::remove_var("EXOPLANET_API_TOKEN");

        assert_eq!(config.api_token, "token-from-env");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_server_config_clone() {
        let config = ServerConfig::default();
        let cloned = config.clone();

        assert_eq!(config.host, cloned.host);
        assert_eq!(config.port, cloned.port);
        assert_eq!(config.allowed_origins, cloned.allowed_origins);
    }

    #[test]
    fn test_server_config_debug_format() {
        let config = ServerConfig::default();
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("ServerConfig"));
        assert!(debug_str.contains("127.0.0.1"));
        assert!(debug_str.contains("8080"));
    }
}
