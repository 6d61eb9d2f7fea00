//! Configuration management for the MCP server.
//!
//! All configuration is read once at startup (environment variables via
//! dotenvy) and shared as an immutable `Arc<Config>` afterwards. Nothing
//! reads the environment mid-request.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL of the public reference petstore backend.
pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Petstore backend configuration.
    pub backend: BackendConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the petstore REST backend.
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Root URL prefixed to every outbound path.
    pub base_url: String,

    /// API credential. When non-empty it is attached to every outbound call
    /// as both an `api_key` header and a bearer Authorization header; when
    /// empty, neither header is sent.
    pub api_key: String,
}

/// Custom Debug implementation to redact the credential from logs.
impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_empty() {
                    "<unset>"
                } else {
                    "[REDACTED]"
                },
            )
            .finish()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "petstore-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            backend: BackendConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server/transport variables use the `MCP_` prefix; the backend keeps
    /// the `SWAGGER_PETSTORE_` names of the upstream petstore deployment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("SWAGGER_PETSTORE_BASE_URL") {
            config.backend.base_url = base_url;
            info!("Petstore base URL loaded from environment");
        }

        match std::env::var("SWAGGER_PETSTORE_API_KEY") {
            Ok(key) if !key.is_empty() => {
                config.backend.api_key = key;
                info!("Petstore API key loaded from environment");
            }
            _ => {
                warn!(
                    "SWAGGER_PETSTORE_API_KEY not set - outbound calls will carry \
                     no credential headers"
                );
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_backend_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
        assert!(config.backend.api_key.is_empty());
    }

    #[test]
    fn test_backend_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("SWAGGER_PETSTORE_BASE_URL", "http://localhost:8080/v2");
            std::env::set_var("SWAGGER_PETSTORE_API_KEY", "special-key");
        }
        let config = Config::from_env();
        assert_eq!(config.backend.base_url, "http://localhost:8080/v2");
        assert_eq!(config.backend.api_key, "special-key");
        unsafe {
            std::env::remove_var("SWAGGER_PETSTORE_BASE_URL");
            std::env::remove_var("SWAGGER_PETSTORE_API_KEY");
        }
    }

    #[test]
    fn test_empty_api_key_stays_unset() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("SWAGGER_PETSTORE_API_KEY");
        }
        let config = Config::from_env();
        assert!(config.backend.api_key.is_empty());
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let backend = BackendConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: "super_secret_key".to_string(),
        };
        let debug_str = format!("{:?}", backend);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
