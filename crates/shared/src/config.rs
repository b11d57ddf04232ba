//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Rate-quote service configuration.
    #[serde(default)]
    pub rates: RatesConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Rate-quote service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Base URL of the rate-quote service.
    #[serde(default = "default_rates_base_url")]
    pub base_url: String,
    /// Timeout for a single quote request, in seconds.
    #[serde(default = "default_rates_timeout")]
    pub timeout_secs: u64,
    /// Optional API access key, sent as a query parameter when set.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            base_url: default_rates_base_url(),
            timeout_secs: default_rates_timeout(),
            api_key: None,
        }
    }
}

fn default_rates_base_url() -> String {
    "https://api.exchangerate-api.com".to_string()
}

fn default_rates_timeout() -> u64 {
    5
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, in increasing precedence: `config/default`,
    /// `config/{RUN_MODE}`, `CAMBIO__`-prefixed environment variables, and
    /// finally a bare `PORT` variable overriding the listen port.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CAMBIO").separator("__"))
            .build()?;

        let mut loaded: Self = config.try_deserialize()?;

        // PORT takes precedence over every other source (container platforms
        // inject it without a prefix).
        if let Ok(port) = std::env::var("PORT") {
            loaded.server.port = port
                .parse()
                .map_err(|e| config::ConfigError::Message(format!("invalid PORT: {e}")))?;
        }

        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.rates.base_url, "https://api.exchangerate-api.com");
        assert_eq!(config.rates.timeout_secs, 5);
        assert!(config.rates.api_key.is_none());
    }

    #[test]
    fn test_port_env_override() {
        temp_env::with_vars([("PORT", Some("8123")), ("RUN_MODE", Some("test"))], || {
            let config = AppConfig::load().expect("config should load");
            assert_eq!(config.server.port, 8123);
        });
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        temp_env::with_vars(
            [("PORT", Some("not-a-port")), ("RUN_MODE", Some("test"))],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }

    #[test]
    fn test_env_prefix_override() {
        temp_env::with_vars(
            [
                ("CAMBIO__SERVER__HOST", Some("127.0.0.1")),
                ("CAMBIO__RATES__TIMEOUT_SECS", Some("2")),
                ("RUN_MODE", Some("test")),
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.server.host, "127.0.0.1");
                assert_eq!(config.rates.timeout_secs, 2);
            },
        );
    }
}
