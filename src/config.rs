use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::sync::Arc;

use crate::schemas::AppState;

/// Values given on the command line; they win over every other source.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub static_dir: Option<String>,
    pub api_base_url: Option<String>,
}

/// Host configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Address the server listens on (IP:PORT)
    pub bind_address: String,
    /// Directory served under /static
    pub static_dir: String,
    /// Analytics API the page points its forms at; empty for same origin
    pub api_base_url: String,
    /// Per-request timeout applied by the server
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            static_dir: "static".to_string(),
            api_base_url: String::new(),
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional `farmdash.toml`,
    /// `FARMDASH_*` environment variables and finally `overrides`.
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("static_dir", defaults.static_dir)?
            .set_default("api_base_url", defaults.api_base_url)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs)?
            .add_source(File::with_name("farmdash").required(false))
            .add_source(Environment::with_prefix("FARMDASH"))
            .set_override_option("bind_address", overrides.bind_address)?
            .set_override_option("static_dir", overrides.static_dir)?
            .set_override_option("api_base_url", overrides.api_base_url)?
            .build()?;

        let mut config: AppConfig = settings.try_deserialize()?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        Ok(config)
    }
}

/// Initialize application configuration and state
pub fn initialize_app_state(overrides: ConfigOverrides) -> Result<AppState> {
    let config = AppConfig::load(overrides)?;
    tracing::info!("Loaded configuration: {:?}", config);

    Ok(AppState {
        config: Arc::new(config),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_defaults() {
        let config = AppConfig::load(ConfigOverrides {
            bind_address: Some("127.0.0.1:9999".to_string()),
            static_dir: None,
            api_base_url: Some("http://analytics.local:5000/".to_string()),
        })
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:9999");
        assert_eq!(config.api_base_url, "http://analytics.local:5000");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn initialize_app_state_wraps_config() {
        let state = initialize_app_state(ConfigOverrides {
            static_dir: Some("dist".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(state.config.static_dir, "dist");
    }
}
