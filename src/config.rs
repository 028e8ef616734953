// src/config.rs
use crate::gemini_client::DEFAULT_MODEL;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

const GEMINI_KEY_PLACEHOLDER: &str = "your_google_gemini_api_key_here";
const PLACES_KEY_PLACEHOLDER: &str = "your_google_places_api_key_here";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Settings read once at startup and handed to the application state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` keeps the planner fully local.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    /// Pause before every Gemini call to stay under the free-tier rate limit.
    pub request_delay: Duration,
    pub places_api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_addr_raw.clone(),
        })?;

        let request_delay = match lookup("GEMINI_REQUEST_DELAY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::Invalid {
                    name: "GEMINI_REQUEST_DELAY_MS",
                    value: raw.clone(),
                })?,
            None => Duration::from_millis(DEFAULT_REQUEST_DELAY_MS),
        };

        let gemini_model = lookup("GEMINI_MODEL")
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            bind_addr,
            gemini_api_key: credential(lookup("GOOGLE_GEMINI_API_KEY"), GEMINI_KEY_PLACEHOLDER),
            gemini_model,
            request_delay,
            places_api_key: credential(lookup("GOOGLE_PLACE_API_KEY"), PLACES_KEY_PLACEHOLDER),
        })
    }
}

// Empty values and the sample value from `.env.example` count as unset.
fn credential(value: Option<String>, placeholder: &str) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.places_api_key, None);
        assert_eq!(config.gemini_model, DEFAULT_MODEL);
        assert_eq!(config.request_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_placeholder_and_blank_credentials_are_unset() {
        let config = config_from(&[
            ("GOOGLE_GEMINI_API_KEY", "your_google_gemini_api_key_here"),
            ("GOOGLE_PLACE_API_KEY", "   "),
        ])
        .unwrap();
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.places_api_key, None);
    }

    #[test]
    fn test_real_values_are_kept() {
        let config = config_from(&[
            ("GOOGLE_GEMINI_API_KEY", "AIza-test"),
            ("GOOGLE_PLACE_API_KEY", "places-key"),
            ("GEMINI_REQUEST_DELAY_MS", "0"),
            ("GEMINI_MODEL", "gemini-2.5-flash"),
            ("BIND_ADDR", "127.0.0.1:8080"),
        ])
        .unwrap();
        assert_eq!(config.gemini_api_key.as_deref(), Some("AIza-test"));
        assert_eq!(config.places_api_key.as_deref(), Some("places-key"));
        assert_eq!(config.request_delay, Duration::ZERO);
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            config_from(&[("GEMINI_REQUEST_DELAY_MS", "soon")]),
            Err(ConfigError::Invalid { name: "GEMINI_REQUEST_DELAY_MS", .. })
        ));
        assert!(matches!(
            config_from(&[("BIND_ADDR", "nowhere")]),
            Err(ConfigError::Invalid { name: "BIND_ADDR", .. })
        ));
    }
}
