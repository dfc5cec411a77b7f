use std::time::Duration;

use anyhow::{Context, Result};

use crate::timeline::autoplay::DEFAULT_INTERVAL;

/// Application configuration loaded from environment variables.
///
/// The generative API key is not read here: the LLM client looks it up
/// at call time, and a missing key only disables generation.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub autoplay_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => 8080,
        };

        let autoplay_interval = match lookup("AUTOPLAY_INTERVAL_MS") {
            Some(raw) => {
                let ms = raw
                    .parse::<u64>()
                    .context("AUTOPLAY_INTERVAL_MS must be a whole number of milliseconds")?;
                anyhow::ensure!(ms > 0, "AUTOPLAY_INTERVAL_MS must be greater than zero");
                Duration::from_millis(ms)
            }
            None => DEFAULT_INTERVAL,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            autoplay_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.autoplay_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = config_from(&[("PORT", "3000"), ("AUTOPLAY_INTERVAL_MS", "1500")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.autoplay_interval, Duration::from_millis(1500));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("AUTOPLAY_INTERVAL_MS", "0")]).is_err());
    }
}
