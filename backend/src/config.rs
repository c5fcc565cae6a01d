//! Start-up settings read from the environment.

use std::{env, fmt::Display, str::FromStr};

use common::config::{ClientConfig, DEFAULT_API_BASE_URL};
use log::{info, warn};

pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub open_browser: bool,
}

impl Config {
    pub fn load() -> Self {
        Self {
            host: try_load("SCLORO_HOST", "127.0.0.1".to_string()),
            port: try_load("SCLORO_PORT", 8080),
            api_base_url: try_load("SCHOLARSHIP_API_URL", DEFAULT_API_BASE_URL.to_string()),
            open_browser: try_load("SCLORO_OPEN_BROWSER", true),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// What the SPA receives from `/config.json`.
    pub fn client(&self) -> ClientConfig {
        ClientConfig::fallback(Some(&self.api_base_url))
    }
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    parse_or_default(key, env::var(key).ok(), default)
}

fn parse_or_default<T: FromStr + Display>(key: &str, raw: Option<String>, default: T) -> T
where
    T::Err: Display,
{
    let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_values_use_the_default() {
        assert_eq!(parse_or_default("SCLORO_PORT", None, 8080u16), 8080);
        assert_eq!(parse_or_default("SCLORO_PORT", Some("  ".into()), 8080u16), 8080);
    }

    #[test]
    fn values_are_parsed_after_trimming() {
        assert_eq!(parse_or_default("SCLORO_PORT", Some(" 9000 ".into()), 8080u16), 9000);
        assert!(!parse_or_default("SCLORO_OPEN_BROWSER", Some("false".into()), true));
    }

    #[test]
    fn unparsable_values_fall_back() {
        assert_eq!(parse_or_default("SCLORO_PORT", Some("eighty".into()), 8080u16), 8080);
        assert!(parse_or_default("SCLORO_OPEN_BROWSER", Some("maybe".into()), true));
    }

    #[test]
    fn client_config_carries_the_api_url() {
        let config = Config {
            host: "127.0.0.1".into(),
            port: 8080,
            api_base_url: "https://api.scloro.test/v1".into(),
            open_browser: false,
        };
        assert_eq!(config.client().api_base_url, "https://api.scloro.test/v1");
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }
}
