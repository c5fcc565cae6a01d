use serde::{Deserialize, Serialize};

/// Base URL used when neither the host nor the build provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/v1";

/// Runtime configuration the host publishes at `/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Uses `build_time` (usually `option_env!("SCHOLARSHIP_API_URL")`) when it
    /// is set and non-empty.
    pub fn fallback(build_time: Option<&str>) -> Self {
        let api_base_url = build_time
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();
        Self { api_base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::fallback(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_prefers_build_time_value() {
        assert_eq!(
            ClientConfig::fallback(Some("https://api.example/v1")).api_base_url,
            "https://api.example/v1"
        );
        assert_eq!(ClientConfig::fallback(Some(" ")).api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(ClientConfig::default().api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&ClientConfig::default()).unwrap();
        assert!(json.contains("\"apiBaseUrl\""));
    }
}
