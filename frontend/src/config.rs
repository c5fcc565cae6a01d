//! Runtime client configuration.
//!
//! The host publishes `/config.json`; when the SPA is served some other way
//! (e.g. `trunk serve`) the compile-time `SCHOLARSHIP_API_URL` or the built-in
//! default is used instead.

use common::config::ClientConfig;
use gloo_console::{log, warn};
use gloo_net::http::Request;

pub async fn load_client_config() -> ClientConfig {
    let fallback = || ClientConfig::fallback(option_env!("SCHOLARSHIP_API_URL"));
    match Request::get("/config.json").send().await {
        Ok(resp) if resp.ok() => match resp.json::<ClientConfig>().await {
            Ok(config) => {
                log!(format!("API base URL: {}", config.api_base_url));
                config
            }
            Err(e) => {
                warn!(format!("Unreadable /config.json ({}), using fallback", e));
                fallback()
            }
        },
        Ok(resp) => {
            warn!(format!("/config.json answered {}, using fallback", resp.status()));
            fallback()
        }
        Err(e) => {
            warn!(format!("/config.json unavailable ({}), using fallback", e));
            fallback()
        }
    }
}
