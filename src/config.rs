use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub cors_proxy_url: String,
    pub asset_base_url: String,
    pub location_image_base_url: String,
    pub session_key: String,
    pub enable_logging: bool,
    pub log_level: String,
}

const DEFAULT_API_BASE_URL: &str = "https://demandonsale.com/trav-chap/api";
const DEFAULT_CORS_PROXY_URL: &str = "https://api.codetabs.com/v1/proxy?quest=";
const DEFAULT_ASSET_BASE_URL: &str = "https://demandonsale.com/trav-chap/";
const DEFAULT_SESSION_KEY: &str = "travchap_user";

pub const PACKAGE_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x250";
pub const LOCATION_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cors_proxy_url: DEFAULT_CORS_PROXY_URL.to_string(),
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            location_image_base_url: format!("{}uploads/location/", DEFAULT_ASSET_BASE_URL),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from variables captured at compile time,
    /// falling back to the production hosts.
    pub fn from_env() -> Self {
        let asset_base_url = option_env!("ASSET_BASE_URL")
            .unwrap_or(DEFAULT_ASSET_BASE_URL)
            .to_string();
        let location_image_base_url = option_env!("LOCATION_IMAGE_BASE_URL")
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}uploads/location/", with_trailing_slash(&asset_base_url)));

        Self {
            api_base_url: option_env!("API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            cors_proxy_url: option_env!("CORS_PROXY_URL")
                .unwrap_or(DEFAULT_CORS_PROXY_URL)
                .to_string(),
            asset_base_url,
            location_image_base_url,
            session_key: option_env!("SESSION_KEY")
                .unwrap_or(DEFAULT_SESSION_KEY)
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            log_level: option_env!("LOG_LEVEL").unwrap_or("info").to_string(),
        }
    }

    /// Absolute URL of a backend endpoint, e.g. `endpoint("user/login")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Wraps a URL in the public CORS proxy. An empty proxy disables it.
    pub fn proxied(&self, url: &str) -> String {
        if self.cors_proxy_url.is_empty() {
            url.to_string()
        } else {
            format!("{}{}", self.cors_proxy_url, url)
        }
    }

    pub fn asset_url(&self, path: &str) -> String {
        join_url(&self.asset_base_url, path)
    }

    pub fn location_image_url(&self, path: &str) -> String {
        join_url(&self.location_image_base_url, path)
    }

    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" | "warning" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }
}

fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", with_trailing_slash(base), path.trim_start_matches('/'))
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joining() {
        let config = AppConfig::default();
        assert_eq!(
            config.endpoint("user/login"),
            "https://demandonsale.com/trav-chap/api/user/login"
        );
        assert_eq!(
            config.endpoint("/booking"),
            "https://demandonsale.com/trav-chap/api/booking"
        );
    }

    #[test]
    fn test_proxied_url() {
        let config = AppConfig::default();
        let url = config.proxied(&config.endpoint("locations/list"));
        assert_eq!(
            url,
            "https://api.codetabs.com/v1/proxy?quest=https://demandonsale.com/trav-chap/api/locations/list"
        );

        let direct = AppConfig {
            cors_proxy_url: String::new(),
            ..AppConfig::default()
        };
        assert_eq!(direct.proxied("https://x.test/a"), "https://x.test/a");
    }

    #[test]
    fn test_image_urls() {
        let config = AppConfig::default();
        assert_eq!(
            config.asset_url("uploads/package/goa.jpg"),
            "https://demandonsale.com/trav-chap/uploads/package/goa.jpg"
        );
        assert_eq!(
            config.location_image_url("goa.png"),
            "https://demandonsale.com/trav-chap/uploads/location/goa.png"
        );
    }

    #[test]
    fn test_log_level() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Error);
    }
}
