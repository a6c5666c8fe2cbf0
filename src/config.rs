//! App Configuration
//!
//! Build-time defaults with a runtime override for the service URL.

use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_THEME_KEY: &str = "taskflow-theme";
const DEFAULT_TOAST_MS: u32 = 3000;

/// `<meta name="taskflow-api-url" content="...">` overrides the service URL
const API_URL_META: &str = "meta[name=\"taskflow-api-url\"]";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub theme_storage_key: String,
    pub toast_duration_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            theme_storage_key: DEFAULT_THEME_KEY.to_string(),
            toast_duration_ms: DEFAULT_TOAST_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with build-time env values and the page's meta tag
    pub fn load() -> Self {
        Self::from_parts(
            option_env!("TASKFLOW_API_URL"),
            option_env!("TASKFLOW_LOG"),
            meta_api_url().as_deref(),
        )
    }

    fn from_parts(env_url: Option<&str>, env_log: Option<&str>, meta_url: Option<&str>) -> Self {
        let mut config = Self::default();

        let non_blank = |u: &&str| !u.trim().is_empty();
        if let Some(url) = meta_url.filter(non_blank).or(env_url.filter(non_blank)) {
            config.api_base_url = url.trim().to_string();
        }
        while config.api_base_url.ends_with('/') {
            config.api_base_url.pop();
        }

        if let Some(level) = env_log.and_then(|l| l.parse::<LevelFilter>().ok()) {
            config.log_level = level;
        }
        config
    }
}

fn meta_api_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(API_URL_META).ok()??;
    meta.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_parts(None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:5000");
    }

    #[test]
    fn test_meta_tag_beats_build_env() {
        let config = AppConfig::from_parts(
            Some("http://build:9000"),
            None,
            Some("https://tasks.example.com/api/"),
        );
        assert_eq!(config.api_base_url, "https://tasks.example.com/api");
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let config = AppConfig::from_parts(Some("http://build:9000//"), None, Some("  "));
        assert_eq!(config.api_base_url, "http://build:9000");
    }

    #[test]
    fn test_log_level_parses_or_falls_back() {
        assert_eq!(
            AppConfig::from_parts(None, Some("debug"), None).log_level,
            LevelFilter::Debug
        );
        assert_eq!(
            AppConfig::from_parts(None, Some("chatty"), None).log_level,
            LevelFilter::Info
        );
    }
}
