use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5678";

/// Settings baked in at build time from `BILLED_API_URL` and `BILLED_LOG_LEVEL`
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("BILLED_API_URL"), option_env!("BILLED_LOG_LEVEL"))
    }

    fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_base_url,
            log_level,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5678");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("https://api.billed.tld/"), Some("debug"));
        assert_eq!(config.api_base_url, "https://api.billed.tld");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("chatty"));
        assert_eq!(config.api_base_url, "http://localhost:5678");
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
