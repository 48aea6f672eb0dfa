//! Startup Configuration
//!
//! Values are baked in at compile time through environment variables.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/";

/// Stand-in identity until real sign-in exists
pub const DEFAULT_USER_ID: &str = "886097ca-8824-414e-abb5-b4c5bacbafd1";

/// Where page data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSourceKind {
    Http,
    Sample,
}

impl DataSourceKind {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "sample" | "mock" => DataSourceKind::Sample,
            _ => DataSourceKind::Http,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Always ends with `/`
    pub api_url: String,
    pub data_source: DataSourceKind,
    pub user_id: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Read `INVENTORY_*` variables captured at build time
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("INVENTORY_API_URL"),
            option_env!("INVENTORY_DATA_SOURCE"),
            option_env!("INVENTORY_USER_ID"),
            option_env!("INVENTORY_LOG_LEVEL"),
        )
    }

    pub fn from_values(
        api_url: Option<&str>,
        data_source: Option<&str>,
        user_id: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let mut api_url = api_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();
        if !api_url.ends_with('/') {
            api_url.push('/');
        }
        Self {
            api_url,
            data_source: data_source.map(DataSourceKind::from_str).unwrap_or(DataSourceKind::Http),
            user_id: user_id
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_USER_ID)
                .to_string(),
            log_level: log_level
                .and_then(|l| l.trim().parse().ok())
                .unwrap_or(LevelFilter::Info),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.data_source, DataSourceKind::Http);
        assert_eq!(config.user_id, DEFAULT_USER_ID);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(
            Some("https://inv.example.com/api"),
            Some("Sample"),
            Some("user-7"),
            Some("debug"),
        );
        assert_eq!(config.api_url, "https://inv.example.com/api/");
        assert_eq!(config.data_source, DataSourceKind::Sample);
        assert_eq!(config.user_id, "user-7");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_and_bad_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("ftp"), Some(""), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }
}
