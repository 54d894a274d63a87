//! Configuration module.

use serde::Deserialize;
use std::path::Path;

use crate::bing::DEFAULT_ARCHIVE_COUNT;
use crate::locale::CountryCode;
use crate::{BingWallpaperError, Result};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/bing-wallpaper.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/bing-wallpaper.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Site information used in pages and the RSS channel.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Public base URL of the site, without trailing slash.
    #[serde(default = "default_site_url")]
    pub url: String,
    /// Site title.
    #[serde(default = "default_site_title")]
    pub title: String,
    /// Site description.
    #[serde(default = "default_site_description")]
    pub description: String,
    /// Author, used as the feed copyright.
    #[serde(default = "default_site_author")]
    pub author: String,
}

fn default_site_url() -> String {
    "https://bing.example.com".to_string()
}

fn default_site_title() -> String {
    "Bing Wallpaper".to_string()
}

fn default_site_description() -> String {
    "Bing's image of the day, archived for every market".to_string()
}

fn default_site_author() -> String {
    "Bing Wallpaper".to_string()
}

impl SiteConfig {
    /// Set the public base URL, dropping trailing slashes.
    pub fn set_url(&mut self, url: &str) {
        self.url = url.trim_end_matches('/').to_string();
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: default_site_url(),
            title: default_site_title(),
            description: default_site_description(),
            author: default_site_author(),
        }
    }
}

/// Upstream Bing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BingConfig {
    /// Bing base URL.
    #[serde(default = "default_bing_base_url")]
    pub base_url: String,
    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Markets to fetch.
    #[serde(default = "default_markets")]
    pub markets: Vec<String>,
    /// Number of images requested per market.
    #[serde(default = "default_archive_count")]
    pub archive_count: u32,
    /// Seconds between fetch cycles.
    #[serde(default = "default_update_interval")]
    pub update_interval_secs: u64,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    #[serde(default = "default_total_timeout")]
    pub total_timeout_secs: u64,
    /// Number of fetch workers.
    #[serde(default = "default_worker_count")]
    pub worker_count: usize,
    /// Maximum number of queued fetch jobs.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

fn default_bing_base_url() -> String {
    "https://www.bing.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; bing-wallpaper/0.1)".to_string()
}

fn default_markets() -> Vec<String> {
    CountryCode::ALL
        .iter()
        .map(|c| c.code().to_string())
        .collect()
}

fn default_archive_count() -> u32 {
    DEFAULT_ARCHIVE_COUNT
}

fn default_update_interval() -> u64 {
    3600 // 1 hour
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_total_timeout() -> u64 {
    30
}

fn default_worker_count() -> usize {
    4
}

fn default_queue_capacity() -> usize {
    1024
}

impl Default for BingConfig {
    fn default() -> Self {
        Self {
            base_url: default_bing_base_url(),
            user_agent: default_user_agent(),
            markets: default_markets(),
            archive_count: default_archive_count(),
            update_interval_secs: default_update_interval(),
            connect_timeout_secs: default_connect_timeout(),
            total_timeout_secs: default_total_timeout(),
            worker_count: default_worker_count(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

impl BingConfig {
    /// Parse the configured markets.
    pub fn countries(&self) -> Result<Vec<CountryCode>> {
        self.markets.iter().map(|m| m.parse()).collect()
    }
}

/// Web configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WebConfig {
    /// CORS allowed origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Site information.
    #[serde(default)]
    pub site: SiteConfig,
    /// Upstream Bing configuration.
    #[serde(default)]
    pub bing: BingConfig,
    /// Web configuration.
    #[serde(default)]
    pub web: WebConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(BingWallpaperError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(s)
            .map_err(|e| BingWallpaperError::Config(format!("config parse error: {e}")))?;
        let url = config.site.url.clone();
        config.site.set_url(&url);
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `BING_WALLPAPER_SITE_URL`: Override the public site URL
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("BING_WALLPAPER_SITE_URL") {
            if !url.is_empty() {
                self.site.set_url(&url);
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.bing.markets.is_empty() {
            return Err(BingWallpaperError::Config(
                "bing.markets must list at least one market".to_string(),
            ));
        }
        self.bing
            .countries()
            .map_err(|e| BingWallpaperError::Config(e.to_string()))?;
        if self.bing.worker_count == 0 || self.bing.queue_capacity == 0 {
            return Err(BingWallpaperError::Config(
                "bing.worker_count and bing.queue_capacity must be positive".to_string(),
            ));
        }
        if self.bing.update_interval_secs == 0 {
            return Err(BingWallpaperError::Config(
                "bing.update_interval_secs must be positive".to_string(),
            ));
        }
        if self.bing.archive_count == 0 {
            return Err(BingWallpaperError::Config(
                "bing.archive_count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
