//! HTTP client for the Bing image archive.

use std::time::Duration;

use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use super::types::{ImageArchive, RawMetadata, MAX_ARCHIVE_COUNT};
use crate::config::BingConfig;
use crate::locale::CountryCode;
use crate::{BingWallpaperError, Result};

/// Path of the archive endpoint below the Bing base URL.
const ARCHIVE_PATH: &str = "/HPImageArchive.aspx";

/// Build the archive URL for `number` images of `country`, starting `index`
/// days back.
///
/// `number` is capped at what Bing serves per request.
pub fn build_image_archive_url(
    base_url: &str,
    index: u32,
    number: u32,
    country: CountryCode,
) -> Result<String> {
    let base = format!("{}{}", base_url.trim_end_matches('/'), ARCHIVE_PATH);
    let mut url = Url::parse(&base).map_err(|e| {
        BingWallpaperError::Config(format!("invalid Bing base URL {:?}: {}", base_url, e))
    })?;

    url.query_pairs_mut()
        .append_pair("format", "js")
        .append_pair("pid", "hp")
        .append_pair("video", "1")
        .append_pair("setlang", "en-us")
        .append_pair("idx", &index.to_string())
        .append_pair("n", &number.min(MAX_ARCHIVE_COUNT).to_string())
        .append_pair("mkt", country.code());

    Ok(url.into())
}

/// Client for the Bing archive and image downloads.
#[derive(Debug, Clone)]
pub struct BingClient {
    client: Client,
    base_url: String,
    archive_count: u32,
}

impl BingClient {
    /// Create a client from configuration.
    pub fn new(config: &BingConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.total_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                BingWallpaperError::Http(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            archive_count: config.archive_count,
        })
    }

    /// Bing base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the most recent archive entries of a market.
    pub async fn request_archive(&self, country: CountryCode) -> Result<Vec<RawMetadata>> {
        let url = build_image_archive_url(&self.base_url, 0, self.archive_count, country)?;
        debug!(country = %country, url = %url, "Requesting image archive");

        let archive: ImageArchive = self
            .get(&url)
            .await?
            .json()
            .await
            .map_err(|e| {
                BingWallpaperError::Http(format!("invalid archive from {}: {}", url, e))
            })?;

        Ok(archive.images)
    }

    /// Download an image.
    pub async fn download_wallpaper(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url = %url, "Downloading wallpaper");
        let bytes = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|e| BingWallpaperError::Http(format!("failed to read {}: {}", url, e)))?;
        Ok(bytes.to_vec())
    }

    async fn get(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BingWallpaperError::Http(format!("failed to fetch {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BingWallpaperError::Http(format!("{} for {}", status, url)));
        }
        Ok(response)
    }
}
