//! Request DTOs for Web API.

use serde::Deserialize;

use crate::locale::{CountryCode, DEFAULT_COUNTRY};
use crate::Result;

/// Default page size.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Largest accepted page size.
pub const MAX_PER_PAGE: u32 = 100;

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

/// Query of `GET /api/wallpapers`.
#[derive(Debug, Clone, Deserialize)]
pub struct WallpaperListQuery {
    /// Market code; defaults to the default market.
    #[serde(default)]
    pub country: Option<String>,
    /// Page number, starting at 1.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl WallpaperListQuery {
    /// Requested market.
    pub fn country(&self) -> Result<CountryCode> {
        match self.country.as_deref() {
            Some(code) if !code.trim().is_empty() => code.parse(),
            _ => Ok(DEFAULT_COUNTRY),
        }
    }

    /// Page and page size, clamped to the accepted range.
    pub fn page(&self) -> (u32, u32) {
        (self.page.max(1), self.per_page.clamp(1, MAX_PER_PAGE))
    }
}

impl Default for WallpaperListQuery {
    fn default() -> Self {
        Self {
            country: None,
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}
