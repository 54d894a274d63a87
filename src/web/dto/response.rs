//! Response DTOs for Web API.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::datetime::epoch_millis_to_local_date;
use crate::locale::CountryCode;
use crate::site::{details_href, img_href, FEED_RESOLUTION};
use crate::wallpaper::BingWallpaper;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    /// Response data.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PaginationMeta,
}

impl<T: Serialize> PaginatedResponse<T> {
    /// Create a new paginated response.
    pub fn new(data: Vec<T>, page: u32, per_page: u32, total: u64) -> Self {
        Self {
            data,
            meta: PaginationMeta {
                page,
                per_page,
                total,
            },
        }
    }
}

/// Pagination metadata.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items.
    pub total: u64,
}

/// Wallpaper as served by the API.
#[derive(Debug, Serialize)]
pub struct WallpaperResponse {
    pub id: i64,
    pub country: CountryCode,
    pub name: String,
    /// Epoch milliseconds at local midnight.
    pub date: i64,
    /// Local calendar date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub copyright: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_link: Option<String>,
    /// Absolute URL of the detail page.
    pub details_url: String,
    /// Absolute download URL at the feed resolution.
    pub image_url: String,
}

impl WallpaperResponse {
    /// Build the response for a wallpaper of `site`.
    pub fn new(site: &SiteConfig, wallpaper: BingWallpaper) -> Self {
        let details_url = format!("{}{}", site.url, details_href(&wallpaper));
        let image_url = format!("{}{}", site.url, img_href(&wallpaper, FEED_RESOLUTION));
        let day =
            epoch_millis_to_local_date(wallpaper.date).map(|d| d.format("%Y-%m-%d").to_string());

        Self {
            id: wallpaper.id,
            country: wallpaper.country,
            name: wallpaper.name,
            date: wallpaper.date,
            day,
            title: wallpaper.title,
            caption: wallpaper.caption,
            description: wallpaper.description,
            copyright: wallpaper.copyright,
            copyright_link: wallpaper.copyright_link,
            details_url,
            image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_response() {
        let response = PaginatedResponse::new(vec![1, 2], 2, 2, 5);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert_eq!(json["meta"]["page"], 2);
        assert_eq!(json["meta"]["total"], 5);
    }

    #[test]
    fn test_wallpaper_response_links() {
        let site = SiteConfig {
            url: "https://bing.example.com".to_string(),
            ..SiteConfig::default()
        };
        let wallpaper = BingWallpaper {
            id: 7,
            country: CountryCode::EnGb,
            name: "Alps".to_string(),
            date: 0,
            title: "Snowy peaks".to_string(),
            caption: None,
            description: None,
            copyright: "© Someone".to_string(),
            copyright_link: None,
            url_base: "/th?id=OHR.Alps_EN-GB0001".to_string(),
            hsh: String::new(),
            created_at: String::new(),
        };

        let json = serde_json::to_value(WallpaperResponse::new(&site, wallpaper)).unwrap();
        assert_eq!(json["country"], "en-GB");
        assert_eq!(
            json["details_url"],
            "https://bing.example.com/details/en-GB/Alps"
        );
        assert_eq!(
            json["image_url"],
            "https://bing.example.com/wallpaper/en-GB/Alps_1920x1080.jpg"
        );
        assert!(json.get("caption").is_none());
    }
}
