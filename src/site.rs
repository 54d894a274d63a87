//! Link templates for pages and images.
//!
//! Every href is relative to the site root; prepend [`crate::config::SiteConfig::url`]
//! to get an absolute URL.

use crate::locale::CountryCode;
use crate::wallpaper::BingWallpaper;

/// Resolution embedded in feed items.
pub const FEED_RESOLUTION: &str = "1920x1080";

/// Resolutions Bing serves for every image.
pub const RESOLUTIONS: &[&str] = &[
    "UHD",
    "1920x1200",
    "1920x1080",
    "1366x768",
    "1280x720",
    "1080x1920",
    "1024x768",
    "800x480",
    "400x240",
];

/// Whether `resolution` is one Bing serves.
pub fn is_supported_resolution(resolution: &str) -> bool {
    RESOLUTIONS.contains(&resolution)
}

/// Detail page of a wallpaper.
pub fn details_href(wallpaper: &BingWallpaper) -> String {
    details_path(wallpaper.country, &wallpaper.name)
}

/// Detail page path for a market and image name.
pub fn details_path(country: CountryCode, name: &str) -> String {
    format!("/details/{}/{}", country, name)
}

/// Download path of a wallpaper at a resolution.
pub fn img_href(wallpaper: &BingWallpaper, resolution: &str) -> String {
    format!(
        "/wallpaper/{}/{}_{}.jpg",
        wallpaper.country, wallpaper.name, resolution
    )
}

/// Split a download file name (`Name_1920x1080.jpg`) into name and resolution.
pub fn parse_image_file(file: &str) -> Option<(&str, &str)> {
    let stem = file.strip_suffix(".jpg")?;
    let (name, resolution) = stem.rsplit_once('_')?;
    if name.is_empty() || resolution.is_empty() {
        return None;
    }
    Some((name, resolution))
}

/// Upstream URL of an image at a resolution.
pub fn upstream_image_url(bing_base_url: &str, url_base: &str, resolution: &str) -> String {
    format!(
        "{}{}_{}.jpg",
        bing_base_url.trim_end_matches('/'),
        url_base,
        resolution
    )
}

/// Escape text for inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
