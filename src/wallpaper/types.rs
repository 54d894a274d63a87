//! Wallpaper types.

use serde::Serialize;

use crate::bing::RawMetadata;
use crate::datetime::resolve_date;
use crate::locale::CountryCode;
use crate::{BingWallpaperError, Result};

/// A stored wallpaper of one market.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BingWallpaper {
    /// Wallpaper ID.
    pub id: i64,
    /// Market the wallpaper was published in.
    pub country: CountryCode,
    /// Image name, unique per market.
    pub name: String,
    /// Canonical date, epoch milliseconds at local midnight.
    pub date: i64,
    /// Headline.
    pub title: String,
    /// Caption shown after the headline.
    pub caption: Option<String>,
    /// Longer description.
    pub description: Option<String>,
    /// Attribution line.
    pub copyright: String,
    /// Link to the attribution search page.
    pub copyright_link: Option<String>,
    /// Upstream image path without resolution suffix.
    pub url_base: String,
    /// Upstream content hash.
    pub hsh: String,
    /// When the row was stored.
    pub created_at: String,
}

/// New wallpaper for creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWallpaper {
    pub country: CountryCode,
    pub name: String,
    pub date: i64,
    pub title: String,
    pub caption: Option<String>,
    pub description: Option<String>,
    pub copyright: String,
    pub copyright_link: Option<String>,
    pub url_base: String,
    pub hsh: String,
}

impl NewWallpaper {
    /// Create a new wallpaper with only the required fields.
    pub fn new(
        country: CountryCode,
        name: impl Into<String>,
        date: i64,
        url_base: impl Into<String>,
    ) -> Self {
        Self {
            country,
            name: name.into(),
            date,
            title: String::new(),
            caption: None,
            description: None,
            copyright: String::new(),
            copyright_link: None,
            url_base: url_base.into(),
            hsh: String::new(),
        }
    }

    /// Normalize a raw archive entry of `country`.
    ///
    /// Fails when the date cannot be resolved or the entry has no image name.
    pub fn from_raw(country: CountryCode, raw: &RawMetadata) -> Result<Self> {
        let date = resolve_date(country, raw)?;
        let name = raw.name().ok_or_else(|| {
            BingWallpaperError::Validation(format!("no image name in {:?}", raw.url_base))
        })?;

        Ok(Self {
            country,
            name,
            date,
            title: raw.title.clone(),
            caption: non_empty(raw.caption.as_deref()),
            description: non_empty(raw.description.as_deref()),
            copyright: raw.copyright.clone(),
            copyright_link: non_empty(raw.copyright_link.as_deref()),
            url_base: raw.url_base.clone(),
            hsh: raw.hsh.clone(),
        })
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the copyright.
    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = copyright.into();
        self
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn sample_raw() -> RawMetadata {
        RawMetadata {
            date: "20240614".to_string(),
            end_date: "20240615".to_string(),
            title: "Purple haze".to_string(),
            caption: Some("  ".to_string()),
            description: Some("Fields of lavender".to_string()),
            copyright: "Lavender (© Someone)".to_string(),
            copyright_link: Some(String::new()),
            url_base: "/th?id=OHR.Lavender_ZH-CN0123".to_string(),
            hsh: "abc".to_string(),
        }
    }

    #[test]
    fn test_from_raw() {
        let new = NewWallpaper::from_raw(CountryCode::ZhCn, &sample_raw()).unwrap();
        let expected = Local
            .with_ymd_and_hms(2024, 6, 15, 0, 0, 0)
            .earliest()
            .unwrap()
            .timestamp_millis();
        assert_eq!(new.name, "Lavender");
        assert_eq!(new.date, expected);
        assert_eq!(new.title, "Purple haze");
        assert!(new.caption.is_none());
        assert_eq!(new.description.as_deref(), Some("Fields of lavender"));
        assert!(new.copyright_link.is_none());
    }

    #[test]
    fn test_from_raw_bad_date() {
        let mut raw = sample_raw();
        raw.end_date = "garbage".to_string();
        let err = NewWallpaper::from_raw(CountryCode::ZhCn, &raw).unwrap_err();
        assert!(matches!(err, BingWallpaperError::DateParse { .. }));
    }

    #[test]
    fn test_from_raw_missing_name() {
        let mut raw = sample_raw();
        raw.url_base = String::new();
        let err = NewWallpaper::from_raw(CountryCode::EnUs, &raw).unwrap_err();
        assert!(matches!(err, BingWallpaperError::Validation(_)));
    }

    #[test]
    fn test_builder() {
        let new = NewWallpaper::new(CountryCode::FrFr, "Alps", 0, "/th?id=OHR.Alps_FR-FR1")
            .with_title("Les Alpes")
            .with_caption("Neige")
            .with_description("Montagnes")
            .with_copyright("© Photo");
        assert_eq!(new.title, "Les Alpes");
        assert_eq!(new.caption.as_deref(), Some("Neige"));
        assert_eq!(new.description.as_deref(), Some("Montagnes"));
        assert_eq!(new.copyright, "© Photo");
    }
}
