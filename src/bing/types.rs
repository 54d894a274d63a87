//! Bing image archive types.

use serde::Deserialize;

/// Number of images Bing returns at most per archive request.
pub const MAX_ARCHIVE_COUNT: u32 = 8;

/// Default number of images requested per market.
pub const DEFAULT_ARCHIVE_COUNT: u32 = 8;

/// Response body of `HPImageArchive.aspx?format=js`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageArchive {
    #[serde(default)]
    pub images: Vec<RawMetadata>,
}

/// One image entry as published by Bing for a market.
///
/// Date strings are kept verbatim; which of them is authoritative depends on
/// the market (see [`crate::datetime::resolve_date`]).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMetadata {
    /// Start date, locale-formatted.
    #[serde(rename = "startdate", alias = "date", default)]
    pub date: String,
    /// End date, locale-formatted.
    #[serde(rename = "enddate", alias = "endDate", default)]
    pub end_date: String,
    /// Headline.
    #[serde(default)]
    pub title: String,
    /// Short caption shown after the headline.
    #[serde(default)]
    pub caption: Option<String>,
    /// Longer description.
    #[serde(rename = "desc", alias = "description", default)]
    pub description: Option<String>,
    /// Attribution line.
    #[serde(default)]
    pub copyright: String,
    /// Link to the attribution search page.
    #[serde(rename = "copyrightlink", default)]
    pub copyright_link: Option<String>,
    /// Image path without resolution suffix, e.g. `/th?id=OHR.Foo_ZH-CN123`.
    #[serde(rename = "urlbase", default)]
    pub url_base: String,
    /// Upstream content hash.
    #[serde(default)]
    pub hsh: String,
}

impl RawMetadata {
    /// Stable image name derived from the url base.
    ///
    /// `/th?id=OHR.Foo_ZH-CN123` becomes `Foo`, `/az/hprichbg/rb/Bar_EN-US456`
    /// becomes `Bar`.
    pub fn name(&self) -> Option<String> {
        let tail = match self.url_base.split_once("id=") {
            Some((_, id)) => id,
            None => self.url_base.rsplit('/').next().unwrap_or_default(),
        };
        let tail = tail.strip_prefix("OHR.").unwrap_or(tail);
        let name = tail.split('_').next().unwrap_or_default().trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}
