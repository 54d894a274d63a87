//! RSS 2.0 channel assembly.

use std::collections::BTreeMap;

use rss::{Channel, ChannelBuilder, Item, ItemBuilder};

use super::content::render_content;
use crate::config::SiteConfig;
use crate::datetime::epoch_millis_to_utc;
use crate::locale::CountryCode;
use crate::site::{details_href, img_href, FEED_RESOLUTION};
use crate::wallpaper::BingWallpaper;
use crate::{BingWallpaperError, Result};

/// Namespace of `<content:encoded>`.
pub const CONTENT_NAMESPACE: &str = "http://purl.org/rss/1.0/modules/content/";

/// Builds the wallpaper feed of one market.
///
/// Items keep the order of the input slice; sorting is up to the caller.
pub struct FeedBuilder<'a> {
    site: &'a SiteConfig,
}

impl<'a> FeedBuilder<'a> {
    /// Create a builder for a site.
    pub fn new(site: &'a SiteConfig) -> Self {
        Self { site }
    }

    /// Build the channel for `wallpapers`.
    pub fn channel(&self, wallpapers: &[BingWallpaper], country: CountryCode) -> Result<Channel> {
        let items = wallpapers
            .iter()
            .map(|w| self.item(w))
            .collect::<Result<Vec<_>>>()?;

        let mut namespaces = BTreeMap::new();
        namespaces.insert("content".to_string(), CONTENT_NAMESPACE.to_string());

        Ok(ChannelBuilder::default()
            .namespaces(namespaces)
            .title(self.site.title.clone())
            .link(self.site.url.clone())
            .description(self.site.description.clone())
            .language(Some(country.code().to_string()))
            .copyright(Some(self.site.author.clone()))
            .items(items)
            .build())
    }

    /// Build the channel and serialize it.
    pub fn build(&self, wallpapers: &[BingWallpaper], country: CountryCode) -> Result<String> {
        let channel = self.channel(wallpapers, country)?;
        let bytes = channel
            .write_to(Vec::new())
            .map_err(|e| BingWallpaperError::Feed(format!("failed to write feed: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| BingWallpaperError::Feed(format!("feed is not valid UTF-8: {}", e)))
    }

    fn item(&self, wallpaper: &BingWallpaper) -> Result<Item> {
        let published = epoch_millis_to_utc(wallpaper.date).ok_or_else(|| {
            BingWallpaperError::Feed(format!(
                "timestamp {} of {} is out of range",
                wallpaper.date, wallpaper.name
            ))
        })?;
        let image_url = format!("{}{}", self.site.url, img_href(wallpaper, FEED_RESOLUTION));

        Ok(ItemBuilder::default()
            .title(Some(wallpaper.copyright.clone()))
            .link(Some(format!("{}{}", self.site.url, details_href(wallpaper))))
            .pub_date(Some(published.to_rfc2822()))
            .content(Some(render_content(wallpaper, &image_url)))
            .build())
    }
}

/// Serialize the feed of `country` for `wallpapers`.
pub fn build_feed(
    site: &SiteConfig,
    wallpapers: &[BingWallpaper],
    country: CountryCode,
) -> Result<String> {
    FeedBuilder::new(site).build(wallpapers, country)
}
