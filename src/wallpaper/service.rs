//! Wallpaper service.
//!
//! Normalizes fetched archive entries and answers the queries of the web
//! layer on top of [`WallpaperRepository`].

use tracing::{debug, info};

use super::repository::WallpaperRepository;
use super::types::{BingWallpaper, NewWallpaper};
use crate::bing::RawMetadata;
use crate::db::Database;
use crate::feed::FEED_SIZE;
use crate::locale::CountryCode;
use crate::{BingWallpaperError, Result};

/// Outcome of storing one fetched archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Wallpapers stored for the first time.
    pub stored: usize,
    /// Wallpapers that were already stored.
    pub existing: usize,
}

/// Service for wallpaper operations.
pub struct WallpaperService<'a> {
    db: &'a Database,
}

impl<'a> WallpaperService<'a> {
    /// Create a new service with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Store the archive entries fetched for `country`.
    ///
    /// Every entry is normalized before anything is written, so an entry
    /// whose date cannot be resolved leaves the database untouched.
    pub async fn ingest(
        &self,
        country: CountryCode,
        entries: &[RawMetadata],
    ) -> Result<IngestReport> {
        let wallpapers = entries
            .iter()
            .map(|raw| NewWallpaper::from_raw(country, raw))
            .collect::<Result<Vec<_>>>()?;

        let repo = WallpaperRepository::new(self.db.pool());
        let mut report = IngestReport::default();

        for wallpaper in &wallpapers {
            match repo.create_or_ignore(wallpaper).await? {
                Some(id) => {
                    debug!(country = %country, name = %wallpaper.name, id, "Stored wallpaper");
                    report.stored += 1;
                }
                None => report.existing += 1,
            }
        }

        info!(
            country = %country,
            stored = report.stored,
            existing = report.existing,
            "Ingested wallpaper archive"
        );
        Ok(report)
    }

    /// List one page of a market's wallpapers, newest first.
    ///
    /// Pages start at 1. Returns the page and the total count.
    pub async fn list(
        &self,
        country: CountryCode,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<BingWallpaper>, i64)> {
        if page == 0 || per_page == 0 {
            return Err(BingWallpaperError::Validation(
                "page and per_page must be at least 1".to_string(),
            ));
        }

        let repo = WallpaperRepository::new(self.db.pool());
        let offset = i64::from(page - 1) * i64::from(per_page);
        let wallpapers = repo
            .list_by_country(country, i64::from(per_page), offset)
            .await?;
        let total = repo.count_by_country(country).await?;
        Ok((wallpapers, total))
    }

    /// Get a wallpaper of a market by image name.
    pub async fn get(&self, country: CountryCode, name: &str) -> Result<BingWallpaper> {
        WallpaperRepository::new(self.db.pool())
            .get_by_name(country, name)
            .await?
            .ok_or_else(|| BingWallpaperError::NotFound(format!("wallpaper {}/{}", country, name)))
    }

    /// The wallpapers published in a market's feed, newest first.
    pub async fn feed_entries(&self, country: CountryCode) -> Result<Vec<BingWallpaper>> {
        WallpaperRepository::new(self.db.pool())
            .list_by_country(country, FEED_SIZE, 0)
            .await
    }
}
