//! Wallpaper repository.

use super::types::{BingWallpaper, NewWallpaper};
use crate::db::DbPool;
use crate::locale::CountryCode;
use crate::{BingWallpaperError, Result};

const SELECT_COLUMNS: &str = r#"
    SELECT id, country, name, date, title, caption, description, copyright,
           copyright_link, url_base, hsh, created_at
    FROM bing_wallpapers
"#;

/// Row type for a wallpaper from database.
#[derive(Debug, Clone, sqlx::FromRow)]
struct WallpaperRow {
    id: i64,
    country: String,
    name: String,
    date: i64,
    title: String,
    caption: Option<String>,
    description: Option<String>,
    copyright: String,
    copyright_link: Option<String>,
    url_base: String,
    hsh: String,
    created_at: String,
}

impl TryFrom<WallpaperRow> for BingWallpaper {
    type Error = BingWallpaperError;

    fn try_from(row: WallpaperRow) -> Result<Self> {
        let country = row.country.parse::<CountryCode>().map_err(|_| {
            BingWallpaperError::Database(format!(
                "unknown country {:?} in wallpaper {}",
                row.country, row.id
            ))
        })?;

        Ok(BingWallpaper {
            id: row.id,
            country,
            name: row.name,
            date: row.date,
            title: row.title,
            caption: row.caption,
            description: row.description,
            copyright: row.copyright,
            copyright_link: row.copyright_link,
            url_base: row.url_base,
            hsh: row.hsh,
            created_at: row.created_at,
        })
    }
}

fn into_wallpapers(rows: Vec<WallpaperRow>) -> Result<Vec<BingWallpaper>> {
    rows.into_iter().map(BingWallpaper::try_from).collect()
}

/// Repository for wallpaper operations.
pub struct WallpaperRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> WallpaperRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Store a wallpaper unless its market already has one with that name.
    ///
    /// Returns the new ID, or `None` when the wallpaper was already stored.
    pub async fn create_or_ignore(&self, wallpaper: &NewWallpaper) -> Result<Option<i64>> {
        let id: Option<i64> = sqlx::query_scalar(
            r#"
            INSERT INTO bing_wallpapers
                (country, name, date, title, caption, description, copyright,
                 copyright_link, url_base, hsh)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT(country, name) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(wallpaper.country.code())
        .bind(&wallpaper.name)
        .bind(wallpaper.date)
        .bind(&wallpaper.title)
        .bind(&wallpaper.caption)
        .bind(&wallpaper.description)
        .bind(&wallpaper.copyright)
        .bind(&wallpaper.copyright_link)
        .bind(&wallpaper.url_base)
        .bind(&wallpaper.hsh)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| BingWallpaperError::Database(e.to_string()))?;

        Ok(id)
    }

    /// Get a wallpaper by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<BingWallpaper>> {
        let query = format!("{} WHERE id = $1", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, WallpaperRow>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| BingWallpaperError::Database(e.to_string()))?;

        row.map(BingWallpaper::try_from).transpose()
    }

    /// Get a wallpaper of a market by image name.
    pub async fn get_by_name(
        &self,
        country: CountryCode,
        name: &str,
    ) -> Result<Option<BingWallpaper>> {
        let query = format!("{} WHERE country = $1 AND name = $2", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, WallpaperRow>(&query)
            .bind(country.code())
            .bind(name)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| BingWallpaperError::Database(e.to_string()))?;

        row.map(BingWallpaper::try_from).transpose()
    }

    /// List wallpapers of a market, newest first.
    pub async fn list_by_country(
        &self,
        country: CountryCode,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BingWallpaper>> {
        let query = format!(
            "{} WHERE country = $1 ORDER BY date DESC, id DESC LIMIT $2 OFFSET $3",
            SELECT_COLUMNS
        );
        let rows = sqlx::query_as::<_, WallpaperRow>(&query)
            .bind(country.code())
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool)
            .await
            .map_err(|e| BingWallpaperError::Database(e.to_string()))?;

        into_wallpapers(rows)
    }

    /// Count wallpapers of a market.
    pub async fn count_by_country(&self, country: CountryCode) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM bing_wallpapers WHERE country = $1")
                .bind(country.code())
                .fetch_one(self.pool)
                .await
                .map_err(|e| BingWallpaperError::Database(e.to_string()))?;

        Ok(count)
    }

    /// Get the newest wallpaper of a market.
    pub async fn latest(&self, country: CountryCode) -> Result<Option<BingWallpaper>> {
        Ok(self.list_by_country(country, 1, 0).await?.into_iter().next())
    }
}
