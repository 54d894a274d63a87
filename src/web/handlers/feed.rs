//! RSS feed handlers.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{path_country, AppState};
use crate::feed::build_feed;
use crate::locale::{negotiate_country, CountryCode};
use crate::wallpaper::WallpaperService;
use crate::web::error::ApiError;

/// Content type of the feed.
pub const RSS_CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";

/// GET /rss - Feed of the market negotiated from `Accept-Language`.
pub async fn negotiated_feed(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    let country = negotiate_country(accept_language);
    feed_response(&state, country).await
}

/// GET /rss/:country - Feed of one market.
pub async fn country_feed(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> Result<Response, ApiError> {
    let country = path_country(&country)?;
    feed_response(&state, country).await
}

async fn feed_response(state: &AppState, country: CountryCode) -> Result<Response, ApiError> {
    let wallpapers = WallpaperService::new(&state.db)
        .feed_entries(country)
        .await?;
    let xml = build_feed(&state.site, &wallpapers, country)?;

    Ok(([(header::CONTENT_TYPE, RSS_CONTENT_TYPE)], xml).into_response())
}
