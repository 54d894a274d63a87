//! Wallpaper handlers for Web API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use super::{path_country, AppState};
use crate::wallpaper::WallpaperService;
use crate::web::dto::{ApiResponse, PaginatedResponse, WallpaperListQuery, WallpaperResponse};
use crate::web::error::ApiError;

/// GET /api/wallpapers - List wallpapers of a market, newest first.
pub async fn list_wallpapers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WallpaperListQuery>,
) -> Result<Json<PaginatedResponse<WallpaperResponse>>, ApiError> {
    let country = query.country()?;
    let (page, per_page) = query.page();

    let (wallpapers, total) = WallpaperService::new(&state.db)
        .list(country, page, per_page)
        .await?;

    let responses: Vec<_> = wallpapers
        .into_iter()
        .map(|w| WallpaperResponse::new(&state.site, w))
        .collect();

    Ok(Json(PaginatedResponse::new(
        responses,
        page,
        per_page,
        total.max(0) as u64,
    )))
}

/// GET /api/wallpapers/:country/:name - Get one wallpaper.
pub async fn get_wallpaper(
    State(state): State<Arc<AppState>>,
    Path((country, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<WallpaperResponse>>, ApiError> {
    let country = path_country(&country)?;
    let wallpaper = WallpaperService::new(&state.db).get(country, &name).await?;

    Ok(Json(ApiResponse::new(WallpaperResponse::new(
        &state.site,
        wallpaper,
    ))))
}
