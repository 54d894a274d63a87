//! Wallpaper downloads proxied from Bing.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{path_country, AppState};
use crate::site::{is_supported_resolution, parse_image_file, upstream_image_url};
use crate::wallpaper::WallpaperService;
use crate::web::error::ApiError;

/// GET /wallpaper/:country/:file - Download `{name}_{resolution}.jpg`.
pub async fn download_wallpaper(
    State(state): State<Arc<AppState>>,
    Path((country, file)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let country = path_country(&country)?;
    let (name, resolution) =
        parse_image_file(&file).ok_or_else(|| ApiError::not_found(format!("{} not found", file)))?;
    if !is_supported_resolution(resolution) {
        return Err(ApiError::not_found(format!(
            "resolution {} not available",
            resolution
        )));
    }

    let wallpaper = WallpaperService::new(&state.db).get(country, name).await?;
    let url = upstream_image_url(state.client.base_url(), &wallpaper.url_base, resolution);
    let bytes = state.client.download_wallpaper(&url).await?;

    tracing::debug!(country = %country, file = %file, size = bytes.len(), "Served wallpaper");

    Ok((
        [
            (header::CONTENT_TYPE, "image/jpeg".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file),
            ),
        ],
        bytes,
    )
        .into_response())
}
