//! Wallpaper detail page.

use axum::{
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;

use super::{path_country, AppState};
use crate::config::SiteConfig;
use crate::datetime::epoch_millis_to_local_date;
use crate::site::{escape_html, img_href, FEED_RESOLUTION, RESOLUTIONS};
use crate::wallpaper::{BingWallpaper, WallpaperService};
use crate::web::error::ApiError;

/// GET /details/:country/:name - HTML page of one wallpaper.
pub async fn wallpaper_details(
    State(state): State<Arc<AppState>>,
    Path((country, name)): Path<(String, String)>,
) -> Result<Html<String>, ApiError> {
    let country = path_country(&country)?;
    let wallpaper = WallpaperService::new(&state.db).get(country, &name).await?;
    Ok(Html(render_details(&state.site, &wallpaper)))
}

/// Render the detail page of a wallpaper.
pub fn render_details(site: &SiteConfig, wallpaper: &BingWallpaper) -> String {
    let title = escape_html(&wallpaper.title);
    let mut html = String::with_capacity(2048);

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\"/>\n\
         <title>{} - {}</title>\n<meta name=\"description\" content=\"{}\"/>\n\
         <link rel=\"alternate\" type=\"application/rss+xml\" href=\"{}/rss/{}\"/>\n\
         </head>\n<body>\n",
        wallpaper.country,
        title,
        escape_html(&site.title),
        escape_html(wallpaper.description.as_deref().unwrap_or(&site.description)),
        site.url,
        wallpaper.country,
    ));

    html.push_str(&format!(
        "<img src=\"{}{}\" alt=\"{}\"/>\n<h1>{}</h1>\n",
        site.url,
        img_href(wallpaper, FEED_RESOLUTION),
        title,
        title
    ));

    if let Some(caption) = wallpaper.caption.as_deref() {
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(caption)));
    }
    if let Some(day) = epoch_millis_to_local_date(wallpaper.date) {
        html.push_str(&format!("<time>{}</time>\n", day.format("%Y-%m-%d")));
    }
    if let Some(description) = wallpaper.description.as_deref() {
        html.push_str(&format!("<p>{}</p>\n", escape_html(description)));
    }

    let copyright = escape_html(&wallpaper.copyright);
    let copyright = match wallpaper.copyright_link.as_deref() {
        Some(link) => format!("<a href=\"{}\">{}</a>", escape_html(link), copyright),
        None => copyright,
    };
    html.push_str(&format!("<p class=\"copyright\">{}</p>\n", copyright));

    html.push_str("<ul class=\"downloads\">\n");
    for resolution in RESOLUTIONS {
        html.push_str(&format!(
            "<li><a href=\"{}{}\">{}</a></li>\n",
            site.url,
            img_href(wallpaper, resolution),
            resolution
        ));
    }
    html.push_str("</ul>\n</body>\n</html>\n");

    html
}
