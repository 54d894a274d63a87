//! Router configuration.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    country_feed, download_wallpaper, get_wallpaper, list_wallpapers, negotiated_feed,
    wallpaper_details, AppState,
};
use super::middleware::create_cors_layer;

/// Create the main router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let api_routes = Router::new()
        .route("/wallpapers", get(list_wallpapers))
        .route("/wallpapers/:country/:name", get(get_wallpaper));

    let site_routes = Router::new()
        .route("/details/:country/:name", get(wallpaper_details))
        .route("/rss", get(negotiated_feed))
        .route("/rss/:country", get(country_feed))
        .route("/wallpaper/:country/:file", get(download_wallpaper));

    Router::new()
        .nest("/api", api_routes)
        .merge(site_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::bing::BingClient;
    use crate::config::{BingConfig, SiteConfig};
    use crate::Database;

    async fn app_state() -> Arc<AppState> {
        let db = Database::open_in_memory().await.unwrap();
        let client = BingClient::new(&BingConfig::default()).unwrap();
        Arc::new(AppState::new(
            Arc::new(db),
            Arc::new(client),
            SiteConfig::default(),
        ))
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = create_health_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let origins = vec!["https://reader.example.com".to_string()];
        let response = create_router(app_state().await, &origins)
            .oneshot(
                Request::builder()
                    .uri("/rss/en-US")
                    .header(header::ORIGIN, "https://reader.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://reader.example.com"
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = create_router(app_state().await, &[])
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
