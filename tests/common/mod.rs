//! Test helpers for web integration tests.
//!
//! Provides a test server backed by an in-memory database and a local
//! stand-in for the Bing image endpoint.

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use axum_test::TestServer;

use bing_wallpaper::config::{BingConfig, SiteConfig};
use bing_wallpaper::web::{create_health_router, create_router, AppState};
use bing_wallpaper::{BingClient, CountryCode, Database, NewWallpaper, WallpaperRepository};

/// Public URL of the test site.
pub const SITE_URL: &str = "https://bing.example.com";

/// Body of every image served by the Bing stand-in.
pub const IMAGE_BYTES: &[u8] = b"\xff\xd8\xff\xe0test-image";

/// Site configuration used by every test.
pub fn site_config() -> SiteConfig {
    SiteConfig {
        url: SITE_URL.to_string(),
        title: "Bing Wallpaper".to_string(),
        description: "Daily wallpapers".to_string(),
        author: "Bing Wallpaper Team".to_string(),
    }
}

async fn image() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/jpeg")], IMAGE_BYTES)
}

/// Serve the Bing stand-in on an ephemeral port and return its base URL.
pub async fn spawn_bing() -> String {
    let app = Router::new().route("/th", get(image));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind Bing stand-in");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Bing stand-in failed");
    });
    format!("http://{}", addr)
}

/// Create a test server with an in-memory database.
///
/// Image downloads go to `bing_base_url`.
pub async fn create_test_server_with_bing(bing_base_url: &str) -> (TestServer, Arc<Database>) {
    let db = Arc::new(
        Database::open_in_memory()
            .await
            .expect("Failed to create test database"),
    );

    let bing = BingConfig {
        base_url: bing_base_url.to_string(),
        ..BingConfig::default()
    };
    let client = Arc::new(BingClient::new(&bing).expect("Failed to create client"));

    let app_state = Arc::new(AppState::new(db.clone(), client, site_config()));
    let router = create_router(app_state, &[]).merge(create_health_router());
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Create a test server whose Bing endpoint is unreachable.
pub async fn create_test_server() -> (TestServer, Arc<Database>) {
    create_test_server_with_bing("http://127.0.0.1:9").await
}

/// Store a wallpaper and return its ID.
pub async fn seed_wallpaper(db: &Database, country: CountryCode, name: &str, date: i64) -> i64 {
    let wallpaper = NewWallpaper::new(
        country,
        name,
        date,
        format!("/th?id=OHR.{}_{}0001", name, country.code().to_uppercase()),
    )
    .with_title(format!("{} title", name))
    .with_caption(format!("{} caption", name))
    .with_description(format!("{} description", name))
    .with_copyright(format!("{} (© Photographer)", name));

    WallpaperRepository::new(db.pool())
        .create_or_ignore(&wallpaper)
        .await
        .expect("Failed to store wallpaper")
        .expect("Wallpaper already stored")
}
