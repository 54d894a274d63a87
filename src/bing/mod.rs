//! Bing image archive.
//!
//! [`BingClient`] fetches archive entries and images, [`WorkerPool`] runs
//! fetch jobs on a bounded queue and [`WallpaperUpdater`] schedules one job
//! per market on every cycle.

pub mod client;
pub mod pool;
pub mod types;
pub mod updater;

pub use client::{build_image_archive_url, BingClient};
pub use pool::WorkerPool;
pub use types::{ImageArchive, RawMetadata, DEFAULT_ARCHIVE_COUNT, MAX_ARCHIVE_COUNT};
pub use updater::{start_wallpaper_updater, update_market, WallpaperUpdater};

#[cfg(test)]
pub(crate) mod testing {
    //! Local stand-in for the Bing endpoints.

    use std::collections::HashMap;

    use axum::extract::Query;
    use axum::http::header;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::Router;

    /// Archive served for every market except `ja-JP`.
    pub const ARCHIVE_JSON: &str = r#"{
        "images": [
            {
                "startdate": "20240615",
                "enddate": "20240616",
                "urlbase": "/th?id=OHR.Alps_EN-US0001",
                "copyright": "Alps (© Someone)",
                "copyrightlink": "https://www.bing.com/search?q=alps",
                "title": "Snowy peaks",
                "hsh": "a1"
            },
            {
                "startdate": "20240614",
                "enddate": "20240615",
                "urlbase": "/th?id=OHR.Coast_EN-US0002",
                "copyright": "Coast (© Someone)",
                "title": "Rocky coast",
                "hsh": "b2"
            }
        ]
    }"#;

    /// Archive served for `ja-JP`; its date cannot be parsed.
    pub const BROKEN_ARCHIVE_JSON: &str = r#"{
        "images": [
            {
                "startdate": "someday",
                "enddate": "someday",
                "urlbase": "/th?id=OHR.Broken_JA-JP0001",
                "copyright": "Broken",
                "title": "Broken",
                "hsh": "c3"
            }
        ]
    }"#;

    /// Body of every image download.
    pub const IMAGE_BYTES: &[u8] = b"\xff\xd8\xff\xe0fake-jpeg";

    async fn archive(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
        let body = match params.get("mkt").map(String::as_str) {
            Some("ja-JP") => BROKEN_ARCHIVE_JSON,
            _ => ARCHIVE_JSON,
        };
        ([(header::CONTENT_TYPE, "application/json")], body)
    }

    async fn image() -> impl IntoResponse {
        ([(header::CONTENT_TYPE, "image/jpeg")], IMAGE_BYTES)
    }

    /// Serve the stand-in on an ephemeral port and return its base URL.
    pub async fn spawn_bing() -> String {
        let app = Router::new()
            .route("/HPImageArchive.aspx", get(archive))
            .route("/th", get(image));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }
}
