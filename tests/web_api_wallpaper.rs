//! Web API Wallpaper Tests
//!
//! Integration tests for the wallpaper JSON endpoints and detail pages.

mod common;

use axum::http::StatusCode;
use bing_wallpaper::CountryCode;
use serde_json::Value;

use common::{create_test_server, seed_wallpaper, SITE_URL};

#[tokio::test]
async fn test_health() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_list_wallpapers_empty() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/api/wallpapers").await;
    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["data"], serde_json::json!([]));
    assert_eq!(json["meta"]["page"], 1);
    assert_eq!(json["meta"]["total"], 0);
}

#[tokio::test]
async fn test_list_wallpapers_default_country_newest_first() {
    let (server, db) = create_test_server().await;
    seed_wallpaper(&db, CountryCode::ZhCn, "Older", 1_000).await;
    seed_wallpaper(&db, CountryCode::ZhCn, "Newer", 2_000).await;
    seed_wallpaper(&db, CountryCode::EnUs, "Elsewhere", 3_000).await;

    let response = server.get("/api/wallpapers").await;
    response.assert_status_ok();

    let json: Value = response.json();
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Newer", "Older"]);
    assert_eq!(json["meta"]["total"], 2);
    assert_eq!(json["data"][0]["country"], "zh-CN");
    assert_eq!(
        json["data"][0]["details_url"],
        format!("{}/details/zh-CN/Newer", SITE_URL)
    );
}

#[tokio::test]
async fn test_list_wallpapers_paging() {
    let (server, db) = create_test_server().await;
    for (i, name) in ["A", "B", "C", "D", "E"].iter().enumerate() {
        seed_wallpaper(&db, CountryCode::EnGb, name, (i as i64 + 1) * 1_000).await;
    }

    let response = server
        .get("/api/wallpapers")
        .add_query_param("country", "en-gb")
        .add_query_param("page", 2)
        .add_query_param("per_page", 2)
        .await;
    response.assert_status_ok();

    let json: Value = response.json();
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["C", "B"]);
    assert_eq!(json["meta"]["page"], 2);
    assert_eq!(json["meta"]["per_page"], 2);
    assert_eq!(json["meta"]["total"], 5);
}

#[tokio::test]
async fn test_list_wallpapers_unknown_country() {
    let (server, _db) = create_test_server().await;

    let response = server
        .get("/api/wallpapers")
        .add_query_param("country", "xx-XX")
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "UNPROCESSABLE_ENTITY");
}

#[tokio::test]
async fn test_get_wallpaper() {
    let (server, db) = create_test_server().await;
    let id = seed_wallpaper(&db, CountryCode::JaJp, "Fuji", 1_000).await;

    let response = server.get("/api/wallpapers/ja-JP/Fuji").await;
    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["title"], "Fuji title");
    assert_eq!(json["data"]["caption"], "Fuji caption");
    assert_eq!(json["data"]["copyright"], "Fuji (© Photographer)");
    assert_eq!(
        json["data"]["image_url"],
        format!("{}/wallpaper/ja-JP/Fuji_1920x1080.jpg", SITE_URL)
    );
}

#[tokio::test]
async fn test_get_wallpaper_not_found() {
    let (server, db) = create_test_server().await;
    seed_wallpaper(&db, CountryCode::JaJp, "Fuji", 1_000).await;

    let response = server.get("/api/wallpapers/en-US/Fuji").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "NOT_FOUND");

    let response = server.get("/api/wallpapers/xx-XX/Fuji").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_details_page() {
    let (server, db) = create_test_server().await;
    seed_wallpaper(&db, CountryCode::DeDe, "Rhein", 1_000).await;

    let response = server.get("/details/de-DE/Rhein").await;
    response.assert_status_ok();

    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let html = response.text();
    assert!(html.contains("<h1>Rhein title</h1>"));
    assert!(html.contains("<h2>Rhein caption</h2>"));
    assert!(html.contains(&format!(
        "<img src=\"{}/wallpaper/de-DE/Rhein_1920x1080.jpg\"",
        SITE_URL
    )));
}

#[tokio::test]
async fn test_details_page_not_found() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/details/de-DE/Nothing").await;
    response.assert_status(StatusCode::NOT_FOUND);
}
