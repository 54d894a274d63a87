//! Bing Wallpaper
//!
//! Republishes Bing's "image of the day" for several markets: a background
//! updater fetches the image archive, stores normalized wallpapers in SQLite
//! and a small web layer serves pages, a JSON API and RSS feeds.

pub mod bing;
pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod feed;
pub mod locale;
pub mod logging;
pub mod site;
pub mod wallpaper;
pub mod web;

pub use bing::{BingClient, RawMetadata, WallpaperUpdater, WorkerPool};
pub use config::Config;
pub use datetime::resolve_date;
pub use db::{Database, DbPool};
pub use error::{BingWallpaperError, Result};
pub use feed::{build_feed, FeedBuilder};
pub use locale::{negotiate_country, CountryCode, Language};
pub use wallpaper::{BingWallpaper, NewWallpaper, WallpaperRepository, WallpaperService};
