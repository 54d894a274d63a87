//! Wallpapers of the Bing image archive.
//!
//! - [`NewWallpaper::from_raw`] normalizes an archive entry
//! - [`WallpaperRepository`] stores wallpapers, one per market and name
//! - [`WallpaperService`] ingests fetched archives and serves queries

pub mod repository;
pub mod service;
pub mod types;

pub use repository::WallpaperRepository;
pub use service::{IngestReport, WallpaperService};
pub use types::{BingWallpaper, NewWallpaper};
