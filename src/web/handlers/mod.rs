//! HTTP handlers.

pub mod details;
pub mod download;
pub mod feed;
pub mod wallpaper;

pub use details::*;
pub use download::*;
pub use feed::*;
pub use wallpaper::*;

use std::sync::Arc;

use crate::bing::BingClient;
use crate::config::SiteConfig;
use crate::locale::CountryCode;
use crate::web::error::ApiError;
use crate::Database;

/// Database shared across handlers.
pub type SharedDatabase = Arc<Database>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database pool.
    pub db: SharedDatabase,
    /// Client for upstream image downloads.
    pub client: Arc<BingClient>,
    /// Site information.
    pub site: SiteConfig,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: SharedDatabase, client: Arc<BingClient>, site: SiteConfig) -> Self {
        Self { db, client, site }
    }
}

/// Parse a market code taken from the URL path.
///
/// Unknown markets have no pages, so they are reported as not found.
pub(crate) fn path_country(code: &str) -> Result<CountryCode, ApiError> {
    code.parse()
        .map_err(|_| ApiError::not_found(format!("unknown country {}", code)))
}
