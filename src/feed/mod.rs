//! RSS feed of stored wallpapers.
//!
//! [`FeedBuilder`] turns an ordered list of wallpapers into an RSS 2.0
//! document. It never touches storage, so a failed build only fails the
//! request that asked for it.

pub mod builder;
pub mod content;

pub use builder::{build_feed, FeedBuilder, CONTENT_NAMESPACE};
pub use content::{render_content, ContentSection, CAPTION_SEPARATOR, CONTENT_SECTIONS};

/// Number of wallpapers published per feed.
pub const FEED_SIZE: i64 = 20;
