//! Error types for the wallpaper service.

use thiserror::Error;

/// Common error type for the wallpaper service.
#[derive(Error, Debug)]
pub enum BingWallpaperError {
    /// Database error.
    ///
    /// Errors from sqlx are converted into this variant.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Upstream HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// No accepted date layout matched the authoritative date string.
    #[error("failed to parse date {input:?} for {country}")]
    DateParse {
        /// The offending date string.
        input: String,
        /// Market code the string was parsed for.
        country: String,
    },

    /// RSS feed serialization error.
    #[error("feed error: {0}")]
    Feed(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The worker pool queue is full and the job was rejected.
    #[error("worker pool {0} is full")]
    PoolFull(String),

    /// The worker pool has no workers left to take jobs.
    #[error("worker pool {0} is closed")]
    PoolClosed(String),
}

impl From<sqlx::Error> for BingWallpaperError {
    fn from(e: sqlx::Error) -> Self {
        BingWallpaperError::Database(e.to_string())
    }
}

impl From<reqwest::Error> for BingWallpaperError {
    fn from(e: reqwest::Error) -> Self {
        BingWallpaperError::Http(e.to_string())
    }
}

/// Result type alias for wallpaper service operations.
pub type Result<T> = std::result::Result<T, BingWallpaperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_parse_error_display() {
        let err = BingWallpaperError::DateParse {
            input: "garbage".to_string(),
            country: "zh-CN".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse date \"garbage\" for zh-CN"
        );
    }

    #[test]
    fn test_validation_error_display() {
        let err = BingWallpaperError::Validation("unknown market".to_string());
        assert_eq!(err.to_string(), "validation error: unknown market");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = BingWallpaperError::NotFound("wallpaper".to_string());
        assert_eq!(err.to_string(), "wallpaper not found");
    }

    #[test]
    fn test_pool_full_error_display() {
        let err = BingWallpaperError::PoolFull("bing-fetch".to_string());
        assert_eq!(err.to_string(), "worker pool bing-fetch is full");
    }

    #[test]
    fn test_pool_closed_error_display() {
        let err = BingWallpaperError::PoolClosed("bing-fetch".to_string());
        assert_eq!(err.to_string(), "worker pool bing-fetch is closed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BingWallpaperError = io_err.into();
        assert!(matches!(err, BingWallpaperError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(BingWallpaperError::Feed("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
