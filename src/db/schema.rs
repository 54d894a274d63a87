//! Database schema and migrations.
//!
//! Migrations are applied in order when the database is opened; the
//! `schema_version` table records which ones already ran.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: wallpapers
    r#"
CREATE TABLE bing_wallpapers (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    country         TEXT NOT NULL,           -- market code, e.g. 'zh-CN'
    name            TEXT NOT NULL,           -- image name derived from urlbase
    date            INTEGER NOT NULL,        -- epoch millis at local midnight
    title           TEXT NOT NULL DEFAULT '',
    caption         TEXT,
    description     TEXT,
    copyright       TEXT NOT NULL DEFAULT '',
    copyright_link  TEXT,
    url_base        TEXT NOT NULL,
    hsh             TEXT NOT NULL DEFAULT '',
    created_at      TEXT NOT NULL DEFAULT (datetime('now')),
    UNIQUE(country, name)
);

CREATE INDEX idx_bing_wallpapers_country_date ON bing_wallpapers(country, date DESC);
"#,
];
