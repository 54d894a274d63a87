//! Supported Bing markets and their languages.
//!
//! A market is identified by a [`CountryCode`]. Each market is read in one
//! [`Language`], which selects the month-name table used when parsing the
//! loosely formatted dates Bing publishes for that market.

mod months;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{BingWallpaperError, Result};

pub use months::MonthNames;

/// Market used when nothing else can be negotiated.
pub const DEFAULT_COUNTRY: CountryCode = CountryCode::ZhCn;

/// A Bing market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "ja-JP")]
    JaJp,
    #[serde(rename = "en-IN")]
    EnIn,
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "en-CA")]
    EnCa,
    #[serde(rename = "en-GB")]
    EnGb,
}

impl CountryCode {
    /// Every supported market.
    pub const ALL: [CountryCode; 9] = [
        CountryCode::ZhCn,
        CountryCode::EnUs,
        CountryCode::JaJp,
        CountryCode::EnIn,
        CountryCode::PtBr,
        CountryCode::FrFr,
        CountryCode::DeDe,
        CountryCode::EnCa,
        CountryCode::EnGb,
    ];

    /// The market code as Bing expects it in the `mkt` parameter.
    pub fn code(&self) -> &'static str {
        match self {
            CountryCode::ZhCn => "zh-CN",
            CountryCode::EnUs => "en-US",
            CountryCode::JaJp => "ja-JP",
            CountryCode::EnIn => "en-IN",
            CountryCode::PtBr => "pt-BR",
            CountryCode::FrFr => "fr-FR",
            CountryCode::DeDe => "de-DE",
            CountryCode::EnCa => "en-CA",
            CountryCode::EnGb => "en-GB",
        }
    }

    /// Map a BCP 47 language range (`fr`, `en-GB`, `zh-Hans-CN`) to a market.
    ///
    /// An exact market match wins; otherwise the primary language subtag
    /// picks the market that speaks it.
    pub fn from_language_range(range: &str) -> Option<CountryCode> {
        if let Ok(country) = range.parse() {
            return Some(country);
        }
        let primary = range.split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "zh" => Some(CountryCode::ZhCn),
            "en" => Some(CountryCode::EnUs),
            "ja" => Some(CountryCode::JaJp),
            "pt" => Some(CountryCode::PtBr),
            "fr" => Some(CountryCode::FrFr),
            "de" => Some(CountryCode::DeDe),
            _ => None,
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CountryCode {
    type Err = BingWallpaperError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('_', "-");
        CountryCode::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| BingWallpaperError::Validation(format!("unsupported market: {s}")))
    }
}

/// Language whose month names a market publishes dates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Chinese,
    Japanese,
    French,
    German,
}

impl Language {
    /// Month-name table for this language.
    pub fn month_names(&self) -> &'static MonthNames {
        match self {
            Language::English => &months::ENGLISH,
            Language::Chinese => &months::CHINESE,
            Language::Japanese => &months::JAPANESE,
            Language::French => &months::FRENCH,
            Language::German => &months::GERMAN,
        }
    }
}

/// Pick the market for an `Accept-Language` header value.
///
/// Ranges are ordered by their `q` weight (highest first, header order on
/// ties) and the first one that maps to a market wins. Falls back to
/// [`DEFAULT_COUNTRY`].
pub fn negotiate_country(accept_language: Option<&str>) -> CountryCode {
    let Some(header) = accept_language.filter(|h| !h.trim().is_empty()) else {
        return DEFAULT_COUNTRY;
    };

    let mut ranges: Vec<(&str, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let range = pieces.next()?.trim();
            if range.is_empty() || range == "*" {
                return None;
            }
            let weight = pieces
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            Some((range, weight))
        })
        .collect();

    // sort_by is stable, so equal weights keep header order
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranges
        .into_iter()
        .filter(|(_, weight)| *weight > 0.0)
        .find_map(|(range, _)| CountryCode::from_language_range(range))
        .unwrap_or(DEFAULT_COUNTRY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip_for_all_markets() {
        for country in CountryCode::ALL {
            assert_eq!(country.code().parse::<CountryCode>().unwrap(), country);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ZH-cn".parse::<CountryCode>().unwrap(), CountryCode::ZhCn);
        assert_eq!("de_DE".parse::<CountryCode>().unwrap(), CountryCode::DeDe);
    }

    #[test]
    fn test_parse_unknown_market() {
        let err = "xx-YY".parse::<CountryCode>().unwrap_err();
        assert!(matches!(err, BingWallpaperError::Validation(_)));
    }

    #[test]
    fn test_serde_uses_market_code() {
        let json = serde_json::to_string(&CountryCode::FrFr).unwrap();
        assert_eq!(json, "\"fr-FR\"");
        let back: CountryCode = serde_json::from_str("\"en-GB\"").unwrap();
        assert_eq!(back, CountryCode::EnGb);
    }

    #[test]
    fn test_from_language_range() {
        assert_eq!(
            CountryCode::from_language_range("en-GB"),
            Some(CountryCode::EnGb)
        );
        assert_eq!(
            CountryCode::from_language_range("en-AU"),
            Some(CountryCode::EnUs)
        );
        assert_eq!(
            CountryCode::from_language_range("zh-Hans-CN"),
            Some(CountryCode::ZhCn)
        );
        assert_eq!(CountryCode::from_language_range("ko"), None);
    }

    #[test]
    fn test_negotiate_missing_header() {
        assert_eq!(negotiate_country(None), CountryCode::ZhCn);
        assert_eq!(negotiate_country(Some("  ")), CountryCode::ZhCn);
    }

    #[test]
    fn test_negotiate_prefers_highest_weight() {
        let header = "en;q=0.5, fr-FR;q=0.9, de;q=0.7";
        assert_eq!(negotiate_country(Some(header)), CountryCode::FrFr);
    }

    #[test]
    fn test_negotiate_keeps_header_order_on_ties() {
        assert_eq!(
            negotiate_country(Some("ja-JP, en-US")),
            CountryCode::JaJp
        );
    }

    #[test]
    fn test_negotiate_skips_unknown_languages() {
        assert_eq!(
            negotiate_country(Some("ko-KR, de-DE;q=0.8")),
            CountryCode::DeDe
        );
        assert_eq!(negotiate_country(Some("ko-KR, *;q=0.1")), CountryCode::ZhCn);
    }

    #[test]
    fn test_negotiate_ignores_zero_weight() {
        assert_eq!(
            negotiate_country(Some("fr;q=0, en-GB;q=0.2")),
            CountryCode::EnGb
        );
    }
}
