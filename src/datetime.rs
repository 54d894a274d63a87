//! Date/time utilities.
//!
//! Bing publishes the date of each wallpaper as a loosely formatted string
//! whose shape and language depend on the market. [`resolve_date`] turns it
//! into the canonical timestamp stored with every wallpaper: epoch
//! milliseconds at local midnight of that day.

use chrono::{
    DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc,
};

use crate::bing::RawMetadata;
use crate::locale::{CountryCode, Language, MonthNames};
use crate::{BingWallpaperError, Result};

/// Which raw field carries the authoritative date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Date,
    EndDate,
}

impl DateField {
    /// Pick this field out of a raw record.
    pub fn select<'a>(&self, raw: &'a RawMetadata) -> &'a str {
        match self {
            DateField::Date => &raw.date,
            DateField::EndDate => &raw.end_date,
        }
    }
}

/// How dates of one market are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRule {
    pub field: DateField,
    pub language: Language,
}

/// Markets that deviate from [`DEFAULT_DATE_RULE`].
///
/// zh-CN and de-DE publish the usable date in `enddate`; keep it that way
/// even though the other markets use the start date.
const DATE_RULES: &[(CountryCode, DateRule)] = &[
    (
        CountryCode::ZhCn,
        DateRule {
            field: DateField::EndDate,
            language: Language::Chinese,
        },
    ),
    (
        CountryCode::JaJp,
        DateRule {
            field: DateField::Date,
            language: Language::Japanese,
        },
    ),
    (
        CountryCode::FrFr,
        DateRule {
            field: DateField::Date,
            language: Language::French,
        },
    ),
    (
        CountryCode::DeDe,
        DateRule {
            field: DateField::EndDate,
            language: Language::German,
        },
    ),
];

/// Rule for every market not listed in [`DATE_RULES`].
pub const DEFAULT_DATE_RULE: DateRule = DateRule {
    field: DateField::Date,
    language: Language::English,
};

/// Look up the date rule of a market.
pub fn date_rule(country: CountryCode) -> DateRule {
    DATE_RULES
        .iter()
        .find(|(c, _)| *c == country)
        .map(|(_, rule)| *rule)
        .unwrap_or(DEFAULT_DATE_RULE)
}

/// Accepted date layouts, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// `MMM. dd, yyyy`
    AbbrevMonthDot,
    /// `MMM dd, yyyy`
    AbbrevMonth,
    /// `MM dd, yyyy`
    NumericMonth,
    /// `yyyyMMdd`
    Compact,
}

pub const DATE_LAYOUTS: [DateLayout; 4] = [
    DateLayout::AbbrevMonthDot,
    DateLayout::AbbrevMonth,
    DateLayout::NumericMonth,
    DateLayout::Compact,
];

impl DateLayout {
    /// The layout written as a date pattern.
    pub fn pattern(&self) -> &'static str {
        match self {
            DateLayout::AbbrevMonthDot => "MMM. dd, yyyy",
            DateLayout::AbbrevMonth => "MMM dd, yyyy",
            DateLayout::NumericMonth => "MM dd, yyyy",
            DateLayout::Compact => "yyyyMMdd",
        }
    }

    /// Parse `input` with this layout.
    ///
    /// `input` is expected to be whitespace-normalized already.
    fn parse(&self, input: &str, months: &MonthNames) -> Option<NaiveDate> {
        match self {
            DateLayout::AbbrevMonthDot => {
                let (month_text, day, year) = split_month_day_year(input)?;
                let month = months.month_number(month_text.strip_suffix('.')?)?;
                NaiveDate::from_ymd_opt(year, month, day)
            }
            DateLayout::AbbrevMonth => {
                let (month_text, day, year) = split_month_day_year(input)?;
                if is_digits(month_text, 1, 2) {
                    return None;
                }
                NaiveDate::from_ymd_opt(year, months.month_number(month_text)?, day)
            }
            DateLayout::NumericMonth => {
                let (month_text, day, year) = split_month_day_year(input)?;
                if !is_digits(month_text, 1, 2) {
                    return None;
                }
                NaiveDate::from_ymd_opt(year, month_text.parse().ok()?, day)
            }
            DateLayout::Compact => {
                if !is_digits(input, 8, 8) {
                    return None;
                }
                let year = input[0..4].parse().ok()?;
                let month = input[4..6].parse().ok()?;
                let day = input[6..8].parse().ok()?;
                NaiveDate::from_ymd_opt(year, month, day)
            }
        }
    }
}

/// Split `<month> <day>, <year>` into its parts.
fn split_month_day_year(input: &str) -> Option<(&str, u32, i32)> {
    let (head, year) = input.rsplit_once(',')?;
    let year = year.trim();
    if !is_digits(year, 4, 4) {
        return None;
    }
    let (month, day) = head.trim().rsplit_once(' ')?;
    let day = day.trim();
    if !is_digits(day, 1, 2) {
        return None;
    }
    Some((month.trim(), day.parse().ok()?, year.parse().ok()?))
}

fn is_digits(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a date string with month names of `language`.
///
/// Layouts from [`DATE_LAYOUTS`] are tried in order; the first match wins.
pub fn parse_date(input: &str, language: Language) -> Option<NaiveDate> {
    let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return None;
    }
    let months = language.month_names();
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| layout.parse(&normalized, months))
}

/// First instant of `date` in `tz`.
///
/// When midnight falls into a DST gap the first valid instant after it is
/// used; on an overlap the earlier one.
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => (1..=96)
            .find_map(|quarter| {
                tz.from_local_datetime(&(midnight + TimeDelta::minutes(15 * quarter)))
                    .earliest()
            })
            .unwrap_or_else(|| tz.from_utc_datetime(&midnight)),
    }
}

/// Resolve the canonical timestamp of a raw record for a market.
///
/// Returns epoch milliseconds at local midnight. A string that matches no
/// layout is an error; no fallback date is ever substituted.
pub fn resolve_date(country: CountryCode, raw: &RawMetadata) -> Result<i64> {
    let rule = date_rule(country);
    let input = rule.field.select(raw);
    let date = parse_date(input, rule.language).ok_or_else(|| BingWallpaperError::DateParse {
        input: input.to_string(),
        country: country.code().to_string(),
    })?;
    Ok(start_of_day(date, &Local).timestamp_millis())
}

/// Epoch milliseconds to a UTC datetime.
pub fn epoch_millis_to_utc(epoch_millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(epoch_millis)
}

/// Epoch milliseconds to a local datetime.
pub fn epoch_millis_to_local_datetime(epoch_millis: i64) -> Option<NaiveDateTime> {
    epoch_millis_to_utc(epoch_millis).map(|dt| dt.with_timezone(&Local).naive_local())
}

/// Epoch milliseconds to a local calendar date.
pub fn epoch_millis_to_local_date(epoch_millis: i64) -> Option<NaiveDate> {
    epoch_millis_to_local_datetime(epoch_millis).map(|dt| dt.date())
}
