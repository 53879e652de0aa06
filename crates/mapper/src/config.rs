//! Coercion configuration for the structured mapper.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{MapError, MapResult};

/// Conversion hook for calendar-date fields.
pub type DateHook = fn(&str) -> MapResult<NaiveDate>;
/// Conversion hook for date-time fields.
pub type DateTimeHook = fn(&str) -> MapResult<NaiveDateTime>;
/// Conversion hook for time-of-day fields.
pub type TimeHook = fn(&str) -> MapResult<NaiveTime>;

/// Coercion rules consulted by a [`Mapper`](crate::Mapper).
///
/// Hooks convert raw strings into temporal values; cast switches permit
/// construction of identifier and enum types from compatible primitive
/// representations. Where a type carries both, the hook is consulted
/// first. The configuration is owned by the mapper it is given to;
/// replacing it requires `&mut` access
/// ([`Mapper::set_config`](crate::Mapper::set_config)), so it cannot
/// change under a mapping call already in flight.
#[derive(Debug, Clone)]
pub struct MapperConfig {
    /// Hook for calendar-date fields.
    pub date_hook: DateHook,
    /// Hook for date-time fields.
    pub datetime_hook: DateTimeHook,
    /// Hook for time-of-day fields.
    pub time_hook: TimeHook,
    /// Allow UUID fields to be built from UUID-shaped strings.
    pub cast_uuid_strings: bool,
    /// Allow enum fields to be built from their serde representation.
    pub cast_enum_values: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            date_hook: parse_date,
            datetime_hook: parse_datetime,
            time_hook: parse_time,
            cast_uuid_strings: true,
            cast_enum_values: true,
        }
    }
}

/// Default calendar-date hook.
///
/// Strict `YYYY-MM-DD` first; on failure the string is retried as a full
/// date-time and the time component is discarded, so a date field accepts
/// both pure-date and full-timestamp representations. This is the only
/// two-attempt coercion in the mapper.
pub fn parse_date(raw: &str) -> MapResult<NaiveDate> {
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Ok(date);
    }
    raw.parse::<NaiveDateTime>()
        .map(|dt| dt.date())
        .map_err(|_| MapError::conversion(format!("invalid calendar date `{raw}`")))
}

/// Default date-time hook: ISO-8601, single attempt.
pub fn parse_datetime(raw: &str) -> MapResult<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .map_err(|_| MapError::conversion(format!("invalid date-time `{raw}`")))
}

/// Default time-of-day hook: `HH:MM:SS`, single attempt.
pub fn parse_time(raw: &str) -> MapResult<NaiveTime> {
    raw.parse::<NaiveTime>()
        .map_err(|_| MapError::conversion(format!("invalid time `{raw}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_hook_parses_plain_dates() {
        let date = parse_date("2023-02-07").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 2, 7).unwrap());
    }

    #[test]
    fn date_hook_discards_time_from_full_timestamps() {
        let date = parse_date("2023-02-07T14:05:26").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 2, 7).unwrap());
    }

    #[test]
    fn date_hook_rejects_garbage() {
        assert!(parse_date("not-a-date").is_err());
    }

    #[test]
    fn datetime_hook_has_no_date_fallback() {
        assert!(parse_datetime("2023-02-07").is_err());
        assert!(parse_datetime("2023-02-07T14:05:26").is_ok());
    }

    #[test]
    fn time_hook_parses_iso_times_only() {
        assert_eq!(
            parse_time("14:05:26").unwrap(),
            NaiveTime::from_hms_opt(14, 5, 26).unwrap()
        );
        assert!(parse_time("2:05 PM").is_err());
    }
}
