//! Date formatting functions exposed to templates.

use core::fmt::Write as _;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::DateError;
use crate::tokens::DateFormatToken;

/// A date, date-time, or time-of-day value accepted by [`format_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
}

impl From<NaiveDate> for TemporalValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for TemporalValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveTime> for TemporalValue {
    fn from(value: NaiveTime) -> Self {
        Self::Time(value)
    }
}

/// Format a temporal value with the pattern behind `token`.
///
/// A pattern/value mismatch (a clock-time token applied to a plain date,
/// say) renders an error description instead of panicking, so a template
/// typo cannot take down a request.
pub fn format_value(value: impl Into<TemporalValue>, token: DateFormatToken) -> String {
    let pattern = token.pattern();
    let rendered = match value.into() {
        TemporalValue::Date(d) => render(|out| write!(out, "{}", d.format(pattern))),
        TemporalValue::DateTime(dt) => render(|out| write!(out, "{}", dt.format(pattern))),
        TemporalValue::Time(t) => render(|out| write!(out, "{}", t.format(pattern))),
    };
    rendered.unwrap_or_else(|| format!("value does not support format `{pattern}`"))
}

fn render(f: impl FnOnce(&mut String) -> core::fmt::Result) -> Option<String> {
    let mut out = String::new();
    f(&mut out).ok().map(|()| out)
}

/// Parse an ISO-8601 date-time (or plain date) string, then format it
/// with the pattern behind `token`.
pub fn format_iso_str(raw: &str, token: DateFormatToken) -> Result<String, DateError> {
    Ok(format_value(parse_iso(raw)?, token))
}

fn parse_iso(raw: &str) -> Result<NaiveDateTime, DateError> {
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Ok(dt);
    }
    // Plain calendar dates are accepted and placed at midnight.
    raw.parse::<NaiveDate>()
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| DateError::invalid_iso(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 7, 26).unwrap()
    }

    #[test]
    fn formats_dates_with_each_date_token() {
        assert_eq!(format_value(date(), DateFormatToken::IsoDate), "2022-07-26");
        assert_eq!(format_value(date(), DateFormatToken::Slashes), "07/26/22");
        assert_eq!(format_value(date(), DateFormatToken::DayOfWeek), "Tue");
        assert_eq!(
            format_value(date(), DateFormatToken::DateLong),
            "Tue 07/26/22"
        );
    }

    #[test]
    fn formats_times_with_clock_tokens() {
        let time = NaiveTime::from_hms_opt(10, 13, 0).unwrap();
        assert_eq!(format_value(time, DateFormatToken::Time), "10:13 AM");
        assert_eq!(format_value(time, DateFormatToken::IsoTime), "10:13:00");
    }

    #[test]
    fn mismatched_token_renders_an_error_description() {
        let rendered = format_value(date(), DateFormatToken::Time);
        assert!(rendered.contains("%I:%M %p"));
    }

    #[test]
    fn iso_strings_format_through_both_parse_shapes() {
        assert_eq!(
            format_iso_str("2023-02-07T14:05:26", DateFormatToken::IsoDate).unwrap(),
            "2023-02-07"
        );
        assert_eq!(
            format_iso_str("2023-02-07", DateFormatToken::IsoTime).unwrap(),
            "00:00:00"
        );
    }

    #[test]
    fn non_iso_strings_are_rejected() {
        let err = format_iso_str("02/07/2023", DateFormatToken::IsoDate).unwrap_err();
        assert_eq!(err, DateError::invalid_iso("02/07/2023"));
    }
}
