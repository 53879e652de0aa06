//! URL path-segment calendar-date type.

use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Calendar date used as a URL path segment.
///
/// Parses ISO `YYYY-MM-DD` only; any other string is a validation
/// failure. Deserializes from its string form, so it drops straight into
/// an axum `Path` extractor, and serializes back to the same ISO form.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct UrlDate(NaiveDate);

impl UrlDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for UrlDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<NaiveDate>()
            .map(Self)
            .map_err(|_| DateError::invalid_url_date(s))
    }
}

impl TryFrom<String> for UrlDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UrlDate> for String {
    fn from(value: UrlDate) -> Self {
        value.to_string()
    }
}

impl From<NaiveDate> for UrlDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl From<UrlDate> for NaiveDate {
    fn from(value: UrlDate) -> Self {
        value.0
    }
}

impl core::fmt::Display for UrlDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // NaiveDate renders ISO `YYYY-MM-DD`.
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_calendar_dates() {
        let date = "2023-02-07".parse::<UrlDate>().unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2023, 2, 7).unwrap());
    }

    #[test]
    fn rejects_everything_else() {
        for raw in ["02/07/2023", "2023-02-07T10:00:00", "tomorrow"] {
            let err = raw.parse::<UrlDate>().unwrap_err();
            assert_eq!(err, DateError::invalid_url_date(raw));
        }
    }

    #[test]
    fn serializes_back_to_the_segment_form() {
        let date = "2023-02-07".parse::<UrlDate>().unwrap();
        assert_eq!(date.to_string(), "2023-02-07");

        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2023-02-07\"");

        let back: UrlDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }

    #[test]
    fn deserialization_rejects_non_iso_strings() {
        assert!(serde_json::from_str::<UrlDate>("\"7th of Feb\"").is_err());
    }
}
