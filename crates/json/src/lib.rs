//! `webplate-json` — payload encoding conventions.
//!
//! Serde adapter modules for `#[serde(with = "...")]` fields:
//!
//! - [`iso_date`]: a `DateTime<Utc>` that is semantically a calendar date
//!   encodes as `YYYY-MM-DD`, never an RFC-2822-style timestamp.
//! - [`iso_datetime`]: second-precision ISO-8601.
//! - [`amount_float`]: fixed-point minor-unit amounts as decimal floats.

/// Calendar-date encoding for `DateTime<Utc>` fields.
///
/// Serializes the date component only (`2023-02-07`). Deserializes from a
/// plain date or a full date-time string; the time component is discarded
/// and the result sits at midnight UTC.
pub mod iso_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.date_naive().to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let date = raw
            .parse::<NaiveDate>()
            .or_else(|_| raw.parse::<NaiveDateTime>().map(|dt| dt.date()))
            .map_err(|_| D::Error::custom(format!("invalid calendar date `{raw}`")))?;
        Ok(date.and_time(NaiveTime::MIN).and_utc())
    }
}

/// Second-precision ISO-8601 encoding for `DateTime<Utc>` fields.
///
/// Serializes as `2023-02-07T14:05:26`. Deserializes from RFC 3339 or an
/// offset-less date-time string taken as UTC.
pub mod iso_datetime {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        raw.parse::<NaiveDateTime>()
            .map(|dt| dt.and_utc())
            .map_err(|_| D::Error::custom(format!("invalid date-time `{raw}`")))
    }
}

/// Decimal-float encoding for fixed-point amounts.
///
/// Amounts are stored in minor currency units (cents, `i128`); payloads
/// carry them as decimal floats of the major unit (`1999` ⇔ `19.99`).
/// Deserialization rounds back to the nearest minor unit.
pub mod amount_float {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &i128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(*amount as f64 / 100.0)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i128, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok((value * 100.0).round() as i128)
    }
}
