//! Fixed date-format tokens exposed to templates.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Date formatting tokens:
///
/// - `DateLong`  = Tue 07/26/22
/// - `DayOfWeek` = Tue
/// - `Slashes`   = 07/26/22
/// - `Time`      = 10:13 AM
/// - `IsoDate`   = 2023-02-07
/// - `IsoTime`   = 14:05:26
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormatToken {
    DateLong,
    DayOfWeek,
    Slashes,
    Time,
    IsoDate,
    IsoTime,
}

impl DateFormatToken {
    /// strftime pattern behind the token.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::DateLong => "%a %x",
            Self::DayOfWeek => "%a",
            Self::Slashes => "%x",
            Self::Time => "%I:%M %p",
            Self::IsoDate => "%Y-%m-%d",
            Self::IsoTime => "%H:%M:%S",
        }
    }
}

impl FromStr for DateFormatToken {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date_long" => Ok(Self::DateLong),
            "day_of_week" => Ok(Self::DayOfWeek),
            "slashes" => Ok(Self::Slashes),
            "time" => Ok(Self::Time),
            "iso_date" => Ok(Self::IsoDate),
            "iso_time" => Ok(Self::IsoTime),
            other => Err(DateError::unknown_token(other)),
        }
    }
}
