//! Date-layer error model.

use thiserror::Error;

/// Date parsing/formatting failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// A string was not a valid ISO-8601 date or date-time.
    #[error("invalid ISO date-time string `{0}`")]
    InvalidIso(String),

    /// A URL path segment was not an ISO calendar date.
    #[error("invalid date value: {0}")]
    InvalidUrlDate(String),

    /// A caller named a date-format token that does not exist.
    #[error("unknown date format token `{0}`")]
    UnknownToken(String),

    /// Template rendering failed.
    #[error("template rendering failed: {0}")]
    Render(String),
}

impl DateError {
    pub fn invalid_iso(value: impl Into<String>) -> Self {
        Self::InvalidIso(value.into())
    }

    pub fn invalid_url_date(value: impl Into<String>) -> Self {
        Self::InvalidUrlDate(value.into())
    }

    pub fn unknown_token(name: impl Into<String>) -> Self {
        Self::UnknownToken(name.into())
    }

    pub fn render(reason: impl Into<String>) -> Self {
        Self::Render(reason.into())
    }
}
