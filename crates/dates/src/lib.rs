//! `webplate-dates` — date-format tokens, formatting functions, template
//! helpers, and the URL path-segment date type.

pub mod error;
pub mod format;
pub mod helpers;
pub mod tokens;
pub mod url_date;

pub use error::DateError;
pub use format::{TemporalValue, format_iso_str, format_value};
pub use helpers::{register_helpers, render_template};
pub use tokens::DateFormatToken;
pub use url_date::UrlDate;
