//! `webplate-http` — standardized response helpers and the
//! error-to-response translation boundary for axum services.

pub mod error;
pub mod respond;

pub use error::{ErrorReply, HttpError, HttpResult, UpstreamError};
