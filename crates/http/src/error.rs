//! Error-to-response translation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use webplate_mapper::MapError;

/// Response-producing capability.
///
/// An error implementing this trait translates to a body+status pair at
/// the framework boundary instead of tearing down the request. Errors
/// without the capability propagate to the framework default.
pub trait HttpError: std::error::Error {
    /// Status code of the translated response.
    fn status(&self) -> StatusCode;

    /// Response body; `None` becomes an empty body.
    fn body(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Boundary adapter for [`HttpError`] values.
///
/// A handler returning `Result<_, ErrorReply<E>>` gets its failures
/// translated automatically; `?` converts the inner error on the way out.
#[derive(Debug)]
pub struct ErrorReply<E>(pub E);

impl<E: HttpError> From<E> for ErrorReply<E> {
    fn from(err: E) -> Self {
        Self(err)
    }
}

impl<E: HttpError> IntoResponse for ErrorReply<E> {
    fn into_response(self) -> Response {
        let status = self.0.status();
        tracing::debug!(%status, error = %self.0, "translating error to response");
        match self.0.body() {
            Some(body) => (status, body).into_response(),
            None => status.into_response(),
        }
    }
}

/// Result alias for handlers whose failures carry the response-producing
/// capability.
pub type HttpResult<T, E> = Result<T, ErrorReply<E>>;

/// A failed outbound call, captured as the upstream status and body text.
///
/// Replying with it forwards the upstream outcome to our own caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("upstream call failed with status {status}")]
pub struct UpstreamError {
    status: StatusCode,
    body: String,
}

impl UpstreamError {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn upstream_status(&self) -> StatusCode {
        self.status
    }

    pub fn upstream_body(&self) -> &str {
        &self.body
    }
}

impl HttpError for UpstreamError {
    fn status(&self) -> StatusCode {
        self.status
    }

    fn body(&self) -> Option<String> {
        if self.body.is_empty() {
            None
        } else {
            Some(self.body.clone())
        }
    }
}

/// Mapping failures are client errors at the HTTP boundary.
impl HttpError for MapError {
    fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn upstream_errors_forward_status_and_body() {
        let err = UpstreamError::new(StatusCode::BAD_GATEWAY, "upstream says no");
        let response = ErrorReply(err).into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_of(response).await, "upstream says no");
    }

    #[tokio::test]
    async fn empty_upstream_bodies_stay_empty() {
        let err = UpstreamError::new(StatusCode::SERVICE_UNAVAILABLE, "");
        let response = ErrorReply(err).into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn mapping_failures_become_bad_requests() {
        let err = MapError::missing("birth_date");
        let response = ErrorReply(err).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            "missing required field `birth_date`"
        );
    }

    #[tokio::test]
    async fn question_mark_converts_into_the_reply() {
        fn lookup() -> HttpResult<String, MapError> {
            Err(MapError::missing("id"))?;
            Ok("unreachable".to_string())
        }

        let response = match lookup() {
            Ok(body) => body.into_response(),
            Err(reply) => reply.into_response(),
        };
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
