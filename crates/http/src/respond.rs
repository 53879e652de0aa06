//! Standard response helpers.
//!
//! Every handler outcome is a body+status pair: `None` bodies become an
//! empty body, `Some` bodies are JSON-encoded.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

/// Resource successfully fetched - the normal return.
pub fn ok<T: Serialize>(body: Option<T>) -> Response {
    standard(body, StatusCode::OK)
}

/// Resource successfully updated.
pub fn updated<T: Serialize>(body: Option<T>) -> Response {
    standard(body, StatusCode::OK)
}

/// Resource successfully created.
pub fn created<T: Serialize>(body: Option<T>) -> Response {
    standard(body, StatusCode::CREATED)
}

/// Resource successfully deleted.
pub fn deleted<T: Serialize>(body: Option<T>) -> Response {
    standard(body, StatusCode::NO_CONTENT)
}

/// Client error.
pub fn bad_request<T: Serialize>(body: Option<T>) -> Response {
    standard(body, StatusCode::BAD_REQUEST)
}

/// Resource does not exist.
pub fn not_found<T: Serialize>(body: Option<T>) -> Response {
    standard(body, StatusCode::NOT_FOUND)
}

/// Caller is not allowed to do this.
pub fn forbidden<T: Serialize>(body: Option<T>) -> Response {
    standard(body, StatusCode::FORBIDDEN)
}

/// Unhandled server failure.
pub fn internal_error<T: Serialize>(body: Option<T>) -> Response {
    standard(body, StatusCode::INTERNAL_SERVER_ERROR)
}

/// Consistent JSON error envelope.
pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

fn standard<T: Serialize>(body: Option<T>, status: StatusCode) -> Response {
    match body {
        Some(body) => (status, Json(body)).into_response(),
        None => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn some_bodies_are_json_encoded() {
        let response = ok(Some(json!({"name": "Ada"})));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        assert_eq!(body_of(response).await, br#"{"name":"Ada"}"#);
    }

    #[tokio::test]
    async fn none_bodies_are_empty() {
        let response = deleted::<()>(None);
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn each_outcome_maps_to_its_status() {
        assert_eq!(created::<()>(None).status(), StatusCode::CREATED);
        assert_eq!(updated::<()>(None).status(), StatusCode::OK);
        assert_eq!(bad_request::<()>(None).status(), StatusCode::BAD_REQUEST);
        assert_eq!(not_found::<()>(None).status(), StatusCode::NOT_FOUND);
        assert_eq!(forbidden::<()>(None).status(), StatusCode::FORBIDDEN);
        assert_eq!(
            internal_error::<()>(None).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn json_error_uses_the_standard_envelope() {
        let response = json_error(StatusCode::BAD_REQUEST, "validation_error", "name is blank");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value =
            serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "name is blank");
    }
}
