use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::store::StoreError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<String>,
}

/// Every failure a request pipeline can end in.
///
/// All variants are answered with `400 Bad Request` and a `{ "message" }`
/// body; the store's own message is exposed verbatim.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{message}")]
    BadRequest {
        message: String,
        example: Option<String>,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            example: None,
        }
    }

    /// A usage error that points the client at a working URL.
    pub fn with_example(message: impl Into<String>, example: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            example: Some(example.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            AppError::Store(err) => {
                tracing::warn!(error = %err, "store operation failed");
                ErrorBody {
                    message: err.to_string(),
                    example: None,
                }
            }
            AppError::BadRequest { message, example } => ErrorBody { message, example },
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_store_error_message_is_verbatim() {
        let response = AppError::from(StoreError::rejected("boom")).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "message": "boom" }));
    }

    #[tokio::test]
    async fn test_malformed_record_is_bad_request() {
        let response = AppError::from(StoreError::MalformedRecord("appId")).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Store record is missing required field `appId`");
    }

    #[tokio::test]
    async fn test_bad_request_without_example() {
        let response = AppError::bad_request("Missing Host header").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Missing Host header" })
        );
    }

    #[tokio::test]
    async fn test_bad_request_with_example() {
        let response =
            AppError::with_example("Please specify a developer id.", "http://h/api/developers/1")
                .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "message": "Please specify a developer id.",
                "example": "http://h/api/developers/1"
            })
        );
    }
}
