use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::classifier::ClassifyError;

const INVALID_REQUEST: &str = "Invalid request format";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request format: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Unprocessable(String),

    // Catch-all for failures outside request validation; rendered as a bare 500
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    is_success: bool,
    message: String,
    errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, INVALID_REQUEST.to_string(), vec![detail])
            }
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg, vec![]),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    vec![],
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                is_success: false,
                message,
                errors,
            }),
        )
            .into_response()
    }
}

impl From<ClassifyError> for AppError {
    fn from(e: ClassifyError) -> Self {
        match e {
            ClassifyError::InvalidInput(detail) => AppError::BadRequest(detail),
            e @ ClassifyError::SumOverflow => AppError::Unprocessable(e.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_error_mapping() {
        let err: AppError = ClassifyError::InvalidInput("empty".into()).into();
        assert!(matches!(err, AppError::BadRequest(ref d) if d == "empty"));

        let err: AppError = ClassifyError::SumOverflow.into();
        assert!(matches!(err, AppError::Unprocessable(_)));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unprocessable("x".into()).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
