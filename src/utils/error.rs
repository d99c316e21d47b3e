use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use tracing::{error, warn};
use validator::ValidationErrors;

use super::response::{ErrorResponse, ValidationErrorResponse};

/// 필드 누락, 존재하지 않는 참조 등 일반 검증 실패 메시지
pub const VALIDATION_ERRORS: &str = "validation errors";
/// 정수로 변환할 수 없는 값이 들어온 경우의 메시지
pub const PRICE_OUT_OF_RANGE: &str = "price must be between 1 and 30";
pub const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";

const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{}", .0.join(", "))]
    ValidationError(Vec<String>),
    #[error("malformed request body: {0}")]
    JsonParseFailed(String),
    #[error("internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::JsonParseFailed(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::NotFound(msg) => {
                warn!("Not found: {}", msg);
                (status, Json(ErrorResponse::new(msg))).into_response()
            }
            AppError::ValidationError(errors) => {
                warn!("Validation failed: {}", errors.join(", "));
                (status, Json(ValidationErrorResponse::new(errors))).into_response()
            }
            AppError::JsonParseFailed(msg) => {
                // 본문 파싱 실패도 클라이언트에게는 일반 검증 실패로 보인다
                warn!("Malformed request body: {}", msg);
                (
                    status,
                    Json(ValidationErrorResponse::new(vec![VALIDATION_ERRORS.to_string()])),
                )
                    .into_response()
            }
            AppError::InternalError(msg) => {
                error!("Internal Server Error: {}", msg);
                (status, Json(ErrorResponse::new(INTERNAL_SERVER_ERROR))).into_response()
            }
        }
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        tracing::debug!("validator rejected payload: {}", err);
        AppError::validation_error(VALIDATION_ERRORS)
    }
}

/// 편의 함수들
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn restaurant_not_found() -> Self {
        AppError::not_found(RESTAURANT_NOT_FOUND)
    }

    pub fn validation_error(msg: impl Into<String>) -> Self {
        AppError::ValidationError(vec![msg.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_should_render_error_object() {
        let (status, body) = body_json(AppError::restaurant_not_found()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "Restaurant not found" }));
    }

    #[tokio::test]
    async fn validation_error_should_render_errors_array() {
        let (status, body) = body_json(AppError::validation_error(PRICE_OUT_OF_RANGE)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({ "errors": ["price must be between 1 and 30"] })
        );
    }

    #[tokio::test]
    async fn json_parse_failure_should_look_like_validation_error() {
        let (status, body) =
            body_json(AppError::JsonParseFailed("expected value".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "errors": ["validation errors"] }));
    }

    #[tokio::test]
    async fn internal_error_should_not_leak_details() {
        let (status, body) =
            body_json(AppError::from(DbErr::Custom("disk I/O error".to_string()))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }
}
