use serde::Serialize;
use utoipa::ToSchema;

/// 단건 에러 응답 (404, 500)
///
/// ```json
/// { "error": "Restaurant not found" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Restaurant not found")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 검증 실패 응답 (400)
///
/// ```json
/// { "errors": ["validation errors"] }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    #[schema(example = json!(["validation errors"]))]
    pub errors: Vec<String>,
}

impl ValidationErrorResponse {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }
}
