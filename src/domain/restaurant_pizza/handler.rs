use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use super::dto::CreateRestaurantPizzaRequest;
use super::service::RestaurantPizzaService;
use crate::domain::pizza::dto::PizzaResponse;
use crate::state::AppState;
use crate::utils::error::AppError;
#[allow(unused_imports)]
use crate::utils::response::{ErrorResponse, ValidationErrorResponse};

/// 레스토랑-피자 연결 생성 API
///
/// `price`, `pizza_id`, `restaurant_id`가 모두 필요하며, 성공 시 연결된 피자 정보를 반환합니다.
#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "연결 생성 성공", body = PizzaResponse),
        (status = 400, description = "검증 실패", body = ValidationErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "RestaurantPizza"
)]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantPizzaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PizzaResponse>), AppError> {
    let Json(req) = payload?;

    let pizza = RestaurantPizzaService::create_restaurant_pizza(&state, req).await?;

    Ok((StatusCode::CREATED, Json(pizza)))
}
