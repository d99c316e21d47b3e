use axum::{extract::State, Json};

use super::dto::PizzaResponse;
use super::service::PizzaService;
use crate::state::AppState;
use crate::utils::error::AppError;
#[allow(unused_imports)]
use crate::utils::response::ErrorResponse;

/// 피자 목록 조회 API
#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "피자 목록", body = [PizzaResponse]),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Pizza"
)]
pub async fn list_pizzas(
    State(state): State<AppState>,
) -> Result<Json<Vec<PizzaResponse>>, AppError> {
    let pizzas = PizzaService::list_pizzas(&state).await?;

    Ok(Json(pizzas))
}
