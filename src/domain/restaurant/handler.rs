use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{RestaurantDetailResponse, RestaurantResponse};
use super::service::RestaurantService;
use crate::state::AppState;
use crate::utils::error::AppError;
#[allow(unused_imports)]
use crate::utils::response::ErrorResponse;

/// 레스토랑 목록 조회 API
#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "레스토랑 목록", body = [RestaurantResponse]),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Restaurant"
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantResponse>>, AppError> {
    let restaurants = RestaurantService::list_restaurants(&state).await?;

    Ok(Json(restaurants))
}

/// 레스토랑 상세 조회 API
///
/// 레스토랑 정보와 판매 중인 피자(가격 포함) 목록을 반환합니다.
#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(
        ("id" = i32, Path, description = "레스토랑 id")
    ),
    responses(
        (status = 200, description = "레스토랑 상세", body = RestaurantDetailResponse),
        (status = 404, description = "존재하지 않는 레스토랑", body = ErrorResponse)
    ),
    tag = "Restaurant"
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    restaurant_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<RestaurantDetailResponse>, AppError> {
    let Path(restaurant_id) = restaurant_id.map_err(|_| AppError::restaurant_not_found())?;

    let restaurant = RestaurantService::get_restaurant(&state, restaurant_id).await?;

    Ok(Json(restaurant))
}

/// 레스토랑 삭제 API
///
/// 레스토랑과 연결된 모든 restaurant_pizza 행을 함께 삭제합니다.
#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(
        ("id" = i32, Path, description = "레스토랑 id")
    ),
    responses(
        (status = 204, description = "삭제 성공"),
        (status = 404, description = "존재하지 않는 레스토랑", body = ErrorResponse)
    ),
    tag = "Restaurant"
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    restaurant_id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(restaurant_id) = restaurant_id.map_err(|_| AppError::restaurant_not_found())?;

    RestaurantService::delete_restaurant(&state, restaurant_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
