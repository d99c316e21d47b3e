use sea_orm::{
    ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::{info, warn};

use super::dto::{RestaurantDetailResponse, RestaurantPizzaItem, RestaurantResponse};
use super::entity::restaurant;
use crate::domain::pizza::entity::pizza;
use crate::domain::restaurant_pizza::entity::restaurant_pizza;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct RestaurantService;

impl RestaurantService {
    /// 레스토랑 목록 조회 (id, name, address만 포함)
    pub async fn list_restaurants(state: &AppState) -> Result<Vec<RestaurantResponse>, AppError> {
        let restaurants = restaurant::Entity::find()
            .order_by_asc(restaurant::Column::Id)
            .all(&state.db)
            .await?;

        Ok(restaurants.into_iter().map(RestaurantResponse::from).collect())
    }

    /// 레스토랑 상세 조회
    ///
    /// 판매 중인 피자를 연결 행의 가격과 함께 펼쳐서 반환합니다.
    pub async fn get_restaurant(
        state: &AppState,
        restaurant_id: i32,
    ) -> Result<RestaurantDetailResponse, AppError> {
        let restaurant = restaurant::Entity::find_by_id(restaurant_id)
            .one(&state.db)
            .await?
            .ok_or_else(AppError::restaurant_not_found)?;

        let rows = restaurant
            .find_related(restaurant_pizza::Entity)
            .find_also_related(pizza::Entity)
            .order_by_asc(restaurant_pizza::Column::Id)
            .all(&state.db)
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for (association, pizza) in rows {
            match pizza {
                Some(pizza) => items.push(RestaurantPizzaItem::new(&association, pizza)),
                None => warn!(
                    restaurant_pizza_id = association.id,
                    pizza_id = association.pizza_id,
                    "restaurant_pizza references a missing pizza, skipping"
                ),
            }
        }

        Ok(RestaurantDetailResponse::new(restaurant, items))
    }

    /// 레스토랑 삭제
    ///
    /// 하나의 트랜잭션에서 연결 행을 먼저 지운 뒤 레스토랑을 지웁니다.
    /// FK 제약이 꺼진 백엔드에서도 고아 restaurant_pizza 행이 남지 않습니다.
    pub async fn delete_restaurant(state: &AppState, restaurant_id: i32) -> Result<(), AppError> {
        let exists = restaurant::Entity::find_by_id(restaurant_id)
            .one(&state.db)
            .await?
            .is_some();
        if !exists {
            return Err(AppError::restaurant_not_found());
        }

        let txn = state.db.begin().await?;

        // 1. 연결 행 삭제
        let removed = restaurant_pizza::Entity::delete_many()
            .filter(restaurant_pizza::Column::RestaurantId.eq(restaurant_id))
            .exec(&txn)
            .await?;

        // 2. 레스토랑 삭제
        restaurant::Entity::delete_by_id(restaurant_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        info!(
            restaurant_id,
            removed_restaurant_pizzas = removed.rows_affected,
            "Restaurant has been deleted"
        );

        Ok(())
    }
}
