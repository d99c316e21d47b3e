use sea_orm::{ActiveModelTrait, DatabaseTransaction, EntityTrait, Set, TransactionTrait};
use tracing::info;
use validator::Validate;

use super::dto::{CreateRestaurantPizzaRequest, NewRestaurantPizza};
use super::entity::restaurant_pizza;
use crate::domain::pizza::dto::PizzaResponse;
use crate::domain::pizza::entity::pizza;
use crate::domain::restaurant::entity::restaurant;
use crate::state::AppState;
use crate::utils::error::{AppError, VALIDATION_ERRORS};

pub struct RestaurantPizzaService;

impl RestaurantPizzaService {
    /// 레스토랑-피자 연결 생성
    ///
    /// 성공 시 생성된 연결 행이 아닌, 참조된 피자 정보를 반환합니다.
    pub async fn create_restaurant_pizza(
        state: &AppState,
        req: CreateRestaurantPizzaRequest,
    ) -> Result<PizzaResponse, AppError> {
        // 1. 필드 존재 여부 + 정수 변환
        let new = req.into_new()?;

        // 2. 가격 범위 (설정으로 활성화된 경우)
        if state.config.enforce_price_range {
            new.validate()?;
        }

        // 3. 참조 대상 확인
        let restaurant = restaurant::Entity::find_by_id(new.restaurant_id)
            .one(&state.db)
            .await?;
        let pizza = pizza::Entity::find_by_id(new.pizza_id)
            .one(&state.db)
            .await?;

        let (Some(_), Some(pizza)) = (restaurant, pizza) else {
            return Err(AppError::validation_error(VALIDATION_ERRORS));
        };

        // 4. 삽입
        let txn = state.db.begin().await?;
        let created = Self::insert(&txn, &new).await?;
        txn.commit().await?;

        info!(
            restaurant_pizza_id = created.id,
            restaurant_id = created.restaurant_id,
            pizza_id = created.pizza_id,
            price = created.price,
            "RestaurantPizza has been created"
        );

        Ok(PizzaResponse::from(pizza))
    }

    async fn insert(
        txn: &DatabaseTransaction,
        new: &NewRestaurantPizza,
    ) -> Result<restaurant_pizza::Model, AppError> {
        let model = restaurant_pizza::ActiveModel {
            price: Set(new.price),
            pizza_id: Set(new.pizza_id),
            restaurant_id: Set(new.restaurant_id),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        Ok(model)
    }
}
