use serde::Serialize;
use utoipa::ToSchema;

use super::entity::restaurant;
use crate::domain::pizza::entity::pizza;
use crate::domain::restaurant_pizza::entity::restaurant_pizza;

// ============== 레스토랑 목록 조회 ==============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Karen's Pizza Shack")]
    pub name: String,
    #[schema(example = "address1")]
    pub address: String,
}

impl From<restaurant::Model> for RestaurantResponse {
    fn from(model: restaurant::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            address: model.address,
        }
    }
}

// ============== 레스토랑 상세 조회 ==============

/// 레스토랑이 판매하는 피자 한 건. `id`는 연결 행이 아닌 피자의 id입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantPizzaItem {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
    #[schema(example = 10)]
    pub price: i32,
}

impl RestaurantPizzaItem {
    pub fn new(association: &restaurant_pizza::Model, pizza: pizza::Model) -> Self {
        Self {
            id: pizza.id,
            name: pizza.name,
            ingredients: pizza.ingredients,
            price: association.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantDetailResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaItem>,
}

impl RestaurantDetailResponse {
    pub fn new(model: restaurant::Model, restaurant_pizzas: Vec<RestaurantPizzaItem>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            address: model.address,
            restaurant_pizzas,
        }
    }
}
