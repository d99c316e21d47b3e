use serde::Serialize;
use utoipa::ToSchema;

use super::entity::pizza;

/// 피자 응답 (목록 조회, 연결 생성 응답에서 공통 사용)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PizzaResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Emma")]
    pub name: String,
    #[schema(example = "Dough, Tomato Sauce, Cheese")]
    pub ingredients: String,
}

impl From<pizza::Model> for PizzaResponse {
    fn from(model: pizza::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            ingredients: model.ingredients,
        }
    }
}
