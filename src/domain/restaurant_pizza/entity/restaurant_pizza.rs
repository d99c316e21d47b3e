use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 레스토랑이 피자를 얼마에 판매하는지 나타내는 연결 엔티티
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant_pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::restaurant::entity::restaurant::Entity",
        from = "Column::RestaurantId",
        to = "crate::domain::restaurant::entity::restaurant::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Restaurant,
    #[sea_orm(
        belongs_to = "crate::domain::pizza::entity::pizza::Entity",
        from = "Column::PizzaId",
        to = "crate::domain::pizza::entity::pizza::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Pizza,
}

impl Related<crate::domain::restaurant::entity::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl Related<crate::domain::pizza::entity::pizza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pizza.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
