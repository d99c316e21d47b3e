use sea_orm::{EntityTrait, QueryOrder};

use super::dto::PizzaResponse;
use super::entity::pizza;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct PizzaService;

impl PizzaService {
    pub async fn list_pizzas(state: &AppState) -> Result<Vec<PizzaResponse>, AppError> {
        let pizzas = pizza::Entity::find()
            .order_by_asc(pizza::Column::Id)
            .all(&state.db)
            .await?;

        Ok(pizzas.into_iter().map(PizzaResponse::from).collect())
    }
}
