//! 샘플 데이터 시드
//!
//! `seed` 바이너리와 통합 테스트가 같은 데이터를 사용합니다.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, Set,
    TransactionTrait,
};
use tracing::info;

use crate::domain::pizza::entity::pizza;
use crate::domain::restaurant::entity::restaurant;
use crate::domain::restaurant_pizza::entity::restaurant_pizza;

pub const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

pub const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
pub const RESTAURANT_PIZZAS: [(usize, usize, i32); 3] = [(0, 0, 1), (1, 1, 4), (2, 2, 5)];

#[derive(Debug, Default)]
pub struct Seeded {
    pub restaurants: Vec<restaurant::Model>,
    pub pizzas: Vec<pizza::Model>,
    pub restaurant_pizzas: Vec<restaurant_pizza::Model>,
}

/// 세 테이블을 비우고 샘플 데이터를 하나의 트랜잭션으로 다시 채웁니다.
pub async fn seed(db: &DatabaseConnection) -> Result<Seeded, DbErr> {
    let txn = db.begin().await?;

    info!("Clearing db...");
    restaurant_pizza::Entity::delete_many().exec(&txn).await?;
    pizza::Entity::delete_many().exec(&txn).await?;
    restaurant::Entity::delete_many().exec(&txn).await?;

    info!("Creating restaurants...");
    let mut seeded = Seeded::default();
    for (name, address) in RESTAURANTS {
        seeded
            .restaurants
            .push(insert_restaurant(&txn, name, address).await?);
    }

    info!("Creating pizzas...");
    for (name, ingredients) in PIZZAS {
        seeded.pizzas.push(insert_pizza(&txn, name, ingredients).await?);
    }

    info!("Creating RestaurantPizza...");
    for (restaurant_idx, pizza_idx, price) in RESTAURANT_PIZZAS {
        let model = restaurant_pizza::ActiveModel {
            price: Set(price),
            pizza_id: Set(seeded.pizzas[pizza_idx].id),
            restaurant_id: Set(seeded.restaurants[restaurant_idx].id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        seeded.restaurant_pizzas.push(model);
    }

    txn.commit().await?;
    info!("Seeding done!");

    Ok(seeded)
}

async fn insert_restaurant(
    txn: &DatabaseTransaction,
    name: &str,
    address: &str,
) -> Result<restaurant::Model, DbErr> {
    restaurant::ActiveModel {
        name: Set(name.to_owned()),
        address: Set(address.to_owned()),
        ..Default::default()
    }
    .insert(txn)
    .await
}

async fn insert_pizza(
    txn: &DatabaseTransaction,
    name: &str,
    ingredients: &str,
) -> Result<pizza::Model, DbErr> {
    pizza::ActiveModel {
        name: Set(name.to_owned()),
        ingredients: Set(ingredients.to_owned()),
        ..Default::default()
    }
    .insert(txn)
    .await
}
