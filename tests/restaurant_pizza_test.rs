//! 레스토랑-피자 연결 생성 API 통합 테스트
//!
//! POST /restaurant_pizzas

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{create_json_request, spawn_app, spawn_app_with};
use pizza_server::config::AppConfig;
use pizza_server::domain::restaurant_pizza::entity::restaurant_pizza;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

const URI: &str = "/restaurant_pizzas";

async fn association_count(app: &common::TestApp) -> u64 {
    restaurant_pizza::Entity::find().count(&app.db).await.unwrap()
}

#[tokio::test]
async fn should_create_association_and_return_pizza() {
    let app = spawn_app().await;
    let pizza = &app.seeded.pizzas[2];
    let restaurant = &app.seeded.restaurants[0];

    let (status, body) = app
        .send_json(create_json_request(
            "POST",
            URI,
            json!({ "price": 10, "pizza_id": pizza.id, "restaurant_id": restaurant.id }),
        ))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": pizza.id,
            "name": "Melanie",
            "ingredients": "Dough, Sauce, Ricotta, Red peppers, Mustard"
        })
    );
    assert_eq!(association_count(&app).await, 4);
}

#[tokio::test]
async fn created_association_should_appear_in_restaurant_detail() {
    let app = spawn_app().await;
    let pizza = &app.seeded.pizzas[2];
    let restaurant = &app.seeded.restaurants[0];

    app.send(create_json_request(
        "POST",
        URI,
        json!({ "price": "12", "pizza_id": pizza.id, "restaurant_id": restaurant.id }),
    ))
    .await;

    let (_, body) = app.get(&format!("/restaurants/{}", restaurant.id)).await;
    let pizzas = body["restaurant_pizzas"].as_array().unwrap();
    assert_eq!(pizzas.len(), 2);
    assert_eq!(pizzas[1]["id"], pizza.id);
    assert_eq!(pizzas[1]["price"], 12);
}

#[tokio::test]
async fn should_coerce_boolean_price() {
    let app = spawn_app().await;
    let restaurant = &app.seeded.restaurants[2];

    let (status, body) = app
        .send_json(create_json_request(
            "POST",
            URI,
            json!({ "price": true, "pizza_id": app.seeded.pizzas[0].id, "restaurant_id": restaurant.id }),
        ))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Emma");

    let (_, detail) = app.get(&format!("/restaurants/{}", restaurant.id)).await;
    assert_eq!(detail["restaurant_pizzas"][1]["price"], 1);
}

#[tokio::test]
async fn should_return_400_when_pizza_id_missing() {
    let app = spawn_app().await;

    let (status, body) = app
        .send_json(create_json_request(
            "POST",
            URI,
            json!({ "price": 10, "restaurant_id": app.seeded.restaurants[0].id }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "errors": ["validation errors"] }));
    assert_eq!(association_count(&app).await, 3);
}

#[tokio::test]
async fn should_return_price_error_when_price_not_integer() {
    let app = spawn_app().await;

    let (status, body) = app
        .send_json(create_json_request(
            "POST",
            URI,
            json!({
                "price": "ten",
                "pizza_id": app.seeded.pizzas[0].id,
                "restaurant_id": app.seeded.restaurants[0].id
            }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "errors": ["price must be between 1 and 30"] }));
    assert_eq!(association_count(&app).await, 3);
}

#[tokio::test]
async fn should_return_400_when_references_do_not_exist() {
    let app = spawn_app().await;

    for payload in [
        json!({ "price": 5, "pizza_id": 999, "restaurant_id": app.seeded.restaurants[0].id }),
        json!({ "price": 5, "pizza_id": app.seeded.pizzas[0].id, "restaurant_id": 999 }),
    ] {
        let (status, body) = app
            .send_json(create_json_request("POST", URI, payload))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "errors": ["validation errors"] }));
    }
    assert_eq!(association_count(&app).await, 3);
}

#[tokio::test]
async fn should_return_400_with_invalid_json() {
    let app = spawn_app().await;
    let request = Request::builder()
        .method("POST")
        .uri(URI)
        .header("Content-Type", "application/json")
        .body(Body::from("{ invalid json }"))
        .unwrap();

    let (status, body) = app.send_json(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "errors": ["validation errors"] }));
}

#[tokio::test]
async fn should_accept_out_of_range_price_by_default() {
    let app = spawn_app().await;

    let (status, _) = app
        .send_json(create_json_request(
            "POST",
            URI,
            json!({
                "price": 45,
                "pizza_id": app.seeded.pizzas[0].id,
                "restaurant_id": app.seeded.restaurants[1].id
            }),
        ))
        .await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn should_reject_out_of_range_price_when_enforced() {
    let app = spawn_app_with(AppConfig {
        enforce_price_range: true,
        ..AppConfig::default()
    })
    .await;

    for price in [0, 31] {
        let (status, body) = app
            .send_json(create_json_request(
                "POST",
                URI,
                json!({
                    "price": price,
                    "pizza_id": app.seeded.pizzas[0].id,
                    "restaurant_id": app.seeded.restaurants[1].id
                }),
            ))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "errors": ["validation errors"] }));
    }

    let (status, _) = app
        .send_json(create_json_request(
            "POST",
            URI,
            json!({
                "price": 30,
                "pizza_id": app.seeded.pizzas[0].id,
                "restaurant_id": app.seeded.restaurants[1].id
            }),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
}
