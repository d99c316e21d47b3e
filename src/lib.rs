pub mod config;
pub mod domain;
pub mod global;
pub mod seed;
pub mod state;
pub mod utils;

use axum::{
    middleware,
    response::Html,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::health::handler::health_check,
        domain::restaurant::handler::list_restaurants,
        domain::restaurant::handler::get_restaurant,
        domain::restaurant::handler::delete_restaurant,
        domain::pizza::handler::list_pizzas,
        domain::restaurant_pizza::handler::create_restaurant_pizza,
    ),
    components(
        schemas(
            domain::health::dto::HealthStatus,
            domain::health::dto::HealthState,
            domain::health::dto::HealthChecks,
            domain::health::dto::CheckResult,
            domain::restaurant::dto::RestaurantResponse,
            domain::restaurant::dto::RestaurantDetailResponse,
            domain::restaurant::dto::RestaurantPizzaItem,
            domain::pizza::dto::PizzaResponse,
            domain::restaurant_pizza::dto::CreateRestaurantPizzaRequest,
            utils::response::ErrorResponse,
            utils::response::ValidationErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "서버 상태"),
        (name = "Restaurant", description = "레스토랑 조회/삭제"),
        (name = "Pizza", description = "피자 조회"),
        (name = "RestaurantPizza", description = "레스토랑-피자 연결")
    )
)]
pub struct ApiDoc;

async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(index))
        .route("/health", get(domain::health::health_check))
        .route("/restaurants", get(domain::restaurant::list_restaurants))
        .route(
            "/restaurants/:id",
            get(domain::restaurant::get_restaurant).delete(domain::restaurant::delete_restaurant),
        )
        .route("/pizzas", get(domain::pizza::list_pizzas))
        .route(
            "/restaurant_pizzas",
            post(domain::restaurant_pizza::create_restaurant_pizza),
        )
        .layer(middleware::from_fn(global::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
