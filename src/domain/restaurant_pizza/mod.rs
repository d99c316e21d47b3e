pub mod dto;
pub mod entity;
pub mod handler;
pub mod service;

pub use handler::create_restaurant_pizza;
pub use service::RestaurantPizzaService;
