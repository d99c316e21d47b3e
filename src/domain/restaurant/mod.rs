pub mod dto;
pub mod entity;
pub mod handler;
pub mod service;

pub use handler::{delete_restaurant, get_restaurant, list_restaurants};
pub use service::RestaurantService;
