pub mod dto;
pub mod entity;
pub mod handler;
pub mod service;

pub use handler::list_pizzas;
pub use service::PizzaService;
