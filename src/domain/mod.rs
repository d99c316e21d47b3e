pub mod health;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
