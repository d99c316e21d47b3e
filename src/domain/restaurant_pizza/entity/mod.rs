pub mod restaurant_pizza;
