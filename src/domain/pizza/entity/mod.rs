pub mod pizza;
