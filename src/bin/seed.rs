use pizza_server::config::{establish_connection, AppConfig};
use pizza_server::seed::seed;
use pizza_server::utils::logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let _log_guard = init_logging(&config.log_dir);

    let db = establish_connection(&config.database_url, config.schema_update).await?;
    let seeded = seed(&db).await?;

    tracing::info!(
        restaurants = seeded.restaurants.len(),
        pizzas = seeded.pizzas.len(),
        restaurant_pizzas = seeded.restaurant_pizzas.len(),
        "Seeded {}",
        config.database_url
    );

    Ok(())
}
