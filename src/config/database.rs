use crate::domain::{
    pizza::entity::pizza, restaurant::entity::restaurant,
    restaurant_pizza::entity::restaurant_pizza,
};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema,
    Statement,
};
use tracing::info;

pub async fn establish_connection(
    database_url: &str,
    schema_update: bool,
) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(false);

    // Every connection to an in-memory SQLite database sees its own empty database.
    if is_in_memory_sqlite(database_url) {
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;
    info!(
        backend = ?db.get_database_backend(),
        "Successfully connected to the database."
    );

    if schema_update {
        create_tables(&db).await?;
    } else {
        info!("Skipping database schema synchronization (DB_SCHEMA_UPDATE is not true).");
    }

    Ok(db)
}

fn is_in_memory_sqlite(database_url: &str) -> bool {
    database_url.starts_with("sqlite:")
        && (database_url.contains(":memory:") || database_url.contains("mode=memory"))
}

async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Starting database schema synchronization...");

    // Parents first, then the join table referencing both.
    create_table_if_not_exists(db, &schema, restaurant::Entity).await?;
    create_table_if_not_exists(db, &schema, pizza::Entity).await?;
    create_table_if_not_exists(db, &schema, restaurant_pizza::Entity).await?;

    info!("Database schema synchronization completed.");
    Ok(())
}

async fn create_table_if_not_exists<E>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let table_name = entity.table_name().to_owned();
    let create_stmt: Statement =
        backend.build(schema.create_table_from_entity(entity).if_not_exists());

    match db.execute(create_stmt).await {
        Ok(_) => {
            info!("Table '{}' is ready", table_name);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to create table '{}': {}", table_name, e);
            Err(e)
        }
    }
}
